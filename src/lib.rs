//! # Sprite Resize
//!
//! Resizes one game sprite to 64x64 pixels with Lanczos resampling and writes
//! it back over the original file.
//!
//! ```text
//! load public/sprites/player_morpheus.png → Lanczos3 → 64x64 → save (same path)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Backend trait, `image`-crate backend, and the `resize` operation |
//! | [`config`] | The fixed sprite job: paths and target size |
//! | [`output`] | The single line printed on success or failure |
//!
//! # Design Decisions
//!
//! ## Exact Resize
//!
//! The output is always exactly the target size. Sprites are drawn into a
//! fixed tile, so distortion of a non-square source is accepted.
//!
//! ## Encode Before Write
//!
//! The resampled image is encoded into memory before the output path is
//! opened. Since the job overwrites its own source, a decode or encode failure
//! must never leave a truncated sprite behind.
//!
//! ## Errors Are Reported, Not Propagated
//!
//! The library returns [`imaging::ResizeError`] through `?` as usual. The
//! binary catches it at the top, prints `Error: {message}`, and exits 0.

pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
