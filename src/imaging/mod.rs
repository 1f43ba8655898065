//! Image processing.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `resize_exact` with Lanczos3, encoded to the output's format |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions that plan parameters and call the backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, ImageBackend, ResizeError};
pub use operations::{resize, resize_sprite};
pub use params::ResizeParams;
pub use rust_backend::RustBackend;
