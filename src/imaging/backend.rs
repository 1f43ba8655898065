//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests for the operation layer swap in a recording mock.

use super::params::ResizeParams;
use thiserror::Error;

use std::path::Path;

/// A failed open, decode, resample, encode, or write.
///
/// The message names the offending path and the underlying cause.
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("{0}")]
    OperationFailed(String),
}

/// Result of an identify or resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, ResizeError>;

    /// Decode `params.source`, resample to exactly `params.width` x
    /// `params.height`, and write the result to `params.output`.
    ///
    /// Implementations must not touch `params.output` unless the new image
    /// was produced successfully.
    fn resize(&self, params: &ResizeParams) -> Result<Dimensions, ResizeError>;
}
