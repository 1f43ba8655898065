//! High-level image operations.
//!
//! These functions turn a job description into [`ResizeParams`] and hand them
//! to a backend. They are generic over [`ImageBackend`] so the logic can be
//! tested against a mock without touching real image files.

use super::backend::{Dimensions, ImageBackend, ResizeError};
use super::params::ResizeParams;
use crate::config::SpriteConfig;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Resize `input` to exactly `width` x `height` and write it to `output`.
///
/// `output` may be the same path as `input`. The output container format
/// follows `output`'s extension. Zero target dimensions are rejected before
/// any file is read.
pub fn resize(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<Dimensions> {
    if width == 0 || height == 0 {
        return Err(ResizeError::OperationFailed(format!(
            "Target dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    backend.resize(&plan_resize(input, output, width, height))
}

/// Plan a resize operation without executing it.
fn plan_resize(input: &Path, output: &Path, width: u32, height: u32) -> ResizeParams {
    ResizeParams {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
    }
}

/// Run the job described by `config`.
pub fn resize_sprite(backend: &impl ImageBackend, config: &SpriteConfig) -> Result<Dimensions> {
    resize(
        backend,
        &config.input,
        &config.output,
        config.width,
        config.height,
    )
}
