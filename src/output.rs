//! CLI output formatting.
//!
//! A run prints exactly one line:
//!
//! ```text
//! Successfully resized public/sprites/player_morpheus.png to 64x64 using Lanczos.
//! Error: Failed to open public/sprites/player_morpheus.png: No such file or directory (os error 2)
//! ```
//!
//! `format_*` functions are pure and return the line; [`print_outcome`] writes
//! it to stdout.

use crate::imaging::{Dimensions, ResizeError};
use std::path::Path;

/// Success line, naming the source path and final dimensions.
pub fn format_success(input: &Path, dims: Dimensions) -> String {
    format!(
        "Successfully resized {} to {} using Lanczos.",
        input.display(),
        dims
    )
}

/// Failure line. Every error kind is reported the same way.
pub fn format_error(err: &ResizeError) -> String {
    format!("Error: {}", err)
}

/// Format the outcome of a resize of `input`.
pub fn format_outcome(input: &Path, result: &Result<Dimensions, ResizeError>) -> String {
    match result {
        Ok(dims) => format_success(input, *dims),
        Err(err) => format_error(err),
    }
}

/// Print the outcome of a resize of `input` to stdout.
pub fn print_outcome(input: &Path, result: &Result<Dimensions, ResizeError>) {
    println!("{}", format_outcome(input, result));
}
