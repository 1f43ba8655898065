//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`operations`](super::operations) module and the
//! [`backend`](super::backend), which does the actual pixel work. Keeping
//! them plain data lets the operation layer be tested against a mock.

use std::path::PathBuf;

/// Parameters for an exact resize.
///
/// The output is forced to `width` x `height` regardless of the source aspect
/// ratio. `output` may equal `source`, in which case the source file is
/// replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}
