//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Identify | `image::image_dimensions` (header only) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::DynamicImage::write_to`, format from the output extension |
//!
//! The resampled image is encoded into memory before the output path is
//! opened, so a failure at any stage leaves an existing output file as it was.
//! This matters because the usual job writes back over its own source.

use super::backend::{Dimensions, ImageBackend, ResizeError};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Three-lobe windowed sinc. Weights are normalized per output pixel and
/// results clamped to the channel range by the `image` crate.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Backend built on the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The file handle is owned by the reader and closed when decoding returns,
/// on success or failure.
fn load_image(path: &Path) -> Result<DynamicImage, ResizeError> {
    let open_failed = |e: std::io::Error| {
        ResizeError::OperationFailed(format!("Failed to open {}: {}", path.display(), e))
    };
    ImageReader::open(path)
        .map_err(open_failed)?
        .with_guessed_format()
        .map_err(open_failed)?
        .decode()
        .map_err(|e| {
            ResizeError::OperationFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Container format implied by the output extension.
fn output_format(path: &Path) -> Result<ImageFormat, ResizeError> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        ResizeError::OperationFailed(format!("Unsupported output format: {}", path.display()))
    })?;
    if !format.writing_enabled() {
        return Err(ResizeError::OperationFailed(format!(
            "No {:?} encoder available for {}",
            format,
            path.display()
        )));
    }
    Ok(format)
}

/// Encode into memory. Nothing is written to disk here.
fn encode_image(
    img: &DynamicImage,
    format: ImageFormat,
    path: &Path,
) -> Result<Vec<u8>, ResizeError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| {
            ResizeError::OperationFailed(format!("Failed to encode {}: {}", path.display(), e))
        })?;
    Ok(bytes)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, ResizeError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            ResizeError::OperationFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<Dimensions, ResizeError> {
        let format = output_format(&params.output)?;
        let img = load_image(&params.source)?;

        // Exact: aspect ratio is not preserved
        let resized = img.resize_exact(params.width, params.height, RESAMPLE_FILTER);

        let bytes = encode_image(&resized, format, &params.output)?;
        std::fs::write(&params.output, bytes).map_err(|e| {
            ResizeError::OperationFailed(format!(
                "Failed to write {}: {}",
                params.output.display(),
                e
            ))
        })?;

        Ok(Dimensions {
            width: resized.width(),
            height: resized.height(),
        })
    }
}
