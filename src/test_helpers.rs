//! Shared test utilities for the sprite-resize test suite.
//!
//! Builds synthetic sprites in memory, writes them into temp directories, and
//! compares decoded pixel data.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = write_image(tmp.path(), "hero.png", &rgba_gradient(256, 256));
//! ```

use image::{DynamicImage, ImageBuffer, Luma, Rgb, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Synthetic images
// =========================================================================

/// RGBA image whose channels vary along both axes, with a varying alpha.
pub fn rgba_gradient(width: u32, height: u32) -> DynamicImage {
    let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            (128 + (x * 127 / width.max(1))) as u8,
        ])
    });
    DynamicImage::ImageRgba8(img)
}

/// 16-bit RGB image, so bit depth preservation can be checked.
pub fn rgb16_gradient(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::<Rgb<u16>, Vec<u16>>::from_fn(width, height, |x, y| {
        Rgb([
            (x * 65535 / width.max(1)) as u16,
            (y * 65535 / height.max(1)) as u16,
            40000,
        ])
    });
    DynamicImage::ImageRgb16(img)
}

/// 8-bit grayscale checkerboard with 4px squares.
pub fn luma_checkerboard(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::<Luma<u8>, Vec<u8>>::from_fn(width, height, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Luma([20])
        } else {
            Luma([230])
        }
    });
    DynamicImage::ImageLuma8(img)
}

/// Single-color RGBA image.
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(color)))
}

// =========================================================================
// Filesystem
// =========================================================================

/// Encode `img` into `dir/name` (format from the extension) and return the path.
pub fn write_image(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
    path
}

/// Decode an image from disk. Panics with the path on failure.
pub fn open_image(path: &Path) -> DynamicImage {
    image::open(path).unwrap_or_else(|e| panic!("failed to decode {}: {e}", path.display()))
}

// =========================================================================
// Pixel comparisons
// =========================================================================

/// Largest per-channel difference between two same-sized images, in 8-bit units.
pub fn max_channel_diff(a: &DynamicImage, b: &DynamicImage) -> u8 {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "images must have the same dimensions"
    );
    a.to_rgba8()
        .as_raw()
        .iter()
        .zip(b.to_rgba8().as_raw())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}
