//! Sprite job configuration.
//!
//! The job is fixed at build time: one sprite, resized in place to 64x64.
//! [`SpriteConfig::default`] is that job and is what the binary runs. There
//! is no config file and no command-line override.

use std::path::PathBuf;

/// Sprite the binary resizes.
pub const DEFAULT_SPRITE_PATH: &str = "public/sprites/player_morpheus.png";

/// Edge length of the resized sprite, in pixels.
pub const SPRITE_SIZE: u32 = 64;

/// One resize job.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteConfig {
    /// Image to read.
    pub input: PathBuf,
    /// Where to write the result. Equal to `input` to overwrite the source.
    pub output: PathBuf,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SPRITE_PATH),
            output: PathBuf::from(DEFAULT_SPRITE_PATH),
            width: SPRITE_SIZE,
            height: SPRITE_SIZE,
        }
    }
}
