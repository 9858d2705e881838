//! Run configuration.
//!
//! Every parameter is a compile-time constant. [`Config::new`] exists so the
//! library can be driven against other directories in tests.

use std::path::PathBuf;

/// Directory whose JPEGs are optimized.
pub const INPUT_DIR: &str = "public/assets/images/paintings";

/// JPEG quality passed to the encoder (0-100).
pub const QUALITY: u8 = 85;

/// Images wider than this are downsampled to exactly this width.
pub const MAX_WIDTH: u32 = 1920;

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "jpgopt";

/// Parameters for one optimization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to scan (not recursive).
    pub input_dir: PathBuf,
    /// Encoder quality. Not validated; the encoder clamps it.
    pub quality: u8,
    /// Maximum output width in pixels.
    pub max_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            quality: QUALITY,
            max_width: MAX_WIDTH,
        }
    }
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, quality: u8, max_width: u32) -> Self {
        Self {
            input_dir: input_dir.into(),
            quality,
            max_width,
        }
    }
}
