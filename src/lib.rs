//! jpgopt - shrink a directory of JPEG photos in place.
//!
//! Every `.jpg` file directly inside the configured directory is decoded,
//! downsampled with a Lanczos3 filter if it is wider than the maximum width,
//! and re-encoded over the original at a fixed quality with optimized
//! Huffman tables.
//!
//! # Example
//!
//! ```no_run
//! use jpgopt::config::Config;
//! use jpgopt::processor::Optimizer;
//!
//! let optimizer = Optimizer::new(Config::new("photos", 85, 1920));
//! let stats = optimizer.run().unwrap();
//! println!("Optimized {} files", stats.optimized);
//! ```

pub mod config;
pub mod error;
pub mod jpeg;
pub mod processor;
pub mod resize;
pub mod terminal;

pub use config::Config;
pub use error::{Error, Result};
pub use processor::{FileReport, Optimizer};
pub use terminal::OptimizeStats;
