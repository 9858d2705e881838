//! Terminal output: per-file status lines, the run summary, and styling.

pub mod colors;
pub mod stats;

pub use colors::{format_size, print_error};
pub use stats::{OptimizeStats, optimized_line, print_optimized, print_summary, summary_line};
