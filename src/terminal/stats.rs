//! Run statistics and the status lines printed to stdout.

use super::colors::{Styled, Symbols, stdout_supports_color};
use std::time::Duration;

/// Statistics for one optimization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptimizeStats {
    /// Number of files re-encoded.
    pub optimized: usize,
    /// How many of those were also downsampled.
    pub resized: usize,
    /// Total size of the inputs.
    pub bytes_before: u64,
    /// Total size of the outputs.
    pub bytes_after: u64,
    /// Processing duration.
    pub duration: Duration,
}

impl OptimizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one optimized file.
    pub fn add_optimized(&mut self, resized: bool, bytes_before: u64, bytes_after: u64) {
        self.optimized += 1;
        if resized {
            self.resized += 1;
        }
        self.bytes_before += bytes_before;
        self.bytes_after += bytes_after;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Bytes saved across the run. Zero if the outputs grew.
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}

/// Status line for one optimized file.
pub fn optimized_line(file_name: &str, color_enabled: bool) -> String {
    format!("{} Optimized: {}", Symbols::new(color_enabled).ok(), file_name)
}

/// Final line reporting the number of optimized files.
pub fn summary_line(count: usize, color_enabled: bool) -> String {
    format!(
        "Optimization complete! {} images optimized.",
        Styled::with_color_support(count.to_string(), color_enabled).bold()
    )
}

/// Print the status line for one optimized file.
pub fn print_optimized(file_name: &str) {
    println!("{}", optimized_line(file_name, stdout_supports_color()));
}

/// Print the run summary, preceded by a blank line.
pub fn print_summary(stats: &OptimizeStats) {
    println!();
    println!("{}", summary_line(stats.optimized, stdout_supports_color()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = OptimizeStats::new();
        assert_eq!(stats.optimized, 0);
        assert_eq!(stats.resized, 0);
        assert_eq!(stats.bytes_saved(), 0);
    }

    #[test]
    fn test_stats_add_optimized() {
        let mut stats = OptimizeStats::new();
        stats.add_optimized(true, 5000, 2000);
        stats.add_optimized(false, 1000, 900);
        assert_eq!(stats.optimized, 2);
        assert_eq!(stats.resized, 1);
        assert_eq!(stats.bytes_before, 6000);
        assert_eq!(stats.bytes_after, 2900);
        assert_eq!(stats.bytes_saved(), 3100);
    }

    #[test]
    fn test_bytes_saved_when_output_grew() {
        let mut stats = OptimizeStats::new();
        stats.add_optimized(false, 100, 300);
        assert_eq!(stats.bytes_saved(), 0);
    }

    #[test]
    fn test_optimized_line_plain() {
        assert_eq!(
            optimized_line("sunset.jpg", false),
            "[OK] Optimized: sunset.jpg"
        );
    }

    #[test]
    fn test_optimized_line_colored_keeps_text() {
        let line = optimized_line("sunset.jpg", true);
        assert!(line.starts_with("\x1b["));
        assert!(line.contains("[OK]"));
        assert!(line.ends_with(" Optimized: sunset.jpg"));
    }

    #[test]
    fn test_summary_line_plain() {
        assert_eq!(
            summary_line(12, false),
            "Optimization complete! 12 images optimized."
        );
        assert_eq!(
            summary_line(0, false),
            "Optimization complete! 0 images optimized."
        );
    }
}
