//! File processing pipeline.
//!
//! Lists the configured directory, keeps the `.jpg` files, and optimizes them
//! one at a time in listing order, overwriting each file in place. The first
//! failure ends the run: files already handled stay rewritten, the rest are
//! left untouched.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::jpeg;
use crate::resize;
use crate::terminal::{OptimizeStats, format_size, print_optimized, print_summary};
use image::GenericImageView;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, info_span, trace};

/// Outcome of optimizing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Dimensions as decoded.
    pub original: (u32, u32),
    /// Dimensions as written.
    pub output: (u32, u32),
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl FileReport {
    pub fn resized(&self) -> bool {
        self.original != self.output
    }

    /// File name used in status lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Sequential batch optimizer.
pub struct Optimizer {
    config: Config,
}

impl Optimizer {
    /// Create a new optimizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Optimize every JPEG in the configured directory, then print the summary.
    pub fn run(&self) -> Result<OptimizeStats> {
        let dir = &self.config.input_dir;
        let _span = info_span!("optimize", dir = %dir.display()).entered();

        let files = collect_jpegs(dir)?;
        debug!(count = files.len(), "collected JPEG files");

        let stats = self.process_files(&files)?;
        print_summary(&stats);

        info!(
            optimized = stats.optimized,
            resized = stats.resized,
            elapsed_ms = stats.duration.as_millis() as u64,
            "saved {}",
            format_size(stats.bytes_saved())
        );

        Ok(stats)
    }

    /// Optimize `files` in order, printing a status line after each one.
    ///
    /// Stops at the first error without touching the remaining files.
    /// Each call starts from fresh statistics.
    pub fn process_files(&self, files: &[PathBuf]) -> Result<OptimizeStats> {
        let start_time = Instant::now();
        let mut stats = OptimizeStats::new();

        for path in files {
            let report = optimize_file(path, &self.config)?;

            print_optimized(&report.file_name());
            stats.add_optimized(report.resized(), report.bytes_before, report.bytes_after);
        }

        stats.set_duration(start_time.elapsed());
        Ok(stats)
    }
}

/// List the `.jpg` files directly inside `dir`, in the order the OS returns them.
///
/// Subdirectories are never entered, even if their name ends in `.jpg`.
pub fn collect_jpegs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))?;
    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io_with_path(e, dir))?;
        let path = entry.path();

        if !jpeg::is_jpeg_path(&path) {
            continue;
        }

        if path.is_file() {
            files.push(path);
        } else {
            trace!(path = %path.display(), "skipping non-file entry");
        }
    }

    Ok(files)
}

/// Decode, cap the width, re-encode and overwrite a single JPEG.
pub fn optimize_file(path: &Path, config: &Config) -> Result<FileReport> {
    let data = fs::read(path).map_err(|e| Error::io_with_path(e, path))?;

    let image = jpeg::decode(&data, path)?;
    let original = image.dimensions();

    let image = resize::fit_to_width(image, config.max_width);
    let output = image.dimensions();

    let encoded = jpeg::encode(&image, config.quality, path)?;
    drop(image);

    write_in_place(path, &encoded)?;

    debug!(
        path = %path.display(),
        from = ?original,
        to = ?output,
        bytes_before = data.len(),
        bytes_after = encoded.len(),
        "optimized"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        original,
        output,
        bytes_before: data.len() as u64,
        bytes_after: encoded.len() as u64,
    })
}

/// Overwrite `path` with `data` in place.
///
/// Truncating the existing file keeps its inode, so permissions are kept and
/// symlinks are written through.
fn write_in_place(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io_with_path(e, path))?;

    file.write_all(data)
        .and_then(|()| file.flush())
        .map_err(|e| Error::io_with_path(e, path))
}
