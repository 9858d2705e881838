//! Error types for jpgopt.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jpgopt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an optimization run.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error with optional path context.
    #[error("{}", io_message(.source, .path))]
    Io {
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },
    /// File or directory not found.
    #[error("File not found: '{}'", .path.display())]
    NotFound { path: PathBuf },
    /// Permission denied.
    #[error("Permission denied: '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    /// Corrupt, truncated, or otherwise undecodable JPEG.
    #[error("Invalid image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The encoder rejected the pixel data.
    #[error("Failed to encode '{}': {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },
    /// Output would exceed the 65535 pixel JPEG dimension limit.
    #[error("Image '{}' is too large to encode ({width}x{height})", .path.display())]
    DimensionsTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

fn io_message(source: &io::Error, path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("I/O error for '{}': {}", p.display(), source),
        None => format!("I/O error: {}", source),
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io {
            source: err,
            path: None,
        }
    }
}

impl Error {
    /// Create an I/O error with path context.
    pub fn io_with_path(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io {
                source: err,
                path: Some(path),
            },
        }
    }

    /// Create a decode error for `path`.
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create an encode error for `path`.
    pub fn encode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Io { path, .. } => path.as_deref(),
            Error::NotFound { path }
            | Error::PermissionDenied { path }
            | Error::Decode { path, .. }
            | Error::Encode { path, .. }
            | Error::DimensionsTooLarge { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display() {
        let err = Error::Io {
            source: io::Error::other("test error"),
            path: None,
        };
        assert_eq!(err.to_string(), "I/O error: test error");
    }

    #[test]
    fn test_io_error_with_path_display() {
        let err = Error::Io {
            source: io::Error::other("disk full"),
            path: Some(PathBuf::from("/test/path.jpg")),
        };
        assert!(err.to_string().contains("/test/path.jpg"));
        assert!(err.to_string().contains("disk full"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = io::Error::other("test").into();
        assert!(matches!(err, Error::Io { path: None, .. }));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_io_with_path_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let err = Error::io_with_path(io_err, "/test/path");
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.path(), Some(std::path::Path::new("/test/path")));
    }

    #[test]
    fn test_io_with_path_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(io_err, "/test/path");
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_io_with_path_other_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::WriteZero, "short write");
        let err = Error::io_with_path(io_err, "/test/a.jpg");
        assert!(matches!(err, Error::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_encode_error_display() {
        let err = Error::encode("/test/image.jpg", "bad color type");
        assert!(err.to_string().contains("Failed to encode"));
        assert!(err.to_string().contains("bad color type"));
    }

    #[test]
    fn test_dimensions_too_large_display() {
        let err = Error::DimensionsTooLarge {
            path: PathBuf::from("wide.jpg"),
            width: 70000,
            height: 10,
        };
        assert!(err.to_string().contains("70000x10"));
    }
}
