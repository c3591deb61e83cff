//! Error type shared by every stage of the validator.

use std::path::PathBuf;

/// Failures that stop a validation run.
///
/// Style violations are **not** errors; they are reported through
/// [`ScanResultSet`](crate::finding::ScanResultSet).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path passed on the command line does not exist.
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A directory scan was requested on something that is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A file could not be read as text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed part-way through.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A `--patterns` glob could not be compiled.
    #[error("invalid file pattern: {0}")]
    Glob(#[from] globset::Error),

    /// A rule in a custom pattern table could not be compiled.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
