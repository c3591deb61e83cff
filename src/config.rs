//! Scan settings.
//!
//! The validator has no configuration file: everything comes from
//! command-line flags or from the caller of the library API. This module
//! holds the default glob sets and [`FilePatterns`], the compiled form of a
//! `--patterns` list.
//!
//! ```
//! use twcss_validator::config::FilePatterns;
//!
//! let patterns = FilePatterns::new(&["**/*.astro"]).unwrap();
//! assert!(patterns.globs()[0].is_match("src/pages/index.astro"));
//! assert!(!patterns.globs()[0].is_match("README.md"));
//! ```

use crate::error::Result;
use globset::{GlobBuilder, GlobMatcher};

/// Globs used by [`Validator::validate_directory`](crate::validate::Validator::validate_directory)
/// when the caller passes none.
pub const DEFAULT_GLOBS: &[&str] = &["**/*.astro", "**/*.tsx", "**/*.jsx", "**/*.ts", "**/*.js"];

/// Globs used by the command-line tool when `--patterns` is omitted.
///
/// Narrower than [`DEFAULT_GLOBS`]: plain `.ts`/`.js` files are not scanned.
pub const CLI_DEFAULT_GLOBS: &[&str] = &["**/*.astro", "**/*.tsx", "**/*.jsx"];

/// Maximum characters of a source line shown in the narrative report.
pub const TRUNCATE_WIDTH: usize = 70;

/// An ordered list of compiled file globs.
///
/// Globs match paths relative to the scan root, using `/` as separator.
/// `*` stays within one path segment; `**/` also matches zero directories,
/// so `**/*.astro` matches `index.astro` at the root.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    globs: Vec<GlobMatcher>,
}

impl FilePatterns {
    /// Compiles `patterns`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Glob`](crate::Error::Glob) for the first pattern that
    /// fails to parse.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<FilePatterns> {
        let globs = patterns
            .iter()
            .map(|p| {
                GlobBuilder::new(p.as_ref())
                    .literal_separator(true)
                    .build()
                    .map(|g| g.compile_matcher())
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(FilePatterns { globs })
    }

    /// The library default, [`DEFAULT_GLOBS`].
    pub fn library_default() -> Result<FilePatterns> {
        FilePatterns::new(DEFAULT_GLOBS)
    }

    /// The command-line default, [`CLI_DEFAULT_GLOBS`].
    pub fn cli_default() -> Result<FilePatterns> {
        FilePatterns::new(CLI_DEFAULT_GLOBS)
    }

    pub fn globs(&self) -> &[GlobMatcher] {
        &self.globs
    }
}
