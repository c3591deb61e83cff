//! Validation entry points.
//!
//! [`Validator`] bundles a rule table with the file/directory scanners.
//! [`Validator::validate_path`] is what the command-line tool calls: it picks
//! the single-file or directory path and returns a
//! [`ScanResultSet`] ready for [`output`](crate::output).

use crate::config::FilePatterns;
use crate::error::{Error, Result};
use crate::finding::ScanResultSet;
use crate::output::{self, OutputFormat};
use crate::patterns::PatternSet;
use crate::scanners;
use std::path::Path;

/// Checks files against a [`PatternSet`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use twcss_validator::validate::Validator;
///
/// let validator = Validator::new();
/// let results = validator.validate_directory(Path::new("./src"), None)?;
/// std::process::exit(results.exit_code());
/// # Ok::<(), twcss_validator::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    rules: &'a PatternSet,
}

impl Validator<'static> {
    /// A validator using the built-in rule table.
    pub fn new() -> Self {
        Validator {
            rules: PatternSet::builtin(),
        }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Validator<'a> {
    /// A validator using a caller-supplied rule table.
    pub fn with_rules(rules: &'a PatternSet) -> Self {
        Validator { rules }
    }

    /// Scans a single file.
    ///
    /// The result is keyed by `path` exactly as given, and is empty when the
    /// file is clean.
    pub fn validate_file(&self, path: &Path) -> Result<ScanResultSet> {
        let result = scanners::scan_file(path, self.rules)?;
        let mut results = ScanResultSet::new();
        results.insert(path.display().to_string(), result);
        Ok(results)
    }

    /// Scans a directory tree.
    ///
    /// `patterns` defaults to [`DEFAULT_GLOBS`](crate::config::DEFAULT_GLOBS),
    /// which also covers `.ts` and `.js`, unlike the command-line default.
    pub fn validate_directory(
        &self,
        root: &Path,
        patterns: Option<&FilePatterns>,
    ) -> Result<ScanResultSet> {
        match patterns {
            Some(p) => scanners::scan_directory(root, p, self.rules),
            None => scanners::scan_directory(root, &FilePatterns::library_default()?, self.rules),
        }
    }

    /// Scans `path` as a file or a directory, whichever it is.
    ///
    /// `patterns` only applies to directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if `path` does not exist, otherwise
    /// whatever the underlying scan returns.
    pub fn validate_path(&self, path: &Path, patterns: &FilePatterns) -> Result<ScanResultSet> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }

        if path.is_file() {
            self.validate_file(path)
        } else {
            self.validate_directory(path, Some(patterns))
        }
    }

    /// Renders `results` in the requested format.
    pub fn format_report(&self, results: &ScanResultSet, format: OutputFormat) -> String {
        output::format_report(results, format)
    }
}
