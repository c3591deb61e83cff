//! Report rendering.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! Both render the same [`ScanResultSet`]; the exit code does not depend on
//! the format (see [`ScanResultSet::exit_code`]).

pub mod json;
pub mod pretty;

use crate::finding::ScanResultSet;

/// Supported report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Narrative text with remediation hints.
    #[default]
    Pretty,
    /// The result set as JSON, nothing else.
    Json,
}

impl OutputFormat {
    /// Maps the command-line `--json` switch to a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Formats `results` in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```
/// use twcss_validator::finding::ScanResultSet;
/// use twcss_validator::output::{format_report, OutputFormat};
///
/// let empty = ScanResultSet::new();
/// assert_eq!(format_report(&empty, OutputFormat::Json), "{}");
/// ```
pub fn format_report(results: &ScanResultSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(results),
        OutputFormat::Json => json::format(results),
    }
}
