use crate::error::{Error, Result};
use crate::finding::{FileResult, LineMatch};
use crate::patterns::PatternSet;
use std::path::Path;

/// Scans already-loaded text line by line.
///
/// Lines are numbered from 1; `\n`, `\r\n` and a lone `\r` all end a line.
/// Each category adds at most one entry per line: the trimmed line for
/// categories without an advisory, the advisory message otherwise.
///
/// # Examples
///
/// ```
/// use twcss_validator::patterns::PatternSet;
/// use twcss_validator::scanners::scan_text;
///
/// let result = scan_text("<p>ok</p>\n<div style=\"color:red\">", PatternSet::builtin());
/// assert_eq!(result.inline_style[0].line, 2);
/// assert!(result.design_issues.is_empty());
/// ```
pub fn scan_text(text: &str, patterns: &PatternSet) -> FileResult {
    let mut result = FileResult::default();

    for (idx, line) in split_lines(text).enumerate() {
        let line_num = idx + 1;

        for category in patterns.matches(line) {
            let text = match category.advisory() {
                Some(message) => message.to_string(),
                None => line.trim().to_string(),
            };
            result.push(category.bucket(), LineMatch::new(line_num, text));
        }
    }

    result
}

/// Splits on `\n`, `\r\n` or a lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Reads `path` as UTF-8 and scans it with [`scan_text`].
///
/// # Errors
///
/// Returns [`Error::Read`] when the file is missing, unreadable or not valid
/// UTF-8. Nothing here recovers from that; the caller decides.
pub fn scan_file(path: &Path, patterns: &PatternSet) -> Result<FileResult> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = scan_text(&content, patterns);
    tracing::debug!(
        file = %path.display(),
        matches = result.total(),
        "scanned file"
    );
    Ok(result)
}
