use crate::config::FilePatterns;
use crate::error::{Error, Result};
use crate::finding::ScanResultSet;
use crate::patterns::PatternSet;
use crate::scanners::file::scan_file;
use globset::GlobMatcher;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects regular files under `root` matching `glob`.
///
/// The glob is tested against the root-relative path. Symlinks to regular
/// files count as files; symlinked directories are not descended into.
/// Results come back in lexical walk order so repeated runs see the same
/// sequence.
///
/// # Errors
///
/// Returns [`Error::Walk`] if a directory entry cannot be read.
pub fn collect_files(root: &Path, glob: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if glob.is_match(relative) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Scans every file under `root` that matches one of `patterns`.
///
/// Globs are processed in order; within a glob, files are visited lexically.
/// Files without matches are left out, and a file matched by several globs
/// is reported once, at its first position.
///
/// # Errors
///
/// - [`Error::NotADirectory`] if `root` is not a directory.
/// - [`Error::Walk`] if traversal fails.
/// - [`Error::Read`] for the first file that cannot be read; the scan stops
///   there and no partial result is returned.
pub fn scan_directory(
    root: &Path,
    patterns: &FilePatterns,
    rules: &PatternSet,
) -> Result<ScanResultSet> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut results = ScanResultSet::new();
    let mut files_scanned = 0usize;

    for glob in patterns.globs() {
        let files = collect_files(root, glob)?;
        tracing::debug!(pattern = %glob.glob(), files = files.len(), "expanded pattern");

        for file in files {
            let key = relative_key(root, &file);
            if results.contains(&key) {
                continue;
            }

            let result = scan_file(&file, rules)?;
            files_scanned += 1;
            if !results.insert(key, result) {
                tracing::debug!(file = %file.display(), "no violations");
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        files_scanned,
        files_with_issues = results.len(),
        "directory scan complete"
    );
    Ok(results)
}

fn relative_key(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/")
}
