//! File and directory scanners.
//!
//! - [`file`] turns one file's text into a [`FileResult`](crate::finding::FileResult).
//! - [`directory`] walks a tree, applies [`file`] to every path matching the
//!   requested globs and merges the results into a
//!   [`ScanResultSet`](crate::finding::ScanResultSet).
//!
//! Both are synchronous and single-threaded; a read failure aborts the scan.

pub mod directory;
pub mod file;

pub use directory::{collect_files, scan_directory};
pub use file::{scan_file, scan_text};
