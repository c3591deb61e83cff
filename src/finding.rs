use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};
use std::fmt;

/// A named section of a file's result.
///
/// The three design heuristics share [`Bucket::DesignIssues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    InlineStyle,
    StyleTag,
    CssImport,
    DesignIssues,
}

impl Bucket {
    /// All buckets in report order.
    pub const ALL: [Bucket; 4] = [
        Bucket::InlineStyle,
        Bucket::StyleTag,
        Bucket::CssImport,
        Bucket::DesignIssues,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::InlineStyle => "inline_style",
            Bucket::StyleTag => "style_tag",
            Bucket::CssImport => "css_import",
            Bucket::DesignIssues => "design_issues",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hit: a 1-based line number and either the trimmed source line or an
/// advisory message.
///
/// Serializes as a two-element array, `[line, text]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub line: usize,
    pub text: String,
}

impl LineMatch {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        LineMatch {
            line,
            text: text.into(),
        }
    }
}

impl Serialize for LineMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.line)?;
        tuple.serialize_element(&self.text)?;
        tuple.end()
    }
}

/// Matches for a single file, grouped by [`Bucket`].
///
/// Field order is the serialized order; every bucket is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub inline_style: Vec<LineMatch>,
    pub style_tag: Vec<LineMatch>,
    pub css_import: Vec<LineMatch>,
    pub design_issues: Vec<LineMatch>,
}

impl FileResult {
    pub fn bucket(&self, bucket: Bucket) -> &[LineMatch] {
        match bucket {
            Bucket::InlineStyle => &self.inline_style,
            Bucket::StyleTag => &self.style_tag,
            Bucket::CssImport => &self.css_import,
            Bucket::DesignIssues => &self.design_issues,
        }
    }

    pub fn push(&mut self, bucket: Bucket, hit: LineMatch) {
        let entries = match bucket {
            Bucket::InlineStyle => &mut self.inline_style,
            Bucket::StyleTag => &mut self.style_tag,
            Bucket::CssImport => &mut self.css_import,
            Bucket::DesignIssues => &mut self.design_issues,
        };
        entries.push(hit);
    }

    /// `true` when no bucket holds a match.
    pub fn is_clean(&self) -> bool {
        Bucket::ALL.iter().all(|&b| self.bucket(b).is_empty())
    }

    pub fn total(&self) -> usize {
        Bucket::ALL.iter().map(|&b| self.bucket(b).len()).sum()
    }
}

/// Every file with at least one match, in discovery order.
///
/// Keys are paths relative to the scan root for directory scans, or the path
/// as given for a single-file scan. Serializes as a JSON object that keeps
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResultSet {
    entries: Vec<(String, FileResult)>,
}

impl ScanResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `result` under `path`.
    ///
    /// Clean results are dropped, and a path already present keeps its
    /// original position and result. Returns `true` if the entry was added.
    pub fn insert(&mut self, path: impl Into<String>, result: FileResult) -> bool {
        let path = path.into();
        if result.is_clean() || self.contains(&path) {
            return false;
        }
        self.entries.push((path, result));
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == path)
    }

    pub fn get(&self, path: &str) -> Option<&FileResult> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileResult)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total matches across all files and buckets.
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.total()).sum()
    }

    /// `true` when no file had a violation.
    pub fn passed(&self) -> bool {
        self.is_empty()
    }

    /// Process exit code for this result: `0` on pass, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

impl Serialize for ScanResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, result) in &self.entries {
            map.serialize_entry(path, result)?;
        }
        map.end()
    }
}
