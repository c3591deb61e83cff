//! Human-readable report.
//!
//! Layout, per file with violations:
//!
//! ```text
//! 📄 src/components/Card.astro:
//!
//!   [inline_style] found 1 inline style attribute(s):
//!     ⚠️ Replace inline style attributes with Tailwind utility classes
//!     line 3: <div style="color:red">
//! ```
//!
//! followed by a fixed list of recommendations. An empty result set renders
//! as [`SUCCESS_MESSAGE`] alone.

use crate::config::TRUNCATE_WIDTH;
use crate::finding::{Bucket, LineMatch, ScanResultSet};
use colored::Colorize;

pub const SUCCESS_MESSAGE: &str = "✅ All files passed style validation! Styling uses Tailwind CSS utilities only and follows the minimal modern design guidelines.";

const RECOMMENDATIONS: [&str; 5] = [
    "1. Convert every inline style to Tailwind utility classes",
    "2. Remove <style> tags; use @apply or composed utility classes",
    "3. Delete external CSS imports and use Tailwind instead",
    "4. Minimal design: use fewer borders and separate elements with whitespace",
    "5. Modern look: use translucent backgrounds (e.g. bg-primary/10)",
];

const DOCS_LINK: &str = "https://tailwindcss.com";

/// What a bucket's count line calls its entries.
fn noun(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::InlineStyle => "inline style attribute(s)",
        Bucket::StyleTag => "<style> tag(s)",
        Bucket::CssImport => "CSS import(s)",
        Bucket::DesignIssues => "design issue(s)",
    }
}

/// Fixed hint printed under a bucket's count line. `design_issues` entries
/// already carry their own advice.
fn advice(bucket: Bucket) -> Option<&'static str> {
    match bucket {
        Bucket::InlineStyle => Some("Replace inline style attributes with Tailwind utility classes"),
        Bucket::StyleTag => Some("Use Tailwind @apply or composed utility classes instead"),
        Bucket::CssImport => {
            Some("The project should rely on Tailwind CSS alone; do not import external CSS")
        }
        Bucket::DesignIssues => None,
    }
}

/// Cuts `text` to [`TRUNCATE_WIDTH`] characters, marking the cut with `...`.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
pub fn truncate(text: &str) -> String {
    match text.char_indices().nth(TRUNCATE_WIDTH) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn detail(bucket: Bucket, hit: &LineMatch) -> String {
    let text = match bucket {
        Bucket::DesignIssues => hit.text.clone(),
        _ => truncate(&hit.text),
    };
    format!("    line {}: {}", hit.line, text)
}

/// Formats a [`ScanResultSet`] as narrative text.
///
/// Sections rendered (in order):
/// 1. **Heading** — a failure banner.
/// 2. **Files** — one block per file, one sub-block per non-empty bucket.
/// 3. **Recommendations** — five fixed remediation steps.
/// 4. **Docs link**.
pub fn format(results: &ScanResultSet) -> String {
    if results.is_empty() {
        return SUCCESS_MESSAGE.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{}\n", "❌ Style issues found:".red().bold()));

    for (path, result) in results.iter() {
        lines.push(format!("\n{}", format!("📄 {path}:").bold()));

        for bucket in Bucket::ALL {
            let hits = result.bucket(bucket);
            if hits.is_empty() {
                continue;
            }

            lines.push(format!(
                "\n  {} found {} {}:",
                format!("[{bucket}]").yellow().bold(),
                hits.len(),
                noun(bucket),
            ));
            if let Some(advice) = advice(bucket) {
                lines.push(format!("    ⚠️ {advice}"));
            }
            lines.extend(hits.iter().map(|hit| detail(bucket, hit)));
        }
    }

    lines.push(format!("\n\n{}", "💡 How to fix:".bold()));
    lines.extend(RECOMMENDATIONS.iter().map(|r| r.to_string()));
    lines.push(format!("\n📚 Tailwind CSS docs: {DOCS_LINK}"));

    lines.join("\n")
}
