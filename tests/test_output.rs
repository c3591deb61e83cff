use std::path::Path;

use twcss_validator::config::FilePatterns;
use twcss_validator::finding::{Bucket, FileResult, LineMatch, ScanResultSet};
use twcss_validator::output::pretty::{self, SUCCESS_MESSAGE};
use twcss_validator::output::{self, OutputFormat};
use twcss_validator::validate::Validator;

fn dirty_results() -> ScanResultSet {
    colored::control::set_override(false);
    Validator::new()
        .validate_path(
            Path::new("tests/fixtures/dirty-site"),
            &FilePatterns::cli_default().unwrap(),
        )
        .unwrap()
}

// ── structured ────────────────────────────────────────────────────────────────

#[test]
fn json_empty_set_is_empty_object() {
    let json = output::format_report(&ScanResultSet::new(), OutputFormat::Json);
    assert_eq!(json, "{}");
}

#[test]
fn json_contains_every_bucket_in_order() {
    let json = output::format_report(&dirty_results(), OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");

    let card = parsed["src/components/Card.astro"]
        .as_object()
        .expect("file entry should be an object");
    assert_eq!(card.len(), 4);
    for bucket in Bucket::ALL {
        assert!(card.contains_key(bucket.as_str()), "missing {bucket}");
    }

    // Order is checked on the raw text; serde_json::Map does not keep it.
    let inline = json.find("\"inline_style\"").unwrap();
    let style = json.find("\"style_tag\"").unwrap();
    let import = json.find("\"css_import\"").unwrap();
    let design = json.find("\"design_issues\"").unwrap();
    assert!(inline < style && style < import && import < design);
}

#[test]
fn json_line_matches_are_pairs() {
    let json = output::format_report(&dirty_results(), OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let style_tag = &parsed["src/components/Card.astro"]["style_tag"];
    assert_eq!(style_tag, &serde_json::json!([[8, "<style>"]]));
}

#[test]
fn json_keeps_empty_buckets() {
    let mut result = FileResult::default();
    result.push(Bucket::CssImport, LineMatch::new(1, "@import 'x';"));
    let mut set = ScanResultSet::new();
    set.insert("a.astro", result);

    let parsed: serde_json::Value =
        serde_json::from_str(&output::format_report(&set, OutputFormat::Json)).unwrap();
    assert_eq!(parsed["a.astro"]["inline_style"], serde_json::json!([]));
    assert_eq!(parsed["a.astro"]["design_issues"], serde_json::json!([]));
}

#[test]
fn json_keeps_file_insertion_order() {
    let mut set = ScanResultSet::new();
    for name in ["zeta.astro", "alpha.astro"] {
        let mut result = FileResult::default();
        result.push(Bucket::StyleTag, LineMatch::new(1, "<style>"));
        set.insert(name, result);
    }

    let json = output::format_report(&set, OutputFormat::Json);
    assert!(json.find("zeta.astro").unwrap() < json.find("alpha.astro").unwrap());
}

// ── narrative ─────────────────────────────────────────────────────────────────

#[test]
fn pretty_empty_set_is_success_message() {
    let text = output::format_report(&ScanResultSet::new(), OutputFormat::Pretty);
    assert_eq!(text, SUCCESS_MESSAGE);
}

#[test]
fn pretty_names_file_buckets_and_lines() {
    let text = output::format_report(&dirty_results(), OutputFormat::Pretty);

    assert!(text.contains("📄 src/components/Card.astro:"));
    assert!(text.contains("[inline_style] found 1 inline style attribute(s):"));
    assert!(text.contains("[style_tag] found 1 <style> tag(s):"));
    assert!(text.contains("[css_import] found 1 CSS import(s):"));
    assert!(text.contains("[design_issues] found 3 design issue(s):"));
    assert!(text.contains(r#"line 5: <h2 style="color: red; font-size: 20px">Title</h2>"#));
    assert!(text.contains("line 8: <style>"));
}

#[test]
fn pretty_skips_empty_buckets() {
    let mut result = FileResult::default();
    result.push(Bucket::InlineStyle, LineMatch::new(2, r#"<b style="x">"#));
    let mut set = ScanResultSet::new();
    set.insert("only-inline.astro", result);

    let text = output::format_report(&set, OutputFormat::Pretty);
    assert!(text.contains("[inline_style]"));
    assert!(!text.contains("[style_tag]"));
    assert!(!text.contains("[design_issues]"));
}

#[test]
fn pretty_ends_with_recommendations_and_docs_link() {
    let text = output::format_report(&dirty_results(), OutputFormat::Pretty);

    let steps: Vec<usize> = ["1. ", "2. ", "3. ", "4. ", "5. "]
        .iter()
        .map(|s| text.find(s).expect("recommendation missing"))
        .collect();
    assert!(steps.windows(2).all(|w| w[0] < w[1]));
    assert!(text.trim_end().ends_with("https://tailwindcss.com"));
}

#[test]
fn pretty_truncates_long_source_lines_only() {
    let long = format!(r#"<div style="{}">"#, "x".repeat(100));
    let mut result = FileResult::default();
    result.push(Bucket::InlineStyle, LineMatch::new(1, long.clone()));
    let mut set = ScanResultSet::new();
    set.insert("long.astro", result);

    let text = output::format_report(&set, OutputFormat::Pretty);
    let expected = format!("line 1: {}...", &long[..70]);
    assert!(text.contains(&expected));
    assert!(!text.contains(&long));
}

#[test]
fn truncate_leaves_short_text_alone() {
    assert_eq!(pretty::truncate("<style>"), "<style>");
    let exact = "a".repeat(70);
    assert_eq!(pretty::truncate(&exact), exact);
}

#[test]
fn truncate_counts_characters_not_bytes() {
    let text = "é".repeat(80);
    let cut = pretty::truncate(&text);
    assert_eq!(cut.chars().count(), 73);
    assert!(cut.ends_with("..."));
}

#[test]
fn format_does_not_change_exit_code() {
    let results = dirty_results();
    let _ = output::format_report(&results, OutputFormat::Json);
    assert_eq!(results.exit_code(), 1);
    assert_eq!(ScanResultSet::new().exit_code(), 0);
}

#[test]
fn json_flag_selects_format() {
    assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
    assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Pretty);
}
