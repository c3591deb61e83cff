//! # twcss-validator
//!
//! Style validator for projects that use Tailwind CSS exclusively.
//!
//! `twcss-validator` scans template and component files line by line for
//! custom CSS (inline `style=` attributes, `<style>` blocks, external CSS
//! imports) and for heavy-handed design utilities (borders, large shadows,
//! opaque neutral backgrounds). It reports every hit with its line number and
//! renders the result as narrative text or JSON.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use twcss_validator::config::FilePatterns;
//! use twcss_validator::output::{self, OutputFormat};
//! use twcss_validator::validate::Validator;
//!
//! let patterns = FilePatterns::cli_default()?;
//! let results = Validator::new().validate_path(Path::new("./src"), &patterns)?;
//!
//! print!("{}", output::format_report(&results, OutputFormat::Pretty));
//! std::process::exit(results.exit_code());
//! # Ok::<(), twcss_validator::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`patterns`]** — the fixed rule table and line matcher.
//! 2. **[`scanners`]** — per-file scanning and directory walking.
//! 3. **[`finding`]** — result types ([`finding::FileResult`], [`finding::ScanResultSet`]).
//! 4. **[`validate`]** — the [`validate::Validator`] entry point.
//! 5. **[`output`]** — narrative and JSON rendering.
//!
//! ## Rules
//!
//! | Category | Bucket | Flags |
//! |----------|--------|-------|
//! | `inline_style` | `inline_style` | `style="..."` attributes |
//! | `style_tag` | `style_tag` | opening `<style>` tags |
//! | `css_import` | `css_import` | `@import`, quoted `.css` paths |
//! | `excessive_borders` | `design_issues` | `border-*` utilities |
//! | `excessive_shadows` | `design_issues` | `shadow-lg`, `shadow-xl`, `shadow-2xl` |
//! | `non_transparent_bg` | `design_issues` | `bg-{slate,gray,zinc,neutral,stone}-*` without `/opacity` |

pub mod config;
pub mod error;
pub mod finding;
pub mod output;
pub mod patterns;
pub mod scanners;
pub mod validate;

pub use error::{Error, Result};
