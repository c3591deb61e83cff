//! Line matcher: the fixed table of style rules.
//!
//! Every [`Rule`] pairs a [`Category`] with a case-insensitive regular
//! expression. The built-in table is compiled once per process and exposed
//! through [`PatternSet::builtin`]; tests and embedders can assemble their
//! own [`PatternSet`] from a subset of categories.

use crate::error::Result;
use crate::finding::Bucket;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::LazyLock;

/// A kind of style violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A quoted `style="..."` attribute.
    InlineStyle,
    /// An opening `<style>` tag.
    StyleTag,
    /// An `@import` directive or a quoted `.css` reference.
    CssImport,
    /// A `border-*` utility.
    ExcessiveBorders,
    /// A large shadow utility (`shadow-lg`, `shadow-xl`, `shadow-2xl`).
    ExcessiveShadows,
    /// A neutral-palette `bg-*` color without an opacity modifier.
    NonTransparentBg,
}

impl Category {
    /// All categories, in detection order.
    pub const ALL: [Category; 6] = [
        Category::InlineStyle,
        Category::StyleTag,
        Category::CssImport,
        Category::ExcessiveBorders,
        Category::ExcessiveShadows,
        Category::NonTransparentBg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::InlineStyle => "inline_style",
            Category::StyleTag => "style_tag",
            Category::CssImport => "css_import",
            Category::ExcessiveBorders => "excessive_borders",
            Category::ExcessiveShadows => "excessive_shadows",
            Category::NonTransparentBg => "non_transparent_bg",
        }
    }

    /// The report bucket this category's matches land in.
    pub fn bucket(self) -> Bucket {
        match self {
            Category::InlineStyle => Bucket::InlineStyle,
            Category::StyleTag => Bucket::StyleTag,
            Category::CssImport => Bucket::CssImport,
            Category::ExcessiveBorders
            | Category::ExcessiveShadows
            | Category::NonTransparentBg => Bucket::DesignIssues,
        }
    }

    /// Fixed message recorded instead of the source line.
    ///
    /// Only the design heuristics have one; the other categories record the
    /// offending line itself.
    pub fn advisory(self) -> Option<&'static str> {
        match self {
            Category::ExcessiveBorders => {
                Some("Too many borders; use whitespace to separate elements")
            }
            Category::ExcessiveShadows => {
                Some("Heavy shadow; a minimal design should use fewer shadows")
            }
            Category::NonTransparentBg => {
                Some("Use a translucent background instead, e.g. bg-slate-500/10")
            }
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled, case-insensitive rule for one [`Category`].
#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    regex: Regex,
    rejected_suffix: Option<char>,
}

impl Rule {
    /// Compiles `pattern` case-insensitively for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if `pattern` is not a
    /// valid regular expression.
    pub fn new(category: Category, pattern: &str) -> Result<Rule> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Rule {
            category,
            regex,
            rejected_suffix: None,
        })
    }

    /// Discards any match that is immediately followed by `suffix`.
    ///
    /// The `regex` crate has no lookahead, so `bg-slate-500(?!/)` is written
    /// as "find the token, then look at the next character".
    pub fn unless_followed_by(mut self, suffix: char) -> Rule {
        self.rejected_suffix = Some(suffix);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self.rejected_suffix {
            None => self.regex.is_match(line),
            Some(suffix) => self
                .regex
                .find_iter(line)
                .any(|m| !line[m.end()..].starts_with(suffix)),
        }
    }
}

/// An immutable, ordered table of rules.
///
/// Rule order is detection order: within one line, matches are recorded in
/// the order the rules appear here.
#[derive(Debug, Clone)]
pub struct PatternSet {
    rules: Vec<Rule>,
}

// (category, pattern, rejected suffix)
const BUILTIN_RULES: &[(Category, &str, Option<char>)] = &[
    (
        Category::InlineStyle,
        r#"style\s*=\s*["'][^"']*["']"#,
        None,
    ),
    (Category::StyleTag, r"<style[^>]*>", None),
    (Category::CssImport, r#"@import|\.css["']"#, None),
    (Category::ExcessiveBorders, r"border-\d+|border-[a-z]+", None),
    (Category::ExcessiveShadows, r"shadow-(?:lg|xl|2xl)\b", None),
    (
        Category::NonTransparentBg,
        r"bg-(?:slate|gray|zinc|neutral|stone)-[a-z0-9]+",
        Some('/'),
    ),
];

static BUILTIN: LazyLock<PatternSet> = LazyLock::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .map(|&(category, pattern, suffix)| {
            let rule = Rule::new(category, pattern).expect("built-in rule must compile");
            match suffix {
                Some(c) => rule.unless_followed_by(c),
                None => rule,
            }
        })
        .collect();
    PatternSet::new(rules)
});

impl PatternSet {
    pub fn new(rules: Vec<Rule>) -> PatternSet {
        PatternSet { rules }
    }

    /// The built-in rule table, compiled on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use twcss_validator::patterns::{Category, PatternSet};
    ///
    /// let hits: Vec<_> = PatternSet::builtin()
    ///     .matches(r#"<div class="bg-slate-500 shadow-2xl">"#)
    ///     .collect();
    /// assert_eq!(hits, [Category::ExcessiveShadows, Category::NonTransparentBg]);
    /// ```
    pub fn builtin() -> &'static PatternSet {
        &BUILTIN
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Categories whose rule matches `line`, in table order.
    pub fn matches<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Category> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.is_match(line))
            .map(Rule::category)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
