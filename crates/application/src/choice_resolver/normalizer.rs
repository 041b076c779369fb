//! Separator cleanup for assembled prompts.

use std::sync::LazyLock;

use regex::Regex;

static REPEATED_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(?:\s*,)+").expect("valid regex"));

static COMMA_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Canonicalizes commas and whitespace.
///
/// Collapses repeated commas, strips leading and trailing commas and
/// whitespace, sets comma spacing to `", "` and collapses whitespace runs.
/// Idempotent.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::normalize;
///
/// assert_eq!(normalize(" , a,, ,b ,c  d,"), "a, b, c d");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = REPEATED_COMMAS.replace_all(text, ",");
    let trimmed = collapsed.trim_matches(|c: char| c == ',' || c.is_whitespace());
    let spaced = COMMA_SPACING.replace_all(trimmed, ", ");
    WHITESPACE_RUNS.replace_all(&spaced, " ").into_owned()
}
