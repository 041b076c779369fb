//! Choice point parser for `{a|b}` and `__name__` syntax
//!
//! Locates choice points with their positions. Unbalanced or nested
//! delimiters are not choice points and stay literal text.

use std::ops::Range;
use std::sync::LazyLock;

use promptflow_domain::ChoicePoint;
pub use promptflow_domain::is_valid_choice_name;
use regex::Regex;

/// `{...}` with no brace inside the body.
static INLINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("valid regex"));

/// `__name__` with `name` in `[A-Za-z0-9_\-/]+`.
static NAMED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([A-Za-z0-9_\-/]+)__").expect("valid regex"));

/// Splits an inline choice body into trimmed options.
///
/// An empty body yields a single empty option.
#[must_use]
pub fn split_options(body: &str) -> Vec<String> {
    body.split('|').map(|opt| opt.trim().to_string()).collect()
}

/// Parses all inline choices, left to right.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::parser::parse_inline_choices;
///
/// let points = parse_inline_choices("a {red|blue} car");
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].raw_span(), "{red|blue}");
/// assert_eq!(points[0].options().map(<[String]>::len), Some(2));
/// ```
#[must_use]
pub fn parse_inline_choices(input: &str) -> Vec<ChoicePoint> {
    INLINE_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(ChoicePoint::Inline {
                raw_span: whole.as_str().to_string(),
                span: whole.range(),
                options: split_options(body.as_str()),
            })
        })
        .collect()
}

/// Parses inline choices, treating each `opaque` byte range as plain text.
///
/// Braces and pipes inside an opaque range neither open, close nor split a
/// choice, but an opaque range may sit inside a choice body as one piece of
/// an option. Ranges must be sorted, disjoint and on char boundaries.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::parser::parse_inline_choices_outside;
///
/// // "{x|y}" came from somewhere else and stays literal.
/// assert!(parse_inline_choices_outside("a {x|y}", &[2..7]).is_empty());
///
/// let points = parse_inline_choices_outside("{a|b|c}", &[1..4]);
/// assert_eq!(points[0].options().map(<[String]>::len), Some(2));
/// ```
#[must_use]
pub fn parse_inline_choices_outside(input: &str, opaque: &[Range<usize>]) -> Vec<ChoicePoint> {
    if opaque.is_empty() {
        return parse_inline_choices(input);
    }

    let masked = mask_ranges(input, opaque);
    INLINE_PATTERN
        .captures_iter(&masked)
        .filter_map(|caps| {
            let whole = caps.get(0)?.range();
            let body = caps.get(1)?.range();
            Some(ChoicePoint::Inline {
                raw_span: input[whole.clone()].to_string(),
                span: whole,
                options: split_at_pipes(input, &masked, body),
            })
        })
        .collect()
}

/// Replaces every byte of the given ranges with a neutral ASCII byte,
/// keeping all offsets intact.
fn mask_ranges(input: &str, ranges: &[Range<usize>]) -> String {
    let mut masked = String::with_capacity(input.len());
    let mut last_end = 0;
    for range in ranges {
        masked.push_str(&input[last_end..range.start]);
        masked.extend(std::iter::repeat_n('#', range.len()));
        last_end = range.end;
    }
    masked.push_str(&input[last_end..]);
    masked
}

/// Splits `input[body]` at the pipes still visible in `masked`.
fn split_at_pipes(input: &str, masked: &str, body: Range<usize>) -> Vec<String> {
    let mut options = Vec::new();
    let mut start = body.start;
    for (offset, _) in masked[body.clone()].match_indices('|') {
        let pipe = body.start + offset;
        options.push(input[start..pipe].trim().to_string());
        start = pipe + 1;
    }
    options.push(input[start..body.end].trim().to_string());
    options
}

/// Parses all named choices, left to right.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::parser::parse_named_choices;
///
/// let points = parse_named_choices("a __colors/warm__ car");
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].raw_span(), "__colors/warm__");
/// ```
#[must_use]
pub fn parse_named_choices(input: &str) -> Vec<ChoicePoint> {
    NAMED_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(ChoicePoint::Named {
                raw_span: whole.as_str().to_string(),
                span: whole.range(),
                name: name.as_str().to_string(),
            })
        })
        .collect()
}

/// Parses both syntaxes independently: inline choices first, then named ones.
#[must_use]
pub fn parse_choice_points(input: &str) -> Vec<ChoicePoint> {
    let mut points = parse_inline_choices(input);
    points.extend(parse_named_choices(input));
    points
}

/// Returns true if the input contains any choice point.
#[must_use]
pub fn has_choice_points(input: &str) -> bool {
    INLINE_PATTERN.is_match(input) || NAMED_PATTERN.is_match(input)
}

/// Extracts the names of all named choices, in order of appearance.
#[must_use]
pub fn extract_choice_names(input: &str) -> Vec<String> {
    NAMED_PATTERN
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
