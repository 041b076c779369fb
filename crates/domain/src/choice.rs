//! Choice points discovered in a template.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The syntactic kind of a choice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    /// `{a|b|c}` with the options written in place.
    Inline,
    /// `__name__` referencing an external option list.
    #[serde(rename = "file")]
    Named,
}

/// A parsed choice point with its position in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoicePoint {
    /// Options written directly between braces.
    Inline {
        /// The matched text, braces included.
        raw_span: String,
        /// Byte range of `raw_span` in the scanned text.
        span: Range<usize>,
        /// Options split on `|` and trimmed.
        options: Vec<String>,
    },
    /// A reference to a named option list.
    Named {
        /// The matched text, underscores included.
        raw_span: String,
        /// Byte range of `raw_span` in the scanned text.
        span: Range<usize>,
        /// The list name between the double underscores.
        name: String,
    },
}

impl ChoicePoint {
    /// Returns the kind of this choice point.
    #[must_use]
    pub const fn kind(&self) -> ChoiceKind {
        match self {
            Self::Inline { .. } => ChoiceKind::Inline,
            Self::Named { .. } => ChoiceKind::Named,
        }
    }

    /// Returns the matched source text.
    #[must_use]
    pub fn raw_span(&self) -> &str {
        match self {
            Self::Inline { raw_span, .. } | Self::Named { raw_span, .. } => raw_span,
        }
    }

    /// Returns the byte range in the scanned text.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Inline { span, .. } | Self::Named { span, .. } => span.clone(),
        }
    }

    /// Returns the embedded options; `None` for named choices.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Inline { options, .. } => Some(options),
            Self::Named { .. } => None,
        }
    }

    /// Number of alternatives this choice point multiplies the variation
    /// space by. Named choices count as 1 since their lists are not known here.
    #[must_use]
    pub fn multiplier(&self) -> u64 {
        match self {
            Self::Inline { options, .. } if options.len() >= 2 => {
                u64::try_from(options.len()).unwrap_or(u64::MAX)
            }
            _ => 1,
        }
    }
}

/// Returns true if `name` can appear between the underscores of a named choice.
///
/// Valid names are non-empty and use only ASCII letters, digits, `_`, `-` and `/`.
#[must_use]
pub fn is_valid_choice_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/'))
}

/// A single choice made while resolving a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSelection {
    /// Kind of the resolved choice point.
    pub kind: ChoiceKind,
    /// The text that was replaced.
    pub raw_span: String,
    /// The option that replaced it.
    pub chosen: String,
    /// Index of `chosen` within the option list.
    pub option_index: usize,
}

/// Non-fatal conditions reported alongside a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// A named choice whose list was missing or empty; the token was kept verbatim.
    UnresolvedNamedChoice {
        /// The list name.
        name: String,
        /// The token left in the output.
        raw_span: String,
    },
}

impl std::fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedNamedChoice { name, .. } => {
                write!(f, "option list '{name}' not found or empty")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(options: &[&str]) -> ChoicePoint {
        ChoicePoint::Inline {
            raw_span: format!("{{{}}}", options.join("|")),
            span: 0..0,
            options: options.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_multiplier_counts_real_choices() {
        assert_eq!(inline(&["a", "b", "c"]).multiplier(), 3);
        assert_eq!(inline(&["only"]).multiplier(), 1);
        assert_eq!(inline(&[""]).multiplier(), 1);
    }

    #[test]
    fn test_named_multiplier_is_one() {
        let named = ChoicePoint::Named {
            raw_span: "__hair__".to_string(),
            span: 3..11,
            name: "hair".to_string(),
        };
        assert_eq!(named.multiplier(), 1);
        assert_eq!(named.kind(), ChoiceKind::Named);
        assert!(named.options().is_none());
        assert_eq!(named.span(), 3..11);
    }

    #[test]
    fn test_kind_serializes_as_host_labels() {
        assert_eq!(
            serde_json::to_string(&ChoiceKind::Inline).ok().as_deref(),
            Some("\"inline\"")
        );
        assert_eq!(
            serde_json::to_string(&ChoiceKind::Named).ok().as_deref(),
            Some("\"file\"")
        );
    }

    #[test]
    fn test_valid_choice_names() {
        assert!(is_valid_choice_name("hair"));
        assert!(is_valid_choice_name("styles/anime"));
        assert!(is_valid_choice_name("eye-color_2"));
        assert!(!is_valid_choice_name(""));
        assert!(!is_valid_choice_name("two words"));
        assert!(!is_valid_choice_name("caf\u{e9}"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ResolutionWarning::UnresolvedNamedChoice {
            name: "colors".to_string(),
            raw_span: "__colors__".to_string(),
        };
        assert_eq!(warning.to_string(), "option list 'colors' not found or empty");
    }
}
