//! Variation reports produced by template analysis.

use serde::{Deserialize, Serialize};

use crate::choice::{ChoiceKind, ChoicePoint};

/// Serializable summary of one discovered choice point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicePointSummary {
    /// `inline` or `file`.
    pub kind: ChoiceKind,
    /// The matched source text.
    pub raw_span: String,
    /// List name, for named choices only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Embedded options, or `null` when they are only known to the host.
    pub options: Option<Vec<String>>,
}

impl From<&ChoicePoint> for ChoicePointSummary {
    fn from(point: &ChoicePoint) -> Self {
        match point {
            ChoicePoint::Inline {
                raw_span, options, ..
            } => Self {
                kind: ChoiceKind::Inline,
                raw_span: raw_span.clone(),
                name: None,
                options: Some(options.clone()),
            },
            ChoicePoint::Named { raw_span, name, .. } => Self {
                kind: ChoiceKind::Named,
                raw_span: raw_span.clone(),
                name: Some(name.clone()),
                options: None,
            },
        }
    }
}

/// The combinatorial variation space of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationReport {
    /// Discovered choice points: inline choices first, then named ones.
    pub choice_points: Vec<ChoicePointSummary>,
    /// Product of the option counts of all inline choices with two or more options.
    pub total_variations: u64,
}

impl VariationReport {
    /// A report for text without any choice points.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            choice_points: Vec::new(),
            total_variations: 1,
        }
    }

    /// Builds a report from already-filtered choice points.
    ///
    /// The total saturates at `u64::MAX`.
    #[must_use]
    pub fn from_choice_points<'a>(points: impl IntoIterator<Item = &'a ChoicePoint>) -> Self {
        let mut report = Self::empty();
        for point in points {
            report.total_variations = report.total_variations.saturating_mul(point.multiplier());
            report.choice_points.push(ChoicePointSummary::from(point));
        }
        report
    }

    /// Returns true if no choice points were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choice_points.is_empty()
    }
}

impl Default for VariationReport {
    fn default() -> Self {
        Self::empty()
    }
}
