//! Static analysis of a template's variation space.

use promptflow_domain::{ChoicePoint, VariationReport};

use super::parser::{parse_inline_choices, parse_named_choices};

/// Lists the choice points of `template` and counts its distinct combinations.
///
/// Inline choices with fewer than two options are left out. Named choices
/// are listed without options and do not affect the count. Never calls a
/// lookup and never resolves anything.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::analyze;
///
/// assert_eq!(analyze("{a|b}-{x|y|z}").total_variations, 6);
/// assert_eq!(analyze("no wildcards here").total_variations, 1);
/// ```
#[must_use]
pub fn analyze(template: &str) -> VariationReport {
    let inline = parse_inline_choices(template);
    let named = parse_named_choices(template);

    let real_choices = inline.iter().filter(|point| is_real_choice(point));
    VariationReport::from_choice_points(real_choices.chain(named.iter()))
}

/// Inline choices need at least two options to add variation.
pub(crate) fn is_real_choice(point: &ChoicePoint) -> bool {
    point.options().is_some_and(|options| options.len() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use promptflow_domain::ChoiceKind;

    #[test]
    fn test_product_of_option_counts() {
        assert_eq!(analyze("{a|b}-{x|y|z}").total_variations, 6);
        assert_eq!(analyze("{a|b} {c|d} {e|f|g|h}").total_variations, 16);
    }

    #[test]
    fn test_no_choices() {
        let report = analyze("no wildcards here");
        assert_eq!(report.total_variations, 1);
        assert!(report.is_empty());
        assert_eq!(analyze("").total_variations, 1);
    }

    #[test]
    fn test_single_option_excluded() {
        let report = analyze("{single} {}");
        assert_eq!(report.total_variations, 1);
        assert!(report.is_empty());
    }

    #[test]
    fn test_named_listed_after_inline() {
        let report = analyze("__pose__ in {rain|snow}");
        let kinds: Vec<ChoiceKind> = report.choice_points.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChoiceKind::Inline, ChoiceKind::Named]);
        assert_eq!(report.total_variations, 2);
        assert_eq!(report.choice_points[1].name.as_deref(), Some("pose"));
        assert_eq!(report.choice_points[1].options, None);
    }

    #[test]
    fn test_options_recorded_trimmed() {
        let report = analyze("{ a | b }");
        assert_eq!(report.choice_points[0].raw_span, "{ a | b }");
        assert_eq!(
            report.choice_points[0].options,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_named_inside_inline_is_both() {
        let report = analyze("{__hair__|bald}");
        assert_eq!(report.choice_points.len(), 2);
        assert_eq!(report.total_variations, 2);
    }
}
