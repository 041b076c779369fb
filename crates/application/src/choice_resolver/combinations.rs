//! Concrete expansion of a template's variation space.

use promptflow_domain::ChoicePoint;

use super::analyzer::is_real_choice;
use super::parser::parse_inline_choices;

/// Upper bound on generated combinations when the caller has no preference.
pub const DEFAULT_COMBINATION_LIMIT: usize = 1000;

/// Expands the cartesian product of the inline choices in `template`.
///
/// Combinations are produced in odometer order (the last choice varies
/// fastest) and cut off after `limit` entries. Single-option inline choices
/// and named choices are left verbatim. Returns an empty list when the
/// template has nothing to vary.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::enumerate_combinations;
///
/// let all = enumerate_combinations("{a|b}{1|2}", 10);
/// assert_eq!(all, vec!["a1", "a2", "b1", "b2"]);
/// ```
#[must_use]
pub fn enumerate_combinations(template: &str, limit: usize) -> Vec<String> {
    let points = parse_inline_choices(template);
    let choices: Vec<(&ChoicePoint, &[String])> = points
        .iter()
        .filter(|point| is_real_choice(point))
        .filter_map(|point| point.options().map(|options| (point, options)))
        .collect();

    if choices.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut digits = vec![0_usize; choices.len()];
    let mut combinations = Vec::new();

    loop {
        combinations.push(render(template, &choices, &digits));
        if combinations.len() >= limit || !advance(&mut digits, &choices) {
            break;
        }
    }

    combinations
}

/// Substitutes the option picked by each digit.
fn render(template: &str, choices: &[(&ChoicePoint, &[String])], digits: &[usize]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut last_end = 0;

    for ((point, options), &digit) in choices.iter().zip(digits) {
        let span = point.span();
        output.push_str(&template[last_end..span.start]);
        output.push_str(options.get(digit).map_or("", String::as_str));
        last_end = span.end;
    }

    output.push_str(&template[last_end..]);
    output
}

/// Steps the odometer. Returns false once every combination has been seen.
fn advance(digits: &mut [usize], choices: &[(&ChoicePoint, &[String])]) -> bool {
    for (digit, (_, options)) in digits.iter_mut().zip(choices).rev() {
        *digit += 1;
        if *digit < options.len() {
            return true;
        }
        *digit = 0;
    }
    false
}
