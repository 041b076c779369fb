//! Choice resolution engine
//!
//! Expands `__name__` and `{a|b}` choice points in two sweeps: named
//! choices first, then inline choices over the result. Text substituted
//! from an option list is never scanned again, so expansion is single-level.

use std::ops::Range;

use promptflow_domain::{
    ChoiceKind, ChoicePoint, ChoiceSelection, ResolutionWarning, SelectionPolicy,
};
use tracing::{debug, warn};

use super::context::ResolutionContext;
use super::parser::{parse_inline_choices_outside, parse_named_choices};
use crate::ports::OptionLookup;

/// Result of resolving one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The expanded text.
    pub resolved: String,

    /// Choices made, in resolution order.
    pub selections: Vec<ChoiceSelection>,

    /// Named choices that were left verbatim.
    pub warnings: Vec<ResolutionWarning>,

    /// Whether every choice point was resolved.
    pub is_complete: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no choice points.
    #[must_use]
    pub fn no_choices(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            selections: Vec::new(),
            warnings: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved choice points.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.selections.len()
    }

    /// Names of the named choices that could not be resolved.
    #[must_use]
    pub fn unresolved_names(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .map(|w| match w {
                ResolutionWarning::UnresolvedNamedChoice { name, .. } => name.as_str(),
            })
            .collect()
    }
}

/// The choice resolution engine.
///
/// Holds the lookup capability only; every call to [`ChoiceResolver::resolve`]
/// starts from a fresh [`ResolutionContext`], so calls never influence each other.
pub struct ChoiceResolver<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<'a, L: OptionLookup + ?Sized> ChoiceResolver<'a, L> {
    /// Creates a resolver over the given lookup.
    #[must_use]
    pub const fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Resolves all choice points in `template`.
    pub fn resolve(&self, template: &str, policy: SelectionPolicy, seed: u64) -> ResolutionResult {
        let mut context = ResolutionContext::new(policy, seed);
        let mut result = ResolutionResult::no_choices("");

        let (named, substituted) = self.resolve_named(template, &mut context, &mut result);
        result.resolved =
            resolve_inline(&named, &substituted, &mut context, &mut result.selections);
        result.is_complete = result.warnings.is_empty();

        debug!(
            %policy,
            seed,
            consumed = context.running_index(),
            resolved = result.resolved_count(),
            unresolved = result.warnings.len(),
            "resolved template"
        );

        result
    }

    /// Resolves `template` and returns only the expanded text.
    #[must_use]
    pub fn resolve_text(&self, template: &str, policy: SelectionPolicy, seed: u64) -> String {
        self.resolve(template, policy, seed).resolved
    }

    /// Sweep 1: substitute named choices, keeping misses verbatim.
    ///
    /// Also returns the output ranges holding substituted option text.
    fn resolve_named(
        &self,
        input: &str,
        context: &mut ResolutionContext,
        result: &mut ResolutionResult,
    ) -> (String, Vec<Range<usize>>) {
        let points = parse_named_choices(input);
        if points.is_empty() {
            return (input.to_string(), Vec::new());
        }

        let mut output = String::with_capacity(input.len());
        let mut substituted = Vec::new();
        let mut last_end = 0;

        for point in &points {
            let ChoicePoint::Named {
                raw_span,
                span,
                name,
            } = point
            else {
                continue;
            };

            output.push_str(&input[last_end..span.start]);

            let options = self
                .lookup
                .resolve_named(name)
                .filter(|options| !options.is_empty());

            match options.as_deref().and_then(|opts| context.select(opts)) {
                Some((option_index, chosen)) => {
                    let start = output.len();
                    output.push_str(chosen);
                    substituted.push(start..output.len());
                    result.selections.push(ChoiceSelection {
                        kind: ChoiceKind::Named,
                        raw_span: raw_span.clone(),
                        chosen: chosen.to_string(),
                        option_index,
                    });
                }
                None => {
                    warn!(name = %name, "option list not found, keeping {raw_span}");
                    output.push_str(raw_span);
                    result.warnings.push(ResolutionWarning::UnresolvedNamedChoice {
                        name: name.clone(),
                        raw_span: raw_span.clone(),
                    });
                }
            }

            last_end = span.end;
        }

        output.push_str(&input[last_end..]);
        (output, substituted)
    }
}

/// Sweep 2: substitute inline choices outside the `substituted` ranges.
fn resolve_inline(
    input: &str,
    substituted: &[Range<usize>],
    context: &mut ResolutionContext,
    selections: &mut Vec<ChoiceSelection>,
) -> String {
    let points = parse_inline_choices_outside(input, substituted);
    if points.is_empty() {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for point in &points {
        let ChoicePoint::Inline {
            raw_span,
            span,
            options,
        } = point
        else {
            continue;
        };

        output.push_str(&input[last_end..span.start]);

        // split_options never returns an empty list
        if let Some((option_index, chosen)) = context.select(options) {
            output.push_str(chosen);
            selections.push(ChoiceSelection {
                kind: ChoiceKind::Inline,
                raw_span: raw_span.clone(),
                chosen: chosen.to_string(),
                option_index,
            });
        }

        last_end = span.end;
    }

    output.push_str(&input[last_end..]);
    output
}

/// Resolves `template` with the given policy, seed and lookup.
///
/// # Examples
///
/// ```
/// use promptflow_application::choice_resolver::resolve;
/// use promptflow_application::ports::NoLookup;
/// use promptflow_domain::SelectionPolicy;
///
/// assert_eq!(resolve("{a|b}-{x|y}", SelectionPolicy::Increment, 0, &NoLookup), "a-y");
/// ```
#[must_use]
pub fn resolve<L: OptionLookup + ?Sized>(
    template: &str,
    policy: SelectionPolicy,
    seed: u64,
    lookup: &L,
) -> String {
    ChoiceResolver::new(lookup).resolve_text(template, policy, seed)
}
