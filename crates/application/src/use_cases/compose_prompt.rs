//! Compose prompt use case
//!
//! Resolves every field of a prompt request and assembles the final
//! positive and negative prompts.

use promptflow_domain::{
    ProcessedPrompts, PromptData, PromptRequest, ResolutionWarning, SelectionPolicy,
};
use tracing::{debug, warn};

use crate::ApplicationResult;
use crate::choice_resolver::{ChoiceResolver, normalize};
use crate::ports::OptionLookup;

/// Input for composing a prompt.
#[derive(Debug, Clone, Default)]
pub struct ComposePromptInput {
    /// Field contents and policies.
    pub request: PromptRequest,
    /// Seed shared by every field.
    pub seed: u64,
    /// Trigger words placed first in the positive prompt.
    pub trigger_words: String,
    /// Upstream prompt placed after the trigger words.
    pub input_prompt: String,
}

impl ComposePromptInput {
    /// Creates an input with no prefixes.
    #[must_use]
    pub fn new(request: PromptRequest, seed: u64) -> Self {
        Self {
            request,
            seed,
            ..Self::default()
        }
    }

    /// Creates an input from a raw request payload.
    ///
    /// Invalid JSON or a non-object root is logged and replaced by the
    /// default request. Fields of the wrong type fall back individually.
    #[must_use]
    pub fn from_payload(payload: &str, seed: u64) -> Self {
        let request = PromptRequest::from_json(payload).unwrap_or_else(|err| {
            warn!(%err, "discarding malformed prompt request");
            PromptRequest::default()
        });
        Self::new(request, seed)
    }

    /// Sets the trigger words.
    #[must_use]
    pub fn with_trigger_words(mut self, trigger_words: impl Into<String>) -> Self {
        self.trigger_words = trigger_words.into();
        self
    }

    /// Sets the upstream prompt.
    #[must_use]
    pub fn with_input_prompt(mut self, input_prompt: impl Into<String>) -> Self {
        self.input_prompt = input_prompt.into();
        self
    }
}

/// Output of prompt composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposePromptOutput {
    /// Final positive prompt.
    pub positive: String,
    /// Final negative prompt.
    pub negative: String,
    /// Pretty-printed composition state for downstream nodes.
    pub prompt_data: String,
    /// Named choices left unresolved across all fields.
    pub warnings: Vec<ResolutionWarning>,
}

/// Use case for turning a prompt request into final prompts.
pub struct ComposePrompt<'a, L: ?Sized> {
    resolver: ChoiceResolver<'a, L>,
}

impl<'a, L: OptionLookup + ?Sized> ComposePrompt<'a, L> {
    /// Creates a new `ComposePrompt` use case.
    #[must_use]
    pub const fn new(lookup: &'a L) -> Self {
        Self {
            resolver: ChoiceResolver::new(lookup),
        }
    }

    /// Resolves each field in order and assembles the prompts.
    ///
    /// Every field is resolved independently with its own policy and the
    /// shared seed. Empty fields and empty results are skipped. The negative
    /// prompt always uses the fixed policy.
    ///
    /// # Errors
    /// Returns an error if the composition state cannot be serialized.
    pub fn execute(&self, input: &ComposePromptInput) -> ApplicationResult<ComposePromptOutput> {
        let mut warnings = Vec::new();
        let mut field_parts = Vec::new();

        for (field, content) in input.request.ordered_fields() {
            let value = content.value.trim();
            if value.is_empty() {
                continue;
            }

            debug!(field, policy = %content.mode, "resolving field");
            let result = self.resolver.resolve(value, content.mode, input.seed);
            warnings.extend(result.warnings);

            if !result.resolved.trim().is_empty() {
                field_parts.push(result.resolved);
            }
        }

        let mut positive_parts = Vec::new();
        for prefix in [&input.trigger_words, &input.input_prompt] {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                positive_parts.push(prefix.to_string());
            }
        }
        if !field_parts.is_empty() {
            positive_parts.push(field_parts.join(", "));
        }

        let negative = self.resolver.resolve(
            input.request.negative.trim(),
            SelectionPolicy::Fixed,
            input.seed,
        );
        warnings.extend(negative.warnings);

        let processed = ProcessedPrompts {
            positive: normalize(&positive_parts.join(", ")),
            negative: normalize(&negative.resolved),
        };

        let prompt_data = serde_json::to_string_pretty(&PromptData {
            mode: &input.request.mode,
            categories: &input.request.categories,
            negative: &processed.negative,
            seed: input.seed,
            processed: &processed,
        })?;

        debug!(
            fields = field_parts.len(),
            unresolved = warnings.len(),
            "composed prompt"
        );

        Ok(ComposePromptOutput {
            positive: processed.positive,
            negative: processed.negative,
            prompt_data,
            warnings,
        })
    }
}
