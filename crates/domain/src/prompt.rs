//! Prompt request domain model
//!
//! The per-node payload a host hands over for prompt composition: which
//! fields exist, what each one contains and which policy resolves it.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::policy::SelectionPolicy;

/// Fields shown in simple mode.
pub const SIMPLE_FIELDS: [&str; 3] = ["main_prompt", "style", "quality"];

/// Fields shown in extended mode, ordered by prompt importance.
pub const EXTENDED_FIELDS: [&str; 10] = [
    "subject",
    "character",
    "outfit",
    "pose",
    "location",
    "style",
    "camera",
    "lighting",
    "quality",
    "custom",
];

/// Field layout of a prompt request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    /// Three fields.
    #[default]
    Simple,
    /// Ten fields.
    Extended,
}

impl PromptMode {
    /// Default field order for this mode.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Simple => &SIMPLE_FIELDS,
            Self::Extended => &EXTENDED_FIELDS,
        }
    }

    /// Lowercase name as used in host payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Extended => "extended",
        }
    }

    /// Layout for a raw payload mode. Anything but `"simple"` is extended.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if value.as_str() == Some("simple") {
            Self::Simple
        } else {
            Self::Extended
        }
    }
}

/// Content and policy of one prompt field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInput {
    /// Raw template text. Non-string values read as empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,

    /// Policy used to resolve this field. Non-string values read as fixed.
    #[serde(default, deserialize_with = "lenient_policy")]
    pub mode: SelectionPolicy,

    /// Host-specific keys carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldInput {
    /// Creates a field with the given text and policy.
    #[must_use]
    pub fn new(value: impl Into<String>, mode: SelectionPolicy) -> Self {
        Self {
            value: value.into(),
            mode,
            extra: Map::new(),
        }
    }
}

/// A complete prompt composition request.
///
/// Parsing is lenient below the root object: a field or key of the wrong
/// type falls back to its default instead of rejecting the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Mode exactly as sent by the host; see [`PromptRequest::layout`].
    #[serde(default = "default_mode")]
    pub mode: Value,

    /// Field contents keyed by field name, in payload order.
    #[serde(default, deserialize_with = "lenient_categories")]
    pub categories: IndexMap<String, FieldInput>,

    /// Explicit field order; defaults to the layout of `mode`.
    #[serde(
        default,
        rename = "categoryOrder",
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_order: Option<Vec<String>>,

    /// Negative prompt template.
    #[serde(default, deserialize_with = "lenient_string")]
    pub negative: String,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self::new(PromptMode::Simple)
    }
}

impl PromptRequest {
    /// Creates an empty request in the given mode.
    #[must_use]
    pub fn new(mode: PromptMode) -> Self {
        Self {
            mode: Value::from(mode.as_str()),
            categories: IndexMap::new(),
            category_order: None,
            negative: String::new(),
        }
    }

    /// Field layout selected by `mode`.
    #[must_use]
    pub fn layout(&self) -> PromptMode {
        PromptMode::from_value(&self.mode)
    }

    /// Parses a request payload. Blank input yields the default request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the payload is not valid JSON
    /// or its root is not an object.
    pub fn from_json(payload: &str) -> DomainResult<Self> {
        if payload.trim().is_empty() {
            return Ok(Self::default());
        }
        let root: Value =
            serde_json::from_str(payload).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        if !root.is_object() {
            return Err(DomainError::InvalidInput(
                "prompt request must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(root).map_err(|e| DomainError::InvalidInput(e.to_string()))
    }

    /// Parses a request payload, falling back to the default request on any error.
    #[must_use]
    pub fn from_json_lossy(payload: &str) -> Self {
        Self::from_json(payload).unwrap_or_default()
    }

    /// Adds or replaces a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field: FieldInput) -> Self {
        self.categories.insert(name.into(), field);
        self
    }

    /// Sets the negative prompt.
    #[must_use]
    pub fn with_negative(mut self, negative: impl Into<String>) -> Self {
        self.negative = negative.into();
        self
    }

    /// Sets an explicit field order.
    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Field names in resolution order.
    #[must_use]
    pub fn field_order(&self) -> Vec<&str> {
        self.category_order.as_ref().map_or_else(
            || self.layout().fields().to_vec(),
            |order| order.iter().map(String::as_str).collect(),
        )
    }

    /// Fields present in the request, in resolution order.
    pub fn ordered_fields(&self) -> impl Iterator<Item = (&str, &FieldInput)> {
        self.field_order()
            .into_iter()
            .filter_map(move |name| self.categories.get_key_value(name))
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Returns true if any field, ordered or not, uses the random policy.
    #[must_use]
    pub fn has_random_field(&self) -> bool {
        self.categories.values().any(|field| field.mode.is_random())
    }
}

fn default_mode() -> Value {
    Value::from(PromptMode::Simple.as_str())
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

fn lenient_policy<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<SelectionPolicy, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_str()
        .map_or(SelectionPolicy::Fixed, SelectionPolicy::from_name))
}

fn lenient_order<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_categories<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, FieldInput>, D::Error> {
    let Value::Object(fields) = Value::deserialize(deserializer)? else {
        return Ok(IndexMap::new());
    };
    Ok(fields
        .into_iter()
        .filter_map(|(name, field)| match field {
            Value::Object(_) => serde_json::from_value(field).ok().map(|input| (name, input)),
            _ => None,
        })
        .collect())
}

/// Resolved prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedPrompts {
    /// Final positive prompt.
    pub positive: String,
    /// Final negative prompt.
    pub negative: String,
}

/// Full composition state handed downstream for debugging and chaining.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptData<'a> {
    /// Mode as sent by the host.
    pub mode: &'a Value,
    /// Field contents as received.
    pub categories: &'a IndexMap<String, FieldInput>,
    /// Resolved negative prompt.
    pub negative: &'a str,
    /// Seed shared by all fields.
    pub seed: u64,
    /// Resolved prompts.
    pub processed: &'a ProcessedPrompts,
}
