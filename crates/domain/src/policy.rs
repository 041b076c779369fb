//! Selection policies
//!
//! A policy decides which option a choice point resolves to. One policy
//! applies to every choice point in a single resolution pass.

use serde::{Deserialize, Serialize};

/// Rule for picking one option out of a choice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SelectionPolicy {
    /// Always the first option.
    #[default]
    Fixed,
    /// Seeded pseudo-random pick.
    Random,
    /// `(seed + index) mod len`.
    Increment,
    /// Mirror of increment, counting down from the last option.
    Decrement,
}

impl SelectionPolicy {
    /// All policies in display order.
    pub const ALL: [Self; 4] = [Self::Fixed, Self::Random, Self::Increment, Self::Decrement];

    /// Parses a policy name. Unknown names fall back to [`SelectionPolicy::Fixed`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Self::Random,
            "increment" => Self::Increment,
            "decrement" => Self::Decrement,
            _ => Self::Fixed,
        }
    }

    /// Lowercase name as used in host payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Random => "random",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }

    /// Returns true if the output can change without any input changing.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Random)
    }
}

impl From<String> for SelectionPolicy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_name() {
        assert_eq!(SelectionPolicy::from_name("random"), SelectionPolicy::Random);
        assert_eq!(SelectionPolicy::from_name("Increment"), SelectionPolicy::Increment);
        assert_eq!(SelectionPolicy::from_name(" decrement "), SelectionPolicy::Decrement);
        assert_eq!(SelectionPolicy::from_name("fixed"), SelectionPolicy::Fixed);
    }

    #[test]
    fn test_unknown_name_is_fixed() {
        assert_eq!(SelectionPolicy::from_name("shuffle"), SelectionPolicy::Fixed);
        assert_eq!(SelectionPolicy::from_name(""), SelectionPolicy::Fixed);
    }

    #[test]
    fn test_serde_roundtrip_names() {
        for policy in SelectionPolicy::ALL {
            let json = serde_json::to_string(&policy).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
            let back: SelectionPolicy =
                serde_json::from_str(&json).unwrap_or(SelectionPolicy::Fixed);
            assert_eq!(back, policy);
        }
    }

    #[test]
    fn test_deserialize_unknown_is_fixed() {
        let policy: Result<SelectionPolicy, _> = serde_json::from_str("\"sometimes\"");
        assert_eq!(policy.ok(), Some(SelectionPolicy::Fixed));
    }

    #[test]
    fn test_only_random_is_random() {
        assert!(SelectionPolicy::Random.is_random());
        assert!(!SelectionPolicy::Fixed.is_random());
        assert!(!SelectionPolicy::Increment.is_random());
    }
}
