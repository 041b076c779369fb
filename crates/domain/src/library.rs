//! Named option lists
//!
//! Holds the option lists referenced by `__name__` choice points, grouped
//! into sources with precedence (highest wins):
//! 1. Sources added first (e.g. user lists)
//! 2. Sources added later (e.g. bundled lists)
//!
//! A source whose list for a name is empty does not shadow lower sources.

use std::collections::HashMap;

use crate::choice::is_valid_choice_name;
use crate::error::{DomainError, DomainResult};

/// Option lists keyed by name.
pub type OptionLists = HashMap<String, Vec<String>>;

/// A named group of option lists, e.g. one wildcard directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSource {
    /// Source label, for diagnostics.
    pub label: String,
    /// The lists this source provides.
    pub lists: OptionLists,
}

impl OptionSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lists: OptionLists::new(),
        }
    }

    /// Adds or replaces a list.
    ///
    /// Blank options are dropped and the rest are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidChoiceName`] if `name` could never be
    /// referenced from a template.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, options: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if !is_valid_choice_name(&name) {
            return Err(DomainError::InvalidChoiceName(name));
        }

        let options = options
            .into_iter()
            .map(|o| o.as_ref().trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        self.lists.insert(name, options);
        Ok(())
    }

    /// Builder form of [`OptionSource::insert`].
    ///
    /// # Errors
    ///
    /// See [`OptionSource::insert`].
    pub fn with_list<I, S>(mut self, name: impl Into<String>, options: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(name, options)?;
        Ok(self)
    }

    /// Returns the list for `name` if present and non-empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.lists
            .get(name)
            .map(Vec::as_slice)
            .filter(|options| !options.is_empty())
    }
}

/// Prioritized collection of option sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionLibrary {
    sources: Vec<OptionSource>,
}

impl OptionLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source below all existing ones.
    pub fn push_source(&mut self, source: OptionSource) {
        self.sources.push(source);
    }

    /// Builder form of [`OptionLibrary::push_source`].
    #[must_use]
    pub fn with_source(mut self, source: OptionSource) -> Self {
        self.push_source(source);
        self
    }

    /// Looks up a list by name across all sources.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&[String]> {
        self.lookup_with_source(name).map(|(_, options)| options)
    }

    /// Looks up a list and reports which source provided it.
    #[must_use]
    pub fn lookup_with_source(&self, name: &str) -> Option<(&str, &[String])> {
        self.sources
            .iter()
            .find_map(|source| source.get(name).map(|opts| (source.label.as_str(), opts)))
    }
}
