//! Named option list lookup port

use promptflow_domain::OptionLibrary;

/// Port for fetching the option list behind a `__name__` choice point.
///
/// Implementations may search several sources and may perform I/O; the
/// resolver only sees the final list or its absence. An empty list is
/// treated the same as a missing one.
pub trait OptionLookup {
    /// Returns the options for `name`, or `None` if no list exists.
    fn resolve_named(&self, name: &str) -> Option<Vec<String>>;
}

impl<F> OptionLookup for F
where
    F: Fn(&str) -> Option<Vec<String>>,
{
    fn resolve_named(&self, name: &str) -> Option<Vec<String>> {
        self(name)
    }
}

impl OptionLookup for OptionLibrary {
    fn resolve_named(&self, name: &str) -> Option<Vec<String>> {
        self.lookup(name).map(<[String]>::to_vec)
    }
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl OptionLookup for NoLookup {
    fn resolve_named(&self, _name: &str) -> Option<Vec<String>> {
        None
    }
}
