//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the template engine and the host.
//! The engine never performs I/O itself; anything it needs from outside is
//! injected through one of these traits.

mod option_lookup;

pub use option_lookup::{NoLookup, OptionLookup};
