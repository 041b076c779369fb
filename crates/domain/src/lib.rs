//! PromptFlow Domain - Core template types
//!
//! This crate defines the data model of the PromptFlow template engine:
//! choice points, selection policies, variation reports and the prompt
//! request payload. All types here are pure Rust with no I/O dependencies.

pub mod cache;
pub mod choice;
pub mod error;
pub mod library;
pub mod policy;
pub mod prompt;
pub mod variation;

pub use cache::CacheKey;
pub use choice::{
    ChoiceKind, ChoicePoint, ChoiceSelection, ResolutionWarning, is_valid_choice_name,
};
pub use error::{DomainError, DomainResult};
pub use library::{OptionLibrary, OptionLists, OptionSource};
pub use policy::SelectionPolicy;
pub use prompt::{
    EXTENDED_FIELDS, FieldInput, ProcessedPrompts, PromptData, PromptMode, PromptRequest,
    SIMPLE_FIELDS,
};
pub use variation::{ChoicePointSummary, VariationReport};
