//! PromptFlow Application - Template engine and use cases
//!
//! This crate defines the application layer with:
//! - The choice resolution engine (resolver, analyzer, normalizer)
//! - Port traits (interfaces for host-provided capabilities)
//! - Use case orchestration
//! - Application-level error handling

pub mod choice_resolver;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use choice_resolver::{ChoiceResolver, ResolutionResult, analyze, normalize, resolve};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{NoLookup, OptionLookup};
pub use use_cases::{
    ComposePrompt, ComposePromptInput, ComposePromptOutput, PreviewVariations,
    PreviewVariationsOutput, compose_cache_key, preview_cache_key,
};
