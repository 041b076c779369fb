//! Choice resolution module
//!
//! Provides parsing, resolution and analysis of `{a|b|c}` and `__name__`
//! choice points in prompt templates.
//!
//! # Usage
//!
//! ```
//! use promptflow_application::choice_resolver::{ChoiceResolver, analyze, normalize};
//! use promptflow_domain::{OptionLibrary, OptionSource, SelectionPolicy};
//!
//! let source = OptionSource::new("user").with_list("hair", ["red", "black"]).unwrap();
//! let library = OptionLibrary::new().with_source(source);
//!
//! let resolver = ChoiceResolver::new(&library);
//! let result = resolver.resolve("__hair__ hair, {smiling|serious}", SelectionPolicy::Fixed, 0);
//! assert_eq!(result.resolved, "red hair, smiling");
//!
//! assert_eq!(analyze("{a|b} and __hair__").total_variations, 2);
//! assert_eq!(normalize("a,, b ,"), "a, b");
//! ```

pub mod analyzer;
pub mod combinations;
pub mod context;
pub mod engine;
pub mod normalizer;
pub mod parser;

pub use analyzer::analyze;
pub use combinations::{DEFAULT_COMBINATION_LIMIT, enumerate_combinations};
pub use context::ResolutionContext;
pub use engine::{ChoiceResolver, ResolutionResult, resolve};
pub use normalizer::normalize;
pub use parser::{
    extract_choice_names, has_choice_points, is_valid_choice_name, parse_choice_points,
    parse_inline_choices, parse_inline_choices_outside, parse_named_choices, split_options,
};
