//! Application use cases (prompt composition and preview orchestration).

mod cache_key;
mod compose_prompt;
mod preview_variations;

pub use cache_key::*;
pub use compose_prompt::*;
pub use preview_variations::*;
