//! Natural-language intake: prompt construction, model response parsing, and
//! the language model client used to turn free text into entry operations.

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{GeminiClient, LlmClient};
pub use prompt::build_prompt;
pub use response::{interpret_item, parse_operations, IntakeOperation, ItemInterpretation};
