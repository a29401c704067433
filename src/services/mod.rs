// Service exports
pub mod llm;

pub use llm::{LlmClient, LlmError, CompletionOptions};
