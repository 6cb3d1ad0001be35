//! Inference request building and prompt templates

pub mod prompt;
pub mod request;

pub use prompt::PromptBuilder;
pub use request::RequestBuilder;
