//! Prompt templates for text-only queries

/// Prompt builder for text content queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Inline already-extracted file text ahead of the query
    pub fn build_content_prompt(content: &str, query: &str) -> String {
        format!("Content: {}\n\nQuery: {}", content, query)
    }
}
