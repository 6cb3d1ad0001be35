//! Inference request assembly
//!
//! Attachments always precede the question, and every request carries at
//! least one text part.

use crate::types::{Content, DocumentData, FilePart, InferenceRequest, Part, RequestEntry};

use super::prompt::PromptBuilder;

/// MIME type of the single-document shortcut
const PDF_MIME: &str = "application/pdf";

/// Builds [`InferenceRequest`]s for each query shape
pub struct RequestBuilder;

impl RequestBuilder {
    /// Multi-file request: one user turn per file, then the question
    pub fn build(question: &str, file_parts: Vec<FilePart>) -> InferenceRequest {
        let mut entries: Vec<RequestEntry> = file_parts
            .into_iter()
            .map(|part| {
                RequestEntry::Content(Content::user(vec![Part::inline(part.mime_type, &part.data)]))
            })
            .collect();

        entries.push(RequestEntry::Content(Content::user_text(question)));
        InferenceRequest::new(entries)
    }

    /// Single-PDF shortcut: raw document followed by the bare question
    pub fn build_pdf(pdf: Vec<u8>, question: &str) -> InferenceRequest {
        InferenceRequest::new(vec![
            RequestEntry::Document(DocumentData {
                mime_type: PDF_MIME.to_string(),
                data: pdf,
            }),
            RequestEntry::Text(question.to_string()),
        ])
    }

    /// Text already extracted from a file, inlined into one prompt
    pub fn build_text(content: &str, question: &str) -> InferenceRequest {
        Self::build_prompt(&PromptBuilder::build_content_prompt(content, question))
    }

    /// Free-form prompt
    pub fn build_prompt(prompt: &str) -> InferenceRequest {
        InferenceRequest::new(vec![RequestEntry::Content(Content::user_text(prompt))])
    }

    /// Prior turns followed by a new user message
    pub fn build_chat(history: &[Content], message: &str) -> InferenceRequest {
        let mut entries: Vec<RequestEntry> =
            history.iter().cloned().map(RequestEntry::Content).collect();
        entries.push(RequestEntry::Content(Content::user_text(message)));
        InferenceRequest::new(entries)
    }
}
