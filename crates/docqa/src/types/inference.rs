//! Inference request types
//!
//! `Content` and `Part` serialize to the Gemini `contents` wire format.
//! `InferenceRequest` keeps the order in which the builder laid out entries,
//! including the single-document shortcut whose bytes stay raw until the
//! request is lowered for transport.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// One document's content, ready to attach to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl FilePart {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

/// Author of a content turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// Base64 payload tagged with its MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// A single part of a content turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Text(String),
    InlineData(InlineData),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Attach bytes, base64-encoding them
    pub fn inline(mime_type: impl Into<String>, data: &[u8]) -> Self {
        Self::InlineData(InlineData {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(data),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::InlineData(_) => None,
        }
    }
}

/// A role-tagged content turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    pub fn user_text(text: impl Into<String>) -> Self {
        Self::user(vec![Part::text(text)])
    }

    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }
}

/// Raw document bytes for the single-document shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentData {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One entry of an inference request, in dispatch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEntry {
    /// Fully formed content turn
    Content(Content),
    /// Unwrapped document data
    Document(DocumentData),
    /// Bare instruction text
    Text(String),
}

/// Ordered request for the inference engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceRequest {
    entries: Vec<RequestEntry>,
}

impl InferenceRequest {
    pub fn new(entries: Vec<RequestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RequestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All text carried by the request, in order
    pub fn text_parts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        for entry in &self.entries {
            match entry {
                RequestEntry::Content(content) => {
                    texts.extend(content.parts.iter().filter_map(Part::as_text));
                }
                RequestEntry::Text(text) => texts.push(text.as_str()),
                RequestEntry::Document(_) => {}
            }
        }
        texts
    }

    /// Lower the request into wire `contents`
    ///
    /// Consecutive bare entries (documents and text) are gathered into a
    /// single user turn, documents base64-encoded as JSON requires.
    pub fn to_contents(&self) -> Vec<Content> {
        let mut contents = Vec::with_capacity(self.entries.len());
        let mut loose: Vec<Part> = Vec::new();

        for entry in &self.entries {
            match entry {
                RequestEntry::Content(content) => {
                    if !loose.is_empty() {
                        contents.push(Content::user(std::mem::take(&mut loose)));
                    }
                    contents.push(content.clone());
                }
                RequestEntry::Document(doc) => loose.push(Part::inline(&doc.mime_type, &doc.data)),
                RequestEntry::Text(text) => loose.push(Part::text(text.clone())),
            }
        }
        if !loose.is_empty() {
            contents.push(Content::user(loose));
        }

        contents
    }
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn with_temperature(self, temperature: f32) -> Self {
        Self {
            temperature,
            ..self
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 4000,
        }
    }
}

impl From<&crate::config::InferenceConfig> for GenerationConfig {
    fn from(config: &crate::config::InferenceConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}
