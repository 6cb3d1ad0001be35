//! Gemini client for answer generation via the Generative Language API

use async_trait::async_trait;

use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use crate::providers::llm::InferenceProvider;
use crate::types::{Content, GenerationConfig, InferenceRequest};

/// Gemini client authenticated with an API key
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    /// * `api_key` - Generative Language API key
    /// * `model` - Model name (default: "gemini-2.0-flash-exp")
    /// * `base_url` - API root, without trailing slash
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        let defaults = InferenceConfig::default();
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or(defaults.model),
            base_url: base_url
                .unwrap_or(defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Create from configuration
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            Some(config.model.clone()),
            Some(config.base_url.clone()),
        )
    }

    /// Get the API endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationConfig,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(serde::Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(Error::inference(format!("Prompt blocked: {}", reason)));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::inference("No candidates in Gemini response"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(Error::inference(format!(
                "No text in Gemini response (finish reason: {})",
                reason
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl InferenceProvider for GeminiClient {
    async fn generate(
        &self,
        request: &InferenceRequest,
        config: &GenerationConfig,
    ) -> Result<String> {
        let body = GenerateRequest {
            contents: request.to_contents(),
            generation_config: config,
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::inference(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::inference(format!("Failed to parse Gemini response: {}", e)))?;

        gen_response.into_text()
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::RequestBuilder;
    use crate::types::FilePart;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            "test-key".to_string(),
            Some("gemini-test".to_string()),
            Some(format!("{}/", server.uri())),
        )
    }

    fn text_reply(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_sends_attachments_before_question() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{"inline_data": {"mime_type": "text/plain", "data": "aGVsbG8="}}]
                    },
                    {"role": "user", "parts": [{"text": "What does it say?"}]}
                ],
                "generationConfig": {"maxOutputTokens": 4000}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("It says hello.")))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestBuilder::build(
            "What does it say?",
            vec![FilePart::new(b"hello".to_vec(), "text/plain")],
        );
        let answer = client_for(&server)
            .generate(&request, &GenerationConfig::default())
            .await
            .unwrap();

        assert_eq!(answer, "It says hello.");
    }

    #[tokio::test]
    async fn test_joins_text_parts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]}
                }]
            })))
            .mount(&server)
            .await;

        let request = RequestBuilder::build("hi", Vec::new());
        let answer = client_for(&server)
            .generate(&request, &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(answer, "Hello, world");
    }

    #[tokio::test]
    async fn test_error_status_becomes_inference_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let request = RequestBuilder::build("hi", Vec::new());
        let err = client_for(&server)
            .generate(&request, &GenerationConfig::default())
            .await
            .unwrap_err();

        match err {
            Error::Inference(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("quota exceeded"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let request = RequestBuilder::build("hi", Vec::new());
        let err = client_for(&server)
            .generate(&request, &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_pdf_shortcut_is_one_user_turn() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "contents": [
                    {"role": "user", "parts": [
                        {"inline_data": {"mime_type": "application/pdf", "data": "JVBERg=="}},
                        {"text": "Summarize"}
                    ]}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("Summary")))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestBuilder::build_pdf(b"%PDF".to_vec(), "Summarize");
        let answer = client_for(&server)
            .generate(&request, &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(answer, "Summary");
    }
}
