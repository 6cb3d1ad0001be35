//! Multi-turn chat sessions

use std::sync::Arc;

use crate::error::Result;
use crate::generation::RequestBuilder;
use crate::providers::InferenceProvider;
use crate::types::{Content, GenerationConfig};

/// A conversation that carries its own history between turns
pub struct ChatSession {
    inference: Arc<dyn InferenceProvider>,
    config: GenerationConfig,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(
        inference: Arc<dyn InferenceProvider>,
        config: GenerationConfig,
        history: Vec<Content>,
    ) -> Self {
        Self {
            inference,
            config,
            history,
        }
    }

    /// Send a user message and return the model's reply
    ///
    /// History only grows when the exchange succeeds, so a failed turn can be
    /// retried without duplicating the message.
    pub async fn send(&mut self, message: &str) -> Result<String> {
        let request = RequestBuilder::build_chat(&self.history, message);
        let reply = self.inference.generate(&request, &self.config).await?;

        self.history.push(Content::user_text(message));
        self.history.push(Content::model_text(reply.clone()));
        tracing::debug!("Chat history now holds {} turns", self.history.len());
        Ok(reply)
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{InferenceRequest, Role};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the turn count; fails on messages containing "fail"
    struct EchoInference {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl InferenceProvider for EchoInference {
        async fn generate(
            &self,
            request: &InferenceRequest,
            _config: &GenerationConfig,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let texts = request.text_parts();
            let last = texts.last().copied().unwrap_or_default();
            if last.contains("fail") {
                return Err(Error::inference("refused"));
            }
            Ok(format!("reply to {} after {} turns", last, request.len() - 1))
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }
    }

    fn session(history: Vec<Content>) -> ChatSession {
        let inference = Arc::new(EchoInference {
            calls: AtomicUsize::new(0),
        });
        ChatSession::new(inference, GenerationConfig::default(), history)
    }

    #[tokio::test]
    async fn test_send_records_both_turns() {
        let mut chat = session(Vec::new());

        assert_eq!(chat.send("hi").await.unwrap(), "reply to hi after 0 turns");
        assert_eq!(chat.send("again").await.unwrap(), "reply to again after 2 turns");

        let roles: Vec<Role> = chat.history().iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_history_untouched() {
        let mut chat = session(vec![Content::user_text("seed"), Content::model_text("ok")]);

        assert!(chat.send("please fail").await.is_err());
        assert_eq!(chat.history().len(), 2);
    }
}
