use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::SkipReason,
};

/// A text-completion backend: one prompt in, one reply out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible endpoint (Groq by default).
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.completion_api_base.as_str())
            .with_api_key(config.completion_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.completion_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let reply: ChatCompletionReply = self.client.chat().create_byot(request).await?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("Completion returned no choices".to_string()))?;

        Ok(choice
            .message
            .content
            .map(|content| content.trim().to_string())
            .unwrap_or_default())
    }
}

/// Calls the client once, bounded by `timeout`.
///
/// Every failure is turned into a [`SkipReason`] so that callers can drop the
/// chunk and move on.
pub async fn request_completion(
    client: &dyn CompletionClient,
    prompt: &str,
    timeout: Duration,
) -> Result<String, SkipReason> {
    match tokio::time::timeout(timeout, client.complete(prompt)).await {
        Err(_) => Err(SkipReason::TimedOut),
        Ok(Err(err)) => Err(SkipReason::CompletionFailed(err.to_string())),
        Ok(Ok(reply)) => {
            let reply = reply.trim();
            if reply.is_empty() {
                Err(SkipReason::EmptyCompletion)
            } else {
                Ok(reply.to_string())
            }
        }
    }
}
