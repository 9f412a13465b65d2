use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{Provider, SYSTEM_PROMPT};
use crate::config::OpenAiConfig;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Source};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Last upstream stage of the chain: OpenAI chat completions.
pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(cfg: &OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            model: cfg.model.clone(),
            timeout: Duration::from_secs(cfg.timeout_seconds),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
        }
    }

    async fn request(&self, api_key: &str, prompt: &str) -> reqwest::Result<Option<String>> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatCompletionResponse = response.json().await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|text| !text.is_empty()))
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn source(&self) -> Source {
        Source::Openai
    }

    async fn complete(&self, prompt: &str) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("OPENAI_API_KEY not configured, skipping OpenAI");
            return None;
        };

        match self.request(api_key, prompt).await {
            Ok(Some(text)) => {
                tracing::info!("OpenAI answered ({} chars)", text.len());
                Some(text)
            }
            Ok(None) => {
                tracing::warn!("OpenAI response contained no content");
                None
            }
            Err(e) => {
                tracing::warn!("OpenAI failed: {e}");
                None
            }
        }
    }
}
