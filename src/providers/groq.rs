use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{Provider, SYSTEM_PROMPT};
use crate::config::GroqConfig;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Source};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// First stage of the chain: Groq's OpenAI-compatible chat completions.
pub struct GroqProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    max_tokens: u32,
    temperature: f32,
}

impl GroqProvider {
    pub fn new(cfg: &GroqConfig) -> Self {
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
            .post(GROQ_API_URL)
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
impl Provider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn source(&self) -> Source {
        Source::Groq
    }

    async fn complete(&self, prompt: &str) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("GROQ_API_KEY not configured, skipping Groq");
            return None;
        };

        match self.request(api_key, prompt).await {
            Ok(Some(text)) => {
                tracing::info!("Groq answered ({} chars)", text.len());
                Some(text)
            }
            Ok(None) => {
                tracing::warn!("Groq response contained no content");
                None
            }
            Err(e) => {
                tracing::warn!("Groq failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_short_circuits_to_none() {
        let provider = GroqProvider::new(&GroqConfig {
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            timeout_seconds: 20,
            max_tokens: 2000,
            temperature: 0.7,
        });
        assert!(provider.complete("implement a stack").await.is_none());
    }

    #[tokio::test]
    async fn empty_credential_counts_as_missing() {
        let provider = GroqProvider::new(&GroqConfig {
            api_key: Some(String::new()),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout_seconds: 20,
            max_tokens: 2000,
            temperature: 0.7,
        });
        assert!(provider.complete("implement a stack").await.is_none());
    }
}
