use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::Provider;
use crate::config::HuggingFaceConfig;
use crate::models::{InferenceParameters, InferenceRequest, InferenceResponse, Source};

const HF_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Second stage of the chain: Hugging Face's hosted inference API. Unlike
/// the chat providers this takes a single instruction-wrapped string.
pub struct HuggingFaceProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    max_new_tokens: u32,
    temperature: f32,
}

impl HuggingFaceProvider {
    pub fn new(cfg: &HuggingFaceConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            model: cfg.model.clone(),
            timeout: Duration::from_secs(cfg.timeout_seconds),
            max_new_tokens: cfg.max_new_tokens,
            temperature: cfg.temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{HF_API_BASE}/{}", self.model)
    }

    fn build_inputs(prompt: &str) -> String {
        format!(
            "<s>[INST] You are a friendly programming tutor having a helpful \
conversation with a developer. Be conversational and natural, explain clearly \
with context and examples, use markdown code blocks with proper syntax \
highlighting, and end with key takeaways or next steps.

User question: {prompt}

Respond in a friendly, conversational way with clear code examples. [/INST]"
        )
    }

    async fn request(&self, api_key: &str, prompt: &str) -> reqwest::Result<Option<String>> {
        let body = InferenceRequest {
            inputs: Self::build_inputs(prompt),
            parameters: InferenceParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: InferenceResponse = response.json().await?;
        Ok(parsed.into_text().filter(|text| !text.is_empty()))
    }
}

#[async_trait]
impl Provider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn source(&self) -> Source {
        Source::Huggingface
    }

    async fn complete(&self, prompt: &str) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("HF_API_KEY not configured, skipping Hugging Face");
            return None;
        };

        match self.request(api_key, prompt).await {
            Ok(Some(text)) => {
                tracing::info!("Hugging Face answered ({} chars)", text.len());
                Some(text)
            }
            Ok(None) => {
                tracing::warn!("Hugging Face response contained no generated text");
                None
            }
            Err(e) => {
                tracing::warn!("Hugging Face failed: {e}");
                None
            }
        }
    }
}
