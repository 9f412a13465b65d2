use serde::{Deserialize, Serialize};

/// Which stage of the fallback chain produced a response.
///
/// Serialized snake_case into the `source` field of the generate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Groq,
    Huggingface,
    Openai,
    TemplateFallback,
    EmergencyFallback,
}

impl Source {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Source::Groq => "groq",
            Source::Huggingface => "huggingface",
            Source::Openai => "openai",
            Source::TemplateFallback => "template_fallback",
            Source::EmergencyFallback => "emergency_fallback",
        }
    }
}

/// Output of the generation chain.
///
/// `text` is never empty; `source` names the stage that actually produced it,
/// never one that was merely attempted.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub source: Source,
}

/// Request body for POST /api/code/generate.
///
/// `prompt` is optional so a missing field reports through the same
/// validation path as an empty one.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

/// Success body for POST /api/code/generate.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub code: String,
    pub source: Source,
}

/// Error body for POST /api/code/generate (validation failures only).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

// Chat message format shared by the OpenAI-compatible providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Chat completion request format (Groq and OpenAI share this wire shape)
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

// Chat completion response format
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

// Hugging Face text-generation inference request
#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

/// Hugging Face inference responses arrive either as a bare object or as a
/// one-element array depending on the model pipeline.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: Option<String>,
}

impl InferenceResponse {
    /// Pull the generated text out of whichever shape arrived.
    pub fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Single(g) => g.generated_text,
            InferenceResponse::Batch(batch) => {
                batch.into_iter().next().and_then(|g| g.generated_text)
            }
        }
    }
}
