//! Adapters for the upstream completion services.
//!
//! Every adapter follows the same absorbing contract: a missing credential,
//! transport error, timeout, error status, or unusable body all come back as
//! `None`. Failures never cross the adapter boundary; each outcome is logged
//! so operators can see which stage answered. A failed call is not retried -
//! the chain's next stage is the retry.

pub mod groq;
pub mod huggingface;
pub mod openai;

pub use groq::GroqProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;

use crate::models::Source;

/// System instruction sent to the chat-completion providers.
pub(crate) const SYSTEM_PROMPT: &str = "\
You are a friendly, expert programming tutor with a conversational style. \
Your goal is to help developers understand and solve problems effectively.

Response structure:
1. Brief intro - acknowledge the question and give context (1-2 sentences)
2. Main explanation - explain the concept or approach clearly
3. Code example - clean, well-commented code in markdown blocks with a language tag
4. Key points - important takeaways or common pitfalls
5. Optional next steps - what to explore next

Tone: friendly but professional, encouraging without being condescending, \
clear and concise. Always use proper markdown code blocks with language \
specification and show expected output when relevant. You're having a \
helpful conversation, not writing a textbook.";

/// A single upstream completion service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Tag applied to results this provider produces.
    fn source(&self) -> Source;

    /// Ask the service to answer `prompt`.
    ///
    /// `None` means unavailable for any reason; the text, when present, is
    /// returned exactly as the service produced it.
    async fn complete(&self, prompt: &str) -> Option<String>;
}
