//! The fallback orchestrator.
//!
//! `generate` is total apart from one exit: an empty prompt. Everything else
//! degrades - providers that fail fall through to the next stage, the last
//! stage is a deterministic local responder, and a panic anywhere inside the
//! chain is absorbed and answered with the local responder (or, failing even
//! that, a static answer).

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::classifier;
use crate::config::Config;
use crate::error::{CodeMentorError, Result};
use crate::models::{GenerationResult, Source};
use crate::providers::{GroqProvider, HuggingFaceProvider, OpenAiProvider, Provider};
use crate::templates;

pub struct GenerationService {
    /// Attempted strictly in order; position is priority.
    providers: Vec<Arc<dyn Provider>>,
}

impl GenerationService {
    /// Build the standard chain: Groq, then Hugging Face, then OpenAI.
    pub fn new(cfg: &Config) -> Self {
        let providers: Vec<Arc<dyn Provider>> = vec![
            Arc::new(GroqProvider::new(&cfg.groq)),
            Arc::new(HuggingFaceProvider::new(&cfg.huggingface)),
            Arc::new(OpenAiProvider::new(&cfg.openai)),
        ];
        Self { providers }
    }

    /// Build a service over an explicit, already-ordered set of adapters.
    pub fn with_providers(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Answer `raw_prompt`.
    ///
    /// The only error this ever returns is for an empty or whitespace-only
    /// prompt. Every other outcome is a `GenerationResult` with non-empty
    /// text and the source tag of the stage that produced it.
    pub async fn generate(&self, raw_prompt: &str) -> Result<GenerationResult> {
        let prompt = raw_prompt.trim();
        if prompt.is_empty() {
            return Err(CodeMentorError::validation("Please provide a valid prompt"));
        }

        let result = AssertUnwindSafe(self.run_chain(prompt))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                tracing::error!("generation chain panicked, recovering with local responder");
                Self::recover(prompt)
            });

        Ok(result)
    }

    async fn run_chain(&self, prompt: &str) -> GenerationResult {
        if !classifier::is_development_related(prompt) {
            tracing::info!("prompt is not development related, redirecting");
            return GenerationResult {
                text: templates::non_dev_redirect().to_string(),
                source: Source::TemplateFallback,
            };
        }

        for provider in &self.providers {
            if let Some(text) = provider.complete(prompt).await {
                tracing::info!(provider = provider.name(), "provider answered");
                return GenerationResult {
                    text,
                    source: provider.source(),
                };
            }
        }

        tracing::info!("all providers unavailable, using local responder");
        GenerationResult {
            text: templates::respond(classifier::classify_topic(prompt)).to_string(),
            source: Source::TemplateFallback,
        }
    }

    /// Recovery path for a panicking chain. The local responder is pure, but
    /// the answer path must hold even if it blows up, so it runs under its
    /// own boundary with a static answer behind it.
    fn recover(prompt: &str) -> GenerationResult {
        std::panic::catch_unwind(AssertUnwindSafe(|| GenerationResult {
            text: templates::respond(classifier::classify_topic(prompt)).to_string(),
            source: Source::TemplateFallback,
        }))
        .unwrap_or_else(|_| GenerationResult {
            text: templates::ultimate_fallback().to_string(),
            source: Source::EmergencyFallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned provider that records how often it was consulted.
    struct StaticProvider {
        name: &'static str,
        source: Source,
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StaticProvider {
        fn new(name: &'static str, source: Source, reply: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                name,
                source,
                reply,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Provider for StaticProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn source(&self) -> Source {
            self.source
        }

        async fn complete(&self, _prompt: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.map(str::to_string)
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl Provider for PanickingProvider {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn source(&self) -> Source {
            Source::Groq
        }

        async fn complete(&self, _prompt: &str) -> Option<String> {
            panic!("upstream adapter blew up");
        }
    }

    #[tokio::test]
    async fn first_successful_provider_wins() {
        let first = StaticProvider::new("groq", Source::Groq, Some("answer from groq"));
        let second = StaticProvider::new("openai", Source::Openai, Some("answer from openai"));
        let service =
            GenerationService::with_providers(vec![first.clone(), second.clone()]);

        let result = service.generate("implement a hash map").await.unwrap();
        assert_eq!(result.source, Source::Groq);
        assert_eq!(result.text, "answer from groq");
        // the chain short-circuits: lower priority never consulted
        assert_eq!(second.call_count(), 0);
    }

    #[tokio::test]
    async fn unavailable_providers_fall_through_in_order() {
        let first = StaticProvider::new("groq", Source::Groq, None);
        let second = StaticProvider::new("huggingface", Source::Huggingface, Some("hf answer"));
        let service =
            GenerationService::with_providers(vec![first.clone(), second.clone()]);

        let result = service.generate("implement a hash map").await.unwrap();
        assert_eq!(result.source, Source::Huggingface);
        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 1);
    }

    #[tokio::test]
    async fn all_unavailable_falls_back_to_template() {
        let service = GenerationService::with_providers(vec![
            StaticProvider::new("groq", Source::Groq, None),
            StaticProvider::new("openai", Source::Openai, None),
        ]);

        let result = service
            .generate("implement a binary search tree")
            .await
            .unwrap();
        assert_eq!(result.source, Source::TemplateFallback);
        assert!(result.text.contains("```javascript"));
    }

    #[tokio::test]
    async fn no_providers_configured_still_answers() {
        let service = GenerationService::with_providers(Vec::new());
        let result = service.generate("Explain quicksort").await.unwrap();
        assert_eq!(result.source, Source::TemplateFallback);
        assert!(result.text.contains("QuickSort"));
        assert!(result.text.matches("```javascript").count() >= 2);
    }

    #[tokio::test]
    async fn non_development_prompts_never_touch_a_provider() {
        let provider = StaticProvider::new("groq", Source::Groq, Some("should not appear"));
        let service = GenerationService::with_providers(vec![provider.clone()]);

        let result = service.generate("what's the weather today").await.unwrap();
        assert_eq!(result.source, Source::TemplateFallback);
        assert_eq!(result.text, templates::non_dev_redirect());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_and_whitespace_prompts_are_the_only_errors() {
        let service = GenerationService::with_providers(Vec::new());
        assert!(service.generate("").await.is_err());
        assert!(service.generate("   \n\t ").await.is_err());
    }

    #[tokio::test]
    async fn odd_inputs_still_produce_non_empty_answers() {
        let service = GenerationService::with_providers(Vec::new());
        let very_long = "code ".repeat(10_000);
        let inputs = ["日本語で説明して", "🚀🚀🚀", very_long.as_str()];
        for input in inputs {
            let result = service.generate(input).await.unwrap();
            assert!(!result.text.is_empty());
        }
    }

    #[tokio::test]
    async fn panicking_adapter_degrades_to_template() {
        let service =
            GenerationService::with_providers(vec![Arc::new(PanickingProvider)]);
        let result = service.generate("Explain quicksort").await.unwrap();
        assert_eq!(result.source, Source::TemplateFallback);
        assert!(result.text.contains("QuickSort"));
    }

    #[tokio::test]
    async fn mocked_chain_reports_the_stage_that_answered() {
        let mut skipped = MockProvider::new();
        skipped.expect_complete().returning(|_| None);
        skipped.expect_source().never();
        skipped.expect_name().return_const("groq");

        let mut answering = MockProvider::new();
        answering
            .expect_complete()
            .returning(|_| Some("mocked answer".to_string()));
        answering.expect_source().return_const(Source::Openai);
        answering.expect_name().return_const("openai");

        let service = GenerationService::with_providers(vec![
            Arc::new(skipped),
            Arc::new(answering),
        ]);
        let result = service.generate("implement a queue").await.unwrap();
        assert_eq!(result.source, Source::Openai);
        assert_eq!(result.text, "mocked answer");
    }
}
