//! Quiz orchestrator.
//!
//! Builds prompts, makes exactly one generation call per request, and hands
//! the text to the parsers. Scoring needs no generation at all.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::model::{AnswerTally, Axis, QuestionRecord, QuizSet};
use crate::parser::{parse_full_set, parse_single_question};
use crate::persona::PersonaRecord;
use crate::prompt::{full_set_prompt, single_question_prompt, DEFAULT_SYSTEM_PROMPT};
use crate::scoring::score;
use crate::traits::{GenerateRequest, LlmProvider};

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Temperature for generation.
    pub temperature: f64,
    /// Max tokens for generation.
    pub max_tokens: u32,
    /// Optional system prompt override.
    pub system_prompt_override: Option<String>,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            system_prompt_override: None,
        }
    }
}

/// The quiz orchestrator. Holds no per-request state and is shared freely
/// across tasks.
pub struct QuizEngine {
    provider: Arc<dyn LlmProvider>,
    config: QuizEngineConfig,
}

impl QuizEngine {
    pub fn new(provider: Arc<dyn LlmProvider>, config: QuizEngineConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn config(&self) -> &QuizEngineConfig {
        &self.config
    }

    /// Generate all twenty questions with one generation call.
    ///
    /// Only a failed generation call is an error; malformed text is repaired
    /// by the parser.
    pub async fn generate_quiz_set(&self) -> Result<QuizSet> {
        let text = self
            .call(full_set_prompt())
            .await
            .context("failed to generate quiz set")?;
        Ok(parse_full_set(&text))
    }

    /// Generate one question for a 1-based slot and axis.
    pub async fn generate_question(&self, number: usize, axis: Axis) -> Result<QuestionRecord> {
        let text = self
            .call(single_question_prompt(number, axis))
            .await
            .with_context(|| format!("failed to generate question {number} ({axis})"))?;
        Ok(parse_single_question(&text, axis))
    }

    /// Score a tally and look up its persona.
    pub fn compute_result(&self, tally: &AnswerTally) -> &'static PersonaRecord {
        let code = score(tally);
        tracing::debug!(%code, total = tally.total(), "scored tally");
        code.persona()
    }

    async fn call(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt,
            system_prompt: Some(
                self.config
                    .system_prompt_override
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            ),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let start = Instant::now();
        match self.provider.generate(&request).await {
            Ok(response) => {
                tracing::info!(
                    provider = self.provider.name(),
                    model = %response.model,
                    latency_ms = start.elapsed().as_millis() as u64,
                    completion_tokens = response.token_usage.completion_tokens,
                    "generation complete"
                );
                Ok(response.content)
            }
            Err(e) => {
                tracing::error!("generation failed via {}: {e:#}", self.provider.name());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::ProviderError;
    use crate::model::{TraitLetter, FULL_SET_SIZE};
    use crate::persona::TypeCode;
    use crate::traits::{GenerateResponse, ModelInfo, TokenUsage};

    /// Returns canned text, or fails when `content` is `None`.
    struct StubProvider {
        content: Option<String>,
        prompts: Mutex<Vec<GenerateRequest>>,
    }

    impl StubProvider {
        fn new(content: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                content: content.map(str::to_string),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
            self.prompts.lock().unwrap().push(request.clone());
            match &self.content {
                Some(content) => Ok(GenerateResponse {
                    content: content.clone(),
                    model: request.model.clone(),
                    token_usage: TokenUsage::default(),
                    latency_ms: 0,
                }),
                None => Err(ProviderError::Timeout(30).into()),
            }
        }

        fn available_models(&self) -> Vec<ModelInfo> {
            vec![]
        }
    }

    #[tokio::test]
    async fn quiz_set_is_parsed_from_generated_text() {
        let provider = StubProvider::new(Some(
            "질문1: 주말엔? | 답변A: 나간다 | 유형: E | 답변B: 쉰다 | 유형: I",
        ));
        let engine = QuizEngine::new(provider.clone(), QuizEngineConfig::default());

        let set = engine.generate_quiz_set().await.unwrap();
        assert_eq!(set.questions.len(), FULL_SET_SIZE);
        assert_eq!(set.questions[0].question, "주말엔?");
        assert_eq!(set.questions[1].question, "질문 2");

        let requests = provider.prompts.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains("Create 20 MBTI questions"));
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(
            requests[0].system_prompt.as_deref(),
            Some(DEFAULT_SYSTEM_PROMPT)
        );
    }

    #[tokio::test]
    async fn single_question_uses_slot_topic() {
        let provider = StubProvider::new(Some("질문: 마감은?\n답변A: 미리 한다\n답변B: 몰아서 한다"));
        let engine = QuizEngine::new(provider.clone(), QuizEngineConfig::default());

        let q = engine.generate_question(4, Axis::JP).await.unwrap();
        assert_eq!(q.question, "마감은?");
        assert_eq!(q.answers[0].trait_letter, TraitLetter::J);
        assert_eq!(q.answers[1].trait_letter, TraitLetter::P);

        let requests = provider.prompts.lock().unwrap();
        assert!(requests[0].prompt.contains("question number 4"));
    }

    #[tokio::test]
    async fn system_prompt_override_is_sent() {
        let provider = StubProvider::new(Some(""));
        let config = QuizEngineConfig {
            system_prompt_override: Some("custom".into()),
            ..Default::default()
        };
        let engine = QuizEngine::new(provider.clone(), config);
        engine.generate_question(1, Axis::EI).await.unwrap();

        let requests = provider.prompts.lock().unwrap();
        assert_eq!(requests[0].system_prompt.as_deref(), Some("custom"));
    }

    #[tokio::test]
    async fn generation_failure_is_an_error() {
        let engine = QuizEngine::new(StubProvider::new(None), QuizEngineConfig::default());
        let err = engine.generate_quiz_set().await.unwrap_err();
        assert!(err.downcast_ref::<ProviderError>().is_some());
        assert!(engine.generate_question(1, Axis::EI).await.is_err());
    }

    #[test]
    fn result_needs_no_generation() {
        let provider = StubProvider::new(None);
        let engine = QuizEngine::new(provider.clone(), QuizEngineConfig::default());
        let persona = engine.compute_result(&AnswerTally::new());
        assert_eq!(persona.type_code, TypeCode::INFP);
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn result_handles_saturated_counts_with_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let engine = QuizEngine::new(StubProvider::new(None), QuizEngineConfig::default());

        let mut tally = AnswerTally::new();
        tally.set(TraitLetter::E, u32::MAX);
        tally.set(TraitLetter::I, 1);
        tally.set(TraitLetter::P, u32::MAX);

        let persona =
            tracing::subscriber::with_default(subscriber, || engine.compute_result(&tally));
        assert_eq!(persona.type_code, TypeCode::ENFP);
    }
}
