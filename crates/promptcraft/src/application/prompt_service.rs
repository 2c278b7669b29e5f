//! Prompt Application Service
//!
//! Orchestrates instruction composition, the generation call, and
//! normalization for the Refine and Evaluate operations.

use std::sync::Arc;

use crate::domain::services::{evaluation_instruction, refine_instruction};
use crate::domain::{DomainError, Evaluation, GenerationResult, PromptRequest, Refinement};
use crate::ports::GenerationService;

const EMPTY_PROMPT: &str = "Prompt cannot be empty";

/// Application service for prompt operations
pub struct PromptService<G: GenerationService + ?Sized> {
    generator: Arc<G>,
}

impl<G: GenerationService + ?Sized> PromptService<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub fn model_id(&self) -> &str {
        self.generator.model_id()
    }

    /// Turn a rough prompt into an optimized one for the target model
    pub async fn refine(&self, mut request: PromptRequest) -> Result<Refinement, DomainError> {
        request.prompt = validated_prompt(&request.prompt)?.to_string();

        let instruction = refine_instruction(&request);
        tracing::info!(
            "Refining prompt for {} ({} chars, {} tags, {})",
            request.target_model,
            request.prompt.chars().count(),
            request.tags.len(),
            request.length
        );

        let raw = self
            .generator
            .generate(instruction.as_str())
            .await
            .map_err(|e| {
                tracing::error!("Error in refine: {}", e);
                into_service_error(e)
            })?;

        Ok(Refinement {
            target_model: request.target_model,
            result: GenerationResult::from_raw(raw),
        })
    }

    /// Critique a prompt on clarity, specificity, structure and tone
    pub async fn evaluate(&self, prompt: &str) -> Result<Evaluation, DomainError> {
        let prompt = validated_prompt(prompt)?;

        let instruction = evaluation_instruction(prompt);
        tracing::info!("Evaluating prompt ({} chars)", prompt.chars().count());

        let raw = self
            .generator
            .generate(instruction.as_str())
            .await
            .map_err(|e| {
                tracing::error!("Error in evaluate: {}", e);
                into_service_error(e)
            })?;

        Ok(Evaluation {
            result: GenerationResult::from_raw(raw),
        })
    }
}

fn validated_prompt(prompt: &str) -> Result<&str, DomainError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(EMPTY_PROMPT));
    }
    Ok(trimmed)
}

/// Every generation failure surfaces as ExternalService with its message intact
fn into_service_error(err: DomainError) -> DomainError {
    match err {
        DomainError::ExternalService(_) => err,
        other => DomainError::ExternalService(other.detail().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LengthTier;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every instruction and replies with a canned result
    struct MockGenerator {
        reply: Result<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationService for MockGenerator {
        async fn generate(&self, instruction: &str) -> Result<String, DomainError> {
            self.calls.lock().unwrap().push(instruction.to_string());
            self.reply.clone().map_err(DomainError::ExternalService)
        }

        fn model_id(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_refine_example() {
        let generator = MockGenerator::replying("  **Refined** recursion prompt  ");
        let service = PromptService::new(generator.clone());

        let request = PromptRequest::new("Explain recursion")
            .with_length(LengthTier::from_label("short"))
            .with_target_model("Gemini")
            .with_tags(vec!["beginner".to_string()]);
        let refinement = service.refine(request).await.unwrap();

        assert_eq!(refinement.target_model, "Gemini");
        assert_eq!(refinement.refined_output(), "Refined recursion prompt");
        assert_eq!(refinement.result.raw, "  **Refined** recursion prompt  ");

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        for needle in ["300-500 words", "Gemini", "beginner", "Explain recursion"] {
            assert!(calls[0].contains(needle), "missing {}", needle);
        }
    }

    #[tokio::test]
    async fn test_empty_prompt_skips_generation() {
        let generator = MockGenerator::replying("unused");
        let service = PromptService::new(generator.clone());

        for prompt in ["", "   ", "\n\t"] {
            let err = service.refine(PromptRequest::new(prompt)).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref m) if m == "Prompt cannot be empty"));

            let err = service.evaluate(prompt).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }

        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_is_trimmed_before_embedding() {
        let generator = MockGenerator::replying("ok");
        let service = PromptService::new(generator.clone());

        service.evaluate("  Write a haiku  ").await.unwrap();

        assert!(generator.calls()[0].contains("**User Input**:\nWrite a haiku\n"));
    }

    #[tokio::test]
    async fn test_generation_failure_passes_message_through() {
        let generator = MockGenerator::failing("quota exceeded");
        let service = PromptService::new(generator.clone());

        let err = service
            .refine(PromptRequest::new("Explain recursion"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(ref m) if m == "quota exceeded"));

        let err = service.evaluate("Explain recursion").await.unwrap_err();
        assert_eq!(err.detail(), "quota exceeded");

        // No retry
        assert_eq!(generator.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_evaluate_normalizes_output() {
        let generator = MockGenerator::replying("**Clarity**: good\n* add examples\n");
        let service = PromptService::new(generator);

        let evaluation = service.evaluate("Explain recursion").await.unwrap();
        assert_eq!(evaluation.text(), "Clarity: good\n add examples");
    }
}
