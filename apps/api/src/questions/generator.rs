//! Question Generation Orchestrator.
//!
//! Flow: format transcript → fill human turn → LLM call → contract parse.
//! Any failure along the way is logged and converted into the catalog
//! fallback; callers always receive a usable result.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{ChatModel, LlmError};
use crate::models::conversation::ConversationMessage;
use crate::questions::contract::{self, ParseError, QuestionGenerationResult};
use crate::questions::prompts::{self, InterviewType};

/// Why a generation attempt fell back. Never crosses the orchestrator
/// boundary — it is logged and swapped for the fallback result.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("LLM call failed: {0}")]
    Transport(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Outcome of one generation call. `Fallback` keeps the cause so the failure
/// stays observable even though the public contract is total.
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated(QuestionGenerationResult),
    Fallback {
        result: QuestionGenerationResult,
        cause: GenerationError,
    },
}

impl GenerationOutcome {
    pub fn into_result(self) -> QuestionGenerationResult {
        match self {
            GenerationOutcome::Generated(result) => result,
            GenerationOutcome::Fallback { result, .. } => result,
        }
    }
}

/// Stateless after construction; safe to share across in-flight requests.
#[derive(Clone)]
pub struct QuestionGenerator {
    model: Arc<dyn ChatModel>,
    system_prompt: String,
    human_template: &'static str,
}

impl QuestionGenerator {
    /// Resolves the two-turn prompt skeleton once, up front. The system turn
    /// is picked by interview type with the contract's format instructions
    /// interpolated; the human turn keeps its `{conversation}` placeholder
    /// until a transcript arrives.
    pub fn new(model: Arc<dyn ChatModel>, interview_type: InterviewType) -> Self {
        Self {
            model,
            system_prompt: prompts::system_prompt(interview_type, contract::FORMAT_INSTRUCTIONS),
            human_template: prompts::HUMAN_PROMPT_TEMPLATE,
        }
    }

    /// Generates follow-up questions for a transcript. Total: every failure
    /// in the LLM path resolves to the fixed fallback result.
    pub async fn generate_questions(
        &self,
        messages: &[ConversationMessage],
    ) -> QuestionGenerationResult {
        self.generate(messages).await.into_result()
    }

    /// Like `generate_questions`, but keeps the fallback cause visible to
    /// the caller.
    pub async fn generate(&self, messages: &[ConversationMessage]) -> GenerationOutcome {
        let conversation = format_transcript(messages);
        debug!("Formatted transcript for prompt:\n{conversation}");

        match self.try_generate(&conversation).await {
            Ok(result) => GenerationOutcome::Generated(result),
            Err(cause) => {
                warn!("Question generation failed, serving fallback questions: {cause}");
                GenerationOutcome::Fallback {
                    result: prompts::fallback_result(),
                    cause,
                }
            }
        }
    }

    async fn try_generate(
        &self,
        conversation: &str,
    ) -> Result<QuestionGenerationResult, GenerationError> {
        let prompt = self.human_template.replace("{conversation}", conversation);
        let raw = self.model.complete(&self.system_prompt, &prompt).await?;
        Ok(contract::parse_result(&raw)?)
    }
}

/// Renders a transcript as one `"<Label>: <content>"` line per message, in
/// speaking order. Pure and total — an empty transcript is an empty string.
fn format_transcript(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.speaker.display_label(), msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}
