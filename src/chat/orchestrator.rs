use std::sync::Arc;

use crate::core::errors::PipelineError;
use crate::history::{self, ConversationTurn};
use crate::llm::{ChatMessage, ChatProvider, ChatRequest};

use super::prompts;

/// Turns {history, question, context} into one generation call.
///
/// Stateless per call: all conversational state arrives from the caller, so
/// instances can be shared freely across requests and replicas. Generation
/// failures propagate as-is; there is no retry and no canned fallback here.
pub struct ConversationOrchestrator {
    provider: Arc<dyn ChatProvider>,
    model_id: String,
    temperature: f64,
}

impl ConversationOrchestrator {
    pub fn new(provider: Arc<dyn ChatProvider>, model_id: String, temperature: f64) -> Self {
        Self {
            provider,
            model_id,
            temperature,
        }
    }

    pub async fn respond(
        &self,
        history: &[ConversationTurn],
        question: &str,
        context: &str,
    ) -> Result<String, PipelineError> {
        let transcript = history::render_transcript(history);
        let messages = vec![
            ChatMessage::system(prompts::SYSTEM_MESSAGE),
            ChatMessage::user(prompts::render_user_message(context, &transcript, question)),
        ];

        let request = ChatRequest::new(messages).with_temperature(self.temperature);
        self.provider.chat(request, &self.model_id).await
    }
}
