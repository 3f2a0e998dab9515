//! Chat turn orchestration — remote completion first, local responder as fallback.
//!
//! Per turn: at most one remote attempt, and the local responder runs at most
//! once, only after the remote path is known to be unavailable. A reply always
//! comes from exactly one source.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::format::format_for_display;
use crate::chat::history::ConversationStore;
use crate::chat::prompts::build_system_prompt;
use crate::chat::responder::TopicResponder;
use crate::chat::topics::Topic;
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;
use crate::models::profile::FactBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub session_id: Uuid,
    /// Raw answer with `**emphasis**` markup and newlines.
    pub answer: String,
    /// The same answer as display HTML.
    pub formatted: String,
    pub source: AnswerSource,
    /// Topic the local responder matched; absent for remote answers and the
    /// onboarding message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
}

#[derive(Clone)]
pub struct ChatService {
    facts: Arc<FactBase>,
    responder: TopicResponder,
    completion: Option<Arc<dyn CompletionBackend>>,
    history: ConversationStore,
    system_prompt: Arc<str>,
}

impl ChatService {
    pub fn new(
        facts: Arc<FactBase>,
        completion: Option<Arc<dyn CompletionBackend>>,
        history: ConversationStore,
    ) -> Self {
        let system_prompt = Arc::from(build_system_prompt(&facts));
        Self {
            facts,
            responder: TopicResponder,
            completion,
            history,
            system_prompt,
        }
    }

    pub fn remote_enabled(&self) -> bool {
        self.completion.is_some()
    }

    /// Answers one visitor message.
    ///
    /// Empty or whitespace-only messages are rejected before any answer path runs.
    pub async fn answer(
        &self,
        session_id: Option<Uuid>,
        message: &str,
    ) -> Result<ChatReply, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("message cannot be empty".to_string()));
        }

        let session_id = session_id.unwrap_or_else(Uuid::new_v4);

        let (answer, source, topic) = match self.try_remote(session_id, message).await {
            Some(answer) => (answer, AnswerSource::Remote, None),
            None => {
                let (topic, answer) = self.responder.respond_with_topic(message, &self.facts);
                (answer, AnswerSource::Local, topic)
            }
        };

        info!("Chat turn answered (session={session_id}, source={source:?}, topic={topic:?})");

        Ok(ChatReply {
            session_id,
            formatted: format_for_display(&answer),
            answer,
            source,
            topic,
        })
    }

    /// `None` means completion unavailable: no backend, or the single attempt failed.
    async fn try_remote(&self, session_id: Uuid, message: &str) -> Option<String> {
        let backend = self.completion.as_ref()?;
        let history = self.history.recent(session_id).await;

        match backend
            .complete(&self.system_prompt, &history, message)
            .await
        {
            Ok(answer) => {
                self.history
                    .record_exchange(session_id, message, &answer)
                    .await;
                Some(answer)
            }
            Err(e) => {
                warn!("Completion unavailable, falling back to local responder: {e}");
                None
            }
        }
    }
}
