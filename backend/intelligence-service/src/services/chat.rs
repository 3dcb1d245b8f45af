use super::assistant::{is_on_topic, CourseAssistant};
use super::faq::FaqMatcher;
use crate::clients::{fetch_or_empty, ContentRetriever};
use crate::config::RetrievalConfig;
use crate::models::ChatReply;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Routes a chat message to the course assistant or the FAQ matcher
///
/// - off-topic message: FAQ fallback reply
/// - course id given and snippets retrieved: course assistant
/// - otherwise: FAQ matcher
pub struct ChatService {
    faq: FaqMatcher,
    assistant: CourseAssistant,
    retriever: Option<Arc<dyn ContentRetriever>>,
    top_k: usize,
    retrieval_timeout: Duration,
}

impl ChatService {
    pub fn new(
        faq: FaqMatcher,
        retriever: Option<Arc<dyn ContentRetriever>>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            faq,
            assistant: CourseAssistant::new(),
            retriever,
            top_k: config.top_k,
            retrieval_timeout: config.timeout(),
        }
    }

    /// `history_len` is the number of prior turns in the conversation
    pub async fn ask(
        &self,
        message: &str,
        course_id: Option<&str>,
        history_len: usize,
    ) -> ChatReply {
        if !is_on_topic(message) {
            info!(route = "off_topic", "Chat message routed");
            return self.faq.fallback(history_len);
        }

        if let (Some(course_id), Some(retriever)) = (course_id, self.retriever.as_ref()) {
            let snippets = fetch_or_empty(
                "retrieval",
                self.retrieval_timeout,
                retriever.search(message, course_id, self.top_k),
            )
            .await;

            if !snippets.is_empty() {
                info!(
                    route = "assistant",
                    course_id = %course_id,
                    snippets = snippets.len(),
                    "Chat message routed"
                );
                return self.assistant.answer(message, &snippets);
            }
        }

        info!(route = "faq", "Chat message routed");
        self.faq.answer(message, history_len)
    }
}
