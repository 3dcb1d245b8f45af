//! Course Assistant
//!
//! Template answers over snippets returned by the retrieval service. No text is
//! generated: the reply quotes the closest snippet using a template chosen from
//! the question's wording.

use crate::models::{ChatReply, ChatSource, ContentSnippet};
use crate::utils::{round2, truncate_chars};
use tracing::debug;

pub const EXCERPT_CHARS: usize = 150;

pub const NO_CONTEXT_REPLY: &str =
    "Je n'ai pas trouvé d'informations pertinentes dans le contenu du cours pour répondre à cette question.";

const DEFINITION_KEYWORDS: &[&str] = &["qu'est-ce", "c'est quoi", "définition", "what is", "define"];
const HOW_TO_KEYWORDS: &[&str] = &["comment", "how to", "how do"];
const WHY_KEYWORDS: &[&str] = &["pourquoi", "why"];

const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "météo", "weather", "sport", "politique", "politics", "recette", "recipe", "film", "movie",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Definition,
    HowTo,
    Why,
    General,
}

impl QuestionKind {
    fn render(self, context: &str) -> String {
        match self {
            QuestionKind::Definition => format!("D'après le contenu du cours : {context}"),
            QuestionKind::HowTo => format!("Voici ce que le cours explique : {context}"),
            QuestionKind::Why => format!("Le cours explique que : {context}"),
            QuestionKind::General => format!(
                "Basé sur le contenu du cours, voici les informations pertinentes : {context}"
            ),
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Like `contains_any`, but a keyword only counts when it is not part of a longer word
fn contains_any_word(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        haystack.match_indices(keyword).any(|(idx, _)| {
            let before = haystack[..idx].chars().next_back();
            let after = haystack[idx + keyword.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    })
}

/// Checked in order: definition, how-to, why
pub fn classify_question(message: &str) -> QuestionKind {
    let lowered = message.to_lowercase();

    if contains_any(&lowered, DEFINITION_KEYWORDS) {
        QuestionKind::Definition
    } else if contains_any(&lowered, HOW_TO_KEYWORDS) {
        QuestionKind::HowTo
    } else if contains_any(&lowered, WHY_KEYWORDS) {
        QuestionKind::Why
    } else {
        QuestionKind::General
    }
}

pub fn is_on_topic(message: &str) -> bool {
    !contains_any_word(&message.to_lowercase(), OFF_TOPIC_KEYWORDS)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CourseAssistant;

impl CourseAssistant {
    pub fn new() -> Self {
        Self
    }

    /// Snippets are expected closest first
    pub fn answer(&self, message: &str, snippets: &[ContentSnippet]) -> ChatReply {
        let Some(closest) = snippets.first() else {
            return ChatReply {
                message: NO_CONTEXT_REPLY.to_string(),
                sources: Vec::new(),
                confidence: 0.0,
                excerpts: Vec::new(),
            };
        };

        let kind = classify_question(message);
        let excerpts: Vec<ChatSource> = snippets.iter().map(excerpt).collect();
        let confidence = confidence(snippets);

        debug!(?kind, snippets = snippets.len(), confidence, "Assistant answer built");

        ChatReply {
            message: kind.render(&closest.content),
            sources: excerpts.iter().map(|s| s.lesson_title.clone()).collect(),
            confidence,
            excerpts,
        }
    }
}

fn excerpt(snippet: &ContentSnippet) -> ChatSource {
    ChatSource {
        lesson_id: snippet.lesson_id.clone(),
        lesson_title: snippet.lesson_title.clone(),
        excerpt: format!("{}...", truncate_chars(&snippet.content, EXCERPT_CHARS)),
    }
}

/// `1 - mean distance`, floored at zero
fn confidence(snippets: &[ContentSnippet]) -> f32 {
    if snippets.is_empty() {
        return 0.0;
    }
    let mean = snippets.iter().map(|s| s.distance).sum::<f32>() / snippets.len() as f32;
    round2((1.0 - mean).max(0.0))
}
