pub mod assistant;
pub mod chat;
pub mod faq;
pub mod quiz;
pub mod recommendation;

pub use assistant::CourseAssistant;
pub use chat::ChatService;
pub use faq::{FaqMatcher, FaqTable};
pub use quiz::{summarize, QuizGenerator};
pub use recommendation::{RecommendationRanker, RecommendationService};
