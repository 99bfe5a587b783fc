pub mod feedback;
pub mod knowledge;
pub mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackN};
pub use knowledge::KnowledgeN;
pub use word::{WordError, WordN};
