pub mod chunk_outcome;
pub mod quiz_item;

pub use chunk_outcome::{ChunkOutcome, SkipReason};
pub use quiz_item::QuizItem;
