pub mod chunker;
pub mod tokenizer;

pub use chunker::{build_chunks, build_overlapping_chunks};
pub use tokenizer::{is_heading, tokenize};
