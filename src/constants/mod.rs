pub mod prompts;
pub mod quiz_prompt;

pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

pub const QUIZ_CHUNK_CHARS: usize = 1500;
pub const SUMMARY_CHUNK_CHARS: usize = 2000;
pub const SUMMARY_CHUNK_OVERLAP: usize = 200;
pub const MAX_SUMMARY_CHUNKS: usize = 6;

pub const DEFAULT_QUIZ_COUNT: usize = 5;
pub const MAX_QUIZ_COUNT: usize = 50;

pub const QUIZ_POINTS: u32 = 3;
pub const SUMMARY_POINTS: u32 = 2;

pub const EMPTY_HINT_FALLBACK: &str = "Think carefully about the concept.";
pub const LEAKY_HINT_FALLBACK: &str = "Review the concept logically.";

/// Lower-cased phrases that point the student back at the source text
/// instead of at the concept.
pub const LEAKY_HINT_PHRASES: [&str; 4] = ["check the text", "read carefully", "look at", "refer"];
