pub const CHUNK_SUMMARY_INSTRUCTION: &str = "You are a helpful AI assistant. Summarize the following academic content clearly and in detail for study purposes.";

pub const COMBINE_SUMMARIES_INSTRUCTION: &str = "You are a helpful AI. Combine and rewrite the following partial summaries into one clean, structured, and academic summary.";
