pub const QUIZ_ITEMS_PER_CALL: usize = 3;

pub const QUIZ_ROLE: &str = "You are a professional educational assistant.";

pub const QUIZ_FORMAT_INSTRUCTIONS: &str = r#"Each question must have exactly 4 options (A, B, C, D). Provide a helpful hint and clear explanation.

Return strictly this JSON format:
[
  {
    "question": "...",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "answer": "Option A",
    "hint": "...",
    "explanation": "..."
  },
  ...
]"#;

pub const QUIZ_OUTPUT_DIRECTIVE: &str = "Return ONLY the JSON list. No extra text.";
