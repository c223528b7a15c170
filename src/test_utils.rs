#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    /// A heading followed by `sentences` distinct sentences of roughly 100
    /// characters each, on one paragraph.
    pub fn long_study_text(sentences: usize) -> String {
        let body: Vec<String> = (0..sentences)
            .map(|i| {
                format!(
                    "Sentence number {} explains that cellular respiration releases the energy stored in glucose.",
                    i
                )
            })
            .collect();
        format!("CELLULAR RESPIRATION\n{}", body.join(" "))
    }

    /// `lines` newline-separated lines, each three quarters of `chunk_chars`
    /// long, so that every line becomes its own overlapping chunk.
    pub fn line_text(lines: usize, chunk_chars: usize) -> String {
        let line_len = chunk_chars * 3 / 4;
        (0..lines)
            .map(|i| {
                let prefix = format!("Line {:04} ", i);
                let fill = "w".repeat(line_len - prefix.len());
                format!("{}{}", prefix, fill)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A well-formed model reply with one valid record per label.
    pub fn quiz_reply(labels: &[&str]) -> String {
        let items: Vec<_> = labels
            .iter()
            .map(|label| {
                json!({
                    "question": format!("Question {}", label),
                    "options": [
                        format!("{}1", label),
                        format!("{}2", label),
                        format!("{}3", label),
                        format!("{}4", label)
                    ],
                    "answer": format!("{}1", label),
                    "hint": "Recall how the process starts.",
                    "explanation": format!("{}1 is correct.", label)
                })
            })
            .collect();
        serde_json::Value::Array(items).to_string()
    }

    /// Prose-wrapped reply with one valid record and two malformed ones.
    pub fn mixed_quiz_reply() -> String {
        let items = json!([
            {
                "question": "Where does glycolysis occur?",
                "options": ["Cytoplasm", "Nucleus", "Mitochondrion", "Ribosome"],
                "answer": "Cytoplasm",
                "hint": "Look at the diagram.",
                "explanation": "Glycolysis happens in the cytoplasm."
            },
            {
                "question": "Three options only",
                "options": ["A", "B", "C"],
                "answer": "A",
                "hint": "",
                "explanation": ""
            },
            {
                "question": "Answer outside options",
                "options": ["A", "B", "C", "D"],
                "answer": "E",
                "hint": "",
                "explanation": ""
            }
        ]);
        format!("Here are your questions:\n{}\nGood luck!", items)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::text::{build_overlapping_chunks, tokenize};

    #[test]
    fn long_study_text_tokenizes_to_requested_sentences() {
        assert_eq!(tokenize(&long_study_text(12)).len(), 12);
    }

    #[test]
    fn line_text_yields_one_chunk_per_line() {
        let text = line_text(4, 2000);
        assert_eq!(build_overlapping_chunks(&text, 2000, 200).len(), 4);
    }

    #[test]
    fn quiz_reply_is_a_json_array() {
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&quiz_reply(&["A", "B"])).expect("valid json");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["answer"], "B1");
    }
}
