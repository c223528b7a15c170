use serde::Serialize;

pub const OPTIONS_PER_ITEM: usize = 4;

/// One validated multiple-choice question.
///
/// Fields are private so every instance goes through [`QuizItem::try_new`]:
/// there are exactly four options and `answer` is one of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    question: String,
    options: [String; OPTIONS_PER_ITEM],
    answer: String,
    hint: String,
    explanation: String,
}

impl QuizItem {
    pub fn try_new(
        question: String,
        options: Vec<String>,
        answer: String,
        hint: String,
        explanation: String,
    ) -> Option<Self> {
        let options: [String; OPTIONS_PER_ITEM] = options.try_into().ok()?;
        if !options.contains(&answer) {
            return None;
        }

        Some(Self {
            question,
            options,
            answer,
            hint,
            explanation,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; OPTIONS_PER_ITEM] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Position of the answer among the options, `0..4`.
    pub fn answer_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| *option == self.answer)
            .unwrap_or_default()
    }
}
