use crate::constants::{
    prompts::{CHUNK_SUMMARY_INSTRUCTION, COMBINE_SUMMARIES_INSTRUCTION},
    quiz_prompt::{QUIZ_FORMAT_INSTRUCTIONS, QUIZ_ITEMS_PER_CALL, QUIZ_OUTPUT_DIRECTIVE, QUIZ_ROLE},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind<'a> {
    Quiz,
    TopicQuiz { topic: &'a str },
    ChunkSummary,
    CombineSummaries,
}

/// Builds the instruction text sent to the completion service.
///
/// For [`PromptKind::CombineSummaries`] the `content` is the joined partial
/// summaries rather than a chunk of source text.
pub fn compose_prompt(content: &str, kind: PromptKind<'_>) -> String {
    match kind {
        PromptKind::Quiz => quiz_prompt(
            &format!(
                "Create {} multiple-choice questions (MCQs) from the following academic content.",
                QUIZ_ITEMS_PER_CALL
            ),
            content,
        ),
        PromptKind::TopicQuiz { topic } => quiz_prompt(
            &format!(
                "Create {} multiple-choice questions (MCQs) focusing on the topic '{}' from this content.",
                QUIZ_ITEMS_PER_CALL, topic
            ),
            content,
        ),
        PromptKind::ChunkSummary => format!(
            "{}\n\nCONTENT:\n{}\n\nSUMMARY:",
            CHUNK_SUMMARY_INSTRUCTION,
            content.trim()
        ),
        PromptKind::CombineSummaries => format!(
            "{}\n\nPARTIAL SUMMARIES:\n{}\n\nFINAL SUMMARY:",
            COMBINE_SUMMARIES_INSTRUCTION,
            content.trim()
        ),
    }
}

fn quiz_prompt(task: &str, chunk: &str) -> String {
    format!(
        "{} {}\n{}\nTEXT:\n{}\n\n{}",
        QUIZ_ROLE, task, QUIZ_FORMAT_INSTRUCTIONS, chunk, QUIZ_OUTPUT_DIRECTIVE
    )
}
