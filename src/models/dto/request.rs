use serde::Deserialize;
use validator::Validate;

use crate::constants::DEFAULT_QUIZ_COUNT;

fn default_quiz_count() -> usize {
    DEFAULT_QUIZ_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    // keep in sync with constants::MAX_QUIZ_COUNT
    #[serde(default = "default_quiz_count")]
    #[validate(range(max = 50, message = "Count must be at most 50"))]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTopicQuizRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[validate(length(min = 1, max = 200, message = "Topic must be 1 to 200 characters"))]
    pub topic: String,

    #[serde(default = "default_quiz_count")]
    #[validate(range(max = 50, message = "Count must be at most 50"))]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}
