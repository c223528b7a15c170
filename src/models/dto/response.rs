use serde::Serialize;

use crate::models::domain::{ChunkOutcome, QuizItem};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub items: Vec<QuizItem>,
    pub chunks: Vec<ChunkOutcome>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    /// False when the combining pass failed and `summary` is the raw
    /// concatenation of partial summaries.
    pub reduced: bool,
    pub chunks: Vec<ChunkOutcome>,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub user_id: String,
    pub points: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
