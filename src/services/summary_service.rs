use std::{sync::Arc, time::Duration};

use crate::{
    constants::{MAX_SUMMARY_CHUNKS, SUMMARY_CHUNK_CHARS, SUMMARY_CHUNK_OVERLAP, SUMMARY_POINTS},
    models::domain::ChunkOutcome,
    services::{
        model_service::{request_completion, CompletionClient},
        points_service::{award_if_present, PointsAwarder},
        prompt_composer::{compose_prompt, PromptKind},
    },
    text::build_overlapping_chunks,
};

const PARTIAL_SEPARATOR: &str = "\n\n";

#[derive(Debug, Default)]
pub struct SummaryRun {
    pub summary: String,
    /// Whether the combining pass succeeded. When false, `summary` is the
    /// partial summaries joined by blank lines.
    pub reduced: bool,
    pub chunks: Vec<ChunkOutcome>,
}

pub struct SummaryService {
    client: Arc<dyn CompletionClient>,
    points: Arc<dyn PointsAwarder>,
    timeout: Duration,
}

impl SummaryService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        points: Arc<dyn PointsAwarder>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            points,
            timeout,
        }
    }

    pub async fn summarize(&self, text: &str, current_user: Option<&str>) -> String {
        self.run_summary(text, current_user).await.summary
    }

    pub async fn run_summary(&self, text: &str, current_user: Option<&str>) -> SummaryRun {
        let mut chunks = build_overlapping_chunks(text, SUMMARY_CHUNK_CHARS, SUMMARY_CHUNK_OVERLAP);
        if chunks.is_empty() {
            return SummaryRun::default();
        }
        if chunks.len() > MAX_SUMMARY_CHUNKS {
            log::info!(
                "Summarizing the first {} of {} chunks",
                MAX_SUMMARY_CHUNKS,
                chunks.len()
            );
            chunks.truncate(MAX_SUMMARY_CHUNKS);
        }

        let mut run = SummaryRun::default();
        let mut partials = Vec::with_capacity(chunks.len());

        for (chunk_index, chunk) in chunks.iter().enumerate() {
            let prompt = compose_prompt(chunk, PromptKind::ChunkSummary);
            match request_completion(self.client.as_ref(), &prompt, self.timeout).await {
                Ok(partial) => {
                    partials.push(partial);
                    run.chunks.push(ChunkOutcome::Summarized { chunk_index });
                }
                Err(reason) => {
                    log::warn!("Skipping summary chunk {}: {}", chunk_index, reason);
                    run.chunks.push(ChunkOutcome::Skipped {
                        chunk_index,
                        reason,
                    });
                }
            }
        }

        if partials.is_empty() {
            log::warn!("No chunk could be summarized; returning an empty summary");
            return run;
        }

        let combined = partials.join(PARTIAL_SEPARATOR);
        let prompt = compose_prompt(&combined, PromptKind::CombineSummaries);
        match request_completion(self.client.as_ref(), &prompt, self.timeout).await {
            Ok(summary) => {
                run.summary = summary;
                run.reduced = true;
            }
            Err(reason) => {
                log::warn!(
                    "Combining {} partial summaries failed ({}); returning them as is",
                    partials.len(),
                    reason
                );
                run.summary = combined;
            }
        }

        log::info!(
            "Summary of {} chars built from {} of {} chunks",
            run.summary.chars().count(),
            partials.len(),
            run.chunks.len()
        );
        award_if_present(self.points.as_ref(), current_user, SUMMARY_POINTS).await;
        run
    }
}
