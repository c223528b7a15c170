use std::{sync::Arc, time::Duration};

use rand::{seq::SliceRandom, Rng};

use crate::{
    constants::{QUIZ_CHUNK_CHARS, QUIZ_POINTS},
    models::domain::{ChunkOutcome, QuizItem, SkipReason},
    services::{
        model_service::{request_completion, CompletionClient},
        points_service::{award_if_present, PointsAwarder},
        prompt_composer::{compose_prompt, PromptKind},
        quiz_validator::validate,
        response_decoder::decode_items,
    },
    text::{build_chunks, tokenize},
};

/// Result of one quiz generation run, with what happened to each chunk.
#[derive(Debug, Default)]
pub struct QuizRun {
    pub items: Vec<QuizItem>,
    pub chunks: Vec<ChunkOutcome>,
}

pub struct QuizService {
    client: Arc<dyn CompletionClient>,
    points: Arc<dyn PointsAwarder>,
    timeout: Duration,
}

impl QuizService {
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

    pub async fn generate_quiz(
        &self,
        text: &str,
        count: usize,
        current_user: Option<&str>,
    ) -> Vec<QuizItem> {
        self.run_quiz(text, count, current_user).await.items
    }

    pub async fn generate_quiz_by_topic(
        &self,
        text: &str,
        topic: &str,
        count: usize,
    ) -> Vec<QuizItem> {
        self.run_topic_quiz(text, topic, count).await.items
    }

    /// Plain quiz generation. Awards points to `current_user` once the chunk
    /// loop has run, whatever the number of items produced.
    pub async fn run_quiz(&self, text: &str, count: usize, current_user: Option<&str>) -> QuizRun {
        let chunks = shuffled_chunks(text, &mut rand::thread_rng());
        if chunks.is_empty() || count == 0 {
            return QuizRun::default();
        }

        let run = self.assemble(&chunks, PromptKind::Quiz, count).await;
        award_if_present(self.points.as_ref(), current_user, QUIZ_POINTS).await;
        run
    }

    pub async fn run_topic_quiz(&self, text: &str, topic: &str, count: usize) -> QuizRun {
        let chunks = shuffled_chunks(text, &mut rand::thread_rng());
        if chunks.is_empty() || count == 0 {
            return QuizRun::default();
        }

        self.assemble(&chunks, PromptKind::TopicQuiz { topic }, count)
            .await
    }

    async fn assemble(&self, chunks: &[String], kind: PromptKind<'_>, count: usize) -> QuizRun {
        log::info!(
            "Generating up to {} quiz items from {} chunks",
            count,
            chunks.len()
        );

        let mut run = QuizRun::default();
        for (chunk_index, chunk) in chunks.iter().enumerate() {
            if run.items.len() >= count {
                break;
            }

            let outcome = self
                .process_chunk(chunk_index, chunk, kind, &mut run.items)
                .await;
            if let Some(reason) = outcome.skip_reason() {
                log::warn!("Skipping quiz chunk {}: {}", chunk_index, reason);
            }
            run.chunks.push(outcome);
        }

        run.items.truncate(count);
        log::info!(
            "Quiz generation finished with {} items after {} chunks",
            run.items.len(),
            run.chunks.len()
        );
        run
    }

    async fn process_chunk(
        &self,
        chunk_index: usize,
        chunk: &str,
        kind: PromptKind<'_>,
        items: &mut Vec<QuizItem>,
    ) -> ChunkOutcome {
        let prompt = compose_prompt(chunk, kind);
        let reply = match request_completion(self.client.as_ref(), &prompt, self.timeout).await {
            Ok(reply) => reply,
            Err(reason) => {
                return ChunkOutcome::Skipped {
                    chunk_index,
                    reason,
                }
            }
        };

        let records = decode_items(&reply);
        if records.is_empty() {
            return ChunkOutcome::Skipped {
                chunk_index,
                reason: SkipReason::Undecodable,
            };
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for record in &records {
            match validate(record) {
                Some(item) => {
                    items.push(item);
                    accepted += 1;
                }
                None => {
                    log::debug!("Rejected quiz record from chunk {}: {}", chunk_index, record);
                    rejected += 1;
                }
            }
        }

        ChunkOutcome::Accepted {
            chunk_index,
            accepted,
            rejected,
        }
    }
}

/// Tokenizes, shuffles the sentences once and packs them into quiz chunks.
pub fn shuffled_chunks<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<String> {
    let mut sentences = tokenize(text);
    sentences.shuffle(rng);
    build_chunks(&sentences, QUIZ_CHUNK_CHARS)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        errors::AppError,
        services::{model_service::MockCompletionClient, points_service::MockPointsAwarder},
        test_utils::fixtures,
    };

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn service(client: MockCompletionClient, points: MockPointsAwarder) -> QuizService {
        QuizService::new(Arc::new(client), Arc::new(points), TIMEOUT)
    }

    fn no_points() -> MockPointsAwarder {
        let mut points = MockPointsAwarder::new();
        points.expect_award().times(0);
        points
    }

    #[test]
    fn shuffled_chunks_keep_every_sentence_once() {
        let text = fixtures::long_study_text(40);
        let mut rng = StdRng::seed_from_u64(7);

        let chunks = shuffled_chunks(&text, &mut rng);
        let mut from_chunks: Vec<String> = chunks
            .iter()
            .flat_map(|c| c.split('\n').map(str::to_string))
            .collect();
        let mut original = tokenize(&text);

        from_chunks.sort();
        original.sort();
        assert_eq!(from_chunks, original);
        assert!(chunks.len() > 1);
    }

    #[tokio::test]
    async fn empty_or_heading_only_text_makes_no_calls() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);
        let service = service(client, no_points());

        assert!(service.generate_quiz("", 5, Some("ada")).await.is_empty());
        assert!(service
            .generate_quiz("INTRODUCTION\nKEY TERMS", 5, Some("ada"))
            .await
            .is_empty());
        assert!(service
            .generate_quiz_by_topic("SUMMARY", "cells", 5)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn zero_count_returns_immediately() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);
        let service = service(client, no_points());

        let items = service
            .generate_quiz(&fixtures::long_study_text(10), 0, Some("ada"))
            .await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn stops_requesting_once_count_is_reached() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(2)
            .returning(|_| Ok(fixtures::quiz_reply(&["A", "B", "C"])));
        let service = service(client, no_points());

        let run = service
            .run_quiz(&fixtures::long_study_text(60), 5, None)
            .await;

        assert_eq!(run.items.len(), 5);
        assert_eq!(run.chunks.len(), 2);
        for item in &run.items {
            assert_eq!(item.options().len(), 4);
            assert!(item.options().iter().any(|o| o == item.answer()));
        }
    }

    #[tokio::test]
    async fn failed_chunks_are_skipped_not_fatal() {
        let mut client = MockCompletionClient::new();
        let mut call = 0;
        client.expect_complete().returning(move |_| {
            call += 1;
            match call {
                1 => Err(AppError::Completion("429 rate limited".to_string())),
                2 => Ok("Sorry, I can't produce JSON today.".to_string()),
                _ => Ok(fixtures::quiz_reply(&["A", "B", "C"])),
            }
        });
        let service = service(client, no_points());

        let run = service
            .run_quiz(&fixtures::long_study_text(80), 3, None)
            .await;

        assert_eq!(run.items.len(), 3);
        assert_eq!(run.chunks.len(), 3);
        assert!(matches!(
            run.chunks[0].skip_reason(),
            Some(SkipReason::CompletionFailed(_))
        ));
        assert_eq!(run.chunks[1].skip_reason(), Some(&SkipReason::Undecodable));
        assert_eq!(
            run.chunks[2],
            ChunkOutcome::Accepted {
                chunk_index: 2,
                accepted: 3,
                rejected: 0
            }
        );
    }

    #[tokio::test]
    async fn invalid_records_are_dropped_individually() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Ok(fixtures::mixed_quiz_reply()));
        let service = service(client, no_points());

        let run = service
            .run_quiz(&fixtures::long_study_text(5), 5, None)
            .await;

        assert_eq!(run.chunks.len(), 1);
        assert_eq!(
            run.chunks[0],
            ChunkOutcome::Accepted {
                chunk_index: 0,
                accepted: 1,
                rejected: 2
            }
        );
        assert_eq!(run.items.len(), 1);
    }

    #[tokio::test]
    async fn all_chunks_failing_yields_empty_quiz() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Err(AppError::Completion("connection refused".to_string())));
        let service = service(client, no_points());

        let run = service
            .run_quiz(&fixtures::long_study_text(60), 5, None)
            .await;

        assert!(run.items.is_empty());
        assert!(!run.chunks.is_empty());
        assert!(run.chunks.iter().all(|c| c.skip_reason().is_some()));
    }

    #[tokio::test]
    async fn plain_quiz_awards_three_points() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Ok(fixtures::quiz_reply(&["A"])));
        let mut points = MockPointsAwarder::new();
        points
            .expect_award()
            .withf(|user_id: &str, points: &u32| user_id == "ada" && *points == QUIZ_POINTS)
            .times(1)
            .returning(|_, _| Ok(()));
        let service = service(client, points);

        let items = service
            .generate_quiz(&fixtures::long_study_text(5), 1, Some("ada"))
            .await;
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn award_failure_does_not_affect_quiz() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Ok(fixtures::quiz_reply(&["A", "B"])));
        let mut points = MockPointsAwarder::new();
        points
            .expect_award()
            .times(1)
            .returning(|_, _| Err(AppError::InternalError("ledger offline".to_string())));
        let service = service(client, points);

        let items = service
            .generate_quiz(&fixtures::long_study_text(5), 2, Some("ada"))
            .await;
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn topic_quiz_uses_topic_prompt_and_awards_nothing() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt: &str| prompt.contains("focusing on the topic 'photosynthesis'"))
            .returning(|_| Ok(fixtures::quiz_reply(&["A", "B", "C"])));
        let service = service(client, no_points());

        let items = service
            .generate_quiz_by_topic(&fixtures::long_study_text(30), "photosynthesis", 4)
            .await;
        assert_eq!(items.len(), 4);
    }
}
