use std::fmt;

use serde::Serialize;

/// Why a chunk contributed nothing to the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    CompletionFailed(String),
    TimedOut,
    EmptyCompletion,
    Undecodable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CompletionFailed(err) => write!(f, "completion failed: {}", err),
            SkipReason::TimedOut => write!(f, "completion timed out"),
            SkipReason::EmptyCompletion => write!(f, "completion was empty"),
            SkipReason::Undecodable => write!(f, "no JSON array could be decoded"),
        }
    }
}

/// What happened to a single chunk during a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChunkOutcome {
    Accepted {
        chunk_index: usize,
        accepted: usize,
        rejected: usize,
    },
    Summarized {
        chunk_index: usize,
    },
    Skipped {
        chunk_index: usize,
        reason: SkipReason,
    },
}

impl ChunkOutcome {
    pub fn chunk_index(&self) -> usize {
        match self {
            ChunkOutcome::Accepted { chunk_index, .. }
            | ChunkOutcome::Summarized { chunk_index }
            | ChunkOutcome::Skipped { chunk_index, .. } => *chunk_index,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            ChunkOutcome::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
