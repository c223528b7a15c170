#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use study_assist::{
    config::Config,
    errors::{AppError, AppResult},
    services::{model_service::CompletionClient, points_service::InMemoryPointsLedger},
};

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Replays queued replies in order and records every prompt it receives.
/// When the queue runs dry it falls back to `default_reply`, or fails.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<AppResult<String>>>,
    default_reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<AppResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            default_reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn always(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().expect("prompts lock").len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());

        let next = self.replies.lock().expect("replies lock").pop_front();
        match (next, &self.default_reply) {
            (Some(reply), _) => reply,
            (None, Some(reply)) => Ok(reply.clone()),
            (None, None) => Err(AppError::Completion("script exhausted".to_string())),
        }
    }
}

pub fn ledger() -> Arc<InMemoryPointsLedger> {
    Arc::new(InMemoryPointsLedger::new())
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "GROQ_API_KEY" => Some("test-key".to_string()),
        "COMPLETION_API_BASE" => Some("http://127.0.0.1:9".to_string()),
        "COMPLETION_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("test config has a key")
}

pub fn study_text(sentences: usize) -> String {
    let body: Vec<String> = (0..sentences)
        .map(|i| {
            format!(
                "Fact {} states that enzymes lower the activation energy of biochemical reactions in cells.",
                i
            )
        })
        .collect();
    format!("INTRODUCTION\n{}\n\nKEY TERMS", body.join(" "))
}

pub fn quiz_reply(count: usize) -> String {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "question": format!("Question {}", i),
                "options": ["Alpha", "Beta", "Gamma", "Delta"],
                "answer": "Gamma",
                "hint": "Recall that energy is conserved.",
                "explanation": "Gamma is the only consistent choice."
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
