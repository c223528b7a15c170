use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppResult;

/// Receives study points for a user after a successful generation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsAwarder: Send + Sync {
    async fn award(&self, user_id: &str, points: u32) -> AppResult<()>;
}

/// Process-local running totals per user.
#[derive(Default)]
pub struct InMemoryPointsLedger {
    balances: RwLock<HashMap<String, u32>>,
}

impl InMemoryPointsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn balance(&self, user_id: &str) -> u32 {
        self.balances
            .read()
            .await
            .get(user_id)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl PointsAwarder for InMemoryPointsLedger {
    async fn award(&self, user_id: &str, points: u32) -> AppResult<()> {
        let mut balances = self.balances.write().await;
        let total = balances.entry(user_id.to_string()).or_default();
        *total = total.saturating_add(points);
        log::info!("Awarded {} points to {} (total {})", points, user_id, total);
        Ok(())
    }
}

/// Awards points to `current_user` if there is one. Failures are logged and
/// never reach the caller.
pub async fn award_if_present(awarder: &dyn PointsAwarder, current_user: Option<&str>, points: u32) {
    let Some(user_id) = current_user else {
        return;
    };

    if let Err(err) = awarder.award(user_id, points).await {
        log::warn!("Failed to award {} points to {}: {}", points, user_id, err);
    }
}
