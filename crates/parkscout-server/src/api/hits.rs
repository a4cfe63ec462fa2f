use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tokio::sync::Mutex;

use super::AppState;

/// In-process page-view counter, created at startup and shared via state.
///
/// Stands in for a durable key-value store; the count resets with the
/// process.
#[derive(Debug, Clone, Default)]
pub struct HitCounter {
    count: Arc<Mutex<u64>>,
}

impl HitCounter {
    /// Bumps the counter and returns the new value.
    pub async fn increment(&self) -> u64 {
        let mut count = self.count.lock().await;
        *count += 1;
        *count
    }
}

#[derive(Debug, Serialize)]
pub(super) struct HitsData {
    hits: u64,
}

pub(super) async fn handle_hits(State(state): State<AppState>) -> Json<HitsData> {
    let hits = state.hits.increment().await;
    Json(HitsData { hits })
}
