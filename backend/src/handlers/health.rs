use axum::{extract::State, response::Json};
use tracing::debug;

use crate::app::AppState;
use crate::model::record::now_timestamp;
use crate::schema::response::Health;

/// Liveness probe reporting how many webhooks are currently buffered.
pub async fn health_check(State(state): State<AppState>) -> Json<Health> {
    let webhooks_received = state.store.lock().await.snapshot().total;
    debug!(webhooks_received, "Health check");

    Json(Health {
        status: "OK".to_string(),
        timestamp: now_timestamp(),
        webhooks_received,
    })
}
