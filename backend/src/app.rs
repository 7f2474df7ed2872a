use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::handlers::{
    error::{panic_response, DELETE_FAULT, INTERNAL_FAULT, WEBHOOK_FAULT},
    health::health_check,
    webhook::{delete_webhooks, list_webhooks, receive_webhook, show_data_page, WEBHOOK_PATH},
};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(RecordStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_webhooks))
        .route(
            WEBHOOK_PATH,
            post(receive_webhook)
                .layer(CatchPanicLayer::custom(panic_response(WEBHOOK_FAULT))),
        )
        .route("/data", get(show_data_page))
        .route(
            "/data/:from_index/:to_index",
            delete(delete_webhooks)
                .layer(CatchPanicLayer::custom(panic_response(DELETE_FAULT))),
        )
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_response(INTERNAL_FAULT)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
