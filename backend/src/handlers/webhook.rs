use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{Html, Json},
};
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument, warn};

use crate::app::AppState;
use crate::handlers::error::{ApiError, WEBHOOK_FAULT};
use crate::model::record::{collect_fields, FieldMap, WebhookRecord};
use crate::schema::response::{DeleteResponse, Overview, StatusMessage};
use crate::store::StoreError;
use crate::view::data_page::render_data_page;

pub const WEBHOOK_PATH: &str = "/webhook";

const RECEIVER_NAME: &str = "Shiprocket Webhook Receiver";

fn header_fields(headers: &HeaderMap) -> FieldMap {
    collect_fields(headers.iter().map(|(name, value)| {
        (
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    }))
}

fn query_fields(query: Option<&str>) -> FieldMap {
    match query {
        Some(query) => collect_fields(url::form_urlencoded::parse(query.as_bytes())),
        None => FieldMap::new(),
    }
}

fn fields_to_object(fields: FieldMap) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect(),
    )
}

/// Decodes the request body according to its content type. JSON and
/// url-encoded forms are parsed; anything else is captured as an empty
/// object.
fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, serde_json::Error> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match content_type.as_str() {
        "application/json" if !body.is_empty() => serde_json::from_slice(body),
        "application/x-www-form-urlencoded" => Ok(fields_to_object(collect_fields(
            url::form_urlencoded::parse(body),
        ))),
        _ => Ok(Value::Object(Map::new())),
    }
}

#[instrument(name = "receive_webhook", skip_all, fields(content_length = body.len()))]
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<StatusMessage>, ApiError> {
    info!("Webhook received");

    let payload = parse_body(&headers, &body).map_err(|err| {
        error!("Failed to decode webhook body: {}", err);
        ApiError::InternalServerError(WEBHOOK_FAULT.to_string())
    })?;

    match serde_json::to_string_pretty(&payload) {
        Ok(pretty) => debug!("Received data: {}", pretty),
        Err(err) => warn!("Failed to format webhook body for logging: {}", err),
    }

    let record = WebhookRecord::capture(
        header_fields(&headers),
        payload,
        query_fields(query.as_deref()),
    );

    state.store.lock().await.insert(record);

    Ok(Json(StatusMessage::ok("Webhook received successfully")))
}

pub async fn list_webhooks(State(state): State<AppState>) -> Json<Overview> {
    let snapshot = state.store.lock().await.snapshot();

    Json(Overview {
        message: RECEIVER_NAME.to_string(),
        webhook_endpoint: WEBHOOK_PATH.to_string(),
        total_webhooks_received: snapshot.total,
        latest_webhooks: snapshot.records,
    })
}

pub async fn show_data_page(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.store.lock().await.snapshot();

    Html(render_data_page(&snapshot))
}

#[instrument(name = "delete_webhooks", skip(state))]
pub async fn delete_webhooks(
    State(state): State<AppState>,
    Path((from_index, to_index)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let result = state
        .store
        .lock()
        .await
        .delete_range(&from_index, &to_index)
        .map_err(|err: StoreError| {
            warn!("Rejected delete request: {}", err);
            ApiError::from(err)
        })?;

    info!(
        deleted = result.deleted,
        remaining = result.remaining,
        "Deleted webhooks"
    );

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Deleted {} webhook(s).", result.deleted),
        deleted_count: result.deleted,
        remaining_count: result.remaining,
    }))
}
