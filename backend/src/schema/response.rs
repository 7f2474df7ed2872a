use serde::Serialize;

use crate::model::record::WebhookRecord;

/// Envelope shared by the write endpoints and every error response.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub success: bool,
    pub message: String,
}

impl StatusMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub message: String,
    pub webhook_endpoint: String,
    pub total_webhooks_received: usize,
    pub latest_webhooks: Vec<WebhookRecord>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub webhooks_received: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: usize,
    pub remaining_count: usize,
}
