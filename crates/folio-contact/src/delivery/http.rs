//! HTTP layer: the single POST and acknowledgement mapping.
//!
//! This is the ONLY place for status code handling. delivery/mod.rs never
//! interprets status codes. There is no retry: one request per attempt.

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::{ContactError, ContactResult};

use super::wire::{DeliveryAck, DeliveryPayload};

/// Longest slice of an error body kept for log messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
}

impl HttpBackend {
    /// Post once and map the reply. `Ok` only for 2xx with `success: true`.
    pub(crate) async fn post(&self, payload: &DeliveryPayload<'_>) -> ContactResult<DeliveryAck> {
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ContactError::Network {
            message: format!("failed to read response body: {}", e),
        })?;
        debug!(status = status.as_u16(), "delivery endpoint replied");

        if !status.is_success() {
            return Err(ContactError::Status {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }

        let ack: DeliveryAck =
            serde_json::from_str(&body).map_err(|e| ContactError::InvalidResponse {
                message: format!("failed to parse acknowledgement: {}", e),
            })?;

        if ack.success {
            Ok(ack)
        } else {
            Err(ContactError::Rejected {
                message: ack
                    .message
                    .unwrap_or_else(|| "endpoint did not declare success".to_string()),
            })
        }
    }
}

/// Prefer the endpoint's `message` field, else a bounded slice of the raw body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(ack) = serde_json::from_str::<DeliveryAck>(body) {
        if let Some(message) = ack.message {
            return Some(message);
        }
    }
    if body.is_empty() {
        None
    } else {
        Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect())
    }
}
