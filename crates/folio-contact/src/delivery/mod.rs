//! Delivery client for the external form endpoint.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::config::ContactConfig;
use crate::error::{ContactError, ContactResult};
use crate::types::{ContactFields, SubmissionResult, VerificationToken};

mod http;
mod wire;

use http::HttpBackend;
use wire::DeliveryPayload;

pub const DELIVERY_USER_AGENT: &str = concat!("folio-contact/", env!("CARGO_PKG_VERSION"));

/// Sends one sanitized submission. Implementations must not retry.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn submit(
        &self,
        fields: &ContactFields,
        token: &VerificationToken,
        credential: &str,
    ) -> SubmissionResult;
}

/// Delivery client posting JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct FormDeliveryClient {
    http: HttpBackend,
}

impl FormDeliveryClient {
    pub fn new(config: &ContactConfig) -> ContactResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(DELIVERY_USER_AGENT));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| ContactError::Network {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http: HttpBackend {
                client,
                url: config.delivery_url.clone(),
            },
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.http.url
    }

    /// Like [`DeliveryClient::submit`] but keeps the failure reason.
    pub async fn try_submit(
        &self,
        fields: &ContactFields,
        token: &VerificationToken,
        credential: &str,
    ) -> ContactResult<()> {
        let payload = DeliveryPayload::new(fields, token, credential);
        debug!(endpoint = %self.http.url, "posting contact submission");
        self.http.post(&payload).await.map(|_| ())
    }
}

#[async_trait]
impl DeliveryClient for FormDeliveryClient {
    async fn submit(
        &self,
        fields: &ContactFields,
        token: &VerificationToken,
        credential: &str,
    ) -> SubmissionResult {
        match self.try_submit(fields, token, credential).await {
            Ok(()) => SubmissionResult::Success,
            Err(e) => {
                warn!(error = %e, "contact delivery failed");
                SubmissionResult::Failure
            }
        }
    }
}

#[async_trait]
impl<D: DeliveryClient + ?Sized> DeliveryClient for std::sync::Arc<D> {
    async fn submit(
        &self,
        fields: &ContactFields,
        token: &VerificationToken,
        credential: &str,
    ) -> SubmissionResult {
        (**self).submit(fields, token, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    async fn create_test_client(mock_server: &MockServer) -> FormDeliveryClient {
        let config =
            ContactConfig::default().with_delivery_url(format!("{}/submit", mock_server.uri()));
        FormDeliveryClient::new(&config).expect("failed to create client")
    }

    #[tokio::test]
    async fn test_submit_posts_expected_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "access_key": "key-1",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
                "subject": "New Contact Form Submission from Ada",
                "h-captcha-response": "tok-1",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client
            .submit(&fields(), &VerificationToken::new("tok-1"), "key-1")
            .await;
        assert_eq!(result, SubmissionResult::Success);
    }

    #[tokio::test]
    async fn test_declared_failure_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"success": false, "message": "captcha failed"}),
            ))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let err = client
            .try_submit(&fields(), &VerificationToken::new("tok"), "key")
            .await
            .unwrap_err();
        assert!(
            matches!(err, ContactError::Rejected { ref message } if message == "captcha failed")
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure_even_with_flag() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"success": true})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let err = client
            .try_submit(&fields(), &VerificationToken::new("tok"), "key")
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let err = client
            .try_submit(&fields(), &VerificationToken::new("tok"), "key")
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_transport_fault_maps_to_failure() {
        let config = ContactConfig::default().with_delivery_url("http://127.0.0.1:1/submit");
        let client = FormDeliveryClient::new(&config).unwrap();
        let result = client
            .submit(&fields(), &VerificationToken::new("tok"), "key")
            .await;
        assert_eq!(result, SubmissionResult::Failure);
    }
}
