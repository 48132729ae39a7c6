//! Integration tests for ContactForm wired to the real delivery client.
//!
//! Uses wiremock for the delivery endpoint. Covers the full submit path,
//! declared failures, non-2xx replies and the "no request unless valid" rule.

use folio_contact::{
    CaptchaNotice, ChallengeVerifier, ContactConfig, ContactForm, FormDeliveryClient,
    PipelineStatus, SiteKeyVerifier, VerificationToken, DELIVERY_USER_AGENT,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(mock_server: &MockServer) -> ContactConfig {
    ContactConfig::default()
        .with_delivery_url(format!("{}/submit", mock_server.uri()))
        .with_access_key("test-access-key")
        .with_site_key("test-site-key")
}

fn create_form(mock_server: &MockServer) -> ContactForm<FormDeliveryClient, SiteKeyVerifier> {
    let config = config(mock_server);
    let delivery = FormDeliveryClient::new(&config).expect("failed to create client");
    let verifier = SiteKeyVerifier::new(config.site_key.clone());
    ContactForm::new(&config, delivery, verifier)
}

#[tokio::test]
async fn test_submit_delivers_sanitized_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("user-agent", DELIVERY_USER_AGENT))
        .and(body_partial_json(serde_json::json!({
            "access_key": "test-access-key",
            "name": "Grace",
            "email": "grace@example.com",
            "message": "scriptalert(1)/script",
            "subject": "New Contact Form Submission from Grace",
            "h-captcha-response": "widget-token",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": true, "message": "Email sent"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = create_form(&mock_server);
    form.set_name("  Grace ");
    form.set_email(" grace@example.com");
    form.set_message("<script>alert(1)</script>");
    form.on_verified(VerificationToken::new("widget-token"));
    assert!(form.can_submit());

    assert_eq!(form.submit().await, PipelineStatus::Success);
    assert!(form.draft().is_empty());
    assert!(!form.has_token());
    assert_eq!(form.verifier().generation(), 1);
}

#[tokio::test]
async fn test_declared_failure_sets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "message": "bad captcha"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = create_form(&mock_server);
    form.set_name("Grace");
    form.set_email("grace@example.com");
    form.set_message("hi");
    form.on_verified(VerificationToken::new("widget-token"));

    assert_eq!(form.submit().await, PipelineStatus::Error);
    assert_eq!(form.draft().name, "Grace");
    assert!(!form.has_token());
    assert_eq!(form.verifier().generation(), 1);
    assert_eq!(form.captcha_notice(), CaptchaNotice::Prompt);
}

#[tokio::test]
async fn test_server_error_sets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = create_form(&mock_server);
    form.set_name("Grace");
    form.set_email("grace@example.com");
    form.set_message("hi");
    form.on_verified(VerificationToken::new("widget-token"));

    assert_eq!(form.submit().await, PipelineStatus::Error);
}

#[tokio::test]
async fn test_invalid_submissions_send_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut form = create_form(&mock_server);

    // no token yet
    form.set_name("A");
    form.set_email("a@b.com");
    form.set_message("hi");
    assert_eq!(form.submit().await, PipelineStatus::CaptchaRequired);

    form.on_verified(VerificationToken::new("widget-token"));
    form.set_email("bad-email");
    assert_eq!(form.submit().await, PipelineStatus::InvalidEmail);

    form.set_email("a@b.com");
    form.set_name("");
    assert_eq!(form.submit().await, PipelineStatus::InvalidInput);

    form.set_name("A");
    form.set_honeypot("filled-by-bot");
    assert_eq!(form.submit().await, PipelineStatus::Success);

    // the token was never spent
    assert!(form.has_token());
    assert_eq!(form.verifier().generation(), 0);
}

#[tokio::test]
async fn test_missing_site_key_is_permanent_config_notice() {
    let mock_server = MockServer::start().await;
    let config = ContactConfig::default()
        .with_delivery_url(format!("{}/submit", mock_server.uri()))
        .with_access_key("test-access-key");
    let delivery = FormDeliveryClient::new(&config).unwrap();
    let verifier = SiteKeyVerifier::new(config.site_key.clone());
    assert!(!verifier.is_configured());

    let mut form = ContactForm::new(&config, delivery, verifier);
    form.on_verified(VerificationToken::new("ignored"));
    assert_eq!(form.captcha_notice(), CaptchaNotice::NotConfigured);
    assert_eq!(form.submit().await, PipelineStatus::CaptchaRequired);
    assert_eq!(form.captcha_notice(), CaptchaNotice::NotConfigured);
}
