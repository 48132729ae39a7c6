//! `folio contact`: one pass through the contact pipeline.
//!
//! This is the edge: configuration comes from the environment here and is
//! handed to the core explicitly. The `--captcha-token` flag stands in for the
//! widget's verify event.

use anyhow::Context;
use folio_contact::{
    ContactConfig, ContactForm, FormDeliveryClient, PipelineStatus, SiteKeyVerifier,
    VerificationToken,
};
use serde::Serialize;

use super::super::args::ContactArgs;
use crate::exit_codes;

#[derive(Debug, Serialize)]
struct StatusReport {
    status: PipelineStatus,
    message: Option<&'static str>,
}

pub async fn run(args: ContactArgs) -> anyhow::Result<i32> {
    let config = ContactConfig::from_env();
    let delivery =
        FormDeliveryClient::new(&config).context("failed to set up the delivery client")?;
    let verifier = SiteKeyVerifier::new(config.site_key.clone());
    let mut form = ContactForm::new(&config, delivery, verifier);

    if let Some(notice) = form.captcha_notice().text() {
        eprintln!("{notice}");
    }

    form.set_name(args.name);
    form.set_email(args.email);
    form.set_message(args.message);
    form.set_honeypot(args.website);
    if let Some(token) = args.captcha_token {
        form.on_verified(VerificationToken::new(token));
    }

    let status = form.submit().await;
    let report = StatusReport {
        status,
        message: status.feedback().map(|f| f.text),
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.message.unwrap_or(status.as_str()));
    }

    Ok(exit_codes::for_status(status))
}
