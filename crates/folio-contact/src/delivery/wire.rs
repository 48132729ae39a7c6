//! Request and acknowledgement bodies of the delivery endpoint.

use serde::{Deserialize, Serialize};

use crate::types::{ContactFields, VerificationToken};

/// JSON body posted to the endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct DeliveryPayload<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub subject: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha_response: &'a str,
}

impl<'a> DeliveryPayload<'a> {
    pub(crate) fn new(
        fields: &'a ContactFields,
        token: &'a VerificationToken,
        credential: &'a str,
    ) -> Self {
        Self {
            access_key: credential,
            name: &fields.name,
            email: &fields.email,
            message: &fields.message,
            subject: fields.subject(),
            captcha_response: token.as_str(),
        }
    }
}

/// Endpoint acknowledgement. A missing `success` flag reads as `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DeliveryAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
