//! Form data types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sanitize::{sanitize, EMAIL_MAX_LENGTH, MESSAGE_MAX_LENGTH, NAME_MAX_LENGTH};

/// Raw, user-edited form contents for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Sanitize every field with its form limit.
    pub fn sanitized(&self) -> ContactFields {
        ContactFields {
            name: sanitize(&self.name, NAME_MAX_LENGTH),
            email: sanitize(&self.email, EMAIL_MAX_LENGTH),
            message: sanitize(&self.message, MESSAGE_MAX_LENGTH),
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sanitized fields as handed to the delivery client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// True if any field is empty.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }

    /// Subject line synthesized from the sender's name.
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }
}

/// Opaque single-use proof of human interaction.
///
/// `Debug` is redacted so tokens don't end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationToken([REDACTED])")
    }
}

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure,
}

impl SubmissionResult {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_applies_field_limits() {
        let draft = SubmissionDraft::new(
            format!("  {}  ", "n".repeat(150)),
            "<a@b.co>",
            "m".repeat(6000),
        );
        let fields = draft.sanitized();
        assert_eq!(fields.name.chars().count(), NAME_MAX_LENGTH);
        assert_eq!(fields.email, "a@b.co");
        assert_eq!(fields.message.chars().count(), MESSAGE_MAX_LENGTH);
    }

    #[test]
    fn subject_uses_sender_name() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(fields.subject(), "New Contact Form Submission from Ada");
        assert!(!fields.has_empty_field());
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = VerificationToken::new("10000000-aaaa-bbbb-cccc-000000000001");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("aaaa"));
        assert_eq!(token.as_str(), "10000000-aaaa-bbbb-cccc-000000000001");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut draft = SubmissionDraft::new("a", "b", "c");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
