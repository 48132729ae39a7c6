//! Pipeline status: the single observable signal of the form.

use serde::{Deserialize, Serialize};

/// Status of the last submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStatus {
    #[default]
    Idle,
    CaptchaRequired,
    InvalidEmail,
    InvalidInput,
    Sending,
    Success,
    Error,
}

/// Tone of a feedback message, for the rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Positive,
    Caution,
    Negative,
}

/// User-facing copy for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub tone: FeedbackTone,
    pub text: &'static str,
}

impl PipelineStatus {
    /// Wire/display tag, e.g. `captcha-required`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CaptchaRequired => "captcha-required",
            Self::InvalidEmail => "invalid-email",
            Self::InvalidInput => "invalid-input",
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Message shown under the form. `Idle` and `Sending` show none.
    pub fn feedback(self) -> Option<Feedback> {
        let (tone, text) = match self {
            Self::Idle | Self::Sending => return None,
            Self::Success => (
                FeedbackTone::Positive,
                "Message sent successfully! I'll get back to you soon.",
            ),
            Self::Error => (
                FeedbackTone::Negative,
                "Failed to send message. Please try again or reach out via LinkedIn.",
            ),
            Self::CaptchaRequired => (
                FeedbackTone::Caution,
                "Please complete the captcha verification first.",
            ),
            Self::InvalidEmail => (FeedbackTone::Negative, "Please enter a valid email address."),
            Self::InvalidInput => (FeedbackTone::Negative, "Please fill in all required fields."),
        };
        Some(Feedback { tone, text })
    }

    /// Label for the submit button.
    pub fn submit_label(self) -> &'static str {
        if self == Self::Sending {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captcha affordance shown next to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaNotice {
    /// Nothing to show.
    None,
    /// Ask the visitor to complete the challenge.
    Prompt,
    /// The widget has no site key and will never produce a token.
    NotConfigured,
}

impl CaptchaNotice {
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Prompt => Some("Please complete the captcha to send your message"),
            Self::NotConfigured => Some(
                "hCaptcha not configured. Please add FOLIO_HCAPTCHA_SITE_KEY to environment variables.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags_match_display() {
        for status in [
            PipelineStatus::Idle,
            PipelineStatus::CaptchaRequired,
            PipelineStatus::InvalidEmail,
            PipelineStatus::InvalidInput,
            PipelineStatus::Sending,
            PipelineStatus::Success,
            PipelineStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn idle_and_sending_have_no_feedback() {
        assert!(PipelineStatus::Idle.feedback().is_none());
        assert!(PipelineStatus::Sending.feedback().is_none());
        assert_eq!(
            PipelineStatus::CaptchaRequired.feedback().unwrap().tone,
            FeedbackTone::Caution
        );
        assert_eq!(
            PipelineStatus::Success.feedback().unwrap().tone,
            FeedbackTone::Positive
        );
    }

    #[test]
    fn submit_label() {
        assert_eq!(PipelineStatus::Sending.submit_label(), "Sending...");
        assert_eq!(PipelineStatus::Error.submit_label(), "Send Message");
    }
}
