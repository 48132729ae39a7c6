//! Contact-form submission pipeline for the folio site.
//!
//! This crate is the engineered core behind the contact section:
//!
//! - Input sanitizer and email shape check
//! - Honeypot bot gate with a fabricated success outcome
//! - Challenge verifier seam (verify/expire events in, reset out)
//! - Submission coordinator owning the single [`PipelineStatus`]
//! - Delivery client posting one JSON request to the form endpoint
//!
//! # Quick Start
//!
//! ```no_run
//! use folio_contact::{
//!     ContactConfig, ContactForm, FormDeliveryClient, SiteKeyVerifier, VerificationToken,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ContactConfig::from_env();
//! let delivery = FormDeliveryClient::new(&config)?;
//! let verifier = SiteKeyVerifier::new(config.site_key.clone());
//! let mut form = ContactForm::new(&config, delivery, verifier);
//!
//! form.set_name("Ada");
//! form.set_email("ada@example.com");
//! form.set_message("Hello!");
//! form.on_verified(VerificationToken::new("token-from-widget"));
//!
//! let status = form.submit().await;
//! println!("{}", status);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `FOLIO_DELIVERY_URL` | Delivery endpoint (default: `https://api.web3forms.com/submit`) |
//! | `FOLIO_DELIVERY_ACCESS_KEY` | Delivery access credential |
//! | `FOLIO_HCAPTCHA_SITE_KEY` | Challenge widget site key |
//! | `FOLIO_DELIVERY_TIMEOUT` | Request timeout in seconds (default: none) |
//! | `FOLIO_SUCCESS_DISPLAY_SECS` | Seconds a success stays visible (default: 5) |

pub mod config;
pub mod coordinator;
pub mod delivery;
pub mod error;
pub mod gate;
pub mod sanitize;
pub mod status;
pub mod types;
pub mod verifier;

// Re-export main types
pub use config::{require_env, ContactConfig, REQUIRED_ENV};
pub use coordinator::ContactForm;
pub use delivery::{DeliveryClient, FormDeliveryClient, DELIVERY_USER_AGENT};
pub use error::{ContactError, ContactResult};
pub use gate::{Honeypot, HONEYPOT_FIELD};
pub use sanitize::{
    is_valid_email, sanitize, sanitize_default, DEFAULT_MAX_LENGTH, EMAIL_MAX_LENGTH,
    MESSAGE_MAX_LENGTH, NAME_MAX_LENGTH,
};
pub use status::{CaptchaNotice, Feedback, FeedbackTone, PipelineStatus};
pub use types::{ContactFields, SubmissionDraft, SubmissionResult, VerificationToken};
pub use verifier::{ChallengeVerifier, SiteKeyVerifier};
