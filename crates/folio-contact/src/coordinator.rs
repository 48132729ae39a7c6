//! Submission coordinator: the contact form state machine.
//!
//! One [`ContactForm`] per form session. It owns the draft, the honeypot and the
//! verification token, and publishes [`PipelineStatus`] through a watch channel
//! so a UI binding only has to subscribe and render.
//!
//! A submit runs these checks in order and stops at the first that applies:
//!
//! 1. honeypot filled → `Success` (fabricated, nothing is sent)
//! 2. no token → `CaptchaRequired`
//! 3. no delivery credential → `Error`
//! 4. sanitize fields
//! 5. email shape → `InvalidEmail`
//! 6. empty field → `InvalidInput`
//! 7. `Sending`, one delivery call → `Success` or `Error`
//!
//! Every delivery attempt consumes the token and resets the verifier.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::{ContactConfig, ENV_ACCESS_KEY};
use crate::delivery::DeliveryClient;
use crate::gate::Honeypot;
use crate::sanitize::is_valid_email;
use crate::status::{CaptchaNotice, PipelineStatus};
use crate::types::{SubmissionDraft, SubmissionResult, VerificationToken};
use crate::verifier::ChallengeVerifier;

/// Published status plus a counter bumped on every transition.
///
/// The auto-clear task only resets a `Success` whose transition it was
/// scheduled for.
#[derive(Debug)]
struct StatusChannel {
    tx: watch::Sender<PipelineStatus>,
    epoch: AtomicU64,
}

impl StatusChannel {
    fn set(&self, status: PipelineStatus) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_replace(status);
        epoch
    }

    fn clear_success(&self, epoch: u64) -> bool {
        self.tx.send_if_modified(|status| {
            if *status == PipelineStatus::Success && self.epoch.load(Ordering::SeqCst) == epoch {
                *status = PipelineStatus::Idle;
                true
            } else {
                false
            }
        })
    }
}

/// Contact form session.
pub struct ContactForm<D, V> {
    draft: SubmissionDraft,
    honeypot: Honeypot,
    token: Option<VerificationToken>,
    credential: Option<String>,
    success_display: Duration,
    delivery: D,
    verifier: V,
    status: Arc<StatusChannel>,
    pending_clear: Option<JoinHandle<()>>,
}

impl<D, V> ContactForm<D, V>
where
    D: DeliveryClient,
    V: ChallengeVerifier,
{
    /// Build a form from explicit config. Only the credential and the success
    /// display duration are taken from `config`.
    pub fn new(config: &ContactConfig, delivery: D, verifier: V) -> Self {
        let (tx, _rx) = watch::channel(PipelineStatus::Idle);
        Self {
            draft: SubmissionDraft::default(),
            honeypot: Honeypot::default(),
            token: None,
            credential: config.credential().map(str::to_string),
            success_display: config.success_display(),
            delivery,
            verifier,
            status: Arc::new(StatusChannel {
                tx,
                epoch: AtomicU64::new(0),
            }),
            pending_clear: None,
        }
    }

    pub fn status(&self) -> PipelineStatus {
        *self.status.tx.borrow()
    }

    /// Observe status transitions.
    pub fn subscribe(&self) -> watch::Receiver<PipelineStatus> {
        self.status.tx.subscribe()
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    /// Bound to the hidden decoy input.
    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.honeypot.set(value);
    }

    /// Character count for the message counter.
    pub fn message_length(&self) -> usize {
        self.draft.message.chars().count()
    }

    /// Widget verify event.
    pub fn on_verified(&mut self, token: VerificationToken) {
        if !self.verifier.is_configured() {
            warn!("ignoring verification token: challenge widget has no site key");
            return;
        }
        debug!("verification token received");
        self.token = Some(token);
    }

    /// Widget expire event.
    pub fn on_expired(&mut self) {
        if self.token.take().is_some() {
            debug!("verification token expired");
        }
    }

    /// Whether the submit affordance is enabled.
    pub fn can_submit(&self) -> bool {
        self.token.is_some() && self.status() != PipelineStatus::Sending
    }

    pub fn captcha_notice(&self) -> CaptchaNotice {
        if !self.verifier.is_configured() {
            return CaptchaNotice::NotConfigured;
        }
        let status = self.status();
        if self.token.is_none()
            && status != PipelineStatus::Sending
            && status != PipelineStatus::Success
        {
            CaptchaNotice::Prompt
        } else {
            CaptchaNotice::None
        }
    }

    /// Run one submission attempt and return the resulting status.
    ///
    /// The delivery call needs a Tokio runtime. Outside one, a `Success` is
    /// still published but its auto-clear is not scheduled.
    pub async fn submit(&mut self) -> PipelineStatus {
        if self.honeypot.is_tripped() {
            debug!("honeypot filled, discarding submission");
            self.succeed();
            return PipelineStatus::Success;
        }

        if self.token.is_none() {
            return self.transition(PipelineStatus::CaptchaRequired);
        }

        let Some(credential) = self.credential.clone() else {
            error!(
                key = ENV_ACCESS_KEY,
                "delivery access key not configured, cannot send contact form"
            );
            return self.transition(PipelineStatus::Error);
        };

        let fields = self.draft.sanitized();

        if !is_valid_email(&fields.email) {
            return self.transition(PipelineStatus::InvalidEmail);
        }

        if fields.has_empty_field() {
            return self.transition(PipelineStatus::InvalidInput);
        }

        let Some(token) = self.token.take() else {
            return self.transition(PipelineStatus::CaptchaRequired);
        };

        self.transition(PipelineStatus::Sending);
        let result = self.delivery.submit(&fields, &token, &credential).await;
        self.verifier.reset();

        match result {
            SubmissionResult::Success => {
                info!("contact form delivered");
                self.draft.clear();
                self.succeed();
                PipelineStatus::Success
            }
            SubmissionResult::Failure => self.transition(PipelineStatus::Error),
        }
    }

    fn transition(&mut self, status: PipelineStatus) -> PipelineStatus {
        self.cancel_pending_clear();
        self.status.set(status);
        debug!(status = %status, "contact form status");
        status
    }

    /// Enter `Success` and schedule the return to `Idle`.
    fn succeed(&mut self) {
        self.transition(PipelineStatus::Success);
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            debug!("no tokio runtime, success status will not auto-clear");
            return;
        };
        let epoch = self.status.epoch.load(Ordering::SeqCst);
        let channel = Arc::clone(&self.status);
        let delay = self.success_display;
        self.pending_clear = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            channel.clear_success(epoch);
        }));
    }

    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

impl<D, V> Drop for ContactForm<D, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

impl<D, V> std::fmt::Debug for ContactForm<D, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &*self.status.tx.borrow())
            .field("draft", &self.draft)
            .field("has_token", &self.token.is_some())
            .field("has_credential", &self.credential.is_some())
            .finish_non_exhaustive()
    }
}
