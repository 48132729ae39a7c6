//! Challenge verifier seam.
//!
//! The widget itself lives in the rendering layer. It reports verify/expire
//! events to [`ContactForm::on_verified`](crate::ContactForm::on_verified) and
//! [`ContactForm::on_expired`](crate::ContactForm::on_expired); the coordinator
//! talks back only through [`ChallengeVerifier::reset`].

use tracing::debug;

/// Outbound side of the challenge widget.
pub trait ChallengeVerifier {
    /// Whether the widget has a site key and can issue tokens at all.
    fn is_configured(&self) -> bool;

    /// Force a fresh challenge, invalidating whatever token the widget issued last.
    fn reset(&mut self);
}

/// Verifier backed by a public site key.
///
/// Holds the key for the rendering adapter and counts resets so the adapter
/// can re-key the widget when the count changes.
#[derive(Debug, Clone, Default)]
pub struct SiteKeyVerifier {
    site_key: Option<String>,
    generation: u64,
}

impl SiteKeyVerifier {
    /// An empty key is the same as no key.
    pub fn new(site_key: Option<String>) -> Self {
        Self {
            site_key: site_key.filter(|k| !k.is_empty()),
            generation: 0,
        }
    }

    pub fn site_key(&self) -> Option<&str> {
        self.site_key.as_deref()
    }

    /// Number of resets so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ChallengeVerifier for SiteKeyVerifier {
    fn is_configured(&self) -> bool {
        self.site_key.is_some()
    }

    fn reset(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "challenge reset");
    }
}

impl<V: ChallengeVerifier + ?Sized> ChallengeVerifier for Box<V> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_key_is_unconfigured() {
        assert!(!SiteKeyVerifier::new(None).is_configured());
        assert!(!SiteKeyVerifier::new(Some(String::new())).is_configured());
    }

    #[test]
    fn reset_bumps_generation() {
        let mut verifier = SiteKeyVerifier::new(Some("site-key".to_string()));
        assert!(verifier.is_configured());
        assert_eq!(verifier.site_key(), Some("site-key"));
        verifier.reset();
        verifier.reset();
        assert_eq!(verifier.generation(), 2);
    }
}
