//! Pipeline configuration.
//!
//! The core never reads the environment on its own. [`ContactConfig::from_env`]
//! is the one place that does, and it is meant to be called from the edge
//! (the CLI or whatever hosts the form) before the config is handed to
//! [`ContactForm`](crate::ContactForm) and [`DeliveryClient`](crate::DeliveryClient).

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};

/// Delivery endpoint URL override.
pub const ENV_DELIVERY_URL: &str = "FOLIO_DELIVERY_URL";
/// Access credential for the delivery endpoint.
pub const ENV_ACCESS_KEY: &str = "FOLIO_DELIVERY_ACCESS_KEY";
/// Public site key for the challenge widget.
pub const ENV_SITE_KEY: &str = "FOLIO_HCAPTCHA_SITE_KEY";
/// Optional request timeout in seconds.
pub const ENV_TIMEOUT: &str = "FOLIO_DELIVERY_TIMEOUT";
/// How long a success status stays visible, in seconds.
pub const ENV_SUCCESS_DISPLAY: &str = "FOLIO_SUCCESS_DISPLAY_SECS";

/// Variables that must be set for the form to be usable.
pub const REQUIRED_ENV: &[&str] = &[ENV_ACCESS_KEY, ENV_SITE_KEY];

/// Contact pipeline configuration.
///
/// `Debug` output never contains the access key.
#[derive(Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form delivery endpoint.
    #[serde(default = "default_delivery_url")]
    pub delivery_url: String,

    /// Delivery endpoint access credential.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Challenge widget site key.
    #[serde(default)]
    pub site_key: Option<String>,

    /// Request timeout in seconds. `None` leaves the platform default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Seconds a `Success` status is shown before returning to `Idle`.
    #[serde(default = "default_success_display")]
    pub success_display_secs: u64,
}

fn default_delivery_url() -> String {
    "https://api.web3forms.com/submit".to_string()
}

fn default_success_display() -> u64 {
    5
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delivery_url: default_delivery_url(),
            access_key: None,
            site_key: None,
            timeout_secs: None,
            success_display_secs: default_success_display(),
        }
    }
}

impl fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactConfig")
            .field("delivery_url", &self.delivery_url)
            .field("access_key", &self.access_key.as_ref().map(|_| "[REDACTED]"))
            .field("site_key", &self.site_key)
            .field("timeout_secs", &self.timeout_secs)
            .field("success_display_secs", &self.success_display_secs)
            .finish()
    }
}

impl ContactConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `FOLIO_DELIVERY_URL` | Delivery endpoint (default: `https://api.web3forms.com/submit`) |
    /// | `FOLIO_DELIVERY_ACCESS_KEY` | Delivery access credential |
    /// | `FOLIO_HCAPTCHA_SITE_KEY` | Challenge widget site key |
    /// | `FOLIO_DELIVERY_TIMEOUT` | Request timeout in seconds (default: none) |
    /// | `FOLIO_SUCCESS_DISPLAY_SECS` | Success display duration (default: 5) |
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            delivery_url: non_empty_var(ENV_DELIVERY_URL).unwrap_or_else(default_delivery_url),
            access_key: non_empty_var(ENV_ACCESS_KEY),
            site_key: non_empty_var(ENV_SITE_KEY),
            timeout_secs: non_empty_var(ENV_TIMEOUT).and_then(|v| v.parse().ok()),
            success_display_secs: non_empty_var(ENV_SUCCESS_DISPLAY)
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_success_display),
        }
    }

    /// Check that every required credential is present and the endpoint parses.
    ///
    /// All missing keys are reported together.
    pub fn validate(&self) -> ContactResult<()> {
        let mut missing = Vec::new();
        if is_blank(self.access_key.as_deref()) {
            missing.push(ENV_ACCESS_KEY.to_string());
        }
        if is_blank(self.site_key.as_deref()) {
            missing.push(ENV_SITE_KEY.to_string());
        }
        if !missing.is_empty() {
            return Err(ContactError::Config { missing });
        }

        let url = url::Url::parse(&self.delivery_url).map_err(|e| ContactError::InvalidConfig {
            key: ENV_DELIVERY_URL.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ContactError::InvalidConfig {
                key: ENV_DELIVERY_URL.to_string(),
                reason: format!("unsupported scheme: {}", url.scheme()),
            });
        }

        Ok(())
    }

    /// Delivery credential, if one is configured.
    pub fn credential(&self) -> Option<&str> {
        self.access_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_secs(self.success_display_secs)
    }

    /// Set the delivery credential.
    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Set the challenge site key.
    pub fn with_site_key(mut self, key: impl Into<String>) -> Self {
        self.site_key = Some(key.into());
        self
    }

    /// Set the delivery endpoint.
    pub fn with_delivery_url(mut self, url: impl Into<String>) -> Self {
        self.delivery_url = url.into();
        self
    }

    /// Set an explicit request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the success display duration.
    pub fn with_success_display_secs(mut self, secs: u64) -> Self {
        self.success_display_secs = secs;
        self
    }
}

/// Read a single required variable, failing if it is unset or empty.
pub fn require_env(key: &str) -> ContactResult<String> {
    non_empty_var(key).ok_or_else(|| ContactError::Config {
        missing: vec![key.to_string()],
    })
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
