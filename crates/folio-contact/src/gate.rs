//! Bot gate: a decoy field humans never see.
//!
//! Rendered hidden, unfocusable and without autocomplete. Anything typed into
//! it came from an automated filler.

/// Field name the rendering adapter should give the hidden input.
pub const HONEYPOT_FIELD: &str = "website";

/// Decoy field value for one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Honeypot(String);

impl Honeypot {
    pub fn set(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    /// Any non-empty value trips the gate.
    pub fn is_tripped(&self) -> bool {
        !self.0.is_empty()
    }
}
