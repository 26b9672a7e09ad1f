//! Admin passcode gate.
//!
//! A single static passcode unlocks the price and product editors. There are
//! no accounts or sessions; the caller decides what the gate protects.

use crate::config::AdminSettings;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Checks admin passcode attempts
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    passcode: Option<String>,
}

impl AdminGate {
    /// Builds the gate from settings. No passcode keeps the gate locked.
    #[must_use]
    pub fn from_settings(settings: &AdminSettings) -> Self {
        let passcode = settings
            .passcode
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string);
        Self { passcode }
    }

    /// Whether a passcode is configured at all
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.passcode.is_some()
    }

    /// Whether `attempt` matches the configured passcode.
    #[must_use]
    pub fn verify(&self, attempt: &str) -> bool {
        let Some(passcode) = &self.passcode else {
            warn!("Admin unlock attempted but no passcode is configured");
            return false;
        };
        let ok: bool = passcode.as_bytes().ct_eq(attempt.trim().as_bytes()).into();
        if !ok {
            warn!("Rejected admin passcode attempt");
        }
        ok
    }
}
