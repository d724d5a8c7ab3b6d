use subtle::ConstantTimeEq;
use tracing::warn;

use crate::config::GateConfig;
use crate::error::GateError;

/// The access gate: a single static API key guards designated operations.
///
/// The gate is the only authorization mechanism in the system. There are no
/// user identities, sessions, expiry, or rotation; a check is a yes/no
/// decision against one secret, and the guarded operation must not run when
/// the answer is no.
pub struct AccessGate {
    config: GateConfig,
}

impl AccessGate {
    /// Creates a gate from its configuration.
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Compares a presented credential against the configured key.
    ///
    /// Exact and case-sensitive. The comparison runs in constant time so
    /// response latency reveals nothing about how much of the key matched.
    pub fn check(&self, credential: &str) -> bool {
        constant_time_eq(credential, &self.config.api_key)
    }

    /// Admits or denies a request carrying an optional credential.
    ///
    /// In permissive mode every request is admitted without inspection.
    /// Otherwise an absent credential yields
    /// [`GateError::MissingCredential`] and a mismatched one
    /// [`GateError::InvalidCredential`].
    pub fn authorize(&self, credential: Option<&str>) -> Result<(), GateError> {
        if self.config.permissive {
            return Ok(());
        }

        let presented = match credential {
            Some(value) => value,
            None => {
                warn!("request denied: no credential presented");
                return Err(GateError::MissingCredential);
            }
        };

        if self.check(presented) {
            Ok(())
        } else {
            warn!("request denied: credential mismatch");
            Err(GateError::InvalidCredential)
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key itself.
        f.debug_struct("AccessGate")
            .field("permissive", &self.config.permissive)
            .finish()
    }
}

/// Constant-time string equality.
///
/// Both inputs are padded to a common length with distinct fill bytes before
/// comparing, so neither content nor length differences shortcut the scan.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let max_len = std::cmp::max(a.len(), b.len());

    let mut a_padded = vec![0u8; max_len];
    let mut b_padded = vec![0xFFu8; max_len];
    a_padded[..a.len()].copy_from_slice(a.as_bytes());
    b_padded[..b.len()].copy_from_slice(b.as_bytes());

    let lengths_equal = a.len().ct_eq(&b.len());
    let contents_equal = a_padded.ct_eq(&b_padded);
    (lengths_equal & contents_equal).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches_exactly() {
        assert!(constant_time_eq("secret", "secret"));
        assert!(!constant_time_eq("secret", "Secret"));
        assert!(!constant_time_eq("secret", "secre"));
        assert!(!constant_time_eq("secret", "secrets"));
        assert!(constant_time_eq("", ""));
        assert!(!constant_time_eq("", "x"));
    }
}
