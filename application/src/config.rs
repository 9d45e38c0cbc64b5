//! Application-level configuration.
//!
//! This module provides configuration types that control how agents behave,
//! currently the retry policy wrapped around completion calls.

use std::time::Duration;

/// Retry policy for transient completion failures.
///
/// A persona makes up to `max_attempts` completion calls, pausing `delay`
/// between attempts, before propagating the last error to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1).
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Retry without pausing. Useful for tests and offline gateways.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    /// Six attempts with a three-minute pause, sized for rate/token-limit
    /// windows on hosted completion services.
    fn default() -> Self {
        Self::new(6, Duration::from_secs(3 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 6);
        assert_eq!(policy.delay, Duration::from_secs(180));
    }

    #[test]
    fn test_at_least_one_attempt() {
        assert_eq!(RetryPolicy::immediate(0).max_attempts, 1);
    }
}
