//! Sampling parameters carried by each persona.

use serde::{Deserialize, Serialize};

/// Default temperature for a persona with no override.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Default repeat penalty for a persona with no override.
///
/// Repeat penalty is reserved: it is stored and surfaced but never
/// forwarded to the completion call.
pub const DEFAULT_REPEAT_PENALTY: f64 = 1.1;

/// Sampling configuration for one persona (Value Object)
///
/// The seed is supplied as a float and rounded to the nearest integer, the
/// form completion backends accept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub seed: i64,
    pub repeat_penalty: f64,
}

impl SamplingParams {
    /// Create sampling parameters, rounding the supplied seed.
    pub fn new(temperature: f64, seed: f64, repeat_penalty: f64) -> Self {
        Self {
            temperature,
            seed: seed.round() as i64,
            repeat_penalty,
        }
    }

    /// Resolve optional overrides against the defaults.
    ///
    /// A missing seed draws a random one, so two personas built without
    /// explicit seeds are not forced into identical sampling.
    pub fn resolve(
        temperature: Option<f64>,
        seed: Option<f64>,
        repeat_penalty: Option<f64>,
    ) -> Self {
        Self::new(
            temperature.unwrap_or(DEFAULT_TEMPERATURE),
            seed.unwrap_or_else(rand::random::<f64>),
            repeat_penalty.unwrap_or(DEFAULT_REPEAT_PENALTY),
        )
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rounds_to_nearest_integer() {
        assert_eq!(SamplingParams::new(0.5, 41.6, 1.1).seed, 42);
        assert_eq!(SamplingParams::new(0.5, 41.4, 1.1).seed, 41);
        assert_eq!(SamplingParams::new(0.5, -0.7, 1.1).seed, -1);
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let params = SamplingParams::resolve(None, Some(7.0), None);
        assert_eq!(params.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(params.seed, 7);
        assert_eq!(params.repeat_penalty, DEFAULT_REPEAT_PENALTY);
    }

    #[test]
    fn test_resolve_keeps_overrides() {
        let params = SamplingParams::resolve(Some(0.9), Some(3.2), Some(1.3));
        assert_eq!(params.temperature, 0.9);
        assert_eq!(params.seed, 3);
        assert_eq!(params.repeat_penalty, 1.3);
    }

    #[test]
    fn test_default_seed_is_unit_interval_rounded() {
        // rand::random::<f64>() samples [0, 1), so the rounded seed is 0 or 1
        let params = SamplingParams::default();
        assert!(params.seed == 0 || params.seed == 1);
    }
}
