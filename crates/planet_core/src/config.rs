// 세션 설정
use crate::diagnostics::DEFAULT_TRIALS;
use crate::error::ConfigError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default self-test tolerance in percentage points
pub const DEFAULT_TOLERANCE: f64 = 2.0;

/// Options for one roll of planet conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Draws per table in the self-test
    pub trials: u64,
    /// Run the probability self-test before selecting
    pub self_test: bool,
    /// Allowed per-item deviation in the self-test (percentage points)
    pub tolerance: f64,
    /// Print the selection as JSON
    pub json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trials: DEFAULT_TRIALS,
            self_test: true,
            tolerance: DEFAULT_TOLERANCE,
            json: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.trials, 10_000);
        assert!(config.self_test);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = SessionConfig { trials: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrials));

        for tolerance in [0.0, -1.0, f64::NAN] {
            let config = SessionConfig { tolerance, ..Default::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidTolerance(_))));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SessionConfig { seed: Some(99), ..Default::default() };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 7, "json": true}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.json);
        assert_eq!(config.trials, DEFAULT_TRIALS);
    }
}
