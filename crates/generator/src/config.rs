//! Configuration for a generation run.

use thiserror::Error;

/// Errors detected before any generation begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The rank count was zero.
    #[error("rank count must be positive")]
    ZeroRanks,
}

/// Configuration for one trace generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of ranks in the simulated computation.
    pub nranks: u32,

    /// Number of timesteps to generate.
    pub timesteps: u32,

    /// Random seed for reproducible runs.
    ///
    /// `None` seeds from OS entropy, so message sizes differ run to run.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a configuration with unseeded randomness.
    pub fn new(nranks: u32, timesteps: u32) -> Self {
        Self {
            nranks,
            timesteps,
            seed: None,
        }
    }

    /// Set an explicit random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nranks == 0 {
            return Err(ConfigError::ZeroRanks);
        }
        Ok(())
    }

    /// Number of events a full run emits.
    ///
    /// Each rank initiates one exchange per timestep; an exchange is two
    /// sub-exchanges of two events each.
    pub fn total_events(&self) -> u64 {
        4 * self.nranks as u64 * self.timesteps as u64
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_ranks() {
        let config = GeneratorConfig::new(0, 2);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRanks));
    }

    #[test]
    fn test_validate_accepts_zero_timesteps() {
        let config = GeneratorConfig::new(4, 0);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_events(), 0);
    }

    #[test]
    fn test_total_events() {
        assert_eq!(GeneratorConfig::new(4, 2).total_events(), 32);
        assert_eq!(GeneratorConfig::new(1, 3).total_events(), 12);
    }
}
