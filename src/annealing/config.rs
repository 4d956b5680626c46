//! Annealing run parameters.

use serde::{Deserialize, Serialize};

/// Cooling schedule and budget for one annealing run.
///
/// # Example
/// ```
/// use regimen::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric decay factor applied each iteration (0.0..1.0).
    pub cooling_rate: f64,
    /// Fixed iteration budget; the run always uses all of it.
    pub max_iterations: usize,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnnealingConfig::default();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.cooling_rate, 0.95);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_builder() {
        let config = AnnealingConfig::default()
            .with_initial_temperature(500.0)
            .with_cooling_rate(0.9)
            .with_max_iterations(200)
            .with_seed(7);
        assert_eq!(config.initial_temperature, 500.0);
        assert_eq!(config.cooling_rate, 0.9);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.seed, Some(7));
    }
}
