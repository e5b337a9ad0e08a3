//! Cuckoo Search configuration.

use super::walk::Walk;

/// Configuration for Cuckoo Search.
///
/// # Examples
///
/// ```
/// use u_swarm::cuckoo::{CuckooConfig, Walk};
///
/// let config = CuckooConfig::default()
///     .with_population_size(25)
///     .with_max_generations(5_000)
///     .with_abandon_fraction(0.2)
///     .with_walk(Walk::Levy { beta: 1.5, step_size: 0.05 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuckooConfig {
    /// Number of host nests in the population.
    pub population_size: usize,

    /// Number of generations. There is no other stopping criterion.
    pub max_generations: usize,

    /// Fraction of the worst nests abandoned every generation (0.0–1.0).
    ///
    /// The count is `floor(abandon_fraction * population_size)`.
    pub abandon_fraction: f64,

    /// Extra attempts allowed when a walk or a random draw is infeasible.
    ///
    /// A walk is tried once plus this many retries before the run fails.
    pub max_retry_attempts: usize,

    /// Step operator used to lay new eggs.
    pub walk: Walk,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for CuckooConfig {
    fn default() -> Self {
        Self {
            population_size: 15,
            max_generations: 20_000,
            abandon_fraction: 0.25,
            max_retry_attempts: 20,
            walk: Walk::default(),
            seed: None,
        }
    }
}

impl CuckooConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the abandonment fraction, clamped to `[0, 1]`.
    pub fn with_abandon_fraction(mut self, fraction: f64) -> Self {
        self.abandon_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_retry_attempts(mut self, n: usize) -> Self {
        self.max_retry_attempts = n;
        self
    }

    pub fn with_walk(mut self, walk: Walk) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.abandon_fraction) {
            return Err(format!(
                "abandon_fraction must be in [0, 1], got {}",
                self.abandon_fraction
            ));
        }
        let abandoned = (self.population_size as f64 * self.abandon_fraction).floor() as usize;
        if abandoned >= self.population_size {
            return Err("abandon_fraction too high: every nest would be abandoned".into());
        }
        self.walk.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CuckooConfig::default();
        assert_eq!(config.population_size, 15);
        assert_eq!(config.max_generations, 20_000);
        assert!((config.abandon_fraction - 0.25).abs() < 1e-12);
        assert_eq!(config.max_retry_attempts, 20);
        assert_eq!(config.walk, Walk::Gaussian { step_size: 0.1 });
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CuckooConfig::default()
            .with_population_size(40)
            .with_max_generations(100)
            .with_abandon_fraction(0.1)
            .with_max_retry_attempts(5)
            .with_walk(Walk::Uniform { step_size: 1.0 })
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 100);
        assert!((config.abandon_fraction - 0.1).abs() < 1e-12);
        assert_eq!(config.max_retry_attempts, 5);
        assert_eq!(config.walk, Walk::Uniform { step_size: 1.0 });
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(CuckooConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = CuckooConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = CuckooConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_abandon_fraction_clamped() {
        let config = CuckooConfig::default().with_abandon_fraction(-0.3);
        assert_eq!(config.abandon_fraction, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_abandon_everything() {
        let config = CuckooConfig::default().with_abandon_fraction(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_walk() {
        let config = CuckooConfig::default().with_walk(Walk::Gaussian { step_size: -1.0 });
        assert!(config.validate().is_err());
    }
}
