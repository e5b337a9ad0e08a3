//! PSO configuration.

/// Configuration for Particle Swarm Optimization.
///
/// The velocity update for dimension `d` is
///
/// ```text
/// v[d] = inertia * v[d]
///      + cognitive * r1 * (personal_best[d] - x[d])
///      + social    * r2 * (swarm_best[d]    - x[d])
/// ```
///
/// with fresh `r1, r2 ~ U[0, 1)` per dimension.
///
/// # Examples
///
/// ```
/// use u_swarm::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_population_size(40)
///     .with_inertia(0.6)
///     .with_velocity_limit(2.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub population_size: usize,

    /// Number of generations. There is no other stopping criterion.
    pub max_generations: usize,

    /// Inertia weight `w`. Typical range: 0.4–0.9.
    pub inertia: f64,

    /// Cognitive coefficient `c1` (pull toward the personal best).
    pub cognitive: f64,

    /// Social coefficient `c2` (pull toward the swarm best).
    pub social: f64,

    /// Optional per-component velocity clamp `|v[d]| <= limit`.
    pub velocity_limit: Option<f64>,

    /// Extra attempts allowed when a move or a random draw is infeasible.
    pub max_retry_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 200,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            velocity_limit: None,
            max_retry_attempts: 20,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    pub fn with_velocity_limit(mut self, limit: f64) -> Self {
        self.velocity_limit = Some(limit);
        self
    }

    pub fn with_max_retry_attempts(mut self, n: usize) -> Self {
        self.max_retry_attempts = n;
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
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }
        if let Some(limit) = self.velocity_limit {
            if !(limit > 0.0) {
                return Err(format!("velocity_limit must be positive, got {limit}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 200);
        assert!((config.inertia - 0.7).abs() < 1e-12);
        assert!((config.cognitive - 1.5).abs() < 1e-12);
        assert!((config.social - 1.5).abs() < 1e-12);
        assert!(config.velocity_limit.is_none());
        assert_eq!(config.max_retry_attempts, 20);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_population_size(10)
            .with_max_generations(50)
            .with_inertia(0.5)
            .with_cognitive(2.0)
            .with_social(1.0)
            .with_velocity_limit(3.0)
            .with_max_retry_attempts(4)
            .with_seed(9);

        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_generations, 50);
        assert!((config.inertia - 0.5).abs() < 1e-12);
        assert!((config.cognitive - 2.0).abs() < 1e-12);
        assert!((config.social - 1.0).abs() < 1e-12);
        assert_eq!(config.velocity_limit, Some(3.0));
        assert_eq!(config.max_retry_attempts, 4);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_ok() {
        assert!(PsoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_swarm() {
        assert!(PsoConfig::default().with_population_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_negative_coefficient() {
        assert!(PsoConfig::default().with_social(-1.0).validate().is_err());
        assert!(PsoConfig::default().with_inertia(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_velocity_limit() {
        assert!(PsoConfig::default().with_velocity_limit(0.0).validate().is_err());
        assert!(PsoConfig::default().with_velocity_limit(0.1).validate().is_ok());
    }
}
