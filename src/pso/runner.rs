//! PSO generation loop.

use super::config::PsoConfig;
use super::types::Particle;
use crate::algorithm::{Optimizer, RunStats};
use crate::error::{OptimError, Result};
use crate::population::SolutionSet;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::Rng;

/// Particle Swarm optimizer.
///
/// Interchangeable with [`CuckooSearch`](crate::CuckooSearch) through the
/// [`Optimizer`] trait.
///
/// ```
/// use u_swarm::{BoxProblem, Optimizer, ParticleSwarm, PsoConfig};
///
/// let problem = BoxProblem::new(vec![-5.0; 2], vec![5.0; 2], |x: &[f64]| {
///     -(x[0] * x[0] + x[1] * x[1])
/// });
/// let mut pso = ParticleSwarm::new(PsoConfig::default().with_seed(3));
/// pso.solve(&problem).unwrap();
///
/// for particle in pso.solutions(&problem).unwrap() {
///     println!("{particle}");
/// }
/// ```
#[derive(Debug)]
pub struct ParticleSwarm {
    config: PsoConfig,
    rng: StdRng,
    swarm: Option<SolutionSet<Particle>>,
    stats: Option<RunStats>,
}

impl ParticleSwarm {
    pub fn new(config: PsoConfig) -> Self {
        let rng = create_rng(config.seed);
        Self {
            config,
            rng,
            swarm: None,
            stats: None,
        }
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }
}

impl Default for ParticleSwarm {
    fn default() -> Self {
        Self::new(PsoConfig::default())
    }
}

impl Optimizer for ParticleSwarm {
    type Member = Particle;

    fn solve<P: Problem>(&mut self, problem: &P) -> Result<()> {
        self.swarm = None;
        self.stats = None;
        self.config.validate().map_err(OptimError::InvalidConfig)?;
        if problem.num_variables() == 0 {
            return Err(OptimError::InvalidConfig(
                "problem must declare at least one variable".into(),
            ));
        }

        let config = &self.config;
        let rng = &mut self.rng;
        tracing::debug!(
            particles = config.population_size,
            generations = config.max_generations,
            inertia = config.inertia,
            cognitive = config.cognitive,
            social = config.social,
            "starting particle swarm"
        );

        let mut swarm: SolutionSet<Particle> =
            SolutionSet::new(config.population_size, problem.num_variables());
        swarm.initialize_with_random_solutions(problem, rng, config.max_retry_attempts)?;

        for i in 0..swarm.len() {
            let mut particle = swarm.get(i).clone();
            particle.evaluate(problem);
            swarm.replace(i, particle);
        }
        let (mut swarm_best, mut swarm_best_fitness) = best_of(&swarm);

        let mut stats = RunStats::default();
        stats.best_history.reserve(config.max_generations);

        for generation in 0..config.max_generations {
            for i in 0..swarm.len() {
                let mut particle = swarm.get(i).clone();
                if fly(config, &mut particle, &swarm_best, problem, rng, &mut stats) {
                    stats.accepted += 1;
                    particle.evaluate(problem);
                    if particle.best_fitness > swarm_best_fitness {
                        swarm_best.clone_from(&particle.best);
                        swarm_best_fitness = particle.best_fitness;
                    }
                }
                swarm.replace(i, particle);
            }

            swarm.set_run_count(generation + 1);
            stats.generations = generation + 1;
            stats.best_history.push(swarm_best_fitness);
            tracing::trace!(generation, best = swarm_best_fitness, "swarm generation complete");
        }

        tracing::info!(
            generations = stats.generations,
            rejected_moves = stats.infeasible,
            best = swarm_best_fitness,
            "particle swarm finished"
        );

        self.swarm = Some(swarm);
        self.stats = Some(stats);
        Ok(())
    }

    fn solutions<P: Problem>(&mut self, problem: &P) -> Result<&SolutionSet<Particle>> {
        let swarm = self.swarm.as_mut().ok_or(OptimError::NotSolved)?;
        if problem.num_variables() != swarm.num_variables() {
            return Err(OptimError::DimensionMismatch {
                expected: swarm.num_variables(),
                found: problem.num_variables(),
            });
        }
        swarm.sort_by_fitness(problem);
        Ok(&*swarm)
    }

    fn stats(&self) -> Option<&RunStats> {
        self.stats.as_ref()
    }
}

/// Moves `particle` toward its own best and `swarm_best`.
///
/// Returns `false` if every attempt was infeasible; the particle then
/// keeps its position and its velocity is zeroed.
fn fly<P: Problem, R: Rng>(
    config: &PsoConfig,
    particle: &mut Particle,
    swarm_best: &Solution,
    problem: &P,
    rng: &mut R,
    stats: &mut RunStats,
) -> bool {
    let x = &particle.position.variables;
    let dim = x.len();
    let mut velocity = vec![0.0; dim];
    let mut candidate = vec![0.0; dim];

    for _ in 0..=config.max_retry_attempts {
        for d in 0..dim {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            let mut v = config.inertia * particle.velocity[d]
                + config.cognitive * r1 * (particle.best.variables[d] - x[d])
                + config.social * r2 * (swarm_best.variables[d] - x[d]);
            if let Some(limit) = config.velocity_limit {
                v = v.clamp(-limit, limit);
            }
            velocity[d] = v;
            candidate[d] = x[d] + v;
        }
        stats.perturbations += 1;

        let destination = Solution::new(candidate.clone());
        if problem.within_constraints(&destination) {
            particle.position = destination;
            particle.velocity = velocity;
            return true;
        }
        stats.infeasible += 1;
    }

    particle.velocity.fill(0.0);
    false
}

/// Best personal best in the swarm; the first particle if none is finite.
fn best_of(swarm: &SolutionSet<Particle>) -> (Solution, f64) {
    let mut best = swarm.get(0);
    for particle in swarm {
        if particle.best_fitness > best.best_fitness {
            best = particle;
        }
    }
    (best.best.clone(), best.best_fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::BoxProblem;

    fn parabola() -> BoxProblem<impl Fn(&[f64]) -> f64 + Send + Sync> {
        BoxProblem::new(vec![-10.0], vec![10.0], |x: &[f64]| -(x[0] - 3.0).powi(2))
    }

    fn small_config() -> PsoConfig {
        PsoConfig::default()
            .with_population_size(20)
            .with_max_generations(100)
            .with_seed(42)
    }

    #[test]
    fn test_parabola_converges() {
        let problem = parabola();
        let mut pso = ParticleSwarm::new(small_config());
        pso.solve(&problem).unwrap();

        let best = pso.best_solution(&problem).unwrap();
        assert!(
            (best.variables[0] - 3.0).abs() < 0.5,
            "expected x near 3, got {}",
            best.variables[0]
        );
    }

    #[test]
    fn test_sphere_converges() {
        let problem = BoxProblem::new(vec![-5.0; 5], vec![5.0; 5], |x: &[f64]| {
            -x.iter().map(|v| v * v).sum::<f64>()
        });
        let mut pso = ParticleSwarm::new(small_config().with_max_generations(300));
        pso.solve(&problem).unwrap();

        let best = pso.stats().unwrap().best_history.last().copied().unwrap();
        assert!(best > -0.1, "expected near-zero sphere value, got {best}");
    }

    #[test]
    fn test_boundary_optimum_stays_feasible() {
        // Optimum on the upper bound: particles keep overshooting it.
        let problem = BoxProblem::new(vec![0.0; 2], vec![1.0; 2], |x: &[f64]| x[0] + x[1]);
        let mut pso = ParticleSwarm::new(small_config().with_max_generations(50));
        pso.solve(&problem).unwrap();

        let stats = pso.stats().unwrap().clone();
        assert!(stats.infeasible > 0, "expected rejected moves near the bound");

        let swarm = pso.solutions(&problem).unwrap();
        assert!(swarm.iter().all(|p| problem.within_constraints(&p.position)));
        assert!(swarm.iter().all(|p| problem.within_constraints(&p.best)));
        let best = problem.fitness(&swarm.most_fit(&problem).position);
        assert!(best > 1.9, "expected near 2.0, got {best}");
    }

    #[test]
    fn test_best_history_non_decreasing() {
        let problem = parabola();
        let mut pso = ParticleSwarm::new(small_config());
        pso.solve(&problem).unwrap();

        let stats = pso.stats().unwrap();
        assert_eq!(stats.best_history.len(), 100);
        for w in stats.best_history.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_solve_twice_builds_fresh_swarm() {
        let problem = parabola();
        let mut pso = ParticleSwarm::new(small_config().with_max_generations(10));

        pso.solve(&problem).unwrap();
        assert_eq!(pso.solutions(&problem).unwrap().len(), 20);

        pso.solve(&problem).unwrap();
        let swarm = pso.solutions(&problem).unwrap();
        assert_eq!(swarm.len(), 20);
        assert_eq!(swarm.run_count(), 10);
        assert_eq!(pso.stats().unwrap().generations, 10);
    }

    #[test]
    fn test_not_solved() {
        let mut pso = ParticleSwarm::new(small_config());
        assert_eq!(pso.solutions(&parabola()).unwrap_err(), OptimError::NotSolved);
    }

    #[test]
    fn test_solutions_reject_other_dimension() {
        let problem = parabola();
        let mut pso = ParticleSwarm::new(small_config().with_max_generations(10));
        pso.solve(&problem).unwrap();

        let cube = BoxProblem::new(vec![-1.0; 3], vec![1.0; 3], |x: &[f64]| x[0]);
        let mismatch = OptimError::DimensionMismatch {
            expected: 1,
            found: 3,
        };
        assert_eq!(pso.solutions(&cube).unwrap_err(), mismatch);
        assert_eq!(pso.best_solution(&cube).unwrap_err(), mismatch);
        assert!(pso.solutions(&problem).is_ok());
    }

    #[test]
    fn test_infeasible_initialization_fails() {
        let problem =
            BoxProblem::new(vec![0.0], vec![1.0], |x: &[f64]| x[0]).with_constraint(|_| false);
        let mut pso = ParticleSwarm::new(small_config());
        let err = pso.solve(&problem).unwrap_err();
        assert_eq!(err, OptimError::InfeasibleGeneration { attempts: 21 });
    }

    #[test]
    fn test_fly_rejected_holds_position() {
        // Only x <= 0 is feasible; every pull toward x = 1 overshoots.
        let problem = BoxProblem::new(vec![-1.0], vec![1.0], |x: &[f64]| x[0])
            .with_constraint(|x| x[0] <= 0.0);
        let config = PsoConfig::default()
            .with_inertia(0.0)
            .with_cognitive(0.0)
            .with_social(1.0)
            .with_max_retry_attempts(3);
        let mut particle = Particle::new(Solution::new(vec![0.0]));
        particle.velocity = vec![0.4];
        let mut rng = create_rng(Some(1));
        let mut stats = RunStats::default();

        let moved = fly(
            &config,
            &mut particle,
            &Solution::new(vec![1.0]),
            &problem,
            &mut rng,
            &mut stats,
        );

        assert!(!moved);
        assert_eq!(particle.position.variables, vec![0.0]);
        assert_eq!(particle.velocity, vec![0.0]);
        assert_eq!(stats.perturbations, 4);
        assert_eq!(stats.infeasible, 4);
    }

    #[test]
    fn test_fly_velocity_limit() {
        let problem = BoxProblem::new(vec![-100.0], vec![100.0], |x: &[f64]| x[0]);
        let config = PsoConfig::default()
            .with_inertia(1.0)
            .with_cognitive(0.0)
            .with_social(0.0)
            .with_velocity_limit(0.5);
        let mut particle = Particle::new(Solution::new(vec![0.0]));
        particle.velocity = vec![10.0];
        let mut rng = create_rng(Some(1));
        let mut stats = RunStats::default();

        assert!(fly(
            &config,
            &mut particle,
            &Solution::new(vec![0.0]),
            &problem,
            &mut rng,
            &mut stats,
        ));
        assert_eq!(particle.velocity, vec![0.5]);
        assert_eq!(particle.position.variables, vec![0.5]);
    }
}
