//! Cuckoo Search generation loop.

use super::config::CuckooConfig;
use super::types::Nest;
use super::walk::Walk;
use crate::algorithm::{Optimizer, RunStats};
use crate::error::{OptimError, Result};
use crate::population::SolutionSet;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::solution::{Member, Solution};
use rand::rngs::StdRng;
use rand::Rng;

/// Cuckoo Search optimizer.
///
/// Owns its random generator and the population of the last run.
///
/// # Usage
///
/// ```
/// use u_swarm::{BoxProblem, CuckooConfig, CuckooSearch, Optimizer};
///
/// let problem = BoxProblem::new(vec![0.0], vec![50.0], |x: &[f64]| x[0] * (50.0 - x[0]));
/// let mut cs = CuckooSearch::new(CuckooConfig::default().with_max_generations(1_000).with_seed(7));
/// cs.solve(&problem).unwrap();
///
/// let best = cs.best_solution(&problem).unwrap();
/// println!("{}", best.report(&problem));
/// ```
#[derive(Debug)]
pub struct CuckooSearch {
    config: CuckooConfig,
    rng: StdRng,
    nests: Option<SolutionSet<Nest>>,
    stats: Option<RunStats>,
}

impl CuckooSearch {
    pub fn new(config: CuckooConfig) -> Self {
        let rng = create_rng(config.seed);
        Self {
            config,
            rng,
            nests: None,
            stats: None,
        }
    }

    pub fn config(&self) -> &CuckooConfig {
        &self.config
    }
}

impl Default for CuckooSearch {
    fn default() -> Self {
        Self::new(CuckooConfig::default())
    }
}

impl Optimizer for CuckooSearch {
    type Member = Nest;

    fn solve<P: Problem>(&mut self, problem: &P) -> Result<()> {
        self.nests = None;
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
            nests = config.population_size,
            generations = config.max_generations,
            abandon_fraction = config.abandon_fraction,
            walk = ?config.walk,
            "starting cuckoo search"
        );

        let mut nests: SolutionSet<Nest> =
            SolutionSet::new(config.population_size, problem.num_variables());
        nests.initialize_with_random_solutions(problem, rng, config.max_retry_attempts)?;

        let mut stats = RunStats::default();
        stats.best_history.reserve(config.max_generations);

        for generation in 0..config.max_generations {
            // Get a cuckoo and lay an egg by random walk.
            let cuckoo = nests.random_member(rng).solution().clone();
            let egg = lay_egg(
                &config.walk,
                problem,
                &cuckoo,
                rng,
                config.max_retry_attempts,
                &mut stats,
            )
            .inspect_err(|_| {
                tracing::warn!(generation, "cuckoo walk never reached a feasible candidate");
            })?;

            // Drop it into a random nest.
            let j = nests.random_index(rng);
            if try_replace(&mut nests, j, Nest::new(egg, generation), problem) {
                stats.accepted += 1;
            }

            stats.abandoned += nests.abandon_worst_solutions(
                problem,
                config.abandon_fraction,
                rng,
                config.max_retry_attempts,
            )?;

            nests.set_run_count(generation + 1);
            stats.generations = generation + 1;

            let best = problem.fitness(nests.most_fit(problem).solution());
            stats.best_history.push(best);
            tracing::trace!(generation, best, "cuckoo generation complete");
        }

        tracing::info!(
            generations = stats.generations,
            accepted = stats.accepted,
            best = stats.best_history.last().copied(),
            "cuckoo search finished"
        );

        self.nests = Some(nests);
        self.stats = Some(stats);
        Ok(())
    }

    fn solutions<P: Problem>(&mut self, problem: &P) -> Result<&SolutionSet<Nest>> {
        let nests = self.nests.as_mut().ok_or(OptimError::NotSolved)?;
        if problem.num_variables() != nests.num_variables() {
            return Err(OptimError::DimensionMismatch {
                expected: nests.num_variables(),
                found: problem.num_variables(),
            });
        }
        nests.sort_by_fitness(problem);
        Ok(&*nests)
    }

    fn stats(&self) -> Option<&RunStats> {
        self.stats.as_ref()
    }
}

/// Walks away from `cuckoo` until a feasible candidate appears.
///
/// One attempt plus `max_retry_attempts` retries.
fn lay_egg<P: Problem, R: Rng>(
    walk: &Walk,
    problem: &P,
    cuckoo: &Solution,
    rng: &mut R,
    max_retry_attempts: usize,
    stats: &mut RunStats,
) -> Result<Solution> {
    for _ in 0..=max_retry_attempts {
        let egg = walk.step(cuckoo, rng);
        stats.perturbations += 1;
        if problem.within_constraints(&egg) {
            return Ok(egg);
        }
        stats.infeasible += 1;
    }
    Err(OptimError::InfeasibleGeneration {
        attempts: max_retry_attempts + 1,
    })
}

/// Replaces nest `j` with `egg` iff the egg is strictly fitter.
fn try_replace<P: Problem>(
    nests: &mut SolutionSet<Nest>,
    j: usize,
    egg: Nest,
    problem: &P,
) -> bool {
    if problem.fitness(&egg.solution) > problem.fitness(&nests.get(j).solution) {
        nests.replace(j, egg);
        true
    } else {
        false
    }
}
