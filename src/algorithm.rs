//! The contract shared by every search algorithm, plus runtime dispatch.

use crate::cuckoo::CuckooSearch;
use crate::error::Result;
use crate::population::SolutionSet;
use crate::problem::Problem;
use crate::pso::ParticleSwarm;
use crate::solution::{Member, Solution};

/// A population-based optimizer.
///
/// Each [`solve`](Optimizer::solve) builds a fresh population from
/// scratch and evolves it for a fixed number of generations. The final
/// population is kept until the next call.
pub trait Optimizer {
    /// Population member type (solution plus algorithm metadata).
    type Member: Member;

    /// Runs the full generation loop on `problem`.
    ///
    /// On error the stored population is discarded and the error is
    /// returned to the caller.
    fn solve<P: Problem>(&mut self, problem: &P) -> Result<()>;

    /// The population of the last successful run, sorted best-first.
    ///
    /// # Errors
    /// [`OptimError::NotSolved`](crate::OptimError::NotSolved) if no run has
    /// completed successfully;
    /// [`OptimError::DimensionMismatch`](crate::OptimError::DimensionMismatch)
    /// if `problem` has a different number of variables than the solved one.
    fn solutions<P: Problem>(&mut self, problem: &P) -> Result<&SolutionSet<Self::Member>>;

    /// Statistics of the last successful run.
    fn stats(&self) -> Option<&RunStats>;

    /// The highest-fitness solution of the last successful run.
    fn best_solution<P: Problem>(&mut self, problem: &P) -> Result<Solution> {
        let set = self.solutions(problem)?;
        Ok(set.most_fit(problem).solution().clone())
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Completed generations.
    pub generations: usize,

    /// Candidates produced by the perturbation operator, including
    /// rejected ones.
    pub perturbations: usize,

    /// Candidates rejected as infeasible.
    pub infeasible: usize,

    /// Candidates that entered the population.
    pub accepted: usize,

    /// Members replaced by abandonment.
    pub abandoned: usize,

    /// Best fitness in the population after each generation.
    pub best_history: Vec<f64>,
}

/// One of the crate's optimizers, selected at runtime.
///
/// # Examples
///
/// ```
/// use u_swarm::{Algorithm, BoxProblem, CuckooConfig, PsoConfig};
///
/// let problem = BoxProblem::new(vec![-10.0], vec![10.0], |x: &[f64]| -(x[0] - 3.0).powi(2));
///
/// let mut algorithms = [
///     Algorithm::cuckoo(CuckooConfig::default().with_max_generations(500).with_seed(1)),
///     Algorithm::swarm(PsoConfig::default().with_max_generations(50).with_seed(1)),
/// ];
/// for alg in &mut algorithms {
///     alg.solve(&problem).unwrap();
///     let best = alg.best_solution(&problem).unwrap();
///     assert!((best.variables[0] - 3.0).abs() < 0.5, "{} missed", alg.name());
/// }
/// ```
#[derive(Debug)]
pub enum Algorithm {
    CuckooSearch(CuckooSearch),
    ParticleSwarm(ParticleSwarm),
}

impl Algorithm {
    pub fn cuckoo(config: crate::cuckoo::CuckooConfig) -> Self {
        Algorithm::CuckooSearch(CuckooSearch::new(config))
    }

    pub fn swarm(config: crate::pso::PsoConfig) -> Self {
        Algorithm::ParticleSwarm(ParticleSwarm::new(config))
    }

    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CuckooSearch(_) => "cuckoo search",
            Algorithm::ParticleSwarm(_) => "particle swarm",
        }
    }

    pub fn solve<P: Problem>(&mut self, problem: &P) -> Result<()> {
        match self {
            Algorithm::CuckooSearch(alg) => alg.solve(problem),
            Algorithm::ParticleSwarm(alg) => alg.solve(problem),
        }
    }

    /// Solutions of the last run, best first, without algorithm metadata.
    pub fn ranked_solutions<P: Problem>(&mut self, problem: &P) -> Result<Vec<Solution>> {
        fn strip<M: Member>(set: &SolutionSet<M>) -> Vec<Solution> {
            set.iter().map(|m| m.solution().clone()).collect()
        }
        match self {
            Algorithm::CuckooSearch(alg) => alg.solutions(problem).map(strip),
            Algorithm::ParticleSwarm(alg) => alg.solutions(problem).map(strip),
        }
    }

    pub fn best_solution<P: Problem>(&mut self, problem: &P) -> Result<Solution> {
        match self {
            Algorithm::CuckooSearch(alg) => alg.best_solution(problem),
            Algorithm::ParticleSwarm(alg) => alg.best_solution(problem),
        }
    }

    pub fn stats(&self) -> Option<&RunStats> {
        match self {
            Algorithm::CuckooSearch(alg) => alg.stats(),
            Algorithm::ParticleSwarm(alg) => alg.stats(),
        }
    }
}

impl From<CuckooSearch> for Algorithm {
    fn from(alg: CuckooSearch) -> Self {
        Algorithm::CuckooSearch(alg)
    }
}

impl From<ParticleSwarm> for Algorithm {
    fn from(alg: ParticleSwarm) -> Self {
        Algorithm::ParticleSwarm(alg)
    }
}
