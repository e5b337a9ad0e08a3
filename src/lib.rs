//! Population-based continuous optimization.
//!
//! Provides two interchangeable metaheuristics for bounded, real-valued
//! problems:
//!
//! - **Cuckoo Search (CS)**: random-walk egg laying with strict-improvement
//!   nest replacement and abandonment of the worst nests.
//! - **Particle Swarm Optimization (PSO)**: velocity-driven particles
//!   attracted to their personal best and the swarm best.
//!
//! The user implements [`Problem`] (or builds a [`BoxProblem`] from a
//! closure). Algorithms evolve a [`SolutionSet`] for a fixed number of
//! generations and never admit an infeasible candidate. Fitness is
//! maximized.
//!
//! # Example
//!
//! ```
//! use u_swarm::{BoxProblem, CuckooConfig, CuckooSearch, Optimizer};
//!
//! let problem = BoxProblem::new(vec![-10.0], vec![10.0], |x: &[f64]| -(x[0] - 3.0).powi(2));
//! let mut cs = CuckooSearch::new(CuckooConfig::default().with_max_generations(2_000).with_seed(42));
//! cs.solve(&problem)?;
//!
//! let best = cs.best_solution(&problem)?;
//! assert!((best.variables[0] - 3.0).abs() < 0.5);
//! # Ok::<(), u_swarm::OptimError>(())
//! ```
//!
//! # Errors
//!
//! Failures are returned as [`OptimError`]. In particular, a search
//! space too constrained for the perturbation operator yields
//! [`OptimError::InfeasibleGeneration`] from `solve` instead of
//! continuing with an infeasible candidate.

mod algorithm;
pub mod cuckoo;
mod error;
mod population;
mod problem;
pub mod pso;
mod random;
mod solution;
pub mod ui;

pub use algorithm::{Algorithm, Optimizer, RunStats};
pub use cuckoo::{CuckooConfig, CuckooSearch, Nest, Walk};
pub use error::{OptimError, Result};
pub use population::SolutionSet;
pub use problem::{BoxProblem, Problem};
pub use pso::{ParticleSwarm, Particle, PsoConfig};
pub use random::create_rng;
pub use solution::{Member, Solution, SolutionReport};
