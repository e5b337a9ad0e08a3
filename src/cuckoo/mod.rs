//! Cuckoo Search (CS).
//!
//! A population-based metaheuristic modelled on brood parasitism. Each
//! generation one cuckoo walks away from a random nest to lay an egg
//! (candidate), the egg replaces a second random nest if strictly
//! fitter, and a fraction of the worst nests is abandoned and rebuilt
//! from fresh random draws.
//!
//! Candidates must satisfy the problem's constraints. Walks are retried
//! a bounded number of times; when every retry is infeasible the run
//! fails with [`OptimError::InfeasibleGeneration`](crate::OptimError::InfeasibleGeneration).
//!
//! # References
//!
//! - Yang & Deb (2009), "Cuckoo Search via Lévy Flights"
//! - Mantegna (1994), "Fast, accurate algorithm for numerical simulation
//!   of Lévy stable stochastic processes"

mod config;
mod runner;
mod types;
mod walk;

pub use config::CuckooConfig;
pub use runner::CuckooSearch;
pub use types::Nest;
pub use walk::Walk;
