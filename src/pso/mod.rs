//! Particle Swarm Optimization (PSO).
//!
//! Each particle carries a velocity and remembers the best position it
//! has visited. Every generation the velocity is pulled toward the
//! particle's own best (cognitive term) and the swarm's best (social
//! term), damped by an inertia weight, and the particle moves.
//!
//! # Boundary handling
//!
//! Moves are reject-and-retry: an infeasible destination is discarded
//! and the velocity is resampled with fresh random coefficients. If
//! every retry is infeasible the particle holds its position and its
//! velocity is reset to zero. Particles are therefore always feasible.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;
mod types;

pub use config::PsoConfig;
pub use runner::ParticleSwarm;
pub use types::Particle;
