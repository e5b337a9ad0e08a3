//! Swarm member: position plus velocity and personal best.

use crate::problem::Problem;
use crate::solution::{Member, Solution};
use std::fmt;

/// A particle in the swarm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Current position. Always feasible.
    pub position: Solution,

    /// Velocity applied on the last move.
    pub velocity: Vec<f64>,

    /// Best position this particle has visited.
    pub best: Solution,

    /// Fitness of `best`. `-inf` until the particle is first evaluated.
    pub best_fitness: f64,
}

impl Particle {
    /// A stationary particle at `position`.
    pub fn new(position: Solution) -> Self {
        Self {
            velocity: vec![0.0; position.dim()],
            best: position.clone(),
            position,
            best_fitness: f64::NEG_INFINITY,
        }
    }

    /// Scores the current position and updates the personal best on
    /// strict improvement. Returns the position's fitness.
    pub fn evaluate<P: Problem>(&mut self, problem: &P) -> f64 {
        let fitness = problem.fitness(&self.position);
        if fitness > self.best_fitness {
            self.best.clone_from(&self.position);
            self.best_fitness = fitness;
        }
        fitness
    }
}

impl Member for Particle {
    fn solution(&self) -> &Solution {
        &self.position
    }

    fn from_solution(solution: Solution, _generation: usize) -> Self {
        Self::new(solution)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position:")?;
        writeln!(f, "{}", self.position)?;
        write!(f, "velocity: [")?;
        for (i, v) in self.velocity.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:.6}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "personal best (fitness = {:.6}):", self.best_fitness)?;
        write!(f, "{}", self.best)
    }
}
