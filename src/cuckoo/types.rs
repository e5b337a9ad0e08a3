//! Population member for Cuckoo Search.

use crate::solution::{Member, Solution};
use std::fmt;

/// A host nest: a solution and the generation it was placed in.
///
/// Nests from the initial population carry generation `0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nest {
    pub solution: Solution,
    pub generation: usize,
}

impl Nest {
    pub fn new(solution: Solution, generation: usize) -> Self {
        Self {
            solution,
            generation,
        }
    }
}

impl Member for Nest {
    fn solution(&self) -> &Solution {
        &self.solution
    }

    fn from_solution(solution: Solution, generation: usize) -> Self {
        Self::new(solution, generation)
    }
}

impl fmt::Display for Nest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution)?;
        write!(f, "placed in generation {}", self.generation)
    }
}
