//! Candidate solutions and the population-member contract.
//!
//! [`Solution`] is the bare point in search space. Algorithms that need
//! extra per-candidate state wrap it (composition) and implement
//! [`Member`] so a [`SolutionSet`](crate::SolutionSet) can hold them.

use crate::problem::Problem;
use std::fmt;

/// A point in a continuous search space.
///
/// The length of `variables` equals the owning problem's
/// [`num_variables`](Problem::num_variables).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Decision variable values.
    pub variables: Vec<f64>,
}

impl Solution {
    /// Wraps a variable vector.
    pub fn new(variables: Vec<f64>) -> Self {
        Self { variables }
    }

    /// Number of decision variables.
    pub fn dim(&self) -> usize {
        self.variables.len()
    }

    /// Returns a renderable view pairing the variables with their fitness.
    ///
    /// ```
    /// use u_swarm::{BoxProblem, Solution};
    ///
    /// let problem = BoxProblem::new(vec![-1.0], vec![1.0], |x: &[f64]| -x[0] * x[0]);
    /// let text = Solution::new(vec![0.5]).report(&problem).to_string();
    /// assert!(text.contains("fitness = -0.250000"));
    /// ```
    pub fn report<'a, P: Problem>(&'a self, problem: &P) -> SolutionReport<'a> {
        SolutionReport {
            solution: self,
            fitness: problem.fitness(self),
        }
    }
}

impl From<Vec<f64>> for Solution {
    fn from(variables: Vec<f64>) -> Self {
        Self::new(variables)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.variables.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "x[{i}] = {x:.6}")?;
        }
        Ok(())
    }
}

/// A solution together with its fitness, for presentation layers.
#[derive(Debug, Clone, Copy)]
pub struct SolutionReport<'a> {
    pub solution: &'a Solution,
    pub fitness: f64,
}

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution)?;
        write!(f, "fitness = {:.6}", self.fitness)
    }
}

/// Something that can live in a [`SolutionSet`](crate::SolutionSet).
///
/// Members expose the underlying [`Solution`] for ranking and can be
/// built from a fresh random draw, which the set needs for
/// initialization and abandonment.
pub trait Member: Clone + fmt::Debug {
    /// The candidate point this member represents.
    fn solution(&self) -> &Solution;

    /// Builds a member from a freshly drawn solution placed at `generation`.
    fn from_solution(solution: Solution, generation: usize) -> Self;
}

impl Member for Solution {
    fn solution(&self) -> &Solution {
        self
    }

    fn from_solution(solution: Solution, _generation: usize) -> Self {
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::BoxProblem;

    #[test]
    fn test_display_lists_every_variable() {
        let sol = Solution::new(vec![1.0, -2.5]);
        assert_eq!(sol.to_string(), "x[0] = 1.000000\nx[1] = -2.500000");
    }

    #[test]
    fn test_report_includes_fitness() {
        let problem = BoxProblem::new(vec![0.0; 2], vec![10.0; 2], |x: &[f64]| x.iter().sum());
        let sol = Solution::new(vec![1.0, 2.0]);
        let report = sol.report(&problem);
        assert!((report.fitness - 3.0).abs() < 1e-12);
        assert!(report.to_string().ends_with("fitness = 3.000000"));
    }

    #[test]
    fn test_solution_is_its_own_member() {
        let sol = Solution::from_solution(Solution::from(vec![4.0]), 7);
        assert_eq!(sol.solution().variables, vec![4.0]);
        assert_eq!(sol.dim(), 1);
    }
}
