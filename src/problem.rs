//! Problem definition trait and a closure-backed box-bounded problem.

use crate::solution::Solution;
use rand::Rng;

/// Defines a continuous optimization problem.
///
/// The user describes the search space; the algorithms in this crate
/// handle population management, perturbation and acceptance.
///
/// # Maximization
///
/// Fitness is maximized. For a minimization target, negate the objective.
///
/// # Contract
///
/// - [`num_variables`](Problem::num_variables) never changes.
/// - [`fitness`](Problem::fitness) and
///   [`within_constraints`](Problem::within_constraints) depend only on
///   the solution's variables.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_swarm::{Problem, Solution};
///
/// struct Parabola;
///
/// impl Problem for Parabola {
///     fn num_variables(&self) -> usize { 1 }
///
///     fn fitness(&self, s: &Solution) -> f64 {
///         -(s.variables[0] - 3.0).powi(2)
///     }
///
///     fn within_constraints(&self, s: &Solution) -> bool {
///         (-10.0..=10.0).contains(&s.variables[0])
///     }
///
///     fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
///         Solution::new(vec![rng.random_range(-10.0..=10.0)])
///     }
/// }
/// ```
pub trait Problem: Send + Sync {
    /// Dimensionality of the search space. At least 1.
    fn num_variables(&self) -> usize;

    /// Scores a solution. Higher is better.
    fn fitness(&self, solution: &Solution) -> f64;

    /// Feasibility predicate. Infeasible solutions never enter a population.
    fn within_constraints(&self, solution: &Solution) -> bool;

    /// Draws a random candidate, ideally feasible.
    ///
    /// Populations redraw infeasible candidates a bounded number of times,
    /// so near-feasible generators are acceptable.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution;
}

type Constraint = Box<dyn Fn(&[f64]) -> bool + Send + Sync>;

/// A box-bounded problem defined by a fitness closure.
///
/// Feasible means every variable is finite and lies inside its
/// `[lower, upper]` interval, and every extra constraint holds.
/// Random draws are uniform inside the box.
///
/// # Examples
///
/// ```
/// use u_swarm::BoxProblem;
///
/// // Maximize area of a rectangular fence with fixed perimeter 100.
/// let fence = BoxProblem::new(vec![0.0], vec![50.0], |x: &[f64]| x[0] * (50.0 - x[0]));
/// ```
pub struct BoxProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    lower: Vec<f64>,
    upper: Vec<f64>,
    fitness_fn: F,
    constraints: Vec<Constraint>,
}

impl<F> BoxProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Creates a problem over the box `[lower[i], upper[i]]`.
    ///
    /// # Panics
    /// Panics if the bound vectors differ in length, are empty, contain a
    /// non-finite bound, or if any `lower[i] > upper[i]`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>, fitness_fn: F) -> Self {
        assert_eq!(lower.len(), upper.len(), "bound vectors must have equal length");
        assert!(!lower.is_empty(), "problem must have at least one variable");
        assert!(
            lower.iter().chain(&upper).all(|b| b.is_finite()),
            "bounds must be finite"
        );
        assert!(
            lower.iter().zip(&upper).all(|(lo, hi)| lo <= hi),
            "lower bounds must not exceed upper bounds"
        );
        Self {
            lower,
            upper,
            fitness_fn,
            constraints: Vec::new(),
        }
    }

    /// Adds a feasibility constraint on top of the box bounds.
    pub fn with_constraint<C>(mut self, constraint: C) -> Self
    where
        C: Fn(&[f64]) -> bool + Send + Sync + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

impl<F> Problem for BoxProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn num_variables(&self) -> usize {
        self.lower.len()
    }

    fn fitness(&self, solution: &Solution) -> f64 {
        (self.fitness_fn)(&solution.variables)
    }

    fn within_constraints(&self, solution: &Solution) -> bool {
        let x = &solution.variables;
        x.len() == self.lower.len()
            && x
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(v, (lo, hi))| v.is_finite() && lo <= v && v <= hi)
            && self.constraints.iter().all(|c| c(x))
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let variables = self
            .lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| rng.random_range(lo..=hi))
            .collect();
        Solution::new(variables)
    }
}
