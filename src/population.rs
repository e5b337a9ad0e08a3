//! Fixed-size population of candidate solutions.
//!
//! [`SolutionSet`] is shared by every algorithm in the crate. It owns
//! the members, ranks them against a [`Problem`], and performs the
//! abandonment (diversification) step that replaces the worst members
//! with fresh random draws.
//!
//! Every member entering the set is checked with
//! [`Problem::within_constraints`] first, so a population never holds an
//! infeasible candidate.

use crate::error::{OptimError, Result};
use crate::problem::Problem;
use crate::solution::{Member, Solution};
use rand::Rng;
use std::cmp::Ordering;

/// A population of `size` members over a `num_variables`-dimensional space.
///
/// # Examples
///
/// ```
/// use u_swarm::{BoxProblem, Solution, SolutionSet};
/// use rand::SeedableRng;
///
/// let problem = BoxProblem::new(vec![-5.0], vec![5.0], |x: &[f64]| -x[0].abs());
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let mut set: SolutionSet<Solution> = SolutionSet::new(10, 1);
/// set.initialize_with_random_solutions(&problem, &mut rng, 20).unwrap();
/// set.sort_by_fitness(&problem);
/// assert_eq!(set.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SolutionSet<M: Member> {
    members: Vec<M>,
    size: usize,
    num_variables: usize,
    run_count: usize,
}

impl<M: Member> SolutionSet<M> {
    /// Creates an empty set sized for `size` members of `num_variables`
    /// variables. Call
    /// [`initialize_with_random_solutions`](Self::initialize_with_random_solutions)
    /// before use.
    pub fn new(size: usize, num_variables: usize) -> Self {
        Self {
            members: Vec::with_capacity(size),
            size,
            num_variables,
            run_count: 0,
        }
    }

    /// Fills every slot with a feasible random draw from `problem`.
    ///
    /// Each slot is redrawn up to `max_attempts` extra times while the
    /// draw is infeasible. Any previous members are discarded.
    ///
    /// # Errors
    /// - [`OptimError::DimensionMismatch`] if the problem's dimensionality
    ///   differs from the one this set was sized for.
    /// - [`OptimError::InfeasibleGeneration`] if a slot cannot be filled.
    pub fn initialize_with_random_solutions<P: Problem, R: Rng>(
        &mut self,
        problem: &P,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<()> {
        if problem.num_variables() != self.num_variables {
            return Err(OptimError::DimensionMismatch {
                expected: self.num_variables,
                found: problem.num_variables(),
            });
        }

        let mut members = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            let solution = draw_feasible(problem, rng, self.num_variables, max_attempts)?;
            members.push(M::from_solution(solution, self.run_count));
        }
        self.members = members;
        Ok(())
    }

    /// Number of members currently held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Population size this set was created for.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Uniform random member index (with replacement).
    ///
    /// # Panics
    /// Panics if the set has not been initialized.
    pub fn random_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.members.len())
    }

    /// Uniform random member (with replacement).
    ///
    /// # Panics
    /// Panics if the set has not been initialized.
    pub fn random_member<R: Rng>(&self, rng: &mut R) -> &M {
        &self.members[self.random_index(rng)]
    }

    /// Member at `index`.
    pub fn get(&self, index: usize) -> &M {
        &self.members[index]
    }

    /// Overwrites the member at `index` and returns the evicted one.
    ///
    /// The caller is responsible for `member` being feasible.
    pub fn replace(&mut self, index: usize, member: M) -> M {
        debug_assert_eq!(member.solution().dim(), self.num_variables);
        std::mem::replace(&mut self.members[index], member)
    }

    /// How many members [`abandon_worst_solutions`](Self::abandon_worst_solutions)
    /// replaces for `fraction`: `floor(fraction * len)`, with `fraction`
    /// clamped to `[0, 1]`.
    pub fn abandon_count(&self, fraction: f64) -> usize {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        (self.members.len() as f64 * fraction).floor() as usize
    }

    /// Replaces the worst [`abandon_count`](Self::abandon_count) members with
    /// fresh feasible random draws and returns how many were replaced.
    ///
    /// Leaves the set sorted best-first with the fresh members at the tail.
    /// If a replacement cannot be drawn, the set is sorted but otherwise
    /// unchanged.
    ///
    /// # Errors
    /// [`OptimError::InfeasibleGeneration`] when a feasible replacement
    /// cannot be drawn within `max_attempts` redraws.
    pub fn abandon_worst_solutions<P: Problem, R: Rng>(
        &mut self,
        problem: &P,
        fraction: f64,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<usize> {
        self.sort_by_fitness(problem);

        let count = self.abandon_count(fraction);
        if count == 0 {
            return Ok(0);
        }

        let fresh = (0..count)
            .map(|_| {
                draw_feasible(problem, rng, self.num_variables, max_attempts)
                    .map(|s| M::from_solution(s, self.run_count))
            })
            .collect::<Result<Vec<M>>>()?;

        let start = self.members.len() - count;
        for (slot, member) in self.members[start..].iter_mut().zip(fresh) {
            *slot = member;
        }
        Ok(count)
    }

    /// Sorts members by descending fitness. Stable; NaN ranks last.
    pub fn sort_by_fitness<P: Problem>(&mut self, problem: &P) {
        let mut ranked: Vec<(f64, M)> = self
            .members
            .drain(..)
            .map(|m| (rank_key(problem.fitness(m.solution())), m))
            .collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        self.members = ranked.into_iter().map(|(_, m)| m).collect();
    }

    /// The highest-fitness member; the earliest one on ties.
    ///
    /// # Panics
    /// Panics if the set has not been initialized.
    pub fn most_fit<P: Problem>(&self, problem: &P) -> &M {
        let mut best: Option<(&M, f64)> = None;
        for member in &self.members {
            let fitness = rank_key(problem.fitness(member.solution()));
            let improves = match best {
                Some((_, best_fitness)) => fitness > best_fitness,
                None => true,
            };
            if improves {
                best = Some((member, fitness));
            }
        }
        best.map(|(m, _)| m).expect("solution set must not be empty")
    }

    /// Completed generations recorded by the owning algorithm.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn set_run_count(&mut self, run_count: usize) {
        self.run_count = run_count;
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<M> {
        self.members
    }

    #[cfg(test)]
    pub(crate) fn from_members(members: Vec<M>, num_variables: usize) -> Self {
        Self {
            size: members.len(),
            members,
            num_variables,
            run_count: 0,
        }
    }
}

impl<'a, M: Member> IntoIterator for &'a SolutionSet<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Draws from `problem` until a feasible solution of the right size appears.
pub(crate) fn draw_feasible<P: Problem, R: Rng>(
    problem: &P,
    rng: &mut R,
    num_variables: usize,
    max_attempts: usize,
) -> Result<Solution> {
    for _ in 0..=max_attempts {
        let solution = problem.random_solution(rng);
        if solution.dim() != num_variables {
            return Err(OptimError::DimensionMismatch {
                expected: num_variables,
                found: solution.dim(),
            });
        }
        if problem.within_constraints(&solution) {
            return Ok(solution);
        }
    }
    tracing::warn!(
        attempts = max_attempts + 1,
        "random draws never produced a feasible solution"
    );
    Err(OptimError::InfeasibleGeneration {
        attempts: max_attempts + 1,
    })
}

/// Ordering key for fitness; NaN sorts below every real value.
fn rank_key(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}
