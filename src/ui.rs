//! Presentation boundary: collecting parameters and showing results.
//!
//! The crate performs no I/O itself. A front end (console, GUI, test
//! script) implements [`OptimizationUi`] and gets typed numeric parsing
//! for free.

use crate::error::{OptimError, Result};
use crate::solution::Solution;

/// A front end that supplies named parameter values and renders solutions.
///
/// # Examples
///
/// ```
/// use u_swarm::ui::OptimizationUi;
/// use u_swarm::Solution;
///
/// struct Fixed;
///
/// impl OptimizationUi for Fixed {
///     fn variable_input(&mut self, _name: &str) -> String {
///         "100".into()
///     }
///
///     fn print_solution(&mut self, solution: &Solution) {
///         println!("{solution}");
///     }
/// }
///
/// let fence_length = Fixed.double_input("fence length").unwrap();
/// assert_eq!(fence_length, 100.0);
/// ```
pub trait OptimizationUi {
    /// Raw text entered for the parameter `name`.
    fn variable_input(&mut self, name: &str) -> String;

    /// Renders a solution.
    fn print_solution(&mut self, solution: &Solution);

    /// Reads parameter `name` as a finite `f64`.
    ///
    /// # Errors
    /// [`OptimError::InvalidInput`] naming the parameter when the text is
    /// not a finite number. Callers may re-prompt.
    fn double_input(&mut self, name: &str) -> Result<f64> {
        let text = self.variable_input(name);
        parse_double(name, &text)
    }
}

/// Parses `text` as the value of parameter `name`.
pub fn parse_double(name: &str, text: &str) -> Result<f64> {
    let invalid = |reason: &str| OptimError::InvalidInput {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid("is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid("is not a finite number"))
    }
}
