//! Error type shared by every component of the crate.

use thiserror::Error;

/// Failures surfaced by populations, search algorithms and input adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// No feasible candidate could be produced within the retry budget.
    ///
    /// Usually means the feasible region is too narrow for the problem's
    /// random draws or the configured walk. Widen the constraints, shrink
    /// the step size or raise the retry budget.
    #[error(
        "could not generate a feasible solution after {attempts} attempts; \
         perhaps the constraints should be widened"
    )]
    InfeasibleGeneration {
        /// Number of candidates drawn before giving up.
        attempts: usize,
    },

    /// Solutions were requested before a successful `solve`.
    #[error("no population available: solve() has not completed successfully")]
    NotSolved,

    /// The problem and the solution set disagree on dimensionality.
    #[error("dimension mismatch: expected {expected} variables, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Configuration rejected by `validate()`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed textual input for a named problem parameter.
    #[error("invalid input for `{name}`: {reason}")]
    InvalidInput { name: String, reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message_mentions_attempts() {
        let err = OptimError::InfeasibleGeneration { attempts: 21 };
        let msg = err.to_string();
        assert!(msg.contains("21"), "message was: {msg}");
        assert!(msg.contains("constraints"));
    }

    #[test]
    fn test_invalid_input_names_variable() {
        let err = OptimError::InvalidInput {
            name: "fence length".into(),
            reason: "is not a number".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid input for `fence length`: is not a number"
        );
    }
}
