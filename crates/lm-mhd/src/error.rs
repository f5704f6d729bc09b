//! Errors raised by the dimensionless-number engine and the inverse solver.

use thiserror::Error;

/// Result type for MHD scaling operations.
pub type MhdResult<T> = Result<T, MhdError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MhdError {
    /// Mathematically invalid operand (negative radicand, NaN).
    #[error("Domain error in {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// A ratio or rearrangement would divide by zero.
    #[error("Division by zero forming {what}")]
    DivisionByZero { what: &'static str },

    /// Array shapes that cannot be broadcast together.
    #[error("Shapes {lhs:?} and {rhs:?} cannot be broadcast together")]
    Shape { lhs: Vec<usize>, rhs: Vec<usize> },
}
