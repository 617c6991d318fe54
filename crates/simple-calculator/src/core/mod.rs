//! Core calculator logic, free of any UI types
//!
//! The UI only ever sees two operand strings and a result string; everything
//! between them lives here.

pub mod evaluator;
pub mod operand;
mod operations;

pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in the result label before any calculation and after clear
pub const INITIAL_RESULT: &str = "0";

/// Calculator error types
///
/// The `Display` output of each variant is exactly the message shown to the
/// user in the result label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One of the operands is empty or not a number
    #[error("Invalid Input")]
    InvalidInput,
    /// Division with a zero divisor
    #[error("Error: Div by zero")]
    DivisionByZero,
    /// Any other failure (overflow to infinity, NaN)
    #[error("Error")]
    Computation(String),
}

impl CalcError {
    /// Diagnostic reason for a computation failure
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Computation(reason) => Some(reason),
            Self::InvalidInput | Self::DivisionByZero => None,
        }
    }
}
