//! Simple Calculator - two operands, four operations, one result
//!
//! A single-screen terminal calculator: two numeric input fields, the
//! operations `+ - x /`, a clear button and a result label. Each operation is
//! evaluated immediately against exactly two operands.
//!
//! # Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! let evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate_display("5", "2", Operation::Divide), "2.5");
//! assert_eq!(evaluator.evaluate_display("5", "0", Operation::Divide), "Error: Div by zero");
//! assert_eq!(evaluator.evaluate_display("", "2", Operation::Add), "Invalid Input");
//!
//! let mut app = CalculatorApp::new();
//! app.set_operand(Field::First, "2");
//! app.set_operand(Field::Second, "3");
//! app.calculate(Operation::Add);
//! assert_eq!(app.result(), "5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod tui;

pub use commands::Cli;
pub use config::{AppConfig, DisplayConfig, LogConfig};
pub use error::{AppError, AppResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{format_result, Evaluator};
    pub use crate::core::operand::{parse_operand, sanitize_operand};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operation, INITIAL_RESULT};
    pub use crate::driver::{CalculatorDriver, MouseDriver, TuiDriver};
    pub use crate::tui::{CalculatorApp, Field};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("2", "3", Operation::Add), Ok(5.0));
        assert_eq!(format_result(5.0), "5");
        assert_eq!(sanitize_operand("2x"), "2");
        assert_eq!(parse_operand("2"), Some(2.0));
    }

    #[test]
    fn test_calculator_direct() {
        assert_eq!(Calculator::calculate(6.0, 7.0, Operation::Multiply), Ok(42.0));
    }

    #[test]
    fn test_documented_properties() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_display("2", "3", Operation::Add), "5");
        assert_eq!(evaluator.evaluate_display("6", "3", Operation::Divide), "2");
        assert_eq!(evaluator.evaluate_display("5", "2", Operation::Divide), "2.5");
        assert_eq!(
            evaluator.evaluate_display("42", "0", Operation::Divide),
            "Error: Div by zero"
        );
        assert_eq!(evaluator.evaluate_display("x", "1", Operation::Add), "Invalid Input");
    }

    #[test]
    fn test_clear_restores_initial_state() {
        let mut app = CalculatorApp::new();
        app.set_operand(Field::First, "9");
        app.set_operand(Field::Second, "3");
        app.calculate(Operation::Divide);
        app.clear();
        assert_eq!(app.first(), "");
        assert_eq!(app.second(), "");
        assert_eq!(app.result(), INITIAL_RESULT);
    }

    #[test]
    fn test_error_is_not_fatal() {
        let mut app = CalculatorApp::new();
        app.calculate(Operation::Divide);
        assert_eq!(app.result(), "Invalid Input");
        app.set_operand(Field::First, "1");
        app.set_operand(Field::Second, "4");
        app.calculate(Operation::Divide);
        assert_eq!(app.result(), "0.25");
    }
}
