//! One-shot evaluation of two operand texts
//!
//! A zero divisor is checked before the dividend is parsed, so `"" / "0"`
//! reports `Error: Div by zero`. Every other unparsable operand reports
//! `Invalid Input`.

use tracing::{debug, warn};

use crate::core::operand::parse_operand;
use crate::core::{CalcError, CalcResult, Calculator, Operation};

/// Evaluates an operation against the raw text of both operand fields
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses both operands and applies the operation
    pub fn evaluate(&self, first: &str, second: &str, op: Operation) -> CalcResult<f64> {
        let rhs = parse_operand(second);
        if op == Operation::Divide && matches!(rhs, Some(b) if b == 0.0) {
            debug!(first, second, "zero divisor");
            return Err(CalcError::DivisionByZero);
        }

        let (Some(a), Some(b)) = (parse_operand(first), rhs) else {
            debug!(first, second, op = op.name(), "operand did not parse");
            return Err(CalcError::InvalidInput);
        };

        let result = Calculator::calculate(a, b, op);
        match &result {
            Ok(value) => debug!(a, b, op = op.name(), value, "evaluated"),
            Err(CalcError::Computation(reason)) => {
                warn!(a, b, op = op.name(), reason = reason.as_str(), "computation failed");
            }
            Err(err) => debug!(a, b, op = op.name(), %err, "evaluation rejected"),
        }
        result
    }

    /// Evaluates and renders the outcome as result-label text
    #[must_use]
    pub fn evaluate_display(&self, first: &str, second: &str, op: Operation) -> String {
        display_outcome(&self.evaluate(first, second, op))
    }
}

/// Renders an evaluation outcome as result-label text
#[must_use]
pub fn display_outcome(outcome: &CalcResult<f64>) -> String {
    match outcome {
        Ok(value) => format_result(*value),
        Err(err) => err.to_string(),
    }
}

/// Formats a value for the result label
///
/// Whole numbers print without a decimal point; everything else uses the
/// shortest representation that round-trips.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0 as well
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(first: &str, second: &str, op: Operation) -> String {
        Evaluator::new().evaluate_display(first, second, op)
    }

    // ===== Documented examples =====

    #[test]
    fn test_add_two_and_three() {
        assert_eq!(eval("2", "3", Operation::Add), "5");
    }

    #[test]
    fn test_divide_exact_is_integer() {
        assert_eq!(eval("6", "3", Operation::Divide), "2");
    }

    #[test]
    fn test_divide_fraction_is_decimal() {
        assert_eq!(eval("5", "2", Operation::Divide), "2.5");
    }

    #[test]
    fn test_divide_by_zero_for_any_dividend() {
        for first in ["0", "1", "5.5", "123456789"] {
            assert_eq!(eval(first, "0", Operation::Divide), "Error: Div by zero");
        }
    }

    #[test]
    fn test_divide_by_zero_spellings() {
        for second in ["0", "0.0", "00", ".0", "0."] {
            assert_eq!(eval("7", second, Operation::Divide), "Error: Div by zero");
        }
    }

    #[test]
    fn test_empty_operand_is_invalid() {
        for op in Operation::ALL {
            assert_eq!(eval("", "3", op), "Invalid Input");
            assert_eq!(eval("3", "", op), "Invalid Input");
        }
    }

    #[test]
    fn test_non_numeric_operand_is_invalid() {
        assert_eq!(eval("abc", "3", Operation::Add), "Invalid Input");
        assert_eq!(eval("1.2.3", "3", Operation::Add), "Invalid Input");
        assert_eq!(eval(".", "3", Operation::Add), "Invalid Input");
    }

    #[test]
    fn test_zero_divisor_checked_before_dividend() {
        for first in ["", ".", "abc", "1.2.3"] {
            assert_eq!(eval(first, "0", Operation::Divide), "Error: Div by zero");
        }
        assert_eq!(
            Evaluator::new().evaluate("", "0.0", Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_second_operand_only_special_for_divide() {
        for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            assert_eq!(eval("", "0", op), "Invalid Input");
        }
    }

    #[test]
    fn test_unparsable_divisor_is_invalid() {
        assert_eq!(eval("0", "", Operation::Divide), "Invalid Input");
        assert_eq!(eval("", ".", Operation::Divide), "Invalid Input");
    }

    #[test]
    fn test_non_finite_operand_is_invalid() {
        let huge = format!("1{}1", "0".repeat(400));
        assert_eq!(eval(&huge, "1", Operation::Add), "Invalid Input");
        assert_eq!(eval("1", &huge, Operation::Divide), "Invalid Input");
    }

    // ===== Other operations =====

    #[test]
    fn test_subtract_to_negative() {
        assert_eq!(eval("3", "10", Operation::Subtract), "-7");
    }

    #[test]
    fn test_multiply_decimals() {
        assert_eq!(eval("1.5", "4", Operation::Multiply), "6");
        assert_eq!(eval("0.5", "0.5", Operation::Multiply), "0.25");
    }

    #[test]
    fn test_zero_difference_is_plain_zero() {
        assert_eq!(eval("4.5", "4.5", Operation::Subtract), "0");
    }

    #[test]
    fn test_overflow_is_generic_error() {
        let huge = format!("1{}", "0".repeat(308));
        assert_eq!(eval(&huge, "10", Operation::Multiply), "Error");
    }

    #[test]
    fn test_evaluate_returns_typed_errors() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate("", "1", Operation::Add),
            Err(CalcError::InvalidInput)
        );
        assert_eq!(
            evaluator.evaluate("1", "0", Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(evaluator.evaluate("1", "4", Operation::Divide), Ok(0.25));
    }

    // ===== format_result =====

    #[test]
    fn test_format_result_integer() {
        assert_eq!(format_result(42.0), "42");
        assert_eq!(format_result(-42.0), "-42");
    }

    #[test]
    fn test_format_result_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_format_result_decimal() {
        assert_eq!(format_result(3.14), "3.14");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_result_large_integer() {
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_result_small_decimal_has_no_exponent() {
        assert_eq!(format_result(1e-7), "0.0000001");
    }

    #[test]
    fn test_display_outcome_error() {
        assert_eq!(display_outcome(&Err(CalcError::InvalidInput)), "Invalid Input");
    }
}
