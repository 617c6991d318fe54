//! The four arithmetic operations

use crate::core::{CalcError, CalcResult};

/// Binary operation selected by one of the operation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (x)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in button order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the button label
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '/',
        }
    }

    /// Returns a lowercase name, used in log output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

/// Arithmetic on two already-parsed operands
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::Computation("result is NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Computation("result is infinite".into()))
        } else {
            Ok(result)
        }
    }
}
