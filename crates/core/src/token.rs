//! Token model: operands and the two supported operators.

use crate::error::{EvalResult, ValidationError};

/// Binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

/// Symbol table for operator resolution. Anything not listed here is rejected.
const OPERATORS: &[(&str, Operator)] = &[("+", Operator::Add), ("-", Operator::Subtract)];

impl Operator {
    /// Resolve an operator literal (exact match, no aliases).
    pub fn from_symbol(symbol: &str) -> EvalResult<Self> {
        OPERATORS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, op)| *op)
            .ok_or(ValidationError::InvalidOperator)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Apply the operator to `lhs` and `rhs` using checked arithmetic.
    pub fn apply(&self, lhs: i64, rhs: i64) -> EvalResult<i64> {
        let value = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
        };
        value.ok_or(ValidationError::Overflow)
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A validated token.
///
/// Sequences produced by the evaluator alternate strictly, starting and
/// ending with an operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(i64),
    Operator(Operator),
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Operand(v) => core::fmt::Display::fmt(v, f),
            Self::Operator(op) => core::fmt::Display::fmt(op, f),
        }
    }
}

/// Parse an operand literal as a base-10 signed 64-bit integer.
pub(crate) fn parse_operand(text: &str) -> EvalResult<i64> {
    text.parse::<i64>().map_err(|_| ValidationError::InvalidOperand)
}
