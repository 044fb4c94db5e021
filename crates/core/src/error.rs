//! Validation error model.

use thiserror::Error;

/// Result type used across the evaluation layer.
pub type EvalResult<T> = Result<T, ValidationError>;

/// Expression validation failure.
///
/// All variants are caused by caller input; none of them indicate an internal
/// fault. Evaluation stops at the first one encountered.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The expression does not have the `operand (operator operand)*` shape.
    #[error("invalid expression")]
    MalformedExpression,

    /// An operand slot holds something that is not a base-10 `i64`.
    #[error("invalid operand")]
    InvalidOperand,

    /// An operator slot holds something other than `+` or `-`.
    #[error("invalid operator")]
    InvalidOperator,

    /// The running accumulator left the `i64` range.
    #[error("integer overflow")]
    Overflow,
}

impl ValidationError {
    /// Stable snake_case name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedExpression => "malformed_expression",
            Self::InvalidOperand => "invalid_operand",
            Self::InvalidOperator => "invalid_operator",
            Self::Overflow => "overflow",
        }
    }
}
