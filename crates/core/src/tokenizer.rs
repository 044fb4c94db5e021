//! Expression tokenizer.
//!
//! Splits on the single ASCII space only: repeated spaces produce empty tokens
//! and leading/trailing whitespace is not trimmed. Empty tokens then fail
//! validation like any other bad literal.

use crate::error::{EvalResult, ValidationError};
use crate::token::parse_operand;

const DELIMITER: char = ' ';

/// Smallest well-formed expression: `operand operator operand`.
const MIN_TOKENS: usize = 3;

/// One not-yet-validated `(operator, operand)` step.
///
/// `operand` is `None` when the expression ends with a dangling operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PendingStep<'a> {
    pub operator: &'a str,
    pub operand: Option<&'a str>,
}

/// Output of [`tokenize`]: the parsed first operand plus the raw remaining steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub initial: i64,
    pub steps: Vec<PendingStep<'a>>,
}

/// Split `raw` into an initial operand and pending steps.
///
/// Checks, in order: token count, first operand. Steps are left for the
/// evaluator so that failures are reported in left-to-right order.
pub fn tokenize(raw: &str) -> EvalResult<Tokenized<'_>> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() < MIN_TOKENS {
        return Err(ValidationError::MalformedExpression);
    }

    let initial = parse_operand(parts[0])?;

    let steps = parts[1..]
        .chunks(2)
        .map(|pair| PendingStep {
            operator: pair[0],
            operand: pair.get(1).copied(),
        })
        .collect();

    Ok(Tokenized { initial, steps })
}
