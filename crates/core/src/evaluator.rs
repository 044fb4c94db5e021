//! Left-to-right evaluator.
//!
//! There is no precedence: `a op b op c` is always `((a op b) op c)`.

use crate::error::{EvalResult, ValidationError};
use crate::token::{Operator, Token, parse_operand};
use crate::tokenizer::{Tokenized, tokenize};

/// Successful evaluation: the final accumulator and the tokens that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub tokens: Vec<Token>,
}

/// Fold the pending steps into the accumulator.
///
/// Per step the operator is resolved before the operand is parsed. The first
/// failure is returned; no partial value escapes.
pub fn evaluate(tokenized: Tokenized<'_>) -> EvalResult<Evaluation> {
    let mut acc = tokenized.initial;
    let mut tokens = Vec::with_capacity(tokenized.steps.len() * 2 + 1);
    tokens.push(Token::Operand(acc));

    for step in tokenized.steps {
        let operator = Operator::from_symbol(step.operator)?;
        let operand = parse_operand(step.operand.ok_or(ValidationError::MalformedExpression)?)?;

        acc = operator.apply(acc, operand)?;
        tokens.push(Token::Operator(operator));
        tokens.push(Token::Operand(operand));
    }

    Ok(Evaluation { value: acc, tokens })
}

/// Tokenize and evaluate `raw` in one go.
pub fn evaluate_str(raw: &str) -> EvalResult<Evaluation> {
    evaluate(tokenize(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn value(raw: &str) -> EvalResult<i64> {
        evaluate_str(raw).map(|e| e.value)
    }

    #[test]
    fn evaluates_left_to_right() {
        assert_eq!(value("10 + 5 - 3"), Ok(12));
        assert_eq!(value("10 - 5 + 3"), Ok(8));
        assert_eq!(value("1 - 2 - 3"), Ok(-4));
        assert_eq!(value("-4 + -6"), Ok(-10));
    }

    #[test]
    fn unsupported_operator_is_rejected() {
        assert_eq!(value("10 * 5"), Err(ValidationError::InvalidOperator));
        assert_eq!(value("10 / 5"), Err(ValidationError::InvalidOperator));
    }

    #[test]
    fn operator_is_checked_before_its_operand() {
        assert_eq!(value("10 * x"), Err(ValidationError::InvalidOperator));
        assert_eq!(value("10 + x"), Err(ValidationError::InvalidOperand));
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(value("1 + x * 3"), Err(ValidationError::InvalidOperand));
        assert_eq!(value("1 * 2 + x"), Err(ValidationError::InvalidOperator));
    }

    #[test]
    fn dangling_operator_is_malformed() {
        assert_eq!(value("1 + 2 -"), Err(ValidationError::MalformedExpression));
        assert_eq!(value("1 + 2 - 3 +"), Err(ValidationError::MalformedExpression));
    }

    #[test]
    fn dangling_unsupported_operator_is_invalid_operator() {
        assert_eq!(value("1 + 2 *"), Err(ValidationError::InvalidOperator));
    }

    #[test]
    fn empty_tokens_from_double_spaces_fail() {
        assert_eq!(value("1  + 2"), Err(ValidationError::InvalidOperator));
        assert_eq!(value("1 +  2"), Err(ValidationError::InvalidOperand));
        assert_eq!(value("1 + 2 "), Err(ValidationError::InvalidOperator));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(value("9223372036854775807 + 1"), Err(ValidationError::Overflow));
        assert_eq!(value("-9223372036854775808 - 1"), Err(ValidationError::Overflow));
        // Transient overflow is still an overflow.
        assert_eq!(value("9223372036854775807 + 1 - 1"), Err(ValidationError::Overflow));
    }

    #[test]
    fn returns_alternating_token_trace() {
        let e = evaluate_str("7 - 2 + 1").unwrap();
        assert_eq!(e.value, 6);
        assert_eq!(
            e.tokens,
            vec![
                Token::Operand(7),
                Token::Operator(Operator::Subtract),
                Token::Operand(2),
                Token::Operator(Operator::Add),
                Token::Operand(1),
            ]
        );
    }

    fn op_strategy() -> impl Strategy<Value = Operator> {
        prop_oneof![Just(Operator::Add), Just(Operator::Subtract)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: result equals the strict left fold over the steps.
        #[test]
        fn result_is_left_fold(
            first in -1_000_000i64..1_000_000i64,
            steps in prop::collection::vec((op_strategy(), -1_000_000i64..1_000_000i64), 1..20)
        ) {
            let mut raw = first.to_string();
            let mut expected = first;
            for (op, n) in &steps {
                raw.push_str(&format!(" {} {}", op.symbol(), n));
                expected = match op {
                    Operator::Add => expected + n,
                    Operator::Subtract => expected - n,
                };
            }

            let e = evaluate_str(&raw).unwrap();
            prop_assert_eq!(e.value, expected);

            // Trace invariant: odd length >= 3, alternating, operand at both ends.
            prop_assert!(e.tokens.len() >= 3);
            prop_assert_eq!(e.tokens.len() % 2, 1);
            for (i, t) in e.tokens.iter().enumerate() {
                prop_assert_eq!(t.is_operand(), i % 2 == 0);
            }
        }

        /// Property: any operator literal outside {+, -} is rejected.
        #[test]
        fn foreign_operator_is_rejected(
            a in any::<i32>(),
            b in any::<i32>(),
            op in "[^ +-][^ ]{0,3}|[+-][^ ]{1,3}"
        ) {
            let raw = format!("{a} {op} {b}");
            prop_assert_eq!(value(&raw), Err(ValidationError::InvalidOperator));
        }

        /// Property: evaluation is a pure function of its input.
        #[test]
        fn evaluation_is_deterministic(raw in "[0-9x+* -]{0,24}") {
            prop_assert_eq!(evaluate_str(&raw), evaluate_str(&raw));
        }
    }
}
