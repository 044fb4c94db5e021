//! `arith-core` — expression model, tokenizer and evaluator.
//!
//! This crate contains **pure** evaluation logic (no IO, no HTTP, no logging).
//! Every function here is deterministic in its inputs.

pub mod error;
pub mod evaluator;
pub mod token;
pub mod tokenizer;

pub use error::{EvalResult, ValidationError};
pub use evaluator::{Evaluation, evaluate, evaluate_str};
pub use token::{Operator, Token};
pub use tokenizer::{PendingStep, Tokenized, tokenize};
