//! Request pipeline.
//!
//! `Start → CheckAccess → Tokenize → Evaluate → Encode → Done`. Each stage
//! moves forward on success or jumps straight to `Encode` with the failure.
//! Nothing is shared between requests.

use axum::response::Response;

use arith_auth::AccessGate;
use arith_core::{Tokenized, evaluate, tokenize};

use crate::app::errors::{self, Outcome};

/// Pipeline states. `Done` carries the encoded response.
enum Stage<'a> {
    Start,
    CheckAccess,
    Tokenize,
    Evaluate(Tokenized<'a>),
    Encode(Outcome),
    Done(Response),
}

/// Inputs of a single request, already pulled out of the HTTP layer.
#[derive(Debug, Clone, Copy)]
pub struct RequestInput<'a> {
    /// Raw access header; `None` when absent.
    pub credential: Option<&'a str>,
    pub expression: &'a str,
}

impl<'a> Stage<'a> {
    fn advance(self, gate: &AccessGate, input: RequestInput<'a>) -> Self {
        match self {
            Self::Start => Self::CheckAccess,
            Self::CheckAccess => match gate.check(input.credential) {
                Ok(()) => Self::Tokenize,
                Err(e) => Self::Encode(Err(e.into())),
            },
            Self::Tokenize => match tokenize(input.expression) {
                Ok(tokenized) => Self::Evaluate(tokenized),
                Err(e) => Self::Encode(Err(e.into())),
            },
            Self::Evaluate(tokenized) => Self::Encode(evaluate(tokenized).map_err(Into::into)),
            Self::Encode(outcome) => {
                log_outcome(&outcome);
                Self::Done(errors::encode(outcome))
            }
            Self::Done(response) => Self::Done(response),
        }
    }
}

/// Run the pipeline up to encoding and return the outcome.
pub fn run(gate: &AccessGate, input: RequestInput<'_>) -> Outcome {
    let mut stage = Stage::Start;
    loop {
        match stage {
            Stage::Encode(outcome) => return outcome,
            other => stage = other.advance(gate, input),
        }
    }
}

/// Run the full pipeline and return the encoded response.
pub fn handle(gate: &AccessGate, input: RequestInput<'_>) -> Response {
    let mut stage = Stage::Encode(run(gate, input));
    loop {
        match stage {
            Stage::Done(response) => return response,
            other => stage = other.advance(gate, input),
        }
    }
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Ok(evaluation) => tracing::debug!(
            tokens = evaluation.tokens.len(),
            result = evaluation.value,
            "expression evaluated"
        ),
        Err(errors::Failure::Validation(e)) => {
            tracing::debug!(kind = e.kind(), "expression rejected")
        }
        // Denials are logged by the gate itself.
        Err(errors::Failure::Access(_)) => {}
    }
}
