use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use arith_auth::AccessError;
use arith_core::{Evaluation, ValidationError};

use crate::app::dto::{MessageBody, ResultBody};

/// Any failure the request pipeline can end in.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Failure {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Final state of a request before encoding.
pub type Outcome = Result<Evaluation, Failure>;

impl Failure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Access(AccessError::AccessDenied) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message; the wire contract, not the `Display` text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Access(AccessError::AccessDenied) => "Access denied",
            Self::Validation(ValidationError::MalformedExpression) => "Invalid expression",
            Self::Validation(ValidationError::InvalidOperand) => "Invalid operand",
            Self::Validation(ValidationError::InvalidOperator) => "Invalid operator",
            Self::Validation(ValidationError::Overflow) => "Integer overflow",
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        json_message(self.status(), self.message())
    }
}

/// Map an outcome to its response. `Json` sets `content-type:
/// application/json` before the status line is written, on every path.
pub fn encode(outcome: Outcome) -> Response {
    match outcome {
        Ok(evaluation) => (
            StatusCode::OK,
            Json(ResultBody {
                result: evaluation.value,
            }),
        )
            .into_response(),
        Err(failure) => failure.into_response(),
    }
}

pub fn json_message(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MessageBody { message })).into_response()
}
