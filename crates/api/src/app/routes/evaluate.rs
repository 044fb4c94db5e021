use axum::{
    extract::{Extension, Query, rejection::QueryRejection},
    http::HeaderMap,
    response::Response,
};

use arith_auth::AccessGate;

use crate::app::pipeline::{self, RequestInput};

/// Header carrying the caller's credential.
pub const USER_ACCESS: &str = "user-access";

const EXPRESSION: &str = "expression";

/// `ANY /?expression=...`
///
/// Only the first `expression` pair is used. An undecodable query string
/// counts as a missing expression; the pipeline still checks access first.
pub async fn evaluate(
    Extension(gate): Extension<AccessGate>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    // Non-UTF-8 values are present but can never match.
    let credential = headers
        .get(USER_ACCESS)
        .map(|v| v.to_str().unwrap_or_default());

    let expression = query
        .ok()
        .and_then(|Query(pairs)| {
            pairs
                .into_iter()
                .find_map(|(key, value)| (key == EXPRESSION).then_some(value))
        })
        .unwrap_or_default();

    pipeline::handle(
        &gate,
        RequestInput {
            credential,
            expression: &expression,
        },
    )
}
