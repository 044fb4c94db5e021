//! HTTP application wiring (Axum router).
//!
//! - `pipeline.rs`: per-request state machine (access → tokenize → evaluate → encode)
//! - `errors.rs`: failure taxonomy and the outcome → response mapping
//! - `dto.rs`: query and JSON body types
//! - `routes/`: HTTP handlers

use axum::{
    Extension, Router,
    routing::{any, get},
};

use arith_auth::AccessGate;

pub mod dto;
pub mod errors;
pub mod pipeline;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(AccessGate::default())
}

/// Build the router around a specific access gate.
pub fn build_app_with(gate: AccessGate) -> Router {
    Router::new()
        .route("/", any(routes::evaluate::evaluate))
        .route("/health", get(routes::system::health))
        .layer(Extension(gate))
}
