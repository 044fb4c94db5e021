//! `arith-auth` — access gate for the evaluation endpoint.
//!
//! This crate is intentionally decoupled from HTTP: callers hand it the raw
//! header value (or its absence) and get a decision back.

pub mod access;
pub mod credential;

pub use access::{AccessError, AccessGate};
pub use credential::Credential;
