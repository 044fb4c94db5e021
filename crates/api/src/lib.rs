//! HTTP API: server config, routing, and the evaluation request pipeline.

pub mod app;
pub mod config;
