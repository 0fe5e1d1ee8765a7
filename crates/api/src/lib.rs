//! HTTP API: server wiring, authentication, and the authority endpoints.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
