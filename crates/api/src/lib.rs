//! Movie records HTTP API.
//!
//! Exposes config, state, error translation, handlers and the router builder
//! so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
