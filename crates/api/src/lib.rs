//! HTTP layer of the binding demos.
//!
//! Exposes config, state, error handling, extractors, handlers, routers and
//! the server bootstrap so the demo binaries and integration tests share
//! them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
