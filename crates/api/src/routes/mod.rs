//! Routers, one per binding demo. Each demo binary serves exactly one of
//! these (plus `/health`).
//!
//! ```text
//! body          POST /raw-body, POST /bind-body
//! nested_form   GET  /getb
//! checkbox      POST /colors
//! person        GET  /api/person
//! conditional   GET  /testing
//! ```

pub mod body;
pub mod checkbox;
pub mod conditional;
pub mod health;
pub mod nested_form;
pub mod person;
