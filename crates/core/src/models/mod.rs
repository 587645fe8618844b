//! Request-scoped data holders bound by the demo handlers.

pub mod checkbox;
pub mod nested;
pub mod person;
pub mod user;
