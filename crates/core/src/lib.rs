//! Framework-independent request binding.
//!
//! Decodes JSON bodies and form values onto typed structures, runs their
//! field rules, and renders rule failures. The HTTP layer lives in
//! `bindkit-api`.

pub mod binding;
pub mod date;
pub mod error;
pub mod form;
pub mod models;
