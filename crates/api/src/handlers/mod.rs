//! Request handlers, one module per binding demo.

pub mod body;
pub mod checkbox;
pub mod conditional;
pub mod nested_form;
pub mod person;
