//! The validation rules this crate provides.

mod no_unused_variables;

pub use no_unused_variables::NoUnusedVariables;
