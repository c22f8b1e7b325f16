//! Document validation: a shared [`ValidationContext`] plus pluggable
//! [`ValidationRule`]s, run over a document by [`validate`].

mod options;
pub mod rules;
mod validate;
mod validation_context;
mod validation_error;
mod validation_rule;
mod variable_usages;

pub use options::RuleExecution;
pub use options::ValidationOptions;
pub use validate::validate;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use validation_rule::ValidationRule;
pub use validation_rule::specified_rules;
pub use variable_usages::VariableUsage;

#[cfg(test)]
mod tests;
