use crate::validation::ValidationContext;
use crate::validation::rules::NoUnusedVariables;
use crate::visit::Visitor;
use std::fmt;

/// A single validation check.
///
/// A rule is a factory: for each run it creates a fresh visitor bound to
/// that run's [`ValidationContext`]. The visitor reports problems through
/// [`ValidationContext::report_error`] and keeps any other state to itself,
/// so the same rule value may be shared by concurrent runs.
pub trait ValidationRule: fmt::Debug + Send + Sync {
    /// A stable, human-readable name for this rule.
    fn name(&self) -> &'static str;

    fn create_visitor<'c, 'a: 'c>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c>;
}

/// Every rule this crate provides, in the order they are run.
pub fn specified_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![Box::new(NoUnusedVariables)]
}
