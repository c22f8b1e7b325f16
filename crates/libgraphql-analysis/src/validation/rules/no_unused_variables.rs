use crate::ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use std::collections::HashSet;

/// Every variable an operation defines must be used, either in the operation
/// itself or in a fragment it (transitively) spreads.
///
/// One error is reported per unused variable, attached to its definition, in
/// the order the variables are defined.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnusedVariables;

impl ValidationRule for NoUnusedVariables {
    fn name(&self) -> &'static str {
        "NoUnusedVariables"
    }

    fn create_visitor<'c, 'a: 'c>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c> {
        Box::new(NoUnusedVariablesVisitor {
            context,
            variable_definitions: vec![],
        })
    }
}

struct NoUnusedVariablesVisitor<'c, 'a> {
    context: &'c ValidationContext<'a>,
    variable_definitions: Vec<&'a ast::VariableDefinition>,
}

impl<'a> Visitor<'a> for NoUnusedVariablesVisitor<'_, 'a> {
    fn enter_operation_definition(
        &mut self,
        _operation: &'a ast::OperationDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        self.variable_definitions.clear();
        VisitAction::Continue
    }

    fn leave_operation_definition(
        &mut self,
        operation: &'a ast::OperationDefinition,
        _info: &VisitInfo,
    ) {
        let usages = self.context.recursive_variable_usages(operation);
        let used: HashSet<&str> =
            usages.iter()
                .map(|usage| usage.node.name.as_str())
                .collect();

        for var_def in std::mem::take(&mut self.variable_definitions) {
            if used.contains(var_def.name()) {
                continue;
            }
            let message = match operation.name() {
                Some(op_name) => format!(
                    "Variable \"${}\" is never used in operation \"{op_name}\".",
                    var_def.name(),
                ),
                None => format!("Variable \"${}\" is never used.", var_def.name()),
            };
            self.context.report_error(message, vec![Node::VariableDefinition(var_def)]);
        }
    }

    fn enter_variable_definition(
        &mut self,
        var_def: &'a ast::VariableDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        self.variable_definitions.push(var_def);
        VisitAction::Skip
    }

    // Usages are gathered through the context when the operation is left,
    // so nothing below the variable definitions needs visiting.
    fn enter_selection_set(
        &mut self,
        _selection_set: &'a ast::SelectionSet,
        _info: &VisitInfo,
    ) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_fragment_definition(
        &mut self,
        _fragment: &'a ast::FragmentDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        VisitAction::Skip
    }
}
