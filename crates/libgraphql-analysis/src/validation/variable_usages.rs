use crate::ast;
use crate::schema::FieldDefinition;
use crate::schema::InputValueDefinition;
use crate::Schema;
use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::visit;

/// A reference to a variable together with what the position it appears in
/// expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariableUsage<'a> {
    pub node: &'a ast::Variable,

    /// The input type expected where the variable appears. `None` when there
    /// is no schema or the position cannot be resolved against it.
    pub input_type: Option<&'a ast::Type>,

    /// The schema default of the argument or input field the variable is
    /// passed to, if any.
    pub default_value: Option<&'a ast::Value>,
}

/// Every variable reference beneath `node` in traversal order, excluding the
/// operation's own variable definitions. Directive arguments count,
/// including those on fragment spreads and inline fragments. Fragment spreads
/// are not followed.
pub(crate) fn collect_variable_usages<'a>(
    node: Node<'a>,
    schema: Option<&'a Schema>,
) -> Vec<VariableUsage<'a>> {
    let mut collector = UsageCollector {
        argument_owners: vec![],
        input_types: vec![],
        output_types: vec![],
        schema,
        usages: vec![],
    };
    visit(node, &mut collector);
    collector.usages
}

#[derive(Clone, Copy)]
enum ArgumentOwner<'a> {
    Directive(&'a str),
    Field(Option<&'a FieldDefinition>),
}

/// Expected input type and default at the current value position.
type InputPosition<'a> = (Option<&'a ast::Type>, Option<&'a ast::Value>);

struct UsageCollector<'a> {
    argument_owners: Vec<ArgumentOwner<'a>>,
    input_types: Vec<InputPosition<'a>>,

    /// Named output type of the innermost selection scope.
    output_types: Vec<Option<&'a str>>,

    schema: Option<&'a Schema>,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> UsageCollector<'a> {
    fn current_output_type(&self) -> Option<&'a str> {
        self.output_types.last().copied().flatten()
    }

    fn current_input(&self) -> InputPosition<'a> {
        self.input_types.last().copied().unwrap_or((None, None))
    }

    fn push_input(&mut self, def: Option<&'a InputValueDefinition>) {
        self.input_types.push((
            def.map(|def| &def.value_type),
            def.and_then(|def| def.default_value.as_ref()),
        ));
    }
}

impl<'a> Visitor<'a> for UsageCollector<'a> {
    fn enter_operation_definition(
        &mut self,
        operation: &'a ast::OperationDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        let root = self.schema.and_then(|schema| schema.root_type(operation.kind));
        self.output_types.push(root);
        VisitAction::Continue
    }

    fn leave_operation_definition(
        &mut self,
        _operation: &'a ast::OperationDefinition,
        _info: &VisitInfo,
    ) {
        self.output_types.pop();
    }

    fn enter_fragment_definition(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        self.output_types.push(Some(fragment.type_condition.as_str()));
        VisitAction::Continue
    }

    fn leave_fragment_definition(
        &mut self,
        _fragment: &'a ast::FragmentDefinition,
        _info: &VisitInfo,
    ) {
        self.output_types.pop();
    }

    fn enter_inline_fragment(
        &mut self,
        inline: &'a ast::InlineFragment,
        _info: &VisitInfo,
    ) -> VisitAction {
        let scope = match &inline.type_condition {
            Some(type_condition) => Some(type_condition.as_str()),
            None => self.current_output_type(),
        };
        self.output_types.push(scope);
        VisitAction::Continue
    }

    fn leave_inline_fragment(&mut self, _inline: &'a ast::InlineFragment, _info: &VisitInfo) {
        self.output_types.pop();
    }

    fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
        let field_def =
            self.schema
                .zip(self.current_output_type())
                .and_then(|(schema, parent)| schema.field(parent, &field.name));
        self.argument_owners.push(ArgumentOwner::Field(field_def));
        self.output_types.push(field_def.map(|def| def.field_type.named_type()));
        VisitAction::Continue
    }

    fn leave_field(&mut self, _field: &'a ast::Field, _info: &VisitInfo) {
        self.argument_owners.pop();
        self.output_types.pop();
    }

    fn enter_directive(&mut self, directive: &'a ast::Directive, _info: &VisitInfo) -> VisitAction {
        self.argument_owners.push(ArgumentOwner::Directive(directive.name.as_str()));
        VisitAction::Continue
    }

    fn leave_directive(&mut self, _directive: &'a ast::Directive, _info: &VisitInfo) {
        self.argument_owners.pop();
    }

    fn enter_argument(&mut self, argument: &'a ast::Argument, _info: &VisitInfo) -> VisitAction {
        let arg_def = match (self.schema, self.argument_owners.last().copied()) {
            (Some(schema), Some(ArgumentOwner::Directive(directive))) => {
                schema.directive_argument(directive, &argument.name)
            },
            (_, Some(ArgumentOwner::Field(Some(field_def)))) => {
                field_def.arguments.get(&argument.name)
            },
            _ => None,
        };
        self.push_input(arg_def);
        VisitAction::Continue
    }

    fn leave_argument(&mut self, _argument: &'a ast::Argument, _info: &VisitInfo) {
        self.input_types.pop();
    }

    fn enter_value(&mut self, value: &'a ast::Value, _info: &VisitInfo) -> VisitAction {
        if let ast::Value::List(_) = value {
            // Items expect the list's item type. A list literal in a
            // non-list position is coerced item-wise to the position's own
            // type.
            let item_type = self.current_input().0.map(|list_type| {
                match list_type.nullable() {
                    ast::Type::ListType(item_type) => item_type.as_ref(),
                    nullable => nullable,
                }
            });
            self.input_types.push((item_type, None));
        }
        VisitAction::Continue
    }

    fn leave_value(&mut self, value: &'a ast::Value, _info: &VisitInfo) {
        if let ast::Value::List(_) = value {
            self.input_types.pop();
        }
    }

    fn enter_object_field(&mut self, field: &'a ast::ObjectField, _info: &VisitInfo) -> VisitAction {
        let field_def =
            self.schema
                .zip(self.current_input().0)
                .and_then(|(schema, object_type)| {
                    schema.input_field(object_type.named_type(), &field.name)
                });
        self.push_input(field_def);
        VisitAction::Continue
    }

    fn leave_object_field(&mut self, _field: &'a ast::ObjectField, _info: &VisitInfo) {
        self.input_types.pop();
    }

    fn enter_variable(&mut self, variable: &'a ast::Variable, _info: &VisitInfo) -> VisitAction {
        let (input_type, default_value) = self.current_input();
        self.usages.push(VariableUsage {
            node: variable,
            input_type,
            default_value,
        });
        VisitAction::Continue
    }

    fn enter_variable_definition(
        &mut self,
        _var_def: &'a ast::VariableDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        VisitAction::Skip
    }
}
