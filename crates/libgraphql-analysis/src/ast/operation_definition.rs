use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// An operation (query, mutation, or subscription) definition.
///
/// The `{ ... }` shorthand form is represented as an anonymous
/// [`OperationKind::Query`] with no variables and no directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub directives: Vec<Directive>,
    pub kind: OperationKind,
    pub name: Option<String>,
    pub position: AstPos,
    pub selection_set: SelectionSet,
    pub variable_definitions: Vec<VariableDefinition>,
}

impl OperationDefinition {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when this operation can be printed using the `{ ... }` shorthand.
    pub fn is_shorthand(&self) -> bool {
        self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
