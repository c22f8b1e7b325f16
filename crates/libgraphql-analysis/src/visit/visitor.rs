use crate::Path;
use crate::PathKey;
use crate::ast;
use crate::visit::AstNode;
use crate::visit::Node;
use std::sync::Arc;

/// What the traversal should do after a node's enter hook returns.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    /// Abort the traversal. Leave hooks still fire for every node that was
    /// entered but not yet left, innermost first.
    Break,

    /// Visit this node's children.
    #[default]
    Continue,

    /// Record a replacement for this node. Neither the node's children nor
    /// the replacement are visited.
    Replace(AstNode),

    /// Do not visit this node's children. The node's leave hook still fires.
    Skip,
}

/// Where in the traversal a hook is being called.
#[derive(Clone, Debug)]
pub struct VisitInfo {
    /// How many ancestors the current node has beneath the traversal root.
    pub depth: usize,

    /// Keys from the traversal root to the current node. `None` at the root.
    pub path: Option<Arc<Path>>,
}

impl VisitInfo {
    pub(crate) fn root() -> Self {
        Self {
            depth: 0,
            path: None,
        }
    }

    pub fn path_keys(&self) -> Vec<PathKey> {
        self.path
            .as_ref()
            .map(|path| path.to_vec())
            .unwrap_or_default()
    }
}

/// Per-node-kind hooks called by [`visit`](crate::visit::visit).
///
/// Every `enter_*`/`leave_*` hook defaults to the generic [`Visitor::enter`]
/// and [`Visitor::leave`] hooks, which in turn default to doing nothing. A
/// visitor therefore only implements the hooks for the kinds it cares about,
/// or the generic pair to see every node.
#[allow(unused_variables)]
pub trait Visitor<'a> {
    /// Fallback enter hook for kinds without a specific override.
    fn enter(&mut self, node: Node<'a>, info: &VisitInfo) -> VisitAction {
        VisitAction::Continue
    }

    /// Fallback leave hook for kinds without a specific override.
    fn leave(&mut self, node: Node<'a>, info: &VisitInfo) {}

    fn enter_argument(&mut self, argument: &'a ast::Argument, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Argument(argument), info)
    }
    fn leave_argument(&mut self, argument: &'a ast::Argument, info: &VisitInfo) {
        self.leave(Node::Argument(argument), info)
    }

    fn enter_directive(&mut self, directive: &'a ast::Directive, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Directive(directive), info)
    }
    fn leave_directive(&mut self, directive: &'a ast::Directive, info: &VisitInfo) {
        self.leave(Node::Directive(directive), info)
    }

    fn enter_document(&mut self, document: &'a ast::Document, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Document(document), info)
    }
    fn leave_document(&mut self, document: &'a ast::Document, info: &VisitInfo) {
        self.leave(Node::Document(document), info)
    }

    fn enter_field(&mut self, field: &'a ast::Field, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Field(field), info)
    }
    fn leave_field(&mut self, field: &'a ast::Field, info: &VisitInfo) {
        self.leave(Node::Field(field), info)
    }

    fn enter_fragment_definition(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::FragmentDefinition(fragment), info)
    }
    fn leave_fragment_definition(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
        info: &VisitInfo,
    ) {
        self.leave(Node::FragmentDefinition(fragment), info)
    }

    fn enter_fragment_spread(
        &mut self,
        spread: &'a ast::FragmentSpread,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::FragmentSpread(spread), info)
    }
    fn leave_fragment_spread(&mut self, spread: &'a ast::FragmentSpread, info: &VisitInfo) {
        self.leave(Node::FragmentSpread(spread), info)
    }

    fn enter_inline_fragment(
        &mut self,
        inline: &'a ast::InlineFragment,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::InlineFragment(inline), info)
    }
    fn leave_inline_fragment(&mut self, inline: &'a ast::InlineFragment, info: &VisitInfo) {
        self.leave(Node::InlineFragment(inline), info)
    }

    fn enter_object_field(&mut self, field: &'a ast::ObjectField, info: &VisitInfo) -> VisitAction {
        self.enter(Node::ObjectField(field), info)
    }
    fn leave_object_field(&mut self, field: &'a ast::ObjectField, info: &VisitInfo) {
        self.leave(Node::ObjectField(field), info)
    }

    fn enter_operation_definition(
        &mut self,
        operation: &'a ast::OperationDefinition,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::OperationDefinition(operation), info)
    }
    fn leave_operation_definition(
        &mut self,
        operation: &'a ast::OperationDefinition,
        info: &VisitInfo,
    ) {
        self.leave(Node::OperationDefinition(operation), info)
    }

    fn enter_selection_set(
        &mut self,
        selection_set: &'a ast::SelectionSet,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::SelectionSet(selection_set), info)
    }
    fn leave_selection_set(&mut self, selection_set: &'a ast::SelectionSet, info: &VisitInfo) {
        self.leave(Node::SelectionSet(selection_set), info)
    }

    fn enter_type(&mut self, type_ref: &'a ast::Type, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Type(type_ref), info)
    }
    fn leave_type(&mut self, type_ref: &'a ast::Type, info: &VisitInfo) {
        self.leave(Node::Type(type_ref), info)
    }

    fn enter_type_system_definition(
        &mut self,
        definition: &'a ast::TypeSystemDefinition,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::TypeSystemDefinition(definition), info)
    }
    fn leave_type_system_definition(
        &mut self,
        definition: &'a ast::TypeSystemDefinition,
        info: &VisitInfo,
    ) {
        self.leave(Node::TypeSystemDefinition(definition), info)
    }

    fn enter_value(&mut self, value: &'a ast::Value, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Value(value), info)
    }
    fn leave_value(&mut self, value: &'a ast::Value, info: &VisitInfo) {
        self.leave(Node::Value(value), info)
    }

    fn enter_variable(&mut self, variable: &'a ast::Variable, info: &VisitInfo) -> VisitAction {
        self.enter(Node::Variable(variable), info)
    }
    fn leave_variable(&mut self, variable: &'a ast::Variable, info: &VisitInfo) {
        self.leave(Node::Variable(variable), info)
    }

    fn enter_variable_definition(
        &mut self,
        var_def: &'a ast::VariableDefinition,
        info: &VisitInfo,
    ) -> VisitAction {
        self.enter(Node::VariableDefinition(var_def), info)
    }
    fn leave_variable_definition(
        &mut self,
        var_def: &'a ast::VariableDefinition,
        info: &VisitInfo,
    ) {
        self.leave(Node::VariableDefinition(var_def), info)
    }
}

/// Route a node to the visitor's kind-specific enter hook.
pub(crate) fn dispatch_enter<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    node: Node<'a>,
    info: &VisitInfo,
) -> VisitAction {
    match node {
        Node::Argument(n) => visitor.enter_argument(n, info),
        Node::Directive(n) => visitor.enter_directive(n, info),
        Node::Document(n) => visitor.enter_document(n, info),
        Node::Field(n) => visitor.enter_field(n, info),
        Node::FragmentDefinition(n) => visitor.enter_fragment_definition(n, info),
        Node::FragmentSpread(n) => visitor.enter_fragment_spread(n, info),
        Node::InlineFragment(n) => visitor.enter_inline_fragment(n, info),
        Node::ObjectField(n) => visitor.enter_object_field(n, info),
        Node::OperationDefinition(n) => visitor.enter_operation_definition(n, info),
        Node::SelectionSet(n) => visitor.enter_selection_set(n, info),
        Node::Type(n) => visitor.enter_type(n, info),
        Node::TypeSystemDefinition(n) => visitor.enter_type_system_definition(n, info),
        Node::Value(n) => visitor.enter_value(n, info),
        Node::Variable(n) => visitor.enter_variable(n, info),
        Node::VariableDefinition(n) => visitor.enter_variable_definition(n, info),
    }
}

/// Route a node to the visitor's kind-specific leave hook.
pub(crate) fn dispatch_leave<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    node: Node<'a>,
    info: &VisitInfo,
) {
    match node {
        Node::Argument(n) => visitor.leave_argument(n, info),
        Node::Directive(n) => visitor.leave_directive(n, info),
        Node::Document(n) => visitor.leave_document(n, info),
        Node::Field(n) => visitor.leave_field(n, info),
        Node::FragmentDefinition(n) => visitor.leave_fragment_definition(n, info),
        Node::FragmentSpread(n) => visitor.leave_fragment_spread(n, info),
        Node::InlineFragment(n) => visitor.leave_inline_fragment(n, info),
        Node::ObjectField(n) => visitor.leave_object_field(n, info),
        Node::OperationDefinition(n) => visitor.leave_operation_definition(n, info),
        Node::SelectionSet(n) => visitor.leave_selection_set(n, info),
        Node::Type(n) => visitor.leave_type(n, info),
        Node::TypeSystemDefinition(n) => visitor.leave_type_system_definition(n, info),
        Node::Value(n) => visitor.leave_value(n, info),
        Node::Variable(n) => visitor.leave_variable(n, info),
        Node::VariableDefinition(n) => visitor.leave_variable_definition(n, info),
    }
}
