use crate::ast;
use std::fmt;

/// The closed set of node kinds a [`Visitor`](crate::visit::Visitor) can
/// hook.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Argument,
    Directive,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    ObjectField,
    OperationDefinition,
    SelectionSet,
    Type,
    TypeSystemDefinition,
    Value,
    Variable,
    VariableDefinition,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "Argument",
            Self::Directive => "Directive",
            Self::Document => "Document",
            Self::Field => "Field",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::ObjectField => "ObjectField",
            Self::OperationDefinition => "OperationDefinition",
            Self::SelectionSet => "SelectionSet",
            Self::Type => "Type",
            Self::TypeSystemDefinition => "TypeSystemDefinition",
            Self::Value => "Value",
            Self::Variable => "Variable",
            Self::VariableDefinition => "VariableDefinition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed reference to any visitable AST node.
///
/// A [`Value::Variable`](ast::Value::Variable) is always presented as
/// [`Node::Variable`], never as [`Node::Value`].
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Argument(&'a ast::Argument),
    Directive(&'a ast::Directive),
    Document(&'a ast::Document),
    Field(&'a ast::Field),
    FragmentDefinition(&'a ast::FragmentDefinition),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    ObjectField(&'a ast::ObjectField),
    OperationDefinition(&'a ast::OperationDefinition),
    SelectionSet(&'a ast::SelectionSet),
    Type(&'a ast::Type),
    TypeSystemDefinition(&'a ast::TypeSystemDefinition),
    Value(&'a ast::Value),
    Variable(&'a ast::Variable),
    VariableDefinition(&'a ast::VariableDefinition),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Argument(_) => NodeKind::Argument,
            Self::Directive(_) => NodeKind::Directive,
            Self::Document(_) => NodeKind::Document,
            Self::Field(_) => NodeKind::Field,
            Self::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
            Self::ObjectField(_) => NodeKind::ObjectField,
            Self::OperationDefinition(_) => NodeKind::OperationDefinition,
            Self::SelectionSet(_) => NodeKind::SelectionSet,
            Self::Type(_) => NodeKind::Type,
            Self::TypeSystemDefinition(_) => NodeKind::TypeSystemDefinition,
            Self::Value(_) => NodeKind::Value,
            Self::Variable(_) => NodeKind::Variable,
            Self::VariableDefinition(_) => NodeKind::VariableDefinition,
        }
    }

    /// The source position of this node, when the parser recorded one.
    pub fn position(&self) -> Option<ast::AstPos> {
        match self {
            Self::Argument(arg) => Some(arg.position),
            Self::Directive(directive) => Some(directive.position),
            Self::Document(_) => None,
            Self::Field(field) => Some(field.position),
            Self::FragmentDefinition(frag) => Some(frag.position),
            Self::FragmentSpread(spread) => Some(spread.position),
            Self::InlineFragment(inline) => Some(inline.position),
            Self::ObjectField(field) => Some(field.position),
            Self::OperationDefinition(op) => Some(op.position),
            Self::SelectionSet(ss) => Some(ss.position),
            Self::Type(_) => None,
            Self::TypeSystemDefinition(_) => None,
            Self::Value(_) => None,
            Self::Variable(var) => Some(var.position),
            Self::VariableDefinition(var_def) => Some(var_def.position),
        }
    }

    /// Identity of the underlying node, for comparing two `Node`s that may
    /// refer to the same AST node.
    pub fn is_same_node(&self, other: &Node<'_>) -> bool {
        self.kind() == other.kind() && self.addr() == other.addr()
    }

    pub(crate) fn addr(&self) -> *const () {
        match self {
            Self::Argument(n) => std::ptr::from_ref(*n).cast(),
            Self::Directive(n) => std::ptr::from_ref(*n).cast(),
            Self::Document(n) => std::ptr::from_ref(*n).cast(),
            Self::Field(n) => std::ptr::from_ref(*n).cast(),
            Self::FragmentDefinition(n) => std::ptr::from_ref(*n).cast(),
            Self::FragmentSpread(n) => std::ptr::from_ref(*n).cast(),
            Self::InlineFragment(n) => std::ptr::from_ref(*n).cast(),
            Self::ObjectField(n) => std::ptr::from_ref(*n).cast(),
            Self::OperationDefinition(n) => std::ptr::from_ref(*n).cast(),
            Self::SelectionSet(n) => std::ptr::from_ref(*n).cast(),
            Self::Type(n) => std::ptr::from_ref(*n).cast(),
            Self::TypeSystemDefinition(n) => std::ptr::from_ref(*n).cast(),
            Self::Value(n) => std::ptr::from_ref(*n).cast(),
            Self::Variable(n) => std::ptr::from_ref(*n).cast(),
            Self::VariableDefinition(n) => std::ptr::from_ref(*n).cast(),
        }
    }
}

impl<'a> From<&'a ast::Definition> for Node<'a> {
    fn from(def: &'a ast::Definition) -> Self {
        match def {
            ast::Definition::Fragment(frag) => Node::FragmentDefinition(frag),
            ast::Definition::Operation(op) => Node::OperationDefinition(op),
            ast::Definition::TypeSystem(ts_def) => {
                Node::TypeSystemDefinition(ts_def)
            },
        }
    }
}

impl<'a> From<&'a ast::Selection> for Node<'a> {
    fn from(selection: &'a ast::Selection) -> Self {
        match selection {
            ast::Selection::Field(field) => Node::Field(field),
            ast::Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            ast::Selection::InlineFragment(inline) => Node::InlineFragment(inline),
        }
    }
}

impl<'a> From<&'a ast::Value> for Node<'a> {
    fn from(value: &'a ast::Value) -> Self {
        match value {
            ast::Value::Variable(var) => Node::Variable(var),
            _ => Node::Value(value),
        }
    }
}

/// An owned AST node, used as the replacement in
/// [`VisitAction::Replace`](crate::visit::VisitAction::Replace).
#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    Argument(ast::Argument),
    Directive(ast::Directive),
    Document(ast::Document),
    Field(ast::Field),
    FragmentDefinition(ast::FragmentDefinition),
    FragmentSpread(ast::FragmentSpread),
    InlineFragment(ast::InlineFragment),
    ObjectField(ast::ObjectField),
    OperationDefinition(ast::OperationDefinition),
    SelectionSet(ast::SelectionSet),
    Type(ast::Type),
    TypeSystemDefinition(ast::TypeSystemDefinition),
    Value(ast::Value),
    Variable(ast::Variable),
    VariableDefinition(ast::VariableDefinition),
}

impl AstNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Argument(_) => NodeKind::Argument,
            Self::Directive(_) => NodeKind::Directive,
            Self::Document(_) => NodeKind::Document,
            Self::Field(_) => NodeKind::Field,
            Self::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
            Self::ObjectField(_) => NodeKind::ObjectField,
            Self::OperationDefinition(_) => NodeKind::OperationDefinition,
            Self::SelectionSet(_) => NodeKind::SelectionSet,
            Self::Type(_) => NodeKind::Type,
            Self::TypeSystemDefinition(_) => NodeKind::TypeSystemDefinition,
            Self::Value(_) => NodeKind::Value,
            Self::Variable(_) => NodeKind::Variable,
            Self::VariableDefinition(_) => NodeKind::VariableDefinition,
        }
    }
}
