//! Owned AST for executable GraphQL documents.
//!
//! Documents are produced by the external parser (see
//! [`compat_graphql_parser_v0_4`](crate::compat_graphql_parser_v0_4)) and are
//! never mutated by the analyses in this crate.

mod argument;
mod directive;
mod document;
mod fragment_definition;
mod operation_definition;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection_set::Field;
pub use selection_set::FragmentSpread;
pub use selection_set::InlineFragment;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::Type;
pub use value::ObjectField;
pub use value::Value;
pub use value::Variable;
pub use variable_definition::VariableDefinition;

pub type AstPos = graphql_parser::Pos;

/// A type-system definition (schema, type, extension, or directive
/// definition). These are carried through a [`Document`] untouched and are
/// inert to every analysis in this crate.
pub type TypeSystemDefinition = graphql_parser::schema::Definition<'static, String>;
