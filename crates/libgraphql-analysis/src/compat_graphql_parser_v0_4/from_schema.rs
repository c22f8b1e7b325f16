//! `graphql_parser` v0.4 schema `Document` -> crate AST.

use crate::ast;

/// Wrap every definition of a `graphql_parser` schema document as an inert
/// [`Definition::TypeSystem`](ast::Definition::TypeSystem).
pub fn from_schema_document(
    doc: graphql_parser::schema::Document<'static, String>,
) -> ast::Document {
    doc.definitions
        .into_iter()
        .map(ast::Definition::TypeSystem)
        .collect()
}
