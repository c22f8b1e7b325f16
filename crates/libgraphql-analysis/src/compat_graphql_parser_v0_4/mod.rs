//! Conversions between this crate's [`ast`](crate::ast) and the
//! `graphql_parser` v0.4 AST.
//!
//! Text parsing and printing are not done by this crate: parsing is delegated
//! to `graphql_parser` and the result converted with [`from_query_document`]
//! or [`from_schema_document`]; printing goes the other way through
//! [`to_query_document`] and `graphql_parser`'s `Display` impls.

mod from_query;
mod from_schema;
mod helpers;
mod to_query;

pub use from_query::from_query_document;
pub use from_schema::from_schema_document;
pub use to_query::to_query_document;

pub(crate) use helpers::gp_type_to_ast;
pub(crate) use helpers::gp_value_to_ast;

use crate::ast;
use std::sync::Arc;
use thiserror::Error;

/// Parse an executable document (operations and fragments) with
/// `graphql_parser` and convert it.
pub fn parse_executable_document(source: &str) -> Result<ast::Document, ParseError> {
    let gp_doc =
        graphql_parser::query::parse_query::<String>(source)?
            .into_static();
    Ok(from_query_document(&gp_doc))
}

/// Parse a type-system document with `graphql_parser` and convert it into a
/// [`Document`](ast::Document) made only of
/// [`Definition::TypeSystem`](ast::Definition::TypeSystem) entries.
pub fn parse_schema_document(source: &str) -> Result<ast::Document, ParseError> {
    let gp_doc =
        graphql_parser::schema::parse_schema::<String>(source)?
            .into_static();
    Ok(from_schema_document(gp_doc))
}

#[derive(Clone, Debug, Error)]
pub enum ParseError {
    #[error("Error parsing executable document: {0}")]
    ExecutableDocument(Arc<graphql_parser::query::ParseError>),

    #[error("Error parsing schema document: {0}")]
    SchemaDocument(Arc<graphql_parser::schema::ParseError>),
}
impl std::convert::From<graphql_parser::query::ParseError> for ParseError {
    fn from(value: graphql_parser::query::ParseError) -> Self {
        Self::ExecutableDocument(Arc::new(value))
    }
}
impl std::convert::From<graphql_parser::schema::ParseError> for ParseError {
    fn from(value: graphql_parser::schema::ParseError) -> Self {
        Self::SchemaDocument(Arc::new(value))
    }
}
