//! Various test utils.

use crate::ast;
use crate::compat_graphql_parser_v0_4::parse_executable_document;
use crate::compat_graphql_parser_v0_4::parse_schema_document;
use crate::compat_graphql_parser_v0_4::to_query_document;

pub fn parse(source: &str) -> ast::Document {
    parse_executable_document(source).unwrap()
}

/// Builds a document from alternating executable and type-system chunks, in
/// the order given. `graphql_parser` can only parse one kind of document at
/// a time, so mixed documents are stitched together here.
pub fn parse_mixed(chunks: &[(MixedChunk, &str)]) -> ast::Document {
    let mut doc = ast::Document::default();
    for (kind, source) in chunks {
        let parsed = match kind {
            MixedChunk::Executable => parse_executable_document(source),
            MixedChunk::TypeSystem => parse_schema_document(source),
        };
        doc.extend(parsed.unwrap().definitions);
    }
    doc
}

#[derive(Clone, Copy, Debug)]
pub enum MixedChunk {
    Executable,
    TypeSystem,
}

/// Prints the executable portion of `doc`. Two documents that print the same
/// are equal up to source positions.
pub fn print(doc: &ast::Document) -> String {
    to_query_document(doc).to_string()
}

/// Parses then prints `source` so it can be compared against [`print`]
/// output without depending on the printer's exact formatting.
pub fn normalized(source: &str) -> String {
    print(&parse(source))
}

pub fn definition_names(doc: &ast::Document) -> Vec<String> {
    doc.definitions
        .iter()
        .map(|def| match def {
            ast::Definition::Fragment(frag) => format!("fragment {}", frag.name),
            ast::Definition::Operation(op) => {
                format!("{} {}", op.kind.as_str(), op.name().unwrap_or(""))
            },
            ast::Definition::TypeSystem(_) => "<type system>".to_string(),
        })
        .collect()
}
