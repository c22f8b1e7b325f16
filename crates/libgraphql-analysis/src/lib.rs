//! Static analysis over parsed GraphQL documents.
//!
//! This crate provides:
//! - A generic depth-first [traversal engine](crate::visit) with per-node-kind
//!   enter/leave hooks, skip/abort control flow, and rewrite support.
//! - A [`FragmentGraph`] describing which fragments spread which other
//!   fragments, with cycle-safe reachability queries.
//! - [`separate_operations`], which splits a multi-operation document into
//!   one minimal document per operation.
//! - A [validation](crate::validation) framework with a shared
//!   [`ValidationContext`](validation::ValidationContext) and pluggable
//!   [`ValidationRule`](validation::ValidationRule)s.
//!
//! Text parsing and printing are delegated to the `graphql-parser` crate
//! through the [`compat_graphql_parser_v0_4`] conversion layer.

pub mod ast;
pub mod compat_graphql_parser_v0_4;
mod fragment_graph;
mod path;
pub mod schema;
mod separate_operations;
pub mod validation;
pub mod visit;

pub use fragment_graph::FragmentGraph;
pub use path::Path;
pub use path::PathKey;
pub use schema::Schema;
pub use separate_operations::separate_operations;

#[cfg(test)]
mod tests;
