//! # Visiting and rewriting documents
//!
//! [`visit`] walks any [`Node`] depth-first, calling a [`Visitor`]'s enter
//! hook before a node's children and its leave hook after them. Children are
//! visited in the order they are written in the source document.
//!
//! Each enter hook returns a [`VisitAction`] which can:
//! - continue into the node's children ([`VisitAction::Continue`]),
//! - skip the node's children ([`VisitAction::Skip`]); leave still fires for
//!   the node itself,
//! - abort the traversal ([`VisitAction::Break`]); leave fires for every node
//!   that was entered but not yet left before [`visit`] returns,
//! - replace the node ([`VisitAction::Replace`]); the replacement is
//!   recorded as an [`Edit`] and is never visited itself.
//!
//! All state lives in the visitor, so any number of read-only traversals of
//! the same document may run at once.
//!
//! ```
//! use libgraphql_analysis::ast;
//! use libgraphql_analysis::compat_graphql_parser_v0_4::parse_executable_document;
//! use libgraphql_analysis::visit::*;
//!
//! #[derive(Default)]
//! struct CountFields(usize);
//!
//! impl<'a> Visitor<'a> for CountFields {
//!     fn enter_field(&mut self, _field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
//!         self.0 += 1;
//!         VisitAction::Continue
//!     }
//! }
//!
//! let doc = parse_executable_document("{ a { b c } }").unwrap();
//! let mut counter = CountFields::default();
//! visit(Node::Document(&doc), &mut counter);
//! assert_eq!(counter.0, 3);
//! ```

mod node;
mod parallel_visitor;
mod rewrite;
mod traversal;
mod visitor;

pub use node::AstNode;
pub use node::Node;
pub use node::NodeKind;
pub use parallel_visitor::ParallelVisitor;
pub use rewrite::RewriteError;
pub use rewrite::rewrite;
pub use traversal::Edit;
pub use traversal::VisitOutcome;
pub use traversal::visit;
pub use visitor::VisitAction;
pub use visitor::VisitInfo;
pub use visitor::Visitor;
pub(crate) use visitor::dispatch_enter;
pub(crate) use visitor::dispatch_leave;

#[cfg(test)]
mod tests;
