use crate::ast::AstPos;
use crate::visit::Node;
use thiserror::Error;

/// A single problem found by a validation rule.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ValidationError<'a> {
    pub message: String,

    /// The nodes the problem is attached to, possibly none.
    pub nodes: Vec<Node<'a>>,
}

impl<'a> ValidationError<'a> {
    pub fn new(message: impl Into<String>, nodes: Vec<Node<'a>>) -> Self {
        Self {
            message: message.into(),
            nodes,
        }
    }

    /// Source positions of the attached nodes that have one.
    pub fn locations(&self) -> Vec<AstPos> {
        self.nodes.iter().filter_map(Node::position).collect()
    }
}

impl PartialEq for ValidationError<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.nodes.len() == other.nodes.len()
            && self.nodes
                .iter()
                .zip(&other.nodes)
                .all(|(lhs, rhs)| lhs.is_same_node(rhs))
    }
}
