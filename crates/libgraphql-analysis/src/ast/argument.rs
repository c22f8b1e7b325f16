use crate::ast::AstPos;
use crate::ast::Value;

/// A `name: value` argument on a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub position: AstPos,
    pub value: Value,
}
