use crate::ast::Argument;
use crate::ast::AstPos;

/// A directive annotation (`@name(args...)`).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub arguments: Vec<Argument>,
    pub name: String,
    pub position: AstPos,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
