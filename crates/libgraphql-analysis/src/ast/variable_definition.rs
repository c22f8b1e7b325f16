use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;

/// A variable declared by an operation (`$name: Type = default`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub position: AstPos,
    pub var_type: Type,
    pub variable: Variable,
}

impl VariableDefinition {
    pub fn name(&self) -> &str {
        self.variable.name.as_str()
    }
}
