use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::SelectionSet;

/// A named fragment definition (`fragment Name on Type { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub directives: Vec<Directive>,
    pub name: String,
    pub position: AstPos,
    pub selection_set: SelectionSet,
    pub type_condition: String,
}
