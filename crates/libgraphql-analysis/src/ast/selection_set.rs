use crate::ast::Argument;
use crate::ast::AstPos;
use crate::ast::Directive;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub position: AstPos,
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn position(&self) -> AstPos {
        match self {
            Self::Field(field) => field.position,
            Self::FragmentSpread(spread) => spread.position,
            Self::InlineFragment(inline) => inline.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub name: String,
    pub position: AstPos,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's result is written under (alias, else name).
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

/// A by-name reference to a fragment (`...Name`).
///
/// The referenced fragment may not exist in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub directives: Vec<Directive>,
    pub fragment_name: String,
    pub position: AstPos,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub directives: Vec<Directive>,
    pub position: AstPos,
    pub selection_set: SelectionSet,
    pub type_condition: Option<String>,
}
