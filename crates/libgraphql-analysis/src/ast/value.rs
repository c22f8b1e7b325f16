use crate::ast::AstPos;

/// An input value literal.
///
/// Object fields are ordered by name, not as written: `graphql_parser`
/// stores object values in a `BTreeMap`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(Variable),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub position: AstPos,
    pub value: Value,
}

/// A reference to an operation variable (`$name`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variable {
    pub name: String,
    pub position: AstPos,
}
