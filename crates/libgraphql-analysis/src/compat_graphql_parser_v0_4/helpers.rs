//! Value, type, and directive converters shared by both conversion
//! directions.

use crate::ast;

// =========================================================
// graphql_parser -> ast
// =========================================================

/// `graphql_parser` records no positions for arguments or values, so they
/// inherit the position of the field or directive that owns them.
pub(super) fn gp_arguments_to_ast(
    arguments: &[(String, graphql_parser::query::Value<'static, String>)],
    owner_pos: ast::AstPos,
) -> Vec<ast::Argument> {
    arguments
        .iter()
        .map(|(name, value)| ast::Argument {
            name: name.to_owned(),
            position: owner_pos,
            value: gp_value_to_ast(value, owner_pos),
        })
        .collect()
}

pub(super) fn gp_directives_to_ast(
    directives: &[graphql_parser::query::Directive<'static, String>],
) -> Vec<ast::Directive> {
    directives
        .iter()
        .map(|directive| ast::Directive {
            arguments: gp_arguments_to_ast(
                &directive.arguments,
                directive.position,
            ),
            name: directive.name.to_owned(),
            position: directive.position,
        })
        .collect()
}

pub(crate) fn gp_type_to_ast(
    gp_type: &graphql_parser::query::Type<'static, String>,
) -> ast::Type {
    use graphql_parser::query::Type as GpType;
    match gp_type {
        GpType::ListType(inner) => {
            ast::Type::ListType(Box::new(gp_type_to_ast(inner)))
        },
        GpType::NamedType(name) => ast::Type::NamedType(name.to_owned()),
        GpType::NonNullType(inner) => {
            ast::Type::NonNullType(Box::new(gp_type_to_ast(inner)))
        },
    }
}

pub(crate) fn gp_value_to_ast(
    value: &graphql_parser::query::Value<'static, String>,
    pos: ast::AstPos,
) -> ast::Value {
    use graphql_parser::query::Value as GpValue;
    match value {
        GpValue::Boolean(b) => ast::Value::Boolean(*b),
        GpValue::Enum(e) => ast::Value::Enum(e.to_owned()),
        GpValue::Float(f) => ast::Value::Float(*f),
        GpValue::Int(i) => ast::Value::Int(i.as_i64().unwrap_or_default()),
        GpValue::List(items) => ast::Value::List(
            items.iter().map(|item| gp_value_to_ast(item, pos)).collect(),
        ),
        GpValue::Null => ast::Value::Null,
        // `BTreeMap` iteration, so fields arrive sorted by name.
        GpValue::Object(fields) => ast::Value::Object(
            fields
                .iter()
                .map(|(name, value)| ast::ObjectField {
                    name: name.to_owned(),
                    position: pos,
                    value: gp_value_to_ast(value, pos),
                })
                .collect(),
        ),
        GpValue::String(s) => ast::Value::String(s.to_owned()),
        GpValue::Variable(name) => ast::Value::Variable(ast::Variable {
            name: name.to_owned(),
            position: pos,
        }),
    }
}

// =========================================================
// ast -> graphql_parser
// =========================================================

pub(super) fn arguments_to_gp(
    arguments: &[ast::Argument],
) -> Vec<(String, graphql_parser::query::Value<'static, String>)> {
    arguments
        .iter()
        .map(|arg| (arg.name.to_owned(), value_to_gp(&arg.value)))
        .collect()
}

pub(super) fn directives_to_gp(
    directives: &[ast::Directive],
) -> Vec<graphql_parser::query::Directive<'static, String>> {
    directives
        .iter()
        .map(|directive| graphql_parser::query::Directive {
            arguments: arguments_to_gp(&directive.arguments),
            name: directive.name.to_owned(),
            position: directive.position,
        })
        .collect()
}

pub(super) fn type_to_gp(
    ast_type: &ast::Type,
) -> graphql_parser::query::Type<'static, String> {
    use graphql_parser::query::Type as GpType;
    match ast_type {
        ast::Type::ListType(inner) => {
            GpType::ListType(Box::new(type_to_gp(inner)))
        },
        ast::Type::NamedType(name) => GpType::NamedType(name.to_owned()),
        ast::Type::NonNullType(inner) => {
            GpType::NonNullType(Box::new(type_to_gp(inner)))
        },
    }
}

/// `ObjectValue` field ordering becomes alphabetical in the
/// `graphql_parser` AST (it stores object fields in a `BTreeMap`).
pub(super) fn value_to_gp(
    value: &ast::Value,
) -> graphql_parser::query::Value<'static, String> {
    use graphql_parser::query::Value as GpValue;
    match value {
        ast::Value::Boolean(b) => GpValue::Boolean(*b),
        ast::Value::Enum(e) => GpValue::Enum(e.to_owned()),
        ast::Value::Float(f) => GpValue::Float(*f),
        ast::Value::Int(i) => match i32::try_from(*i) {
            Ok(small) => GpValue::Int(small.into()),
            // `graphql_parser::query::Number` can only be built from an i32,
            // so wider literals are emitted as their verbatim digits.
            Err(_) => GpValue::Enum(i.to_string()),
        },
        ast::Value::List(items) => {
            GpValue::List(items.iter().map(value_to_gp).collect())
        },
        ast::Value::Null => GpValue::Null,
        ast::Value::Object(fields) => GpValue::Object(
            fields
                .iter()
                .map(|field| (field.name.to_owned(), value_to_gp(&field.value)))
                .collect(),
        ),
        ast::Value::String(s) => GpValue::String(s.to_owned()),
        ast::Value::Variable(var) => GpValue::Variable(var.name.to_owned()),
    }
}
