//! `graphql_parser` v0.4 query `Document` -> crate AST.

use crate::ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_arguments_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_directives_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_type_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_value_to_ast;

/// Convert a `graphql_parser` query `Document` into a crate AST
/// [`Document`](ast::Document).
///
/// `graphql_parser` does not support directives on variable definitions, so
/// the resulting `VariableDefinition.directives` are always empty. Argument,
/// object-field, and variable-reference positions are those of the owning
/// field or directive.
pub fn from_query_document(
    doc: &graphql_parser::query::Document<'static, String>,
) -> ast::Document {
    doc.definitions
        .iter()
        .map(|def| {
            use graphql_parser::query::Definition as GpDef;
            match def {
                GpDef::Fragment(frag) => {
                    ast::Definition::Fragment(gp_fragment_def_to_ast(frag))
                },
                GpDef::Operation(op) => {
                    ast::Definition::Operation(gp_operation_to_ast(op))
                },
            }
        })
        .collect()
}

fn gp_fragment_def_to_ast(
    frag: &graphql_parser::query::FragmentDefinition<'static, String>,
) -> ast::FragmentDefinition {
    let graphql_parser::query::TypeCondition::On(type_condition) =
        &frag.type_condition;

    ast::FragmentDefinition {
        directives: gp_directives_to_ast(&frag.directives),
        name: frag.name.to_owned(),
        position: frag.position,
        selection_set: gp_selection_set_to_ast(&frag.selection_set),
        type_condition: type_condition.to_owned(),
    }
}

fn gp_operation_to_ast(
    op: &graphql_parser::query::OperationDefinition<'static, String>,
) -> ast::OperationDefinition {
    use graphql_parser::query::OperationDefinition as GpOp;
    let (kind, name, position, var_defs, directives, selection_set) = match op {
        GpOp::SelectionSet(ss) => {
            return ast::OperationDefinition {
                directives: vec![],
                kind: ast::OperationKind::Query,
                name: None,
                position: ss.span.0,
                selection_set: gp_selection_set_to_ast(ss),
                variable_definitions: vec![],
            };
        },
        GpOp::Query(query) => (
            ast::OperationKind::Query,
            &query.name,
            query.position,
            &query.variable_definitions,
            &query.directives,
            &query.selection_set,
        ),
        GpOp::Mutation(mutation) => (
            ast::OperationKind::Mutation,
            &mutation.name,
            mutation.position,
            &mutation.variable_definitions,
            &mutation.directives,
            &mutation.selection_set,
        ),
        GpOp::Subscription(subscription) => (
            ast::OperationKind::Subscription,
            &subscription.name,
            subscription.position,
            &subscription.variable_definitions,
            &subscription.directives,
            &subscription.selection_set,
        ),
    };

    ast::OperationDefinition {
        directives: gp_directives_to_ast(directives),
        kind,
        name: name.to_owned(),
        position,
        selection_set: gp_selection_set_to_ast(selection_set),
        variable_definitions: var_defs
            .iter()
            .map(gp_variable_def_to_ast)
            .collect(),
    }
}

fn gp_variable_def_to_ast(
    var_def: &graphql_parser::query::VariableDefinition<'static, String>,
) -> ast::VariableDefinition {
    ast::VariableDefinition {
        default_value: var_def
            .default_value
            .as_ref()
            .map(|value| gp_value_to_ast(value, var_def.position)),
        directives: vec![],
        position: var_def.position,
        var_type: gp_type_to_ast(&var_def.var_type),
        variable: ast::Variable {
            name: var_def.name.to_owned(),
            position: var_def.position,
        },
    }
}

fn gp_selection_set_to_ast(
    ss: &graphql_parser::query::SelectionSet<'static, String>,
) -> ast::SelectionSet {
    ast::SelectionSet {
        position: ss.span.0,
        selections: ss.items.iter().map(gp_selection_to_ast).collect(),
    }
}

fn gp_selection_to_ast(
    selection: &graphql_parser::query::Selection<'static, String>,
) -> ast::Selection {
    use graphql_parser::query::Selection as GpSel;
    match selection {
        GpSel::Field(field) => {
            // `graphql_parser` represents a leaf field with an empty
            // selection set.
            let selection_set =
                if field.selection_set.items.is_empty() {
                    None
                } else {
                    Some(gp_selection_set_to_ast(&field.selection_set))
                };

            ast::Selection::Field(ast::Field {
                alias: field.alias.to_owned(),
                arguments: gp_arguments_to_ast(
                    &field.arguments,
                    field.position,
                ),
                directives: gp_directives_to_ast(&field.directives),
                name: field.name.to_owned(),
                position: field.position,
                selection_set,
            })
        },

        GpSel::FragmentSpread(spread) => {
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                directives: gp_directives_to_ast(&spread.directives),
                fragment_name: spread.fragment_name.to_owned(),
                position: spread.position,
            })
        },

        GpSel::InlineFragment(inline) => {
            ast::Selection::InlineFragment(ast::InlineFragment {
                directives: gp_directives_to_ast(&inline.directives),
                position: inline.position,
                selection_set: gp_selection_set_to_ast(&inline.selection_set),
                type_condition: inline.type_condition.as_ref().map(
                    |graphql_parser::query::TypeCondition::On(name)| {
                        name.to_owned()
                    },
                ),
            })
        },
    }
}
