//! Crate AST -> `graphql_parser` v0.4 query `Document`.

use crate::ast;
use crate::compat_graphql_parser_v0_4::helpers::arguments_to_gp;
use crate::compat_graphql_parser_v0_4::helpers::directives_to_gp;
use crate::compat_graphql_parser_v0_4::helpers::type_to_gp;
use crate::compat_graphql_parser_v0_4::helpers::value_to_gp;

/// Convert a crate AST [`Document`](ast::Document) into a `graphql_parser`
/// query `Document`, typically so that it can be printed via its `Display`
/// impl.
///
/// Type-system definitions have no representation in a `graphql_parser`
/// query document and are dropped. Directives on variable definitions are
/// dropped for the same reason.
pub fn to_query_document(
    doc: &ast::Document,
) -> graphql_parser::query::Document<'static, String> {
    use graphql_parser::query::Definition as GpDef;
    let definitions = doc
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::Definition::Fragment(frag) => {
                Some(GpDef::Fragment(fragment_def_to_gp(frag)))
            },
            ast::Definition::Operation(op) => {
                Some(GpDef::Operation(operation_to_gp(op)))
            },
            ast::Definition::TypeSystem(_) => {
                log::trace!(
                    "Dropping a type-system definition while converting to \
                    a graphql_parser query document."
                );
                None
            },
        })
        .collect();

    graphql_parser::query::Document { definitions }
}

fn fragment_def_to_gp(
    frag: &ast::FragmentDefinition,
) -> graphql_parser::query::FragmentDefinition<'static, String> {
    graphql_parser::query::FragmentDefinition {
        directives: directives_to_gp(&frag.directives),
        name: frag.name.to_owned(),
        position: frag.position,
        selection_set: selection_set_to_gp(&frag.selection_set),
        type_condition: graphql_parser::query::TypeCondition::On(
            frag.type_condition.to_owned(),
        ),
    }
}

fn operation_to_gp(
    op: &ast::OperationDefinition,
) -> graphql_parser::query::OperationDefinition<'static, String> {
    use graphql_parser::query::OperationDefinition as GpOp;
    if op.is_shorthand() {
        return GpOp::SelectionSet(selection_set_to_gp(&op.selection_set));
    }

    let directives = directives_to_gp(&op.directives);
    let name = op.name.to_owned();
    let position = op.position;
    let selection_set = selection_set_to_gp(&op.selection_set);
    let variable_definitions = op
        .variable_definitions
        .iter()
        .map(variable_def_to_gp)
        .collect();

    match op.kind {
        ast::OperationKind::Mutation => {
            GpOp::Mutation(graphql_parser::query::Mutation {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            })
        },
        ast::OperationKind::Query => {
            GpOp::Query(graphql_parser::query::Query {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            })
        },
        ast::OperationKind::Subscription => {
            GpOp::Subscription(graphql_parser::query::Subscription {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            })
        },
    }
}

fn variable_def_to_gp(
    var_def: &ast::VariableDefinition,
) -> graphql_parser::query::VariableDefinition<'static, String> {
    graphql_parser::query::VariableDefinition {
        default_value: var_def.default_value.as_ref().map(value_to_gp),
        name: var_def.variable.name.to_owned(),
        position: var_def.position,
        var_type: type_to_gp(&var_def.var_type),
    }
}

fn selection_set_to_gp(
    ss: &ast::SelectionSet,
) -> graphql_parser::query::SelectionSet<'static, String> {
    graphql_parser::query::SelectionSet {
        items: ss.selections.iter().map(selection_to_gp).collect(),
        span: (ss.position, ss.position),
    }
}

fn selection_to_gp(
    selection: &ast::Selection,
) -> graphql_parser::query::Selection<'static, String> {
    use graphql_parser::query::Selection as GpSel;
    match selection {
        ast::Selection::Field(field) => {
            GpSel::Field(graphql_parser::query::Field {
                alias: field.alias.to_owned(),
                arguments: arguments_to_gp(&field.arguments),
                directives: directives_to_gp(&field.directives),
                name: field.name.to_owned(),
                position: field.position,
                selection_set: match &field.selection_set {
                    Some(ss) => selection_set_to_gp(ss),
                    None => graphql_parser::query::SelectionSet {
                        items: vec![],
                        span: (field.position, field.position),
                    },
                },
            })
        },

        ast::Selection::FragmentSpread(spread) => {
            GpSel::FragmentSpread(graphql_parser::query::FragmentSpread {
                directives: directives_to_gp(&spread.directives),
                fragment_name: spread.fragment_name.to_owned(),
                position: spread.position,
            })
        },

        ast::Selection::InlineFragment(inline) => {
            GpSel::InlineFragment(graphql_parser::query::InlineFragment {
                directives: directives_to_gp(&inline.directives),
                position: inline.position,
                selection_set: selection_set_to_gp(&inline.selection_set),
                type_condition: inline.type_condition.as_ref().map(|name| {
                    graphql_parser::query::TypeCondition::On(name.to_owned())
                }),
            })
        },
    }
}
