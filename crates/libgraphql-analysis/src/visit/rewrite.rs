use crate::PathKey;
use crate::ast;
use crate::visit::AstNode;
use crate::visit::Edit;
use crate::visit::Node;
use crate::visit::NodeKind;
use crate::visit::Visitor;
use crate::visit::visit;
use thiserror::Error;

type Result<T> = std::result::Result<T, RewriteError>;

/// Visit `document` and return a new document with every replacement the
/// visitor requested applied. `document` itself is left untouched.
pub fn rewrite<'a, V: Visitor<'a> + ?Sized>(
    document: &'a ast::Document,
    visitor: &mut V,
) -> Result<ast::Document> {
    let outcome = visit(Node::Document(document), visitor);
    let mut rewritten = document.clone();
    for Edit { node, path } in outcome.edits {
        log::trace!("Applying a {} replacement at `{path:?}`.", node.kind());
        replace_in_document(&mut rewritten, &path, &path, node)?;
    }
    Ok(rewritten)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RewriteError {
    #[error("No node exists at path `{path:?}`")]
    InvalidPath {
        path: Vec<PathKey>,
    },

    #[error(
        "Cannot replace the node at path `{path:?}` with a node of kind \
        `{replacement_kind}`"
    )]
    KindMismatch {
        path: Vec<PathKey>,
        replacement_kind: NodeKind,
    },
}

fn invalid_path(path: &[PathKey]) -> RewriteError {
    RewriteError::InvalidPath {
        path: path.to_vec(),
    }
}

fn kind_mismatch(path: &[PathKey], node: &AstNode) -> RewriteError {
    RewriteError::KindMismatch {
        path: path.to_vec(),
        replacement_kind: node.kind(),
    }
}

/// Splits `[Name(member), Index(idx), rest @ ..]` for list members.
fn list_step<'k>(keys: &'k [PathKey], member: &str) -> Option<(usize, &'k [PathKey])> {
    match keys {
        [PathKey::Name(name), PathKey::Index(idx), rest @ ..] if name == member => {
            Some((*idx, rest))
        },
        _ => None,
    }
}

fn member_name(keys: &[PathKey]) -> Option<&str> {
    match keys.first() {
        Some(PathKey::Name(name)) => Some(name.as_str()),
        _ => None,
    }
}

fn replace_in_document(
    doc: &mut ast::Document,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if keys.is_empty() {
        return match node {
            AstNode::Document(new_doc) => {
                *doc = new_doc;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        };
    }

    let (idx, rest) =
        list_step(keys, "definitions")
            .ok_or_else(|| invalid_path(full_path))?;
    let def =
        doc.definitions
            .get_mut(idx)
            .ok_or_else(|| invalid_path(full_path))?;

    if rest.is_empty() {
        *def = match node {
            AstNode::FragmentDefinition(frag) => ast::Definition::Fragment(frag),
            AstNode::OperationDefinition(op) => ast::Definition::Operation(op),
            AstNode::TypeSystemDefinition(ts_def) => ast::Definition::TypeSystem(ts_def),
            other => return Err(kind_mismatch(full_path, &other)),
        };
        return Ok(());
    }

    match def {
        ast::Definition::Fragment(frag) => {
            replace_in_fragment_definition(frag, rest, full_path, node)
        },
        ast::Definition::Operation(op) => {
            replace_in_operation_definition(op, rest, full_path, node)
        },
        ast::Definition::TypeSystem(_) => Err(invalid_path(full_path)),
    }
}

fn replace_in_operation_definition(
    op: &mut ast::OperationDefinition,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if let Some((idx, rest)) = list_step(keys, "variableDefinitions") {
        let var_def =
            op.variable_definitions
                .get_mut(idx)
                .ok_or_else(|| invalid_path(full_path))?;
        return replace_in_variable_definition(var_def, rest, full_path, node);
    }

    if let Some((idx, rest)) = list_step(keys, "directives") {
        return replace_in_directive_list(&mut op.directives, idx, rest, full_path, node);
    }

    match member_name(keys) {
        Some("selectionSet") => {
            replace_in_selection_set(&mut op.selection_set, &keys[1..], full_path, node)
        },
        _ => Err(invalid_path(full_path)),
    }
}

fn replace_in_fragment_definition(
    frag: &mut ast::FragmentDefinition,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if let Some((idx, rest)) = list_step(keys, "directives") {
        return replace_in_directive_list(&mut frag.directives, idx, rest, full_path, node);
    }

    match member_name(keys) {
        Some("selectionSet") => {
            replace_in_selection_set(&mut frag.selection_set, &keys[1..], full_path, node)
        },
        _ => Err(invalid_path(full_path)),
    }
}

fn replace_in_variable_definition(
    var_def: &mut ast::VariableDefinition,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if keys.is_empty() {
        return match node {
            AstNode::VariableDefinition(new_var_def) => {
                *var_def = new_var_def;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        };
    }

    if let Some((idx, rest)) = list_step(keys, "directives") {
        return replace_in_directive_list(&mut var_def.directives, idx, rest, full_path, node);
    }

    let rest = &keys[1..];
    match member_name(keys) {
        Some("variable") if rest.is_empty() => match node {
            AstNode::Variable(var) => {
                var_def.variable = var;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        },
        Some("type") => replace_in_type(&mut var_def.var_type, rest, full_path, node),
        Some("defaultValue") => match &mut var_def.default_value {
            Some(value) => replace_in_value(value, rest, full_path, node),
            None => Err(invalid_path(full_path)),
        },
        _ => Err(invalid_path(full_path)),
    }
}

fn replace_in_selection_set(
    ss: &mut ast::SelectionSet,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if keys.is_empty() {
        return match node {
            AstNode::SelectionSet(new_ss) => {
                *ss = new_ss;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        };
    }

    let (idx, rest) =
        list_step(keys, "selections")
            .ok_or_else(|| invalid_path(full_path))?;
    let selection =
        ss.selections
            .get_mut(idx)
            .ok_or_else(|| invalid_path(full_path))?;

    if rest.is_empty() {
        *selection = match node {
            AstNode::Field(field) => ast::Selection::Field(field),
            AstNode::FragmentSpread(spread) => ast::Selection::FragmentSpread(spread),
            AstNode::InlineFragment(inline) => ast::Selection::InlineFragment(inline),
            other => return Err(kind_mismatch(full_path, &other)),
        };
        return Ok(());
    }

    match selection {
        ast::Selection::Field(field) => {
            if let Some((idx, rest)) = list_step(rest, "arguments") {
                return replace_in_argument_list(&mut field.arguments, idx, rest, full_path, node);
            }
            if let Some((idx, rest)) = list_step(rest, "directives") {
                return replace_in_directive_list(&mut field.directives, idx, rest, full_path, node);
            }
            match (member_name(rest), &mut field.selection_set) {
                (Some("selectionSet"), Some(nested)) => {
                    replace_in_selection_set(nested, &rest[1..], full_path, node)
                },
                _ => Err(invalid_path(full_path)),
            }
        },

        ast::Selection::FragmentSpread(spread) => {
            let (idx, rest) =
                list_step(rest, "directives")
                    .ok_or_else(|| invalid_path(full_path))?;
            replace_in_directive_list(&mut spread.directives, idx, rest, full_path, node)
        },

        ast::Selection::InlineFragment(inline) => {
            if let Some((idx, rest)) = list_step(rest, "directives") {
                return replace_in_directive_list(&mut inline.directives, idx, rest, full_path, node);
            }
            match member_name(rest) {
                Some("selectionSet") => {
                    replace_in_selection_set(&mut inline.selection_set, &rest[1..], full_path, node)
                },
                _ => Err(invalid_path(full_path)),
            }
        },
    }
}

fn replace_in_directive_list(
    directives: &mut [ast::Directive],
    idx: usize,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    let directive =
        directives
            .get_mut(idx)
            .ok_or_else(|| invalid_path(full_path))?;

    if keys.is_empty() {
        return match node {
            AstNode::Directive(new_directive) => {
                *directive = new_directive;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        };
    }

    let (idx, rest) =
        list_step(keys, "arguments")
            .ok_or_else(|| invalid_path(full_path))?;
    replace_in_argument_list(&mut directive.arguments, idx, rest, full_path, node)
}

fn replace_in_argument_list(
    arguments: &mut [ast::Argument],
    idx: usize,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    let argument =
        arguments
            .get_mut(idx)
            .ok_or_else(|| invalid_path(full_path))?;

    match (keys, node) {
        ([], AstNode::Argument(new_argument)) => {
            *argument = new_argument;
            Ok(())
        },
        ([], other) => Err(kind_mismatch(full_path, &other)),
        (_, node) => match member_name(keys) {
            Some("value") => replace_in_value(&mut argument.value, &keys[1..], full_path, node),
            _ => Err(invalid_path(full_path)),
        },
    }
}

fn replace_in_value(
    value: &mut ast::Value,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    if keys.is_empty() {
        *value = match node {
            AstNode::Value(new_value) => new_value,
            AstNode::Variable(var) => ast::Value::Variable(var),
            other => return Err(kind_mismatch(full_path, &other)),
        };
        return Ok(());
    }

    match value {
        ast::Value::List(items) => {
            let (idx, rest) =
                list_step(keys, "values")
                    .ok_or_else(|| invalid_path(full_path))?;
            let item = items.get_mut(idx).ok_or_else(|| invalid_path(full_path))?;
            replace_in_value(item, rest, full_path, node)
        },

        ast::Value::Object(fields) => {
            let (idx, rest) =
                list_step(keys, "fields")
                    .ok_or_else(|| invalid_path(full_path))?;
            let field = fields.get_mut(idx).ok_or_else(|| invalid_path(full_path))?;
            match (rest, node) {
                ([], AstNode::ObjectField(new_field)) => {
                    *field = new_field;
                    Ok(())
                },
                ([], other) => Err(kind_mismatch(full_path, &other)),
                ([PathKey::Name(member), rest @ ..], node) if member == "value" => {
                    replace_in_value(&mut field.value, rest, full_path, node)
                },
                _ => Err(invalid_path(full_path)),
            }
        },

        _ => Err(invalid_path(full_path)),
    }
}

fn replace_in_type(
    type_ref: &mut ast::Type,
    keys: &[PathKey],
    full_path: &[PathKey],
    node: AstNode,
) -> Result<()> {
    match (keys, type_ref) {
        ([], type_ref) => match node {
            AstNode::Type(new_type) => {
                *type_ref = new_type;
                Ok(())
            },
            other => Err(kind_mismatch(full_path, &other)),
        },
        (
            [PathKey::Name(member), rest @ ..],
            ast::Type::ListType(inner) | ast::Type::NonNullType(inner),
        ) if member == "type" => replace_in_type(inner, rest, full_path, node),
        _ => Err(invalid_path(full_path)),
    }
}
