use crate::Path;
use crate::PathKey;
use crate::ast;
use crate::visit::AstNode;
use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::dispatch_enter;
use crate::visit::dispatch_leave;
use std::sync::Arc;

/// A replacement requested by a visitor via
/// [`VisitAction::Replace`].
#[derive(Clone, Debug, PartialEq)]
pub struct Edit {
    pub node: AstNode,

    /// Keys from the traversal root to the replaced node.
    pub path: Vec<PathKey>,
}

/// The result of a call to [`visit`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitOutcome {
    /// True when some enter hook returned [`VisitAction::Break`].
    pub aborted: bool,

    /// Replacements in the order they were requested.
    pub edits: Vec<Edit>,
}

/// Walk `root` and everything beneath it depth-first, calling `visitor`'s
/// hooks along the way.
///
/// The input is never modified; replacements requested by the visitor are
/// returned in [`VisitOutcome::edits`] (see
/// [`rewrite`](crate::visit::rewrite) to apply them).
pub fn visit<'a, V: Visitor<'a> + ?Sized>(
    root: Node<'a>,
    visitor: &mut V,
) -> VisitOutcome {
    let mut traversal = Traversal {
        outcome: VisitOutcome::default(),
        visitor,
    };
    traversal.walk(root, VisitInfo::root());
    traversal.outcome
}

struct Traversal<'v, V: ?Sized> {
    outcome: VisitOutcome,
    visitor: &'v mut V,
}

impl<'a, V: Visitor<'a> + ?Sized> Traversal<'_, V> {
    fn walk(&mut self, node: Node<'a>, info: VisitInfo) {
        match dispatch_enter(&mut *self.visitor, node, &info) {
            VisitAction::Break => self.outcome.aborted = true,
            VisitAction::Continue => self.walk_children(node, &info),
            VisitAction::Replace(replacement) => {
                self.outcome.edits.push(Edit {
                    node: replacement,
                    path: info.path_keys(),
                })
            },
            VisitAction::Skip => (),
        }

        dispatch_leave(&mut *self.visitor, node, &info);
    }

    fn walk_children(&mut self, node: Node<'a>, info: &VisitInfo) {
        match node {
            Node::Argument(arg) => {
                self.walk_member("value", Node::from(&arg.value), info);
            },

            Node::Directive(directive) => {
                self.walk_list("arguments", directive.arguments.iter().map(Node::Argument), info);
            },

            Node::Document(doc) => {
                self.walk_list("definitions", doc.definitions.iter().map(Node::from), info);
            },

            Node::Field(field) => {
                self.walk_list("arguments", field.arguments.iter().map(Node::Argument), info);
                self.walk_list("directives", field.directives.iter().map(Node::Directive), info);
                if let Some(selection_set) = &field.selection_set {
                    self.walk_member("selectionSet", Node::SelectionSet(selection_set), info);
                }
            },

            Node::FragmentDefinition(frag) => {
                self.walk_list("directives", frag.directives.iter().map(Node::Directive), info);
                self.walk_member("selectionSet", Node::SelectionSet(&frag.selection_set), info);
            },

            Node::FragmentSpread(spread) => {
                self.walk_list("directives", spread.directives.iter().map(Node::Directive), info);
            },

            Node::InlineFragment(inline) => {
                self.walk_list("directives", inline.directives.iter().map(Node::Directive), info);
                self.walk_member("selectionSet", Node::SelectionSet(&inline.selection_set), info);
            },

            Node::ObjectField(field) => {
                self.walk_member("value", Node::from(&field.value), info);
            },

            Node::OperationDefinition(op) => {
                self.walk_list(
                    "variableDefinitions",
                    op.variable_definitions.iter().map(Node::VariableDefinition),
                    info,
                );
                self.walk_list("directives", op.directives.iter().map(Node::Directive), info);
                self.walk_member("selectionSet", Node::SelectionSet(&op.selection_set), info);
            },

            Node::SelectionSet(ss) => {
                self.walk_list("selections", ss.selections.iter().map(Node::from), info);
            },

            Node::Type(ast::Type::ListType(inner) | ast::Type::NonNullType(inner)) => {
                self.walk_member("type", Node::Type(inner), info);
            },

            Node::Value(ast::Value::List(items)) => {
                self.walk_list("values", items.iter().map(Node::from), info);
            },

            Node::Value(ast::Value::Object(fields)) => {
                self.walk_list("fields", fields.iter().map(Node::ObjectField), info);
            },

            Node::VariableDefinition(var_def) => {
                self.walk_member("variable", Node::Variable(&var_def.variable), info);
                self.walk_member("type", Node::Type(&var_def.var_type), info);
                if let Some(default_value) = &var_def.default_value {
                    self.walk_member("defaultValue", Node::from(default_value), info);
                }
                self.walk_list("directives", var_def.directives.iter().map(Node::Directive), info);
            },

            Node::Type(ast::Type::NamedType(_))
            | Node::TypeSystemDefinition(_)
            | Node::Value(_)
            | Node::Variable(_) => (),
        }
    }

    fn walk_member(&mut self, key: &str, child: Node<'a>, info: &VisitInfo) {
        if self.outcome.aborted {
            return;
        }

        let path = Path::extend(info.path.clone(), key, Some(child.kind().as_str()));
        self.walk(child, VisitInfo {
            depth: info.depth + 1,
            path: Some(path),
        });
    }

    fn walk_list(
        &mut self,
        key: &str,
        children: impl Iterator<Item = Node<'a>>,
        info: &VisitInfo,
    ) {
        let mut list_path: Option<Arc<Path>> = None;
        for (idx, child) in children.enumerate() {
            if self.outcome.aborted {
                return;
            }

            let list_path = list_path
                .get_or_insert_with(|| Path::extend(info.path.clone(), key, None))
                .clone();
            let path = Path::extend(Some(list_path), idx, Some(child.kind().as_str()));
            self.walk(child, VisitInfo {
                depth: info.depth + 1,
                path: Some(path),
            });
        }
    }
}
