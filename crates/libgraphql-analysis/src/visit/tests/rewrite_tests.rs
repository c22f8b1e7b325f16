use crate::PathKey;
use crate::ast;
use crate::tests::utils::normalized;
use crate::tests::utils::parse;
use crate::tests::utils::print;
use crate::visit::AstNode;
use crate::visit::NodeKind;
use crate::visit::RewriteError;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::rewrite;

struct RenameField {
    from: &'static str,
    to: &'static str,
}

impl<'a> Visitor<'a> for RenameField {
    fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
        if field.name != self.from {
            return VisitAction::Continue;
        }
        VisitAction::Replace(AstNode::Field(ast::Field {
            name: self.to.to_string(),
            ..field.clone()
        }))
    }
}

/// Inlines every variable reference in an argument as the literal `1`.
struct InlineVariables;

impl<'a> Visitor<'a> for InlineVariables {
    fn enter_variable_definition(
        &mut self,
        _var_def: &'a ast::VariableDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_variable(&mut self, _variable: &'a ast::Variable, _info: &VisitInfo) -> VisitAction {
        VisitAction::Replace(AstNode::Value(ast::Value::Int(1)))
    }
}

#[test]
fn test_replaced_selections_land_in_a_new_document() {
    let doc = parse("query Q { a { x } b a }");
    let rewritten = rewrite(&doc, &mut RenameField { from: "a", to: "z" }).unwrap();

    assert_eq!(print(&rewritten), normalized("query Q { z { x } b z }"));
    assert_eq!(print(&doc), normalized("query Q { a { x } b a }"));
}

#[test]
fn test_nested_replacements_inside_fragments_are_applied() {
    let doc = parse(r#"
        query Q { ...F }
        fragment F on T { outer { ... on T { a } } }
    "#);
    let rewritten = rewrite(&doc, &mut RenameField { from: "a", to: "renamed" }).unwrap();

    assert_eq!(print(&rewritten), normalized(r#"
        query Q { ...F }
        fragment F on T { outer { ... on T { renamed } } }
    "#));
}

#[test]
fn test_variables_can_be_replaced_by_literal_values() {
    let doc = parse(r#"
        query Q($v: Int) @dir(arg: $v) {
            f(x: $v, y: [$v, 2], z: {k: $v})
        }
    "#);
    let rewritten = rewrite(&doc, &mut InlineVariables).unwrap();

    assert_eq!(print(&rewritten), normalized(r#"
        query Q($v: Int) @dir(arg: 1) {
            f(x: 1, y: [1, 2], z: {k: 1})
        }
    "#));
}

#[test]
fn test_replacing_the_root_replaces_the_whole_document() {
    struct ReplaceDocument(ast::Document);

    impl<'a> Visitor<'a> for ReplaceDocument {
        fn enter_document(&mut self, _doc: &'a ast::Document, _info: &VisitInfo) -> VisitAction {
            VisitAction::Replace(AstNode::Document(self.0.clone()))
        }
    }

    let doc = parse("{ a }");
    let replacement = parse("{ b }");
    let rewritten = rewrite(&doc, &mut ReplaceDocument(replacement.clone())).unwrap();

    assert_eq!(rewritten, replacement);
}

#[test]
fn test_a_replacement_of_the_wrong_kind_is_an_error() {
    struct FieldToArgument;

    impl<'a> Visitor<'a> for FieldToArgument {
        fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
            VisitAction::Replace(AstNode::Argument(ast::Argument {
                name: "oops".to_string(),
                position: field.position,
                value: ast::Value::Null,
            }))
        }
    }

    let doc = parse("{ a }");
    let err = rewrite(&doc, &mut FieldToArgument).unwrap_err();

    assert_eq!(err, RewriteError::KindMismatch {
        path: vec![
            PathKey::from("definitions"),
            PathKey::Index(0),
            PathKey::from("selectionSet"),
            PathKey::from("selections"),
            PathKey::Index(0),
        ],
        replacement_kind: NodeKind::Argument,
    });
}

#[test]
fn test_a_visitor_without_replacements_returns_an_equal_document() {
    struct Noop;
    impl Visitor<'_> for Noop {}

    let doc = parse("query Q($v: Int = 3) { a(x: $v) @skip(if: false) { b } }");
    let rewritten = rewrite(&doc, &mut Noop).unwrap();

    assert_eq!(rewritten, doc);
}
