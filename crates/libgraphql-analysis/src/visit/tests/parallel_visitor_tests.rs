use crate::ast;
use crate::tests::utils::parse;
use crate::visit::AstNode;
use crate::visit::Node;
use crate::visit::NodeKind;
use crate::visit::ParallelVisitor;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::visit;
use std::cell::RefCell;
use std::rc::Rc;

const DOCUMENT: &str = r#"
    query Q($v: Int) {
        a(x: $v) { b c }
        ...F
    }
    fragment F on T { d { e } }
"#;

#[derive(Clone, Default)]
struct Recorder {
    break_on: Option<NodeKind>,
    log: Rc<RefCell<Vec<String>>>,
    skip: Option<NodeKind>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// A fresh recorder with the same behavior and an empty log.
    fn fresh(&self) -> Self {
        Self {
            log: Rc::default(),
            ..self.clone()
        }
    }
}

impl<'a> Visitor<'a> for Recorder {
    fn enter(&mut self, node: Node<'a>, info: &VisitInfo) -> VisitAction {
        self.log.borrow_mut().push(format!("enter {} {:?}", node.kind(), info.path_keys()));
        if self.break_on == Some(node.kind()) {
            VisitAction::Break
        } else if self.skip == Some(node.kind()) {
            VisitAction::Skip
        } else {
            VisitAction::Continue
        }
    }

    fn leave(&mut self, node: Node<'a>, info: &VisitInfo) {
        self.log.borrow_mut().push(format!("leave {} {:?}", node.kind(), info.path_keys()));
    }
}

fn boxed<'a>(visitor: impl Visitor<'a> + 'static) -> Box<dyn Visitor<'a>> {
    Box::new(visitor)
}

/// Runs each recorder alone, then all of them together, and asserts that
/// every recorder saw the same events both ways.
fn assert_parallel_matches_sequential(doc: &ast::Document, recorders: Vec<Recorder>) {
    let alone: Vec<Vec<String>> =
        recorders
            .iter()
            .map(|recorder| {
                let mut recorder = recorder.fresh();
                visit(Node::Document(doc), &mut recorder);
                recorder.events()
            })
            .collect();

    let together: Vec<Recorder> = recorders.iter().map(Recorder::fresh).collect();
    let mut parallel = ParallelVisitor::new(
        together.iter().cloned().map(boxed).collect(),
    );
    visit(Node::Document(doc), &mut parallel);

    for (idx, recorder) in together.iter().enumerate() {
        assert_eq!(recorder.events(), alone[idx], "recorder {idx} diverged");
    }
}

#[test]
fn test_members_see_the_same_hooks_as_when_run_alone() {
    let doc = parse(DOCUMENT);
    assert_parallel_matches_sequential(&doc, vec![
        Recorder::default(),
        Recorder {
            skip: Some(NodeKind::Field),
            ..Default::default()
        },
        Recorder {
            skip: Some(NodeKind::OperationDefinition),
            ..Default::default()
        },
    ]);
}

#[test]
fn test_a_member_that_breaks_does_not_stop_the_others() {
    let doc = parse(DOCUMENT);
    assert_parallel_matches_sequential(&doc, vec![
        Recorder {
            break_on: Some(NodeKind::Argument),
            ..Default::default()
        },
        Recorder::default(),
        Recorder {
            break_on: Some(NodeKind::FragmentDefinition),
            skip: Some(NodeKind::SelectionSet),
            ..Default::default()
        },
    ]);

    let mut parallel = ParallelVisitor::new(vec![
        boxed(Recorder {
            break_on: Some(NodeKind::Field),
            ..Default::default()
        }),
        boxed(Recorder::default()),
    ]);
    let outcome = visit(Node::Document(&doc), &mut parallel);
    assert!(!outcome.aborted);
}

#[test]
fn test_traversal_aborts_once_every_member_has_broken() {
    let doc = parse(DOCUMENT);
    let first = Recorder {
        break_on: Some(NodeKind::Field),
        ..Default::default()
    };
    let second = Recorder {
        break_on: Some(NodeKind::SelectionSet),
        ..Default::default()
    };

    let mut parallel = ParallelVisitor::new(vec![boxed(first.clone()), boxed(second.clone())]);
    let outcome = visit(Node::Document(&doc), &mut parallel);

    assert!(outcome.aborted);
    assert!(first.events().iter().all(|event| !event.contains("FragmentDefinition")));
    assert_eq!(second.events().last().map(String::as_str), Some("leave Document []"));
}

#[test]
fn test_first_replacement_wins_and_children_are_not_visited() {
    struct RenameFields(&'static str);

    impl<'a> Visitor<'a> for RenameFields {
        fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
            if field.name != "a" {
                return VisitAction::Continue;
            }
            VisitAction::Replace(AstNode::Field(ast::Field {
                name: self.0.to_string(),
                selection_set: None,
                ..field.clone()
            }))
        }
    }

    let doc = parse(DOCUMENT);
    let recorder = Recorder::default();
    let mut parallel = ParallelVisitor::new(vec![
        boxed(RenameFields("first")),
        boxed(RenameFields("second")),
        boxed(recorder.clone()),
    ]);
    let outcome = visit(Node::Document(&doc), &mut parallel);

    assert_eq!(outcome.edits.len(), 1);
    match &outcome.edits[0].node {
        AstNode::Field(field) => assert_eq!(field.name, "first"),
        other => panic!("Unexpected replacement: {other:?}"),
    }

    // The replaced field's arguments and sub-selections were never entered.
    let events = recorder.events();
    assert!(!events.iter().any(|event| event.starts_with("enter Argument")));
    assert!(events.iter().any(|event| event.starts_with("leave Field")));
    assert_eq!(parallel.len(), 3);
}

#[test]
fn test_an_empty_parallel_visitor_breaks_immediately() {
    let doc = parse(DOCUMENT);
    let mut parallel = ParallelVisitor::new(vec![]);
    let outcome = visit(Node::Document(&doc), &mut parallel);

    assert!(parallel.is_empty());
    assert!(outcome.aborted);
}
