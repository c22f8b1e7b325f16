use crate::FragmentGraph;
use crate::Schema;
use crate::ast;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use crate::validation::VariableUsage;
use crate::validation::variable_usages::collect_variable_usages;
use crate::visit::Node;
use crate::visit::NodeKind;
use smallvec::SmallVec;
use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const ERROR_LIMIT_MESSAGE: &str =
    "Too many validation errors, error limit reached. Validation aborted.";

type NodeKey = (NodeKind, *const ());

/// State shared by every rule during one validation run.
///
/// Rules only ever see the context through a shared reference; all
/// mutation (reported errors, memoized analyses) happens through interior
/// mutability. A context is created per run and never shared across
/// threads.
pub struct ValidationContext<'a> {
    aborted: Cell<bool>,
    document: &'a ast::Document,
    errors: RefCell<Vec<ValidationError<'a>>>,
    fragment_graph: FragmentGraph<'a>,
    max_errors: Option<usize>,
    recursive_fragments: RefCell<HashMap<*const ast::OperationDefinition, Rc<[&'a ast::FragmentDefinition]>>>,
    recursive_variable_usages: RefCell<HashMap<*const ast::OperationDefinition, Rc<[VariableUsage<'a>]>>>,
    schema: Option<&'a Schema>,
    variable_usages: RefCell<HashMap<NodeKey, Rc<[VariableUsage<'a>]>>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        document: &'a ast::Document,
        schema: Option<&'a Schema>,
        options: &ValidationOptions,
    ) -> Self {
        Self {
            aborted: Cell::new(false),
            document,
            errors: RefCell::new(vec![]),
            fragment_graph: FragmentGraph::new(document),
            max_errors: options.max_errors,
            recursive_fragments: RefCell::new(HashMap::new()),
            recursive_variable_usages: RefCell::new(HashMap::new()),
            schema,
            variable_usages: RefCell::new(HashMap::new()),
        }
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    pub fn fragment_graph(&self) -> &FragmentGraph<'a> {
        &self.fragment_graph
    }

    // =========================================================
    // Errors
    // =========================================================

    /// Record a validation error attached to `nodes`.
    ///
    /// Once the configured error limit is reached, one final error saying
    /// so is recorded, the run is marked aborted, and every later report is
    /// dropped.
    pub fn report_error(&self, message: impl Into<String>, nodes: Vec<Node<'a>>) {
        if self.aborted.get() {
            return;
        }

        let mut errors = self.errors.borrow_mut();
        if self.max_errors.is_some_and(|max| errors.len() >= max) {
            log::debug!("Validation error limit reached after {} error(s).", errors.len());
            errors.push(ValidationError::new(ERROR_LIMIT_MESSAGE, vec![]));
            self.aborted.set(true);
            return;
        }

        errors.push(ValidationError::new(message, nodes));
    }

    /// True once the error limit has been hit. The traversal should stop.
    pub fn is_aborted(&self) -> bool {
        self.aborted.get()
    }

    /// Errors reported so far, in report order.
    pub fn errors(&self) -> Vec<ValidationError<'a>> {
        self.errors.borrow().clone()
    }

    pub fn into_errors(self) -> Vec<ValidationError<'a>> {
        self.errors.into_inner()
    }

    // =========================================================
    // Fragments
    // =========================================================

    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragment_graph.fragment(name)
    }

    /// Names of the fragments spread directly within `selection_set`.
    pub fn fragment_spreads(&self, selection_set: &'a ast::SelectionSet) -> SmallVec<[&'a str; 4]> {
        FragmentGraph::spreads_in(selection_set)
    }

    /// Every defined fragment `operation` reaches through spreads, in
    /// discovery order. Memoized per operation.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Rc<[&'a ast::FragmentDefinition]> {
        let key = std::ptr::from_ref(operation);
        if let Some(cached) = self.recursive_fragments.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let fragments: Rc<[&'a ast::FragmentDefinition]> =
            self.fragment_graph
                .recursively_referenced_fragments(&operation.selection_set)
                .into();
        self.recursive_fragments.borrow_mut().insert(key, Rc::clone(&fragments));
        fragments
    }

    // =========================================================
    // Variable usages
    // =========================================================

    /// Variable references within `node` (typically an operation or
    /// fragment definition), without following fragment spreads. Memoized
    /// per node.
    pub fn variable_usages(&self, node: Node<'a>) -> Rc<[VariableUsage<'a>]> {
        let key = (node.kind(), node.addr());
        if let Some(cached) = self.variable_usages.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let usages: Rc<[VariableUsage<'a>]> = collect_variable_usages(node, self.schema).into();
        self.variable_usages.borrow_mut().insert(key, Rc::clone(&usages));
        usages
    }

    /// Variable references within `operation` and every fragment it
    /// reaches: the operation's own usages first, then each fragment's in
    /// discovery order. Memoized per operation.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Rc<[VariableUsage<'a>]> {
        let key = std::ptr::from_ref(operation);
        if let Some(cached) = self.recursive_variable_usages.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let mut usages = self.variable_usages(Node::OperationDefinition(operation)).to_vec();
        for fragment in self.recursively_referenced_fragments(operation).iter() {
            usages.extend_from_slice(&self.variable_usages(Node::FragmentDefinition(*fragment)));
        }
        log::trace!(
            "Operation `{}` uses {} variable reference(s).",
            operation.name().unwrap_or_default(),
            usages.len(),
        );

        let usages: Rc<[VariableUsage<'a>]> = usages.into();
        self.recursive_variable_usages.borrow_mut().insert(key, Rc::clone(&usages));
        usages
    }
}
