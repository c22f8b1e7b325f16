use crate::Schema;
use crate::ast;
use crate::validation::RuleExecution;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;
use crate::visit::Node;
use crate::visit::ParallelVisitor;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::dispatch_enter;
use crate::visit::dispatch_leave;
use crate::visit::visit;

/// Run `rules` over `document` and return every error they report.
///
/// With [`RuleExecution::Parallel`] all rules share a single traversal and
/// errors come back in traversal order. With [`RuleExecution::Sequential`]
/// each rule traverses the document on its own and errors come back grouped
/// by rule. Either way the same set of errors is found.
///
/// `document` is not checked for being executable-only: type-system
/// definitions are visited like any other node, and are ignored by every
/// rule in [`specified_rules`](crate::validation::specified_rules).
pub fn validate<'a>(
    document: &'a ast::Document,
    schema: Option<&'a Schema>,
    rules: &[Box<dyn ValidationRule>],
    options: &ValidationOptions,
) -> Vec<ValidationError<'a>> {
    let context = ValidationContext::new(document, schema, options);
    log::debug!(
        "Validating {} definition(s) against {} rule(s) ({:?}).",
        document.definitions.len(),
        rules.len(),
        options.execution,
    );

    match options.execution {
        RuleExecution::Parallel => {
            let visitors = rules.iter().map(|rule| rule.create_visitor(&context)).collect();
            let mut guard = ErrorLimitGuard {
                context: &context,
                inner: Box::new(ParallelVisitor::new(visitors)),
                suppress_leave: false,
            };
            visit(Node::Document(document), &mut guard);
        },

        RuleExecution::Sequential => {
            for rule in rules {
                if context.is_aborted() {
                    break;
                }
                log::trace!("Running validation rule `{}`.", rule.name());
                let mut guard = ErrorLimitGuard {
                    context: &context,
                    inner: rule.create_visitor(&context),
                    suppress_leave: false,
                };
                visit(Node::Document(document), &mut guard);
            }
        },
    }

    let errors = context.into_errors();
    log::debug!("Validation found {} error(s).", errors.len());
    errors
}

/// Stops the traversal once the context has hit its error limit.
struct ErrorLimitGuard<'c, 'a> {
    context: &'c ValidationContext<'a>,
    inner: Box<dyn Visitor<'a> + 'c>,

    /// Set when a node was refused without entering `inner`; its leave must
    /// not reach `inner` either.
    suppress_leave: bool,
}

impl<'a> Visitor<'a> for ErrorLimitGuard<'_, 'a> {
    fn enter(&mut self, node: Node<'a>, info: &VisitInfo) -> VisitAction {
        if self.context.is_aborted() {
            self.suppress_leave = true;
            return VisitAction::Break;
        }

        let action = dispatch_enter(self.inner.as_mut(), node, info);
        if self.context.is_aborted() {
            VisitAction::Break
        } else {
            action
        }
    }

    fn leave(&mut self, node: Node<'a>, info: &VisitInfo) {
        // A refused node is always the next one left.
        if std::mem::take(&mut self.suppress_leave) {
            return;
        }
        dispatch_leave(self.inner.as_mut(), node, info);
    }
}
