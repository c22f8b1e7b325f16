use crate::ast;
use crate::tests::utils::MixedChunk;
use crate::tests::utils::parse;
use crate::tests::utils::parse_mixed;
use crate::validation::RuleExecution;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;
use crate::validation::rules::NoUnusedVariables;
use crate::validation::specified_rules;
use crate::validation::validate;
use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

/// Reports every field it sees, named after the rule that saw it.
#[derive(Debug)]
struct ReportFields(&'static str);

impl ValidationRule for ReportFields {
    fn name(&self) -> &'static str {
        self.0
    }

    fn create_visitor<'c, 'a: 'c>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c> {
        Box::new(ReportFieldsVisitor { context, rule: self.0 })
    }
}

struct ReportFieldsVisitor<'c, 'a> {
    context: &'c ValidationContext<'a>,
    rule: &'static str,
}

impl<'a> Visitor<'a> for ReportFieldsVisitor<'_, 'a> {
    fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
        self.context.report_error(
            format!("{}: {}", self.rule, field.name),
            vec![Node::Field(field)],
        );
        VisitAction::Continue
    }
}

/// Logs each field it enters and leaves, and reports two errors when
/// leaving a field.
#[derive(Debug, Default)]
struct LogFieldsAndReportOnLeave {
    events: Arc<Mutex<Vec<String>>>,
}

impl ValidationRule for LogFieldsAndReportOnLeave {
    fn name(&self) -> &'static str {
        "LogFieldsAndReportOnLeave"
    }

    fn create_visitor<'c, 'a: 'c>(
        &self,
        context: &'c ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'c> {
        Box::new(LogFieldsVisitor {
            context,
            events: Arc::clone(&self.events),
        })
    }
}

struct LogFieldsVisitor<'c, 'a> {
    context: &'c ValidationContext<'a>,
    events: Arc<Mutex<Vec<String>>>,
}

impl<'a> Visitor<'a> for LogFieldsVisitor<'_, 'a> {
    fn enter_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) -> VisitAction {
        self.events.lock().unwrap().push(format!("enter {}", field.name));
        VisitAction::Continue
    }

    fn leave_field(&mut self, field: &'a ast::Field, _info: &VisitInfo) {
        self.events.lock().unwrap().push(format!("leave {}", field.name));
        self.context.report_error(format!("first: {}", field.name), vec![]);
        self.context.report_error(format!("second: {}", field.name), vec![]);
    }
}

fn messages(errors: Vec<ValidationError<'_>>) -> Vec<String> {
    errors.into_iter().map(|err| err.message).collect()
}

fn with_execution(execution: RuleExecution) -> ValidationOptions {
    ValidationOptions {
        execution,
        ..ValidationOptions::default()
    }
}

#[test]
fn test_valid_document_has_no_errors() {
    let doc = parse("query Q($a: Int) { f(a: $a) { ...F } } fragment F on T { g }");

    assert!(validate(&doc, None, &specified_rules(), &ValidationOptions::default()).is_empty());
}

#[test]
fn test_no_rules_reports_nothing() {
    let doc = parse("query Q($unused: Int) { f }");

    assert!(validate(&doc, None, &[], &ValidationOptions::default()).is_empty());
}

#[test]
fn test_parallel_execution_reports_in_traversal_order() {
    let doc = parse("{ a b }");
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(ReportFields("first")),
        Box::new(ReportFields("second")),
    ];

    assert_eq!(
        messages(validate(&doc, None, &rules, &with_execution(RuleExecution::Parallel))),
        vec!["first: a", "second: a", "first: b", "second: b"],
    );
}

#[test]
fn test_sequential_execution_groups_errors_by_rule() {
    let doc = parse("{ a b }");
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(ReportFields("first")),
        Box::new(ReportFields("second")),
    ];

    assert_eq!(
        messages(validate(&doc, None, &rules, &with_execution(RuleExecution::Sequential))),
        vec!["first: a", "first: b", "second: a", "second: b"],
    );
}

#[test]
fn test_parallel_and_sequential_execution_find_the_same_errors() {
    let doc = parse(r#"
        query A($a: Int, $b: Int) { x(a: $a) { ...F } }
        query B($c: Int) { y { z } }
        fragment F on T { w }
    "#);
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(NoUnusedVariables),
        Box::new(ReportFields("fields")),
    ];

    let parallel: BTreeSet<String> =
        messages(validate(&doc, None, &rules, &with_execution(RuleExecution::Parallel)))
            .into_iter()
            .collect();
    let sequential: BTreeSet<String> =
        messages(validate(&doc, None, &rules, &with_execution(RuleExecution::Sequential)))
            .into_iter()
            .collect();

    assert_eq!(parallel.len(), 6);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_error_limit_aborts_the_whole_run() {
    let doc = parse("{ a b c d e }");
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(ReportFields("first")),
        Box::new(ReportFields("second")),
    ];

    for execution in [RuleExecution::Parallel, RuleExecution::Sequential] {
        let options = ValidationOptions {
            max_errors: Some(3),
            execution,
        };
        let errors = messages(validate(&doc, None, &rules, &options));

        assert_eq!(errors.len(), 4, "{execution:?}");
        assert_eq!(
            errors.last().map(String::as_str),
            Some("Too many validation errors, error limit reached. Validation aborted."),
        );
    }
}

#[test]
fn test_type_system_definitions_are_ignored_by_the_built_in_rules() {
    let doc = parse_mixed(&[
        (MixedChunk::TypeSystem, "type Query { f(a: Int): Int }"),
        (MixedChunk::Executable, "query Q($a: Int) { f(a: $a) }"),
    ]);

    assert!(validate(&doc, None, &specified_rules(), &ValidationOptions::default()).is_empty());
}

#[test]
fn test_rules_can_be_shared_across_threads() {
    let sources: Vec<String> =
        (0..16)
            .map(|i| format!("query Q{i}($used: Int, $unused{i}: Int) {{ f(a: $used) }}"))
            .collect();
    let rules = specified_rules();
    let options = ValidationOptions::default();

    let results: Vec<Vec<String>> =
        sources
            .par_iter()
            .map(|source| {
                let doc = parse(source);
                messages(validate(&doc, None, &rules, &options))
            })
            .collect();

    for (i, errors) in results.iter().enumerate() {
        assert_eq!(
            errors,
            &vec![format!("Variable \"$unused{i}\" is never used in operation \"Q{i}\".")],
        );
    }
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: ValidationOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ValidationOptions::default());

    let options: ValidationOptions =
        serde_json::from_str(r#"{"max_errors": null, "execution": "sequential"}"#).unwrap();
    assert_eq!(options.max_errors, None);
    assert_eq!(options.execution, RuleExecution::Sequential);
}

/// Hitting the limit in a leave hook stops the run before the next node is
/// entered, and no rule is left out of a node it never entered.
#[test]
fn test_error_limit_never_leaves_an_unentered_node() {
    let doc = parse("{ a b }");

    for execution in [RuleExecution::Parallel, RuleExecution::Sequential] {
        let rule = LogFieldsAndReportOnLeave::default();
        let events = Arc::clone(&rule.events);
        let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(rule)];
        let options = ValidationOptions {
            max_errors: Some(1),
            execution,
        };

        let errors = messages(validate(&doc, None, &rules, &options));

        assert_eq!(
            *events.lock().unwrap(),
            vec!["enter a", "leave a"],
            "{execution:?}",
        );
        assert_eq!(errors, vec![
            "first: a",
            "Too many validation errors, error limit reached. Validation aborted.",
        ]);
    }
}
