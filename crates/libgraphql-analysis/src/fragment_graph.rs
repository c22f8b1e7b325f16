use crate::ast;
use crate::visit::Node;
use crate::visit::VisitAction;
use crate::visit::VisitInfo;
use crate::visit::Visitor;
use crate::visit::visit;
use indexmap::IndexMap;
use indexmap::IndexSet;
use smallvec::SmallVec;

type SpreadNames<'a> = SmallVec<[&'a str; 4]>;

/// Which fragments each fragment definition in a document spreads.
///
/// Built once per document; every query afterwards is a lookup or a walk
/// over the recorded edges. Cycles (`A -> B -> A`) and spreads of fragments
/// the document never defines are both tolerated: reachability queries
/// terminate on the former and silently ignore the latter.
#[derive(Clone, Debug)]
pub struct FragmentGraph<'a> {
    fragments: IndexMap<&'a str, &'a ast::FragmentDefinition>,
    spreads: IndexMap<&'a str, SpreadNames<'a>>,
}

impl<'a> FragmentGraph<'a> {
    /// Record every fragment definition in `document` along with the names
    /// of the fragments it spreads (in source order, duplicates kept).
    ///
    /// If a name is defined more than once, the last definition wins.
    pub fn new(document: &'a ast::Document) -> Self {
        let mut collector = DependencyCollector {
            current: None,
            graph: FragmentGraph {
                fragments: IndexMap::new(),
                spreads: IndexMap::new(),
            },
        };
        visit(Node::Document(document), &mut collector);

        let graph = collector.graph;
        log::debug!(
            "Built a fragment graph over {} fragment(s) with {} spread(s).",
            graph.fragments.len(),
            graph.spreads.values().map(SmallVec::len).sum::<usize>(),
        );
        graph
    }

    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// Fragment definitions in the order their names first appear in the
    /// document.
    pub fn fragments(&self) -> impl Iterator<Item = &'a ast::FragmentDefinition> + '_ {
        self.fragments.values().copied()
    }

    /// Names spread directly within the named fragment. Empty when the
    /// fragment is not defined.
    pub fn spreads_of(&self, name: &str) -> &[&'a str] {
        self.spreads
            .get(name)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Names spread anywhere within `selection_set`, including inside nested
    /// fields and inline fragments, but not inside the fragments those
    /// spreads refer to.
    pub fn spreads_in(selection_set: &'a ast::SelectionSet) -> SpreadNames<'a> {
        let mut collector = SpreadCollector::default();
        visit(Node::SelectionSet(selection_set), &mut collector);
        collector.names
    }

    /// Names of every defined fragment reachable from `selection_set` via
    /// one or more spreads, in discovery order.
    ///
    /// Each fragment is expanded at most once, so this is linear in the
    /// size of the graph and terminates on cycles.
    pub fn reachable_from(&self, selection_set: &'a ast::SelectionSet) -> IndexSet<&'a str> {
        let mut reachable = IndexSet::new();
        let mut to_expand = vec![];

        for name in Self::spreads_in(selection_set) {
            self.discover(name, &mut reachable, &mut to_expand);
        }
        while let Some(name) = to_expand.pop() {
            for &spread in self.spreads_of(name) {
                self.discover(spread, &mut reachable, &mut to_expand);
            }
        }

        reachable
    }

    /// The definitions behind [`FragmentGraph::reachable_from`], in the same
    /// order.
    pub fn recursively_referenced_fragments(
        &self,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<&'a ast::FragmentDefinition> {
        self.reachable_from(selection_set)
            .into_iter()
            .filter_map(|name| self.fragment(name))
            .collect()
    }

    fn discover(
        &self,
        name: &'a str,
        reachable: &mut IndexSet<&'a str>,
        to_expand: &mut Vec<&'a str>,
    ) {
        if self.fragments.contains_key(name) && reachable.insert(name) {
            to_expand.push(name);
        }
    }
}

struct DependencyCollector<'a> {
    current: Option<&'a str>,
    graph: FragmentGraph<'a>,
}

// Arguments and directives never contain spreads, so both collectors skip
// them.
impl<'a> Visitor<'a> for DependencyCollector<'a> {
    fn enter_argument(&mut self, _argument: &'a ast::Argument, _info: &VisitInfo) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_directive(&mut self, _directive: &'a ast::Directive, _info: &VisitInfo) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_fragment_definition(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        let name = fragment.name.as_str();
        if self.graph.fragments.insert(name, fragment).is_some() {
            log::trace!("Fragment `{name}` is defined more than once; keeping the last definition.");
        }
        self.graph.spreads.insert(name, SmallVec::new());
        self.current = Some(name);
        VisitAction::Continue
    }

    fn leave_fragment_definition(
        &mut self,
        _fragment: &'a ast::FragmentDefinition,
        _info: &VisitInfo,
    ) {
        self.current = None;
    }

    fn enter_fragment_spread(
        &mut self,
        spread: &'a ast::FragmentSpread,
        _info: &VisitInfo,
    ) -> VisitAction {
        if let Some(spreads) = self.current.and_then(|name| self.graph.spreads.get_mut(name)) {
            spreads.push(spread.fragment_name.as_str());
        }
        VisitAction::Skip
    }

    fn enter_operation_definition(
        &mut self,
        _operation: &'a ast::OperationDefinition,
        _info: &VisitInfo,
    ) -> VisitAction {
        VisitAction::Skip
    }
}

#[derive(Default)]
struct SpreadCollector<'a> {
    names: SpreadNames<'a>,
}

impl<'a> Visitor<'a> for SpreadCollector<'a> {
    fn enter_argument(&mut self, _argument: &'a ast::Argument, _info: &VisitInfo) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_directive(&mut self, _directive: &'a ast::Directive, _info: &VisitInfo) -> VisitAction {
        VisitAction::Skip
    }

    fn enter_fragment_spread(
        &mut self,
        spread: &'a ast::FragmentSpread,
        _info: &VisitInfo,
    ) -> VisitAction {
        self.names.push(spread.fragment_name.as_str());
        VisitAction::Skip
    }
}
