use crate::FragmentGraph;
use crate::tests::utils::parse;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn names<'a>(iter: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    iter.into_iter().collect()
}

#[test]
fn test_graph_records_direct_spreads_in_source_order() {
    let doc = parse(r#"
        fragment A on T { x { ...C } ...B @include(if: $flag) ...C }
        fragment B on T { y }
        fragment C on T { ... on T { ...B } }
        query Q { ...A }
    "#);
    let graph = FragmentGraph::new(&doc);

    assert_eq!(graph.spreads_of("A"), ["C", "B", "C"]);
    assert!(graph.spreads_of("B").is_empty());
    assert_eq!(graph.spreads_of("C"), ["B"]);
    assert!(graph.spreads_of("Q").is_empty());
    assert!(graph.spreads_of("Undefined").is_empty());
    assert_eq!(graph.fragment("B").map(|frag| frag.name.as_str()), Some("B"));
    assert!(graph.fragment("Q").is_none());
}

#[test]
fn test_spreads_in_does_not_follow_fragments() {
    let doc = parse("query Q { a { ...X } ...Y } fragment X on T { ...Z }");
    let op = doc.operations().next().unwrap();

    assert_eq!(names(FragmentGraph::spreads_in(&op.selection_set)), vec!["X", "Y"]);
}

#[test]
fn test_reachability_is_transitive_and_skips_undefined_fragments() {
    let doc = parse(r#"
        query Q { ...A ...Missing }
        fragment A on T { ...B }
        fragment B on T { ...C ...AlsoMissing }
        fragment C on T { leaf }
        fragment Unrelated on T { ...A }
    "#);
    let graph = FragmentGraph::new(&doc);
    let op = doc.operations().next().unwrap();

    let reachable = graph.reachable_from(&op.selection_set);
    assert_eq!(names(reachable.iter().copied()), vec!["A", "B", "C"]);

    let definitions = graph.recursively_referenced_fragments(&op.selection_set);
    let def_names: Vec<&str> = definitions.iter().map(|frag| frag.name.as_str()).collect();
    assert_eq!(def_names, vec!["A", "B", "C"]);
}

#[test]
fn test_reachability_terminates_on_cycles() {
    let doc = parse(r#"
        query Q { ...A }
        fragment A on T { ...B }
        fragment B on T { ...C }
        fragment C on T { ...A ...C }
    "#);
    let graph = FragmentGraph::new(&doc);
    let op = doc.operations().next().unwrap();

    let reachable: BTreeSet<&str> = graph.reachable_from(&op.selection_set).into_iter().collect();
    assert_eq!(reachable, BTreeSet::from(["A", "B", "C"]));
}

#[test]
fn test_later_duplicate_definitions_win() {
    let doc = parse(r#"
        fragment A on T { ...B }
        fragment B on T { leaf }
        fragment A on T { other }
    "#);
    let graph = FragmentGraph::new(&doc);

    assert!(graph.spreads_of("A").is_empty());
    assert_eq!(graph.fragments().count(), 2);
    let a = graph.fragment("A").unwrap();
    assert!(std::ptr::eq(a, doc.fragments().nth(2).unwrap()));
}

const DEFINED: usize = 6;

/// Builds a document defining `F0..F{DEFINED}` with the given spread edges.
/// Edge targets at or above `DEFINED` refer to undefined fragments.
fn cyclic_document(edges: &[(usize, usize)], roots: &[usize]) -> String {
    let mut source = String::from("query Q { f");
    for root in roots {
        source.push_str(&format!(" ...F{root}"));
    }
    source.push_str(" }\n");

    for idx in 0..DEFINED {
        source.push_str(&format!("fragment F{idx} on T {{ f"));
        for (_, dst) in edges.iter().filter(|(src, _)| *src == idx) {
            source.push_str(&format!(" ...F{dst}"));
        }
        source.push_str(" }\n");
    }
    source
}

/// Fixed-point closure over the edge list, restricted to defined fragments.
fn naive_closure(edges: &[(usize, usize)], roots: &[usize]) -> BTreeSet<String> {
    let mut reached: BTreeSet<usize> =
        roots.iter().copied().filter(|root| *root < DEFINED).collect();
    loop {
        let next: BTreeSet<usize> =
            edges.iter()
                .filter(|(src, dst)| reached.contains(src) && *dst < DEFINED)
                .map(|(_, dst)| *dst)
                .collect();
        let before = reached.len();
        reached.extend(next);
        if reached.len() == before {
            break;
        }
    }
    reached.into_iter().map(|idx| format!("F{idx}")).collect()
}

proptest! {
    #[test]
    fn test_reachability_matches_a_naive_closure(
        edges in proptest::collection::vec((0..DEFINED, 0..DEFINED + 2), 0..24),
        roots in proptest::collection::vec(0..DEFINED + 2, 0..4),
    ) {
        let doc = parse(&cyclic_document(&edges, &roots));
        let graph = FragmentGraph::new(&doc);
        let op = doc.operations().next().unwrap();

        let reachable = graph.reachable_from(&op.selection_set);
        let actual: BTreeSet<String> = reachable.iter().map(|name| name.to_string()).collect();

        prop_assert_eq!(actual.len(), reachable.len());
        prop_assert_eq!(actual, naive_closure(&edges, &roots));
    }
}
