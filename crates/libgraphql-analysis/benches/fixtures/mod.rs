//! Synthetic executable documents for the analysis benchmarks.

use std::fmt::Write;

/// A document with `num_operations` operations sharing a pool of
/// `num_fragments` fragments. Each fragment spreads the next two in the pool
/// (wrapping around, so the graph is cyclic), and each operation enters the
/// pool at a different fragment.
pub fn operations_with_shared_fragments(num_operations: usize, num_fragments: usize) -> String {
    let mut source = String::new();

    for op in 0..num_operations {
        let entry = op % num_fragments;
        let _ = writeln!(
            source,
            "query Op{op}($id: ID!, $first: Int, $unused{op}: String) {{\n  \
               node(id: $id) {{\n    \
                 id\n    \
                 ...Frag{entry}\n    \
                 ... on Connection @include(if: true) {{\n      \
                   edges(first: $first) {{ cursor }}\n    \
                 }}\n  \
               }}\n\
             }}",
        );
    }

    for frag in 0..num_fragments {
        let next = (frag + 1) % num_fragments;
        let after_next = (frag + 2) % num_fragments;
        let _ = writeln!(
            source,
            "fragment Frag{frag} on Node {{\n  \
               field{frag}(arg: {{list: [1, 2, $first]}})\n  \
               ...Frag{next}\n  \
               child {{ ...Frag{after_next} }}\n\
             }}",
        );
    }

    source
}
