use crate::FragmentGraph;
use crate::ast;
use indexmap::IndexMap;

/// Split `document` into one document per operation, each holding the
/// operation plus exactly the fragments it transitively spreads.
///
/// Results are keyed by operation name (`""` for an anonymous operation) in
/// the order the operations appear. Within each result, definitions keep
/// their relative order from `document`. Spreads of undefined fragments are
/// left in place but contribute nothing, and type-system definitions never
/// appear in any result.
///
/// If two operations share a name, the later one's document replaces the
/// earlier one's (keeping the earlier one's position in the map).
pub fn separate_operations(document: &ast::Document) -> IndexMap<String, ast::Document> {
    let graph = FragmentGraph::new(document);
    let mut separated = IndexMap::new();

    for op in document.operations() {
        let reachable = graph.reachable_from(&op.selection_set);
        let op_name = op.name().unwrap_or_default();
        log::trace!(
            "Operation `{op_name}` spreads {} fragment(s) transitively.",
            reachable.len(),
        );

        let op_document: ast::Document =
            document.definitions
                .iter()
                .filter(|def| match def {
                    ast::Definition::Fragment(frag) => {
                        reachable.contains(frag.name.as_str())
                    },
                    ast::Definition::Operation(other_op) => std::ptr::eq(other_op, op),
                    ast::Definition::TypeSystem(_) => false,
                })
                .cloned()
                .collect();

        if separated.insert(op_name.to_string(), op_document).is_some() {
            log::trace!("Operation name `{op_name}` is used more than once; keeping the last.");
        }
    }

    log::debug!("Separated {} operation document(s).", separated.len());
    separated
}
