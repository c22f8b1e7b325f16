mod fragment_graph_tests;
pub(crate) mod utils;
