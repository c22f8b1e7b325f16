mod parallel_visitor_tests;
mod rewrite_tests;
