mod client_side_base_visitor_tests;
mod utils;
