mod apollo_sdk_visitor;
mod client_side_base_visitor;
mod operation_visitor;

pub use apollo_sdk_visitor::ApolloSdkVisitor;
pub use client_side_base_visitor::ClientSideBaseVisitor;
pub use operation_visitor::OperationVisitor;
