//! Generates a typed [Apollo Client](https://www.apollographql.com/docs/react/)
//! SDK from GraphQL executable documents.
//!
//! Every named operation in the input becomes one method on the object
//! returned by a generated `getSdk(client)` factory, dispatched to
//! `client.query`, `client.mutate`, or `client.subscribe` according to the
//! operation's kind. Anonymous operations are skipped with a warning.
//!
//! Start at [`plugin()`], or drive a [`visitor::ClientSideBaseVisitor`] with
//! an [`visitor::ApolloSdkVisitor`] directly.

pub mod ast;
mod codegen_error;
mod codegen_warning;
mod config;
pub mod file_reader;
pub mod loc;
pub mod operation;
mod plugin;
pub mod visitor;

pub use codegen_error::CodegenError;
pub use codegen_warning::CodegenWarning;
pub use config::ApolloSdkConfig;
pub use config::ConfigError;
pub use plugin::plugin;
pub use plugin::PluginOutput;
pub use plugin::SourceDocument;

#[cfg(test)]
mod tests;
