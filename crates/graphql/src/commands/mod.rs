mod apollo_sdk;
mod graphql_files;

use crate::Cli;
use crate::CommandResult;
use apollo_sdk::ApolloSdkCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Generate a typed Apollo Client SDK from GraphQL operation documents.
    ApolloSdk(Box<ApolloSdkCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::ApolloSdk(cmd) => cmd.run(cli).await
        }
    }
}
