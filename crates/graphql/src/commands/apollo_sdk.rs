use crate::commands::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_apollo_sdk::operation::LoadedFragment;
use libgraphql_apollo_sdk::ApolloSdkConfig;
use libgraphql_apollo_sdk::PluginOutput;
use libgraphql_apollo_sdk::SourceDocument;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ApolloSdkCmd {
    #[arg(
        help="Path to a JSON file with generator options (e.g. \
             `{\"useTypeImports\": true}`).",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="GraphQL files or directories whose fragment definitions are \
             declared by some other generated file. Operations may spread \
             them, but no declarations are emitted for them.",
        long,
        value_delimiter = ',',
    )]
    external_fragments: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL operation documents to generate the SDK from.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ApolloSdkCmd {
    pub(crate) fn generate(&self) -> anyhow::Result<(PluginOutput, usize)> {
        let config = match &self.config {
            Some(config_path) => ApolloSdkConfig::from_file(config_path)
                .with_context(|| format!("Failed to load config from {config_path:#?}"))?,
            None => ApolloSdkConfig::default(),
        };

        let found = graphql_files::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if let Some(err) = found.errors.into_iter().next() {
            return Err(err).context("Failed to scan input paths");
        }

        let documents =
            found.file_paths
                .iter()
                .map(SourceDocument::from_file)
                .collect::<Result<Vec<_>, _>>()?;

        let mut fragments = vec![];
        if !self.external_fragments.is_empty() {
            let found_fragments = graphql_files::find_graphql_files(
                &self.external_fragments,
                &self.graphql_file_exts,
            );
            if let Some(err) = found_fragments.errors.into_iter().next() {
                return Err(err).context("Failed to scan external fragment paths");
            }
            for path in &found_fragments.file_paths {
                let source = SourceDocument::from_file(path)?;
                fragments.append(&mut LoadedFragment::all_from_document(
                    &source.document,
                    /* is_external = */ true,
                ));
            }
            log::debug!("Loaded {} external fragments.", fragments.len());
        }

        let output = libgraphql_apollo_sdk::plugin(&documents, &fragments, &config)?;
        Ok((output, documents.len()))
    }
}

#[inherent::inherent]
impl RunnableCommand for ApolloSdkCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (output, num_documents) = match self.generate() {
            Ok(generated) => generated,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Apollo SDK generation failed: {e:#}",
                output_utils::RED_X,
            )),
        };

        let status_icon =
            if output.warnings.is_empty() {
                output_utils::GREEN_CHECK
            } else {
                output_utils::WARNING_SIGN
            };
        let num_warnings = output.warnings.len();

        CommandResult::stdout_with_summary(
            output.to_string(),
            format_args!(
                concat!(
                    "{} Generated Apollo SDK:\n",
                    "  * Analyzed {} documents.\n",
                    "  * Skipped {} operations (see warnings above).",
                ),
                status_icon,
                num_documents,
                num_warnings,
            ),
        )
    }
}
