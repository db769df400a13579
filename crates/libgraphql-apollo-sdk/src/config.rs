use crate::file_reader;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ConfigError>;

const DEFAULT_GQL_IMPORT_MODULE: &str = "graphql-tag";

/// Options accepted by the Apollo SDK generator.
///
/// Field names deserialize from the camelCase keys used in codegen config
/// files (e.g. `useTypeImports`). Every field is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApolloSdkConfig {
    /// Import Apollo symbols with `import type` rather than `import`.
    pub use_type_imports: bool,

    pub document_variable_prefix: String,
    pub document_variable_suffix: String,
    pub fragment_variable_prefix: String,
    pub fragment_variable_suffix: String,
    pub types_prefix: String,
    pub operation_result_suffix: String,

    /// Skip the operation-kind suffix on type names when the operation name
    /// already ends with it (`GetUserQuery` → `GetUserQueryVariables`).
    pub dedupe_operation_suffix: bool,

    /// Never append the operation-kind suffix to type names.
    pub omit_operation_suffix: bool,

    /// Where `gql` is imported from, as `module` (default export) or
    /// `module#export` (named export). Defaults to `graphql-tag`.
    pub gql_import: Option<String>,
}
impl ApolloSdkConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ConfigError::ConfigFileReadError(Arc::new(err)))?;
        serde_json::from_str(content.as_str())
            .map_err(|err| ConfigError::InvalidConfig {
                file_path: Some(file_path.to_path_buf()),
                err: Arc::new(err),
            })
    }

    pub fn from_json_str(content: impl AsRef<str>) -> Result<Self> {
        serde_json::from_str(content.as_ref())
            .map_err(|err| ConfigError::InvalidConfig {
                file_path: None,
                err: Arc::new(err),
            })
    }

    /// The import line that brings `gql` into scope for document constants.
    pub fn gql_import_line(&self) -> String {
        let gql_import =
            self.gql_import
                .as_deref()
                .unwrap_or(DEFAULT_GQL_IMPORT_MODULE);

        match gql_import.split_once('#') {
            Some((module, "gql")) => format!("import {{ gql }} from '{module}';"),
            Some((module, export)) =>
                format!("import {{ {export} as gql }} from '{module}';"),
            None => format!("import gql from '{gql_import}';"),
        }
    }
}
impl std::default::Default for ApolloSdkConfig {
    fn default() -> Self {
        Self {
            use_type_imports: false,
            document_variable_prefix: String::new(),
            document_variable_suffix: "Document".to_string(),
            fragment_variable_prefix: String::new(),
            fragment_variable_suffix: "FragmentDoc".to_string(),
            types_prefix: String::new(),
            operation_result_suffix: String::new(),
            dedupe_operation_suffix: false,
            omit_operation_suffix: false,
            gql_import: None,
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum ConfigError {
    #[error("Failure while trying to read a config file from disk: {0}")]
    ConfigFileReadError(Arc<file_reader::ReadContentError>),

    #[error("Invalid Apollo SDK config (file: {file_path:?}): {err}")]
    InvalidConfig {
        file_path: Option<PathBuf>,
        err: Arc<serde_json::Error>,
    },
}
