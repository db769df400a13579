use crate::ast;
use crate::ApolloSdkConfig;
use crate::PluginOutput;
use crate::SourceDocument;

pub fn parse_document(content: &str) -> ast::operation::Document {
    ast::operation::parse(content).unwrap()
}

/// The first operation definition in `document`.
pub fn first_operation(
    document: &ast::operation::Document,
) -> &ast::operation::OperationDefinition {
    document.definitions
        .iter()
        .find_map(|def| match def {
            ast::operation::Definition::Operation(op_def) => Some(op_def),
            ast::operation::Definition::Fragment(_) => None,
        })
        .expect("document has no operations")
}

pub fn generate(content: &str) -> PluginOutput {
    generate_with_config(content, &ApolloSdkConfig::default())
}

pub fn generate_with_config(
    content: &str,
    config: &ApolloSdkConfig,
) -> PluginOutput {
    let source = SourceDocument::from_str(content, None).unwrap();
    crate::plugin(&[source], &[], config).unwrap()
}

/// The property keys of the generated `getSdk` object, in order.
pub fn sdk_method_names(content: &str) -> Vec<String> {
    let sdk_start = content.find("export const getSdk").unwrap();
    content[sdk_start..]
        .lines()
        .filter(|line| line.starts_with("  ") && !line.starts_with("   "))
        .filter_map(|line| line.trim().split_once('('))
        .map(|(name, _)| name.to_string())
        .collect()
}
