use crate::ast;
use crate::loc;
use crate::operation::FragmentRegistry;
use crate::operation::OperationKind;
use crate::operation::OperationNames;
use crate::visitor::OperationVisitor;
use crate::ApolloSdkConfig;
use heck::ToUpperCamelCase;
use std::path::Path;

type Result<T> = std::result::Result<T, crate::CodegenError>;

/// Pascal-cases each `_`-separated segment of `name` and keeps the
/// underscores, so `get_user` becomes `Get_User`.
fn pascal_case(name: &str) -> String {
    name.split('_')
        .map(|segment| segment.to_upper_camel_case())
        .collect::<Vec<_>>()
        .join("_")
}

/// Drives a single pass over an executable document: emits a `gql` document
/// constant per named operation and per in-document fragment, derives the
/// [`OperationNames`] for each operation, and hands every operation to an
/// [`OperationVisitor`].
#[derive(Debug)]
pub struct ClientSideBaseVisitor<'a> {
    config: &'a ApolloSdkConfig,
    fragment_registry: &'a FragmentRegistry,
    uses_gql: bool,
}
impl<'a> ClientSideBaseVisitor<'a> {
    pub fn new(
        config: &'a ApolloSdkConfig,
        fragment_registry: &'a FragmentRegistry,
    ) -> Self {
        Self {
            config,
            fragment_registry,
            uses_gql: false,
        }
    }

    /// Import lines needed by the declarations rendered so far.
    pub fn imports(&self) -> Vec<String> {
        if self.uses_gql {
            vec![self.config.gql_import_line()]
        } else {
            vec![]
        }
    }

    pub fn fragment_variable_name(&self, fragment_name: &str) -> String {
        format!(
            "{}{}{}",
            self.config.fragment_variable_prefix,
            pascal_case(fragment_name),
            self.config.fragment_variable_suffix,
        )
    }

    pub fn operation_names(
        &self,
        operation_name: &str,
        kind: OperationKind,
    ) -> OperationNames {
        let pascal_name = pascal_case(operation_name);
        let label = kind.label();
        let dedupe_suffix =
            self.config.dedupe_operation_suffix
            && operation_name.to_lowercase().ends_with(&label.to_lowercase());
        let type_suffix =
            if self.config.omit_operation_suffix || dedupe_suffix {
                ""
            } else {
                label
            };

        OperationNames {
            document_variable_name: format!(
                "{}{pascal_name}{}",
                self.config.document_variable_prefix,
                self.config.document_variable_suffix,
            ),
            operation_type: label.to_string(),
            operation_result_type: format!(
                "{}{pascal_name}{type_suffix}{}",
                self.config.types_prefix,
                self.config.operation_result_suffix,
            ),
            operation_variables_types: format!(
                "{}{pascal_name}{type_suffix}Variables",
                self.config.types_prefix,
            ),
        }
    }

    /// Traverse `document`, returning the declarations produced for it in
    /// document order.
    pub fn visit_document<'doc, V: OperationVisitor<'doc>>(
        &mut self,
        document: &'doc ast::operation::Document,
        file_path: Option<&Path>,
        visitor: &mut V,
    ) -> Result<Vec<String>> {
        let mut declarations = vec![];
        for def in &document.definitions {
            use ast::operation::Definition as Def;
            match def {
                Def::Fragment(frag_def) => {
                    let is_external =
                        self.fragment_registry
                            .get(frag_def.name.as_str())
                            .is_some_and(|frag| frag.is_external);
                    if is_external {
                        log::trace!(
                            "Skipping declaration for external fragment `{}`.",
                            frag_def.name,
                        );
                        continue
                    }
                    declarations.push(self.build_fragment_declaration(frag_def));
                },

                Def::Operation(op_def) => {
                    let location = loc::FilePosition::from_pos(
                        file_path,
                        ast::operation::operation_position(op_def),
                    );
                    if !visitor.enter_operation(op_def, &location) {
                        log::debug!("Operation at {location} was excluded.");
                        continue
                    }

                    // Unnamed operations can't be given a document constant.
                    let Some(op_name) = ast::operation::operation_name(op_def) else {
                        log::debug!(
                            "Skipping unnamed operation at {location}.",
                        );
                        continue
                    };

                    let names =
                        self.operation_names(op_name, OperationKind::of(op_def));
                    log::trace!(
                        "Visiting {} `{op_name}` as `{}`.",
                        names.operation_type,
                        names.document_variable_name,
                    );
                    declarations.push(self.build_document_declaration(
                        names.document_variable_name.as_str(),
                        op_def.to_string(),
                        ast::operation::operation_selection_set(op_def),
                        None,
                    ));

                    if let Some(code) = visitor.build_operation(op_def, &names)? {
                        declarations.push(code);
                    }
                },
            }
        }

        Ok(declarations)
    }

    fn build_fragment_declaration(
        &mut self,
        frag_def: &ast::operation::FragmentDefinition,
    ) -> String {
        let variable_name = self.fragment_variable_name(frag_def.name.as_str());
        self.build_document_declaration(
            variable_name.as_str(),
            frag_def.to_string(),
            &frag_def.selection_set,
            Some(frag_def.name.as_str()),
        )
    }

    fn build_document_declaration(
        &mut self,
        variable_name: &str,
        printed: String,
        selection_set: &ast::operation::SelectionSet,
        self_fragment: Option<&str>,
    ) -> String {
        self.uses_gql = true;
        let fragment_interpolations: String =
            self.fragment_registry
                .spread_fragment_names(selection_set)
                .iter()
                .filter(|name| Some(name.as_str()) != self_fragment)
                .map(|name| format!("\n${{{}}}", self.fragment_variable_name(name)))
                .collect();

        format!(
            "export const {variable_name} = gql`\n{}{fragment_interpolations}\n`;",
            escape_template_literal(printed.trim_end()),
        )
    }
}

fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
