use crate::ast;
use crate::loc;
use crate::operation::OperationNames;
use crate::operation::OperationRecord;
use crate::visitor::OperationVisitor;
use crate::ApolloSdkConfig;
use crate::CodegenWarning;
use heck::ToLowerCamelCase;

type Result<T> = std::result::Result<T, crate::CodegenError>;

/// Collects every named operation of a generation pass and renders them as a
/// single `getSdk(client)` factory over an `ApolloClient`.
///
/// Operations are only recorded while the base traversal runs;
/// [`sdk_content()`](Self::sdk_content) renders the aggregate afterwards.
#[derive(Debug)]
pub struct ApolloSdkVisitor<'doc> {
    operations: Vec<OperationRecord<'doc>>,
    use_type_imports: bool,
    warnings: Vec<CodegenWarning>,
}
impl<'doc> ApolloSdkVisitor<'doc> {
    pub fn new(config: &ApolloSdkConfig) -> Self {
        Self {
            operations: vec![],
            use_type_imports: config.use_type_imports,
            warnings: vec![],
        }
    }

    /// The operations recorded so far, in traversal order.
    pub fn operations(&self) -> &[OperationRecord<'doc>] {
        self.operations.as_slice()
    }

    pub fn warnings(&self) -> &[CodegenWarning] {
        self.warnings.as_slice()
    }

    pub fn into_warnings(self) -> Vec<CodegenWarning> {
        self.warnings
    }

    /// Render the `getSdk` factory and its `SdkType` alias.
    pub fn sdk_content(&self) -> String {
        let sdk_operations =
            self.operations
                .iter()
                .map(build_sdk_method)
                .collect::<Vec<_>>();

        let object_body =
            if sdk_operations.is_empty() {
                String::new()
            } else {
                format!("{}\n", sdk_operations.join(",\n"))
            };

        format!(
            "export const getSdk = (client: ApolloClient<any>) => ({{\n\
            {object_body}\
            }});\n\
            export type SdkType = ReturnType<typeof getSdk>\n",
        )
    }
}

impl<'doc> OperationVisitor<'doc> for ApolloSdkVisitor<'doc> {
    fn enter_operation(
        &mut self,
        op_def: &'doc ast::operation::OperationDefinition,
        location: &loc::FilePosition,
    ) -> bool {
        if ast::operation::operation_name(op_def).is_some() {
            return true;
        }

        let warning = CodegenWarning::AnonymousOperation {
            location: location.to_owned(),
            printed: op_def.to_string(),
        };
        log::warn!("{warning}");
        self.warnings.push(warning);
        false
    }

    fn build_operation(
        &mut self,
        op_def: &'doc ast::operation::OperationDefinition,
        names: &OperationNames,
    ) -> Result<Option<String>> {
        self.operations.push(OperationRecord::new(op_def, names)?);
        Ok(None)
    }

    fn additional_imports(&self) -> Vec<String> {
        let import_kw =
            if self.use_type_imports {
                "import type"
            } else {
                "import"
            };

        vec![
            format!("{import_kw} {{ ApolloClient }} from '@apollo/client';"),
            format!("{import_kw} * as Apollo from '@apollo/client';"),
        ]
    }
}

fn build_sdk_method(record: &OperationRecord<'_>) -> String {
    let kind = record.operation_kind();
    let generics = format!(
        "{}, {}",
        record.result_type_name(),
        record.variables_type_name(),
    );
    let optional_marker =
        if record.has_optional_variables() {
            "?"
        } else {
            ""
        };

    format!(
        "  {method_name}{kind}(options{optional_marker}: {options_type}<{generics}>) {{\n    \
        return client.{client_method}<{generics}>({{...options, {document_key}: {document}}})\n  \
        }}",
        method_name = record.name().to_lower_camel_case(),
        options_type = kind.options_type(),
        client_method = kind.client_method(),
        document_key = kind.document_key(),
        document = record.document_variable_name(),
    )
}
