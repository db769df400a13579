use crate::ast;
use crate::operation::OperationKind;
use crate::operation::OperationNames;

type Result<T> = std::result::Result<T, crate::CodegenError>;

/// Everything the SDK needs to know about one named operation, captured
/// while the document is traversed.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationRecord<'doc> {
    node: &'doc ast::operation::OperationDefinition,
    document_variable_name: String,
    operation_kind: OperationKind,
    result_type_name: String,
    variables_type_name: String,
}
impl<'doc> OperationRecord<'doc> {
    /// Fails with [`CodegenError::UnknownOperationKind`](crate::CodegenError)
    /// if `names.operation_type` isn't one of the three operation kinds.
    pub fn new(
        node: &'doc ast::operation::OperationDefinition,
        names: &OperationNames,
    ) -> Result<Self> {
        Ok(Self {
            node,
            document_variable_name: names.document_variable_name.to_owned(),
            operation_kind: names.operation_type.parse()?,
            result_type_name: names.operation_result_type.to_owned(),
            variables_type_name: names.operation_variables_types.to_owned(),
        })
    }

    pub fn document_variable_name(&self) -> &str {
        self.document_variable_name.as_str()
    }

    /// Whether callers may omit the options argument entirely: true when the
    /// operation declares no variables, or when every variable is nullable or
    /// has a default value.
    pub fn has_optional_variables(&self) -> bool {
        ast::operation::operation_variables(self.node)
            .iter()
            .all(|var_def| {
                !matches!(var_def.var_type, ast::operation::Type::NonNullType(_))
                    || var_def.default_value.is_some()
            })
    }

    /// The operation's name. Records are only ever created for named
    /// operations, so this is empty only if that contract was broken upstream.
    pub fn name(&self) -> &str {
        ast::operation::operation_name(self.node).unwrap_or_default()
    }

    pub fn node(&self) -> &'doc ast::operation::OperationDefinition {
        self.node
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn result_type_name(&self) -> &str {
        self.result_type_name.as_str()
    }

    pub fn variables_type_name(&self) -> &str {
        self.variables_type_name.as_str()
    }
}
