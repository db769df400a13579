/// Identifiers the base traversal derives for a single named operation.
///
/// These name declarations produced elsewhere in the generated file (the
/// document constant and the result/variables types), so anything that
/// references an operation must use exactly these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationNames {
    pub document_variable_name: String,
    /// The operation-kind label (e.g. `"Query"`).
    pub operation_type: String,
    pub operation_result_type: String,
    pub operation_variables_types: String,
}
