use crate::ast;
use crate::loc;
use crate::operation::OperationNames;

type Result<T> = std::result::Result<T, crate::CodegenError>;

/// Hooks a code generator plugs into
/// [`ClientSideBaseVisitor`](crate::visitor::ClientSideBaseVisitor).
///
/// The base traversal calls these once per operation definition, in document
/// order, and takes care of the per-operation document constants itself.
pub trait OperationVisitor<'doc> {
    /// Called before the base does anything with `op_def`. Returning `false`
    /// excludes the operation from the rest of the pass: no document
    /// constant, and no call to [`build_operation()`](Self::build_operation).
    fn enter_operation(
        &mut self,
        _op_def: &'doc ast::operation::OperationDefinition,
        _location: &loc::FilePosition,
    ) -> bool {
        true
    }

    /// Build this visitor's own code for an accepted operation. `Ok(None)`
    /// means "nothing to emit here".
    fn build_operation(
        &mut self,
        op_def: &'doc ast::operation::OperationDefinition,
        names: &OperationNames,
    ) -> Result<Option<String>>;

    /// Import lines this visitor's output depends on.
    fn additional_imports(&self) -> Vec<String> {
        vec![]
    }
}
