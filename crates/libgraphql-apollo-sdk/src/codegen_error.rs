use crate::ast;
use crate::file_reader;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CodegenError {
    #[error(
        "Failure while trying to read an executable document file from disk: {0}"
    )]
    DocumentFileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing executable document (file: {file_path:?}): {err}")]
    ParseError {
        file_path: Option<PathBuf>,
        err: Arc<ast::operation::ParseError>,
    },

    /// An operation-kind label outside of `Query`, `Mutation`, and
    /// `Subscription` reached code generation. Generation for the whole
    /// document is aborted rather than emitting a guess.
    #[error("unknown operation type: {label}")]
    UnknownOperationKind {
        label: String,
    },
}
impl std::convert::From<file_reader::ReadContentError> for CodegenError {
    fn from(value: file_reader::ReadContentError) -> Self {
        Self::DocumentFileReadError(Arc::new(value))
    }
}
