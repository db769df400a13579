use crate::loc;

/// A problem that caused part of a document to be skipped without failing
/// the generation pass.
#[derive(Clone, Debug, PartialEq)]
pub enum CodegenWarning {
    AnonymousOperation {
        location: loc::FilePosition,
        printed: String,
    },
}
impl std::fmt::Display for CodegenWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnonymousOperation { location, printed } => write!(
                f,
                "Anonymous GraphQL operation at {location} was ignored by the \
                Apollo SDK generator. Please make sure to name your \
                operation:\n{printed}",
            ),
        }
    }
}
