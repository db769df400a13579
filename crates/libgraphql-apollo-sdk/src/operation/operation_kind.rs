use crate::ast;
use crate::CodegenError;
use std::str::FromStr;

/// The closed set of GraphQL operation kinds, along with how each one maps
/// onto the Apollo client API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
    ];

    /// The kind of an [`OperationDefinition`](ast::operation::OperationDefinition).
    /// The `{ ... }` shorthand form is a query.
    pub fn of(op_def: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition as OpDef;
        match op_def {
            OpDef::SelectionSet(_) | OpDef::Query(_) => Self::Query,
            OpDef::Mutation(_) => Self::Mutation,
            OpDef::Subscription(_) => Self::Subscription,
        }
    }

    /// The `ApolloClient` method that executes an operation of this kind.
    pub fn client_method(&self) -> &'static str {
        match self {
            Self::Mutation => "mutate",
            Self::Query => "query",
            Self::Subscription => "subscribe",
        }
    }

    /// The options key under which the document is passed to
    /// [`client_method()`](Self::client_method).
    pub fn document_key(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query | Self::Subscription => "query",
        }
    }

    /// `Query`, `Mutation` or `Subscription`. Used as the suffix of generated
    /// type and method names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    /// The generic Apollo options type accepted by
    /// [`client_method()`](Self::client_method).
    pub fn options_type(&self) -> &'static str {
        match self {
            Self::Mutation => "Apollo.MutationOptions",
            Self::Query => "Apollo.QueryOptions",
            Self::Subscription => "Apollo.SubscriptionOptions",
        }
    }
}
impl FromStr for OperationKind {
    type Err = CodegenError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| CodegenError::UnknownOperationKind {
                label: label.to_string(),
            })
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
