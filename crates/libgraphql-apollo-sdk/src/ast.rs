pub type AstPos = graphql_parser::Pos;

pub mod operation {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        graphql_parser::query::parse_query::<String>(content)
            .map(|doc| doc.into_static())
    }

    /// The name of an [`OperationDefinition`], if it was given one. The
    /// `{ ... }` shorthand form is always anonymous.
    pub fn operation_name(op_def: &OperationDefinition) -> Option<&str> {
        use OperationDefinition as OpDef;
        match op_def {
            OpDef::SelectionSet(_) => None,
            OpDef::Query(query) => query.name.as_deref(),
            OpDef::Mutation(mutation) => mutation.name.as_deref(),
            OpDef::Subscription(subscription) => subscription.name.as_deref(),
        }
    }

    pub fn operation_position(op_def: &OperationDefinition) -> super::AstPos {
        use OperationDefinition as OpDef;
        match op_def {
            OpDef::SelectionSet(ss) => ss.span.0,
            OpDef::Query(query) => query.position,
            OpDef::Mutation(mutation) => mutation.position,
            OpDef::Subscription(subscription) => subscription.position,
        }
    }

    pub fn operation_selection_set(op_def: &OperationDefinition) -> &SelectionSet {
        use OperationDefinition as OpDef;
        match op_def {
            OpDef::SelectionSet(ss) => ss,
            OpDef::Query(query) => &query.selection_set,
            OpDef::Mutation(mutation) => &mutation.selection_set,
            OpDef::Subscription(subscription) => &subscription.selection_set,
        }
    }

    pub fn operation_variables(op_def: &OperationDefinition) -> &[VariableDefinition] {
        use OperationDefinition as OpDef;
        match op_def {
            OpDef::SelectionSet(_) => &[],
            OpDef::Query(query) => &query.variable_definitions,
            OpDef::Mutation(mutation) => &mutation.variable_definitions,
            OpDef::Subscription(subscription) => &subscription.variable_definitions,
        }
    }
}
