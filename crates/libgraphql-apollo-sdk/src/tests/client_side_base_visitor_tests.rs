use crate::ast;
use crate::operation::FragmentRegistry;
use crate::operation::LoadedFragment;
use crate::operation::OperationKind;
use crate::operation::OperationNames;
use crate::tests::utils::parse_document;
use crate::visitor::ClientSideBaseVisitor;
use crate::visitor::OperationVisitor;
use crate::ApolloSdkConfig;

/// Accepts every operation and emits a marker line for each.
#[derive(Default)]
struct RecordingVisitor {
    built: Vec<OperationNames>,
    entered: usize,
}
impl<'doc> OperationVisitor<'doc> for RecordingVisitor {
    fn build_operation(
        &mut self,
        _op_def: &'doc ast::operation::OperationDefinition,
        names: &OperationNames,
    ) -> Result<Option<String>, crate::CodegenError> {
        self.built.push(names.to_owned());
        Ok(Some(format!("// built {}", names.document_variable_name)))
    }

    fn enter_operation(
        &mut self,
        _op_def: &'doc ast::operation::OperationDefinition,
        _location: &crate::loc::FilePosition,
    ) -> bool {
        self.entered += 1;
        true
    }
}

fn visit(
    source: &str,
    config: &ApolloSdkConfig,
    registry: &FragmentRegistry,
) -> (Vec<String>, RecordingVisitor, Vec<String>) {
    let document = parse_document(source);
    let mut base = ClientSideBaseVisitor::new(config, registry);
    let mut visitor = RecordingVisitor::default();
    let declarations = base.visit_document(&document, None, &mut visitor).unwrap();
    (declarations, visitor, base.imports())
}

#[test]
fn default_operation_names() {
    let config = ApolloSdkConfig::default();
    let registry = FragmentRegistry::empty();
    let base = ClientSideBaseVisitor::new(&config, &registry);

    assert_eq!(
        base.operation_names("GetUser", OperationKind::Query),
        OperationNames {
            document_variable_name: "GetUserDocument".to_string(),
            operation_type: "Query".to_string(),
            operation_result_type: "GetUserQuery".to_string(),
            operation_variables_types: "GetUserQueryVariables".to_string(),
        },
    );
}

#[test]
fn operation_names_are_pascal_cased() {
    let config = ApolloSdkConfig::default();
    let registry = FragmentRegistry::empty();
    let base = ClientSideBaseVisitor::new(&config, &registry);

    let names = base.operation_names("createPost", OperationKind::Mutation);
    assert_eq!(names.document_variable_name, "CreatePostDocument");
    assert_eq!(names.operation_result_type, "CreatePostMutation");
    assert_eq!(names.operation_variables_types, "CreatePostMutationVariables");
}

#[test]
fn underscores_survive_pascal_casing() {
    let config = ApolloSdkConfig::default();
    let registry = FragmentRegistry::empty();
    let base = ClientSideBaseVisitor::new(&config, &registry);

    let names = base.operation_names("get_user", OperationKind::Query);
    assert_eq!(names.document_variable_name, "Get_UserDocument");
    assert_eq!(names.operation_result_type, "Get_UserQuery");
    assert_eq!(names.operation_variables_types, "Get_UserQueryVariables");

    assert_eq!(base.fragment_variable_name("user_fields"), "User_FieldsFragmentDoc");
    assert_eq!(base.fragment_variable_name("_private"), "_PrivateFragmentDoc");
}

#[test]
fn snake_and_camel_case_names_get_distinct_constants() {
    let (declarations, visitor, _) = visit(
        r#"
        query get_user($id: ID!) { user(id: $id) { id } }
        query getUser($id: ID!) { user(id: $id) { name } }
        "#,
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    assert!(declarations[0].starts_with("export const Get_UserDocument = gql`"));
    assert!(declarations[2].starts_with("export const GetUserDocument = gql`"));
    assert_eq!(
        visitor.built.iter()
            .map(|names| names.document_variable_name.as_str())
            .collect::<Vec<_>>(),
        vec!["Get_UserDocument", "GetUserDocument"],
    );
}

#[test]
fn dedupe_operation_suffix_avoids_doubled_kind() {
    let config = ApolloSdkConfig {
        dedupe_operation_suffix: true,
        ..ApolloSdkConfig::default()
    };
    let registry = FragmentRegistry::empty();
    let base = ClientSideBaseVisitor::new(&config, &registry);

    let names = base.operation_names("GetUserQuery", OperationKind::Query);
    assert_eq!(names.operation_result_type, "GetUserQuery");
    assert_eq!(names.operation_variables_types, "GetUserQueryVariables");
    assert_eq!(names.document_variable_name, "GetUserQueryDocument");

    let names = base.operation_names("GetUser", OperationKind::Query);
    assert_eq!(names.operation_result_type, "GetUserQuery");
}

#[test]
fn omit_operation_suffix_and_prefixes() {
    let config = ApolloSdkConfig {
        omit_operation_suffix: true,
        types_prefix: "I".to_string(),
        operation_result_suffix: "Result".to_string(),
        document_variable_prefix: "Gql".to_string(),
        document_variable_suffix: "Doc".to_string(),
        ..ApolloSdkConfig::default()
    };
    let registry = FragmentRegistry::empty();
    let base = ClientSideBaseVisitor::new(&config, &registry);

    let names = base.operation_names("OnMessage", OperationKind::Subscription);
    assert_eq!(names.operation_type, "Subscription");
    assert_eq!(names.document_variable_name, "GqlOnMessageDoc");
    assert_eq!(names.operation_result_type, "IOnMessageResult");
    assert_eq!(names.operation_variables_types, "IOnMessageVariables");
}

#[test]
fn operation_gets_document_constant_then_visitor_output() {
    let (declarations, visitor, imports) = visit(
        "query GetUser($id: ID!) { user(id: $id) { id } }",
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    assert_eq!(declarations.len(), 2);
    assert!(declarations[0].starts_with("export const GetUserDocument = gql`\n"));
    assert!(declarations[0].contains("query GetUser($id: ID!) {"));
    assert!(declarations[0].ends_with("}\n`;"));
    assert_eq!(declarations[1], "// built GetUserDocument");
    assert_eq!(visitor.built.len(), 1);
    assert_eq!(imports, vec!["import gql from 'graphql-tag';".to_string()]);
}

#[test]
fn operations_are_visited_in_document_order() {
    let (_, visitor, _) = visit(
        r#"
        subscription OnMessage { message { id } }
        query GetUser { me { id } }
        mutation Logout { logout }
        "#,
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    let labels: Vec<&str> =
        visitor.built
            .iter()
            .map(|names| names.operation_type.as_str())
            .collect();
    assert_eq!(labels, vec!["Subscription", "Query", "Mutation"]);
}

#[test]
fn unnamed_operations_are_never_built() {
    let (declarations, visitor, _) = visit(
        r#"
        { me { id } }
        query { me { id } }
        query Named { me { id } }
        "#,
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    assert_eq!(visitor.entered, 3);
    assert_eq!(visitor.built.len(), 1);
    assert_eq!(declarations.len(), 2);
}

#[test]
fn fragment_declarations_and_interpolations() {
    let source = r#"
        query GetUser { me { ...UserFields } }
        fragment UserFields on User { id avatar { ...ImageFields } }
        fragment ImageFields on Image { url }
    "#;
    let mut registry = FragmentRegistry::empty();
    for fragment in LoadedFragment::all_from_document(&parse_document(source), false) {
        registry.insert(fragment);
    }

    let (declarations, _, _) = visit(source, &ApolloSdkConfig::default(), &registry);

    assert_eq!(declarations.len(), 4);
    assert!(declarations[0].ends_with(
        "\n${UserFieldsFragmentDoc}\n${ImageFieldsFragmentDoc}\n`;",
    ));
    assert!(declarations[2].starts_with("export const UserFieldsFragmentDoc = gql`\n"));
    assert!(declarations[2].contains("fragment UserFields on User {"));
    assert!(declarations[2].ends_with("\n${ImageFieldsFragmentDoc}\n`;"));
    assert!(!declarations[2].contains("${UserFieldsFragmentDoc}"));
    assert!(declarations[3].starts_with("export const ImageFieldsFragmentDoc = gql`\n"));
    assert!(declarations[3].ends_with("}\n`;"));
}

#[test]
fn external_fragments_are_referenced_but_not_declared() {
    let mut registry = FragmentRegistry::empty();
    for fragment in LoadedFragment::all_from_document(
        &parse_document("fragment UserFields on User { id }"),
        true,
    ) {
        registry.insert(fragment);
    }

    let (declarations, _, _) = visit(
        r#"
        query GetUser { me { ...UserFields } }
        fragment UserFields on User { id }
        "#,
        &ApolloSdkConfig::default(),
        &registry,
    );

    assert_eq!(declarations.len(), 2);
    assert!(declarations[0].contains("${UserFieldsFragmentDoc}"));
}

#[test]
fn template_literal_syntax_is_escaped() {
    let (declarations, _, _) = visit(
        r#"query Search { search(term: "`${x}`") { id } }"#,
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    assert!(declarations[0].contains(r#"\`\${x}\`"#));
}

#[test]
fn named_gql_import() {
    let config = ApolloSdkConfig {
        gql_import: Some("@apollo/client#gql".to_string()),
        ..ApolloSdkConfig::default()
    };
    let (_, _, imports) = visit("query Me { me { id } }", &config, &FragmentRegistry::empty());

    assert_eq!(imports, vec!["import { gql } from '@apollo/client';".to_string()]);
}

#[test]
fn no_gql_import_without_declarations() {
    let (declarations, _, imports) = visit(
        "{ me { id } }",
        &ApolloSdkConfig::default(),
        &FragmentRegistry::empty(),
    );

    assert!(declarations.is_empty());
    assert!(imports.is_empty());
}
