use crate::ast;
use crate::file_reader;
use crate::operation::FragmentRegistry;
use crate::operation::LoadedFragment;
use crate::visitor::ApolloSdkVisitor;
use crate::visitor::ClientSideBaseVisitor;
use crate::visitor::OperationVisitor;
use crate::ApolloSdkConfig;
use crate::CodegenError;
use crate::CodegenWarning;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CodegenError>;

/// A parsed executable document along with where it was loaded from.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDocument {
    pub document: ast::operation::Document,
    pub file_path: Option<PathBuf>,
}
impl SourceDocument {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        Self::from_str(content, Some(file_path))
    }

    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let document = ast::operation::parse(content.as_ref())
            .map_err(|err| CodegenError::ParseError {
                file_path: file_path.map(|p| p.to_path_buf()),
                err: Arc::new(err),
            })?;

        Ok(Self {
            document,
            file_path: file_path.map(|p| p.to_path_buf()),
        })
    }
}

/// The generated file: import lines to hoist to the top, then the body.
#[derive(Clone, Debug, PartialEq)]
pub struct PluginOutput {
    pub content: String,
    pub prepend: Vec<String>,
    pub warnings: Vec<CodegenWarning>,
}
impl std::fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for import in &self.prepend {
            writeln!(f, "{import}")?;
        }
        if !self.prepend.is_empty() {
            writeln!(f)?;
        }
        f.write_str(self.content.as_str())
    }
}

/// Generate the Apollo SDK file for `documents`.
///
/// `fragments` are made available to every document in addition to the
/// fragments the documents define themselves. All documents share a single
/// `getSdk` factory, so operation names are expected to be unique across
/// them.
pub fn plugin(
    documents: &[SourceDocument],
    fragments: &[LoadedFragment],
    config: &ApolloSdkConfig,
) -> Result<PluginOutput> {
    let mut fragment_registry = FragmentRegistry::empty();
    for fragment in fragments {
        fragment_registry.insert(fragment.to_owned());
    }
    for source in documents {
        for fragment in LoadedFragment::all_from_document(&source.document, false) {
            if fragment_registry.get(fragment.name.as_str()).is_none() {
                fragment_registry.insert(fragment);
            }
        }
    }
    log::debug!(
        "Generating Apollo SDK for {} documents ({} fragments available).",
        documents.len(),
        fragment_registry.fragments().len(),
    );

    let mut base_visitor = ClientSideBaseVisitor::new(config, &fragment_registry);
    let mut sdk_visitor = ApolloSdkVisitor::new(config);
    let mut declarations = vec![];
    for source in documents {
        declarations.append(&mut base_visitor.visit_document(
            &source.document,
            source.file_path.as_deref(),
            &mut sdk_visitor,
        )?);
    }
    declarations.push(sdk_visitor.sdk_content());

    let mut prepend: Vec<String> = vec![];
    for import in base_visitor.imports().into_iter().chain(sdk_visitor.additional_imports()) {
        if !prepend.contains(&import) {
            prepend.push(import);
        }
    }

    log::debug!(
        "Generated {} SDK methods.",
        sdk_visitor.operations().len(),
    );

    Ok(PluginOutput {
        content: declarations.join("\n\n"),
        prepend,
        warnings: sdk_visitor.into_warnings(),
    })
}
