use crate::ast;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// A reusable fragment definition made available to a code generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedFragment {
    /// External fragments are declared (and exported) by some other generated
    /// file. They're referenced from document constants but never emitted.
    pub is_external: bool,
    pub name: String,
    pub node: ast::operation::FragmentDefinition,
    pub on_type: String,
}
impl LoadedFragment {
    pub fn from_ast(
        node: ast::operation::FragmentDefinition,
        is_external: bool,
    ) -> Self {
        let ast::operation::TypeCondition::On(on_type) = &node.type_condition;
        Self {
            is_external,
            name: node.name.to_owned(),
            on_type: on_type.to_owned(),
            node,
        }
    }

    /// Every fragment definition found in `document`.
    pub fn all_from_document(
        document: &ast::operation::Document,
        is_external: bool,
    ) -> Vec<Self> {
        document.definitions
            .iter()
            .filter_map(|def| match def {
                ast::operation::Definition::Fragment(frag_def) =>
                    Some(Self::from_ast(frag_def.to_owned(), is_external)),
                ast::operation::Definition::Operation(_) => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, LoadedFragment>,
}
impl FragmentRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &IndexMap<String, LoadedFragment> {
        &self.fragments
    }

    pub fn get(&self, name: &str) -> Option<&LoadedFragment> {
        self.fragments.get(name)
    }

    /// Register `fragment`. A later registration under the same name replaces
    /// an earlier one but keeps its original position.
    pub fn insert(&mut self, fragment: LoadedFragment) {
        self.fragments.insert(fragment.name.to_owned(), fragment);
    }

    /// Names of the registered fragments `selection_set` depends on, directly
    /// or through other fragments, in order of first use. Spreads of
    /// fragments that aren't registered are ignored.
    pub fn spread_fragment_names(
        &self,
        selection_set: &ast::operation::SelectionSet,
    ) -> Vec<String> {
        let mut found = IndexSet::new();
        self.collect_spreads(selection_set, &mut found);
        found.into_iter().collect()
    }

    fn collect_spreads(
        &self,
        selection_set: &ast::operation::SelectionSet,
        found: &mut IndexSet<String>,
    ) {
        use ast::operation::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) =>
                    self.collect_spreads(&field.selection_set, found),

                Selection::InlineFragment(inline_frag) =>
                    self.collect_spreads(&inline_frag.selection_set, found),

                Selection::FragmentSpread(spread) => {
                    let Some(fragment) = self.fragments.get(&spread.fragment_name) else {
                        log::warn!(
                            "Ignoring spread of unregistered fragment `{}`. \
                            Its document constant will not be interpolated.",
                            spread.fragment_name,
                        );
                        continue
                    };
                    // Already-visited fragments are skipped, which also cuts
                    // cycles between fragments.
                    if found.insert(fragment.name.to_owned()) {
                        self.collect_spreads(&fragment.node.selection_set, found);
                    }
                },
            }
        }
    }
}
