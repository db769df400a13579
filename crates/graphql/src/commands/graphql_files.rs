use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Find all GraphQL files recursively located at or under each of
/// `file_or_dir_paths`, in a stable (sorted) order.
pub(crate) fn find_graphql_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> GraphQLFiles {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<String> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!(
        "Scanning {} input paths...",
        file_or_dir_paths.len(),
    );
    let mut found = GraphQLFiles::default();
    for path in file_or_dir_paths {
        let entries =
            WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }

            let has_graphql_ext =
                entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
            if has_graphql_ext {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                found.num_skipped_files += 1;
            }
        }
    }

    // If the user specifies a single file path as an argument, presume the
    // user explicitly wants that file loaded as a GraphQL file -- even if its
    // file extension doesn't match one of `graphql_file_exts`.
    if found.file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to load {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
        found.file_paths.push(first_arg_path.to_owned());
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}
