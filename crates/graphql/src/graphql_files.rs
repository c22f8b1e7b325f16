use crate::file_reader;
use crate::file_reader::ReadContentError;
use libgraphql_analysis::Schema;
use libgraphql_analysis::ast;
use libgraphql_analysis::compat_graphql_parser_v0_4::ParseError;
use libgraphql_analysis::compat_graphql_parser_v0_4::parse_executable_document;
use libgraphql_analysis::compat_graphql_parser_v0_4::parse_schema_document;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

/// GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl GraphQLFiles {
    /// Recursively collect the files under `paths` whose extension is one of
    /// `file_exts` (with or without a leading `.`).
    ///
    /// If the user passes exactly one path and it is a file, it is used
    /// even when its extension doesn't match.
    pub fn find(paths: &[PathBuf], file_exts: &[String]) -> Self {
        let file_exts: HashSet<&str> =
            file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!("Scanning {} input paths...", paths.len());
        let mut found = Self::default();
        for path in paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        found.errors.push(e.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let ext_matches =
                    entry_path
                        .extension()
                        .is_some_and(|ext| file_exts.contains(ext.to_string_lossy().as_ref()));
                if ext_matches {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    found.push_canonicalized(entry_path);
                } else {
                    found.num_skipped += 1;
                }
            }
        }

        if found.file_paths.is_empty()
            && let [only_path] = paths
            && only_path.is_file() {
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.num_skipped = found.num_skipped.saturating_sub(1);
            found.push_canonicalized(only_path);
        }

        log::debug!("Found {} GraphQL files.", found.file_paths.len());
        found
    }

    fn push_canonicalized(&mut self, path: &Path) {
        match std::fs::canonicalize(path) {
            Ok(path) => self.file_paths.push(path),
            Err(e) => self.errors.push(
                anyhow::Error::new(e).context(format!("Failed to resolve {path:#?}")),
            ),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoadDocumentError {
    #[error("Failed to parse {file_path:?}: {err}")]
    ParseError {
        file_path: PathBuf,
        err: ParseError,
    },

    #[error(transparent)]
    ReadError(#[from] ReadContentError),
}

/// Read and parse one GraphQL file.
///
/// Files are parsed as executable documents first. A file that only holds
/// type-system definitions parses as a schema document instead; its
/// definitions are kept but are ignored by separation and validation.
pub(crate) fn load_document(file_path: &Path) -> Result<ast::Document, LoadDocumentError> {
    let content = file_reader::read_content(file_path)?;
    match parse_executable_document(&content) {
        Ok(doc) => Ok(doc),
        Err(err) => parse_schema_document(&content).map_err(|_| {
            LoadDocumentError::ParseError {
                file_path: file_path.to_path_buf(),
                err,
            }
        }),
    }
}

pub(crate) fn load_schema(file_path: &Path) -> Result<Schema, LoadDocumentError> {
    let content = file_reader::read_content(file_path)?;
    let doc = parse_schema_document(&content)
        .map_err(|err| LoadDocumentError::ParseError {
            file_path: file_path.to_path_buf(),
            err,
        })?;
    Ok(Schema::from_document(&doc))
}

#[cfg(test)]
mod tests {
    use super::GraphQLFiles;
    use super::LoadDocumentError;
    use super::load_document;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "graphql-cli-{name}-{}",
            std::process::id(),
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    #[test]
    fn test_find_filters_by_extension_recursively() {
        let dir = scratch_dir("find");
        std::fs::write(dir.join("a.graphql"), "{ a }").unwrap();
        std::fs::write(dir.join("nested/b.gql"), "{ b }").unwrap();
        std::fs::write(dir.join("nested/c.txt"), "{ c }").unwrap();

        let found = GraphQLFiles::find(
            &[dir.clone()],
            &["graphql".to_string(), ".gql".to_string()],
        );

        let mut names: Vec<String> =
            found.file_paths
                .iter()
                .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
                .collect();
        names.sort();
        assert_eq!(names, vec!["a.graphql", "b.gql"]);
        assert_eq!(found.num_skipped, 1);
        assert!(found.errors.is_empty());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_a_single_explicit_file_is_used_regardless_of_extension() {
        let dir = scratch_dir("single");
        let file = dir.join("query.txt");
        std::fs::write(&file, "{ a }").unwrap();

        let found = GraphQLFiles::find(&[file], &["graphql".to_string()]);

        assert_eq!(found.file_paths.len(), 1);
        assert_eq!(found.num_skipped, 0);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_document_falls_back_to_schema_parsing() {
        let dir = scratch_dir("load");
        let schema_file = dir.join("schema.graphql");
        let broken_file = dir.join("broken.graphql");
        std::fs::write(&schema_file, "type Query { a: Int }").unwrap();
        std::fs::write(&broken_file, "query {").unwrap();

        let doc = load_document(&schema_file).unwrap();
        assert_eq!(doc.type_system_definitions().count(), 1);
        assert!(matches!(
            load_document(&broken_file),
            Err(LoadDocumentError::ParseError { .. }),
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
