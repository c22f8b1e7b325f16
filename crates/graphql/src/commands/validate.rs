use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::GraphQLFiles;
use crate::output_utils;
use libgraphql_analysis::validation::RuleExecution;
use libgraphql_analysis::validation::ValidationOptions;
use libgraphql_analysis::validation::specified_rules;
use libgraphql_analysis::validation::validate;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=super::default_graphql_file_exts(),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=100,
        help="Stop validating a file after this many errors. Use 0 for no \
             limit.",
        long,
    )]
    max_errors: usize,

    #[arg(
        help="A GraphQL schema file used to resolve the input types expected \
             by each variable usage.",
        long,
    )]
    schema: Option<PathBuf>,

    #[arg(
        help="Run each validation rule in its own traversal instead of \
             sharing a single traversal between all rules.",
        long,
    )]
    sequential: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl ValidateCmd {
    fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            max_errors: (self.max_errors > 0).then_some(self.max_errors),
            execution:
                if self.sequential {
                    RuleExecution::Sequential
                } else {
                    RuleExecution::Parallel
                },
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = GraphQLFiles::find(&self.file_or_dir_paths, &self.graphql_file_exts);
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while finding GraphQL files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let schema = match self.schema.as_deref().map(graphql_files::load_schema) {
            Some(Ok(schema)) => Some(schema),
            Some(Err(e)) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {e}",
                output_utils::RED_X,
            )),
            None => None,
        };

        let options = self.validation_options();
        let rules = specified_rules();
        let mut num_operations = 0;
        let mut error_lines = vec![];
        for file_path in &found.file_paths {
            let doc = match graphql_files::load_document(file_path) {
                Ok(doc) => doc,
                Err(e) => {
                    error_lines.push(format!("  * {e}"));
                    continue;
                },
            };
            num_operations += doc.operations().count();

            for error in validate(&doc, schema.as_ref(), &rules, &options) {
                let locations: Vec<String> =
                    error.locations()
                        .iter()
                        .map(|pos| format!("{}:{}:{}", file_path.display(), pos.line, pos.column))
                        .collect();
                let location =
                    if locations.is_empty() {
                        file_path.display().to_string()
                    } else {
                        locations.join(", ")
                    };
                error_lines.push(format!("  * {location}: {error}"));
            }
        }

        if !error_lines.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Found {} GraphQL validation error(s):\n{}",
                output_utils::RED_X,
                error_lines.len(),
                error_lines.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations against {} rule(s).",
            ),
            output_utils::GREEN_CHECK,
            found.file_paths.len(),
            found.num_skipped,
            num_operations,
            rules.len(),
        ))
    }
}
