use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::GraphQLFiles;
use crate::output_utils;
use libgraphql_analysis::compat_graphql_parser_v0_4::to_query_document;
use libgraphql_analysis::separate_operations;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SeparateOperationsCmd {
    #[arg(
        default_values_t=super::default_graphql_file_exts(),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only print the operation with this name. Use an empty string \
             for the anonymous operation.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files whose operations should be separated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for SeparateOperationsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = GraphQLFiles::find(&self.file_or_dir_paths, &self.graphql_file_exts);
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while finding GraphQL files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let mut sections = vec![];
        for file_path in &found.file_paths {
            let doc = match graphql_files::load_document(file_path) {
                Ok(doc) => doc,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} {e}",
                    output_utils::RED_X,
                )),
            };

            for (op_name, op_doc) in separate_operations(&doc) {
                if self.operation.as_ref().is_some_and(|wanted| *wanted != op_name) {
                    continue;
                }
                let label = if op_name.is_empty() { "<anonymous>" } else { &op_name };
                sections.push(format!(
                    "# {} :: {label}\n{}",
                    file_path.display(),
                    to_query_document(&op_doc),
                ));
            }
        }

        log::debug!("Printing {} separated operation(s).", sections.len());
        if let Some(wanted) = &self.operation
            && sections.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No operation named `{wanted}` was found.",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!("{}", sections.join("\n")))
    }
}
