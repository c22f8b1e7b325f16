mod separate_operations;
mod validate;

use crate::Cli;
use crate::CommandResult;
use separate_operations::SeparateOperationsCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    SeparateOperations(Box<SeparateOperationsCmd>),
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::SeparateOperations(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

fn default_graphql_file_exts() -> Vec<String> {
    vec!["graphql".to_string(), "gql".to_string()]
}
