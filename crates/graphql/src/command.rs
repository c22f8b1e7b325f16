use crate::Cli;
use crate::CommandResult;

/// A subcommand. Each one reports its outcome as a [`CommandResult`] rather
/// than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
