use super::args::{Cli, Commands};
use super::handlers;
use super::logging;
use anyhow::Result;
use flowboard_runtime::resolve_workspace_path;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Dashboard { input: None });

    // The full-screen UI owns the terminal, so its logs go to --log-file or nowhere
    let interactive =
        matches!(command, Commands::Dashboard { .. }) && std::io::stdout().is_terminal();
    logging::init(cli.log_level, cli.log_file.as_deref(), interactive)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting flowboard");

    match command {
        Commands::Dashboard { input } => {
            handlers::dashboard::handle(&data_dir, input, cli.format)
        }

        Commands::List {
            query,
            sort,
            desc,
            page,
            input,
        } => handlers::list::handle(
            &data_dir,
            handlers::list::ListOptions {
                query: query.unwrap_or_default(),
                sort: sort.map(Into::into),
                desc,
                page,
                input,
            },
            cli.format,
        ),

        Commands::HashUserId => handlers::hash_user_id::handle(&data_dir, cli.format),
    }
}
