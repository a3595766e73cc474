mod cli;
mod platform;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log, cli.log_level(), &cli.log_file);

    let settings = cli.fetch_settings();
    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => platform::app::run_interactive(settings),
        Command::Search(args) => platform::app::run_search(settings, args.into()),
        Command::Health => platform::app::run_health(settings),
    }
}
