use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::{Cli, Command};
use firelink_runtime::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_with_verbosity(cli.verbose).ok();

    match cli.command {
        Command::Shortcut(args) => commands::shortcut::run(args),
        Command::Bundle(args) => commands::bundle::run(args),
        Command::Locate(args) => commands::locate::run(args),
        Command::CopyRuntime(args) => commands::locate::run_copy(args),
        Command::CreateApp(args) => commands::app::run_create(args),
        Command::Launch(args) => commands::app::run_launch(args),
    }
}
