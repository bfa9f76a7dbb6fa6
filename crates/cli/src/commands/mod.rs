pub mod app;
pub mod bundle;
pub mod locate;
pub mod shortcut;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::error;

pub use app::{CreateAppArgs, LaunchArgs};
pub use bundle::BundleArgs;
pub use locate::{CopyRuntimeArgs, LocateArgs};
pub use shortcut::ShortcutArgs;

#[derive(Parser, Debug)]
#[command(
    name = "firelink",
    version,
    about = "Firelink - desktop apps on a browser runtime, with Windows shortcuts",
    propagate_version = true
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a Windows shell link (.lnk) file.
    ///
    /// Example:
    ///   firelink shortcut app.lnk --target 'C:\Tools\app.exe' --run-mode maximized
    Shortcut(ShortcutArgs),

    /// Generate the XUL app definition for a URL.
    ///
    /// Example:
    ///   firelink bundle ./demo/xul --id demo --url https://example.com
    Bundle(BundleArgs),

    /// Print the browser runtime that apps will run on.
    Locate(LocateArgs),

    /// Copy the browser runtime to a writable location.
    CopyRuntime(CopyRuntimeArgs),

    /// Build a standalone app directory from a JSON manifest.
    ///
    /// Example:
    ///   firelink create-app demo.json ./dist/demo
    CreateApp(CreateAppArgs),

    /// Start a generated app.
    Launch(LaunchArgs),
}

/// Shared tail of every command: log and report the error, exit with 2.
pub(crate) fn finish(component: &str, result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("[{component}] {e:#}");
            eprintln!("[{component}] {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
