use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use firelink_app::{copy_runtime, executable_version, find_executable};
use firelink_runtime::default_runtime_dir;

use super::finish;

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Also print the runtime's version
    #[arg(long)]
    pub print_version: bool,
}

#[derive(Debug, Args)]
pub struct CopyRuntimeArgs {
    /// Runtime directory to copy (defaults to the located browser's)
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Destination; replaced if it exists
    #[arg(long)]
    pub to: Option<PathBuf>,

    /// New name for the runtime executable
    #[arg(long, default_value = "xulrunner")]
    pub name: String,
}

pub fn run(args: LocateArgs) -> ExitCode {
    finish("locate", execute(args))
}

fn execute(args: LocateArgs) -> Result<ExitCode> {
    let exe = find_executable()?;

    if args.print_version {
        let version = executable_version(&exe).unwrap_or_else(|| "unknown".to_string());
        println!("{}\t{}", exe.display(), version);
    } else {
        println!("{}", exe.display());
    }
    Ok(ExitCode::SUCCESS)
}

pub fn run_copy(args: CopyRuntimeArgs) -> ExitCode {
    finish("copy-runtime", execute_copy(args))
}

fn execute_copy(args: CopyRuntimeArgs) -> Result<ExitCode> {
    let src = match args.from {
        Some(dir) => dir,
        None => {
            let exe = find_executable()?;
            exe.parent()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("no runtime directory for {}", exe.display()))?
        }
    };
    let dst = args.to.unwrap_or_else(default_runtime_dir);

    let exe = copy_runtime(&src, &dst, &args.name)
        .with_context(|| format!("copying runtime from {}", src.display()))?;

    println!("{}", exe.display());
    Ok(ExitCode::SUCCESS)
}
