use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use firelink_app::{AppManifest, Packager, create_app, launch_app};

use super::finish;

#[derive(Debug, Args)]
pub struct CreateAppArgs {
    /// JSON app manifest
    pub manifest: PathBuf,

    /// Output directory; emptied first
    pub target: PathBuf,

    /// Packaging tool (overrides FIRELINK_PACKAGER)
    #[arg(long)]
    pub packager: Option<String>,
}

#[derive(Debug, Args)]
pub struct LaunchArgs {
    /// Directory of a created app
    pub app_dir: PathBuf,

    /// App name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run_create(args: CreateAppArgs) -> ExitCode {
    finish("create-app", execute_create(args))
}

fn execute_create(args: CreateAppArgs) -> Result<ExitCode> {
    let manifest = AppManifest::load(&args.manifest)?;
    let packager = match args.packager {
        Some(program) => Packager::new(program),
        None => Packager::from_env(),
    };

    create_app(&args.target, &manifest, &packager)
        .with_context(|| format!("creating {} in {}", manifest.name, args.target.display()))?;

    eprintln!("[create-app] {} ready in {}", manifest.name, args.target.display());
    Ok(ExitCode::SUCCESS)
}

pub fn run_launch(args: LaunchArgs) -> ExitCode {
    finish("launch", execute_launch(args))
}

fn execute_launch(args: LaunchArgs) -> Result<ExitCode> {
    let name = match args.name {
        Some(name) => name,
        None => args
            .app_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("cannot derive an app name from {}", args.app_dir.display()))?,
    };

    launch_app(&args.app_dir, &name).with_context(|| format!("launching {name}"))?;
    Ok(ExitCode::SUCCESS)
}
