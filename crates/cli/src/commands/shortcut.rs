use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use firelink_lnk::{RunMode, ShortcutDescriptor, write_shortcut};

use super::finish;

#[derive(Debug, Args)]
pub struct ShortcutArgs {
    /// Where to write the shortcut; must end in .lnk
    pub path: PathBuf,

    /// File or folder the shortcut points at; must exist
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Command-line arguments passed to the target
    #[arg(long, short = 'a', allow_hyphen_values = true)]
    pub arguments: Option<String>,

    #[arg(long)]
    pub relative_path: Option<String>,

    /// Working directory for the target
    #[arg(long, short = 'w')]
    pub work_dir: Option<String>,

    /// Description shown by the shell
    #[arg(long, short = 'c')]
    pub comment: Option<String>,

    /// Icon location
    #[arg(long, short = 'i')]
    pub icon: Option<String>,

    /// Initial window state: normal, maximized or minimized
    #[arg(long, short = 'r', value_name = "MODE", default_value = "normal")]
    pub run_mode: RunMode,
}

impl ShortcutArgs {
    pub fn descriptor(&self) -> ShortcutDescriptor {
        let mut desc = ShortcutDescriptor::new(&self.path).with_run_mode(self.run_mode);
        if let Some(target) = &self.target {
            desc = desc.with_target(target);
        }
        if let Some(arguments) = &self.arguments {
            desc = desc.with_arguments(arguments);
        }
        if let Some(relative_path) = &self.relative_path {
            desc = desc.with_relative_path(relative_path);
        }
        if let Some(work_dir) = &self.work_dir {
            desc = desc.with_work_dir(work_dir);
        }
        if let Some(comment) = &self.comment {
            desc = desc.with_comment(comment);
        }
        if let Some(icon) = &self.icon {
            desc = desc.with_icon(icon);
        }
        desc
    }
}

pub fn run(args: ShortcutArgs) -> ExitCode {
    finish("shortcut", execute(args))
}

fn execute(args: ShortcutArgs) -> Result<ExitCode> {
    let desc = args.descriptor();
    write_shortcut(&desc)
        .with_context(|| format!("writing shortcut {}", args.path.display()))?;

    eprintln!("[shortcut] wrote {}", args.path.display());
    Ok(ExitCode::SUCCESS)
}
