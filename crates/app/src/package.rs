use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

use firelink_runtime::packager_program;
use log::{debug, info};

use crate::error::{AppError, Result};

/// External tool that freezes a launcher script into a windowed executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packager {
    program: OsString,
}

impl Default for Packager {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Packager {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Tool named by `FIRELINK_PACKAGER`, or the default one.
    pub fn from_env() -> Self {
        Self::new(packager_program())
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn command(&self, script: &Path, out: &Path, icon: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(script)
            .arg("--windowed")
            .arg("--distpath")
            .arg(out)
            .arg("--workpath")
            .arg(out.join("build"))
            .arg("--specpath")
            .arg(out);
        if let Some(icon) = icon {
            cmd.arg("--icon").arg(icon);
        }
        cmd
    }

    /// Package `script` into `out/<script stem>/`.
    pub fn package(&self, script: &Path, out: &Path, icon: Option<&Path>) -> Result<()> {
        let tool = self.program.to_string_lossy().into_owned();
        let mut cmd = self.command(script, out, icon);
        debug!("[package] running {cmd:?}");

        let status = cmd.status().map_err(|err| AppError::ExternalToolFailure {
            tool: tool.clone(),
            detail: format!("could not start: {err}"),
        })?;
        if !status.success() {
            return Err(AppError::ExternalToolFailure {
                tool,
                detail: format!("exited with {status}"),
            });
        }

        info!("[package] packaged {} into {}", script.display(), out.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
