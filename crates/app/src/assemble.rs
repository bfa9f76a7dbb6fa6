use std::{
    fs,
    path::{Path, PathBuf},
};

use firelink_runtime::{BUNDLE_DIR, LOCAL_RUNTIME_DIR};
use log::{debug, info};

use crate::{
    bundle::create_app_bundle,
    error::{AppError, Result},
    locate::find_executable,
    manifest::AppManifest,
    package::Packager,
    runtime::copy_runtime,
};

/// Build a standalone app for `manifest` in `target`, which is emptied first.
pub fn create_app(target: &Path, manifest: &AppManifest, packager: &Packager) -> Result<()> {
    assemble(target, manifest, packager, find_executable)
}

pub(crate) fn assemble<F>(
    target: &Path,
    manifest: &AppManifest,
    packager: &Packager,
    find_browser: F,
) -> Result<()>
where
    F: FnOnce() -> Result<PathBuf>,
{
    manifest.validate()?;

    info!("[assemble] preparing {}", target.display());
    if target.exists() {
        fs::remove_dir_all(target).map_err(AppError::fs("remove", target))?;
    }
    fs::create_dir_all(target).map_err(AppError::fs("create", target))?;

    create_app_bundle(&target.join(BUNDLE_DIR), &manifest.to_bundle())?;

    if let Some(launcher) = &manifest.launcher {
        freeze_launcher(target, manifest, launcher, packager)?;
    }

    if manifest.include_runtime {
        let exe = find_browser()?;
        let src = exe.parent().ok_or_else(|| {
            AppError::NotFound(format!("no runtime directory for '{}'", exe.display()))
        })?;
        copy_runtime(src, &target.join(LOCAL_RUNTIME_DIR), &manifest.name)?;
    }

    info!("[assemble] {} ready in {}", manifest.name, target.display());
    Ok(())
}

fn freeze_launcher(
    target: &Path,
    manifest: &AppManifest,
    launcher: &Path,
    packager: &Packager,
) -> Result<()> {
    let name = &manifest.name;
    let ext = launcher.extension().and_then(|e| e.to_str()).unwrap_or("py");
    let script = target.join(format!("{name}.{ext}"));
    fs::copy(launcher, &script).map_err(AppError::fs("copy launcher", launcher))?;

    packager.package(&script, target, manifest.icon.as_deref())?;

    // The packager leaves its output in `<target>/<name>/`, which may hold
    // an executable called `<name>` as well; move it aside before hoisting.
    let dist = target.join(name);
    let staging = target.join(format!(".{name}.dist"));
    fs::rename(&dist, &staging).map_err(AppError::fs("move", &dist))?;
    let entries = fs::read_dir(&staging).map_err(AppError::fs("read", &staging))?;
    for entry in entries {
        let entry = entry.map_err(AppError::fs("read", &staging))?;
        let to = target.join(entry.file_name());
        fs::rename(entry.path(), &to).map_err(AppError::fs("move", &to))?;
    }

    for file in [script, target.join(format!("{name}.spec"))] {
        if file.is_file() {
            debug!("[assemble] removing {}", file.display());
            fs::remove_file(&file).map_err(AppError::fs("remove", &file))?;
        }
    }
    for dir in [target.join("build"), staging, target.join("__pycache__")] {
        if dir.is_dir() {
            debug!("[assemble] removing {}", dir.display());
            fs::remove_dir_all(&dir).map_err(AppError::fs("remove", &dir))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
