use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use firelink_runtime::exe_suffix;
use log::{debug, info, warn};

use crate::error::{AppError, Result};

const RUNTIME_BINARIES: &[&str] = &["firefox", "iceweasel", "xulrunner"];

/// Some distributions keep the real runtime in a `xulrunner` subdirectory.
fn runtime_root(src: &Path) -> PathBuf {
    let nested = src.join("xulrunner");
    if nested.is_dir() { nested } else { src.to_path_buf() }
}

/// Copy the browser runtime in `src` to `dst`, with its main executable
/// renamed to `renamed`. Any existing `dst` is replaced; a failed copy leaves
/// no `dst` behind.
pub fn copy_runtime(src: &Path, dst: &Path, renamed: &str) -> Result<PathBuf> {
    let start = Instant::now();
    let src = runtime_root(src);

    if dst.exists() {
        fs::remove_dir_all(dst).map_err(AppError::fs("remove", dst))?;
    }
    fs::create_dir_all(dst).map_err(AppError::fs("create", dst))?;

    match copy_files(&src, dst, renamed) {
        Ok(exe) => {
            info!(
                "[runtime] copied {} to {} in {:.1?}",
                src.display(),
                dst.display(),
                start.elapsed()
            );
            Ok(exe)
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_dir_all(dst) {
                warn!("[runtime] could not remove {}: {cleanup}", dst.display());
            }
            Err(err)
        }
    }
}

fn copy_files(src: &Path, dst: &Path, renamed: &str) -> Result<PathBuf> {
    let entries = fs::read_dir(src).map_err(AppError::fs("read", src))?;
    for entry in entries {
        let entry = entry.map_err(AppError::fs("read", src))?;
        let from = entry.path();
        // Follows symlinks, so linked runtime files are copied too.
        if !from.is_file() {
            continue;
        }
        let to = dst.join(entry.file_name());
        fs::copy(&from, &to).map_err(AppError::fs("copy", &from))?;
    }

    let suffix = exe_suffix();
    let exe = RUNTIME_BINARIES
        .iter()
        .map(|name| src.join(format!("{name}{suffix}")))
        .find(|p| p.is_file())
        .ok_or_else(|| {
            AppError::NotFound(format!("no runtime executable in '{}'", src.display()))
        })?;

    let target = dst.join(format!("{renamed}{suffix}"));
    debug!("[runtime] {} -> {}", exe.display(), target.display());
    fs::copy(&exe, &target).map_err(AppError::fs("copy", &exe))?;
    Ok(target)
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
