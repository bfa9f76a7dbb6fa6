use std::{
    path::{Path, PathBuf},
    process::Command,
};

use firelink_lnk::{RunMode, ShortcutDescriptor};
use firelink_runtime::BUNDLE_DIR;
use log::info;

use crate::{
    bundle::icon_path,
    error::{AppError, Result},
    locate::find_executable,
};

/// Profile directory handed to the runtime; lives inside the app so it goes
/// away with it.
pub const STUB_PROFILE_DIR: &str = "stub_profile";

fn application_ini(app_dir: &Path) -> PathBuf {
    app_dir.join(BUNDLE_DIR).join("application.ini")
}

/// Shortcut that starts the app in `app_dir` on the browser runtime. Going
/// through a shortcut lets the shell pin the app as its own program.
pub fn launcher_shortcut(
    app_dir: &Path,
    name: &str,
    browser_exe: &Path,
    lnk_path: &Path,
) -> ShortcutDescriptor {
    let icon = app_dir
        .join(BUNDLE_DIR)
        .join(icon_path(&format!("W{name}"), "ico"));

    ShortcutDescriptor::new(lnk_path)
        .with_target(browser_exe.display().to_string())
        .with_arguments(format!("--app \"{}\"", application_ini(app_dir).display()))
        .with_work_dir(app_dir.display().to_string())
        .with_comment(format!("Run {name} on the XUL runtime"))
        .with_icon(icon.display().to_string())
        .with_run_mode(RunMode::Normal)
}

/// Direct runtime invocation used where shortcuts are not available.
pub fn launch_command(browser_exe: &Path, app_dir: &Path) -> Command {
    let mut cmd = Command::new(browser_exe);
    cmd.arg("-app")
        .arg(application_ini(app_dir))
        .arg("-profile")
        .arg(app_dir.join(STUB_PROFILE_DIR));
    cmd
}

/// Start the app in `app_dir` with the system's browser runtime.
pub fn launch_app(app_dir: &Path, name: &str) -> Result<()> {
    let browser = find_executable()?;
    start(app_dir, name, &browser)
}

#[cfg(windows)]
fn start(app_dir: &Path, name: &str, browser: &Path) -> Result<()> {
    let lnk = firelink_runtime::temp_shortcut_path(name);
    firelink_lnk::write_shortcut(&launcher_shortcut(app_dir, name, browser, &lnk))?;

    info!("[launch] opening {}", lnk.display());
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(&lnk)
        .spawn()
        .map_err(|err| AppError::ExternalToolFailure {
            tool: "cmd".into(),
            detail: format!("could not open {}: {err}", lnk.display()),
        })?;
    Ok(())
}

#[cfg(not(windows))]
fn start(app_dir: &Path, name: &str, browser: &Path) -> Result<()> {
    let profile = app_dir.join(STUB_PROFILE_DIR);
    std::fs::create_dir_all(&profile).map_err(AppError::fs("create", &profile))?;

    info!("[launch] starting {name} with {}", browser.display());
    launch_command(browser, app_dir)
        .spawn()
        .map_err(|err| AppError::ExternalToolFailure {
            tool: browser.display().to_string(),
            detail: format!("could not start: {err}"),
        })?;
    Ok(())
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
