//! Finding a browser runtime to host generated apps.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

use firelink_runtime::{LOCAL_RUNTIME_DIR, exe_suffix};
use log::{debug, info};

use crate::error::{AppError, Result};

const PATH_BINARIES: &[&str] = &["firefox.exe", "firefox", "iceweasel"];

/// Runtime shipped next to `current_exe`, under `ff/`.
fn local_candidates(current_exe: &Path) -> Vec<PathBuf> {
    let Some(parent) = current_exe.parent() else {
        return Vec::new();
    };
    let local = parent.join(LOCAL_RUNTIME_DIR);
    if !local.is_dir() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2);
    if let Some(name) = current_exe.file_name() {
        out.push(local.join(name));
    }
    out.push(local.join(format!("firefox{}", exe_suffix())));
    out
}

#[cfg(windows)]
fn platform_candidates() -> Vec<PathBuf> {
    let mut out = Vec::new();
    for base in [r"C:\Program Files", r"C:\Program Files (x86)"] {
        let base = Path::new(base);
        out.push(base.join(r"Mozilla Firefox\firefox.exe"));
        out.push(base.join(r"Mozilla\Firefox\firefox.exe"));
        out.push(base.join(r"Firefox\firefox.exe"));
    }
    out
}

#[cfg(target_os = "macos")]
fn platform_candidates() -> Vec<PathBuf> {
    const BUNDLE_EXE: &str = "Firefox.app/Contents/MacOS/firefox";

    let mut out = Vec::new();
    if let Some(home) = dirs::home_dir() {
        out.push(home.join("Applications").join(BUNDLE_EXE));
    }
    out.push(Path::new("/Applications").join(BUNDLE_EXE));

    if !out.iter().any(|p| p.is_file()) {
        out.extend(spotlight_candidate());
    }
    out
}

/// Ask Spotlight where the app with Firefox's bundle id lives.
#[cfg(target_os = "macos")]
fn spotlight_candidate() -> Option<PathBuf> {
    let output = Command::new("mdfind")
        .arg("kMDItemCFBundleIdentifier==org.mozilla.firefox")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let app = stdout.lines().next()?.trim();
    (!app.is_empty()).then(|| Path::new(app).join("Contents/MacOS/firefox"))
}

#[cfg(not(any(windows, target_os = "macos")))]
fn platform_candidates() -> Vec<PathBuf> {
    [
        "/usr/lib/firefox/firefox",
        "/usr/lib64/firefox/firefox",
        "/usr/lib/iceweasel/iceweasel",
        "/usr/lib64/iceweasel/iceweasel",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Browser binaries inside `PATH` entries that look like a Mozilla install.
pub fn path_candidates(path_var: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| {
            let lower = dir.to_string_lossy().to_lowercase();
            lower.contains("firefox") || lower.contains("moz")
        })
        .flat_map(|dir| PATH_BINARIES.iter().map(move |name| dir.join(name)))
        .collect()
}

pub fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|p| {
        let hit = p.is_file();
        debug!("[locate] {} {}", if hit { "found" } else { "no" }, p.display());
        hit
    })
}

fn install_hint() -> String {
    let mut msg = String::from("cannot find Firefox; install it from https://firefox.com");
    if cfg!(target_os = "linux") {
        msg.push_str(", or use your package manager");
    }
    msg
}

/// Locate the browser executable on this system.
pub fn find_executable() -> Result<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        candidates.extend(local_candidates(&exe));
    }
    candidates.extend(platform_candidates());

    let found = first_existing(candidates).or_else(|| {
        let path_var = std::env::var_os("PATH")?;
        first_existing(path_candidates(&path_var))
    });

    match found {
        Some(exe) => {
            info!("[locate] using {}", exe.display());
            Ok(exe)
        }
        None => Err(AppError::NotFound(install_hint())),
    }
}

/// First token starting with a digit, splitting on whitespace and `=`.
pub fn parse_version(output: &str) -> Option<String> {
    output
        .split(|c: char| c.is_whitespace() || c == '=')
        .find(|part| part.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
}

/// Version reported by `exe --version`, if it runs and reports one.
pub fn executable_version(exe: &Path) -> Option<String> {
    if !exe.is_file() {
        return None;
    }
    let output = match Command::new(exe).arg("--version").output() {
        Ok(output) => output,
        Err(err) => {
            debug!("[locate] {} --version failed: {err}", exe.display());
            return None;
        }
    };
    if !output.status.success() {
        debug!("[locate] {} --version exited with {}", exe.display(), output.status);
        return None;
    }
    parse_version(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
