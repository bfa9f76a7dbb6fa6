use std::{ffi::OsString, path::PathBuf};

pub const PROGRAM_NAME: &str = "firelink";
pub const PROGRAM_LOG_LEVEL: &str = "FIRELINK_LOG_LEVEL";
/// Overrides the external packaging tool.
pub const PACKAGER_ENV: &str = "FIRELINK_PACKAGER";
pub const DEFAULT_PACKAGER: &str = "pyinstaller";

/// Vendor string and id suffix baked into generated app bundles.
pub const BUNDLE_VENDOR: &str = "firelink contributors";
pub const BUNDLE_ID_DOMAIN: &str = "firelink.io";
pub const BUNDLE_PROFILE_NAME: &str = "firelink_profile";

/// Directory (next to a shipped executable) that may hold a bundled runtime.
pub const LOCAL_RUNTIME_DIR: &str = "ff";
/// Sub-directory of an app holding the generated bundle.
pub const BUNDLE_DIR: &str = "xul";

pub fn xdg_or_home(xdg_var: &str, home_suffix: &str) -> PathBuf {
    if let Some(dir) = std::env::var_os(xdg_var).filter(|d| !d.is_empty()) {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(home_suffix)
    }
}

/// Per-user cache directory for firelink.
pub fn firelink_dir() -> PathBuf {
    xdg_or_home("XDG_CACHE_HOME", ".cache").join(PROGRAM_NAME)
}

/// Where a copied browser runtime lives when no target is given.
pub fn default_runtime_dir() -> PathBuf {
    firelink_dir().join("runtime")
}

/// Shortcut written by the launcher before handing off to the shell.
pub fn temp_shortcut_path(app_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{app_name}.lnk"))
}

/// Packaging tool from `FIRELINK_PACKAGER`, or the default.
pub fn packager_program() -> OsString {
    std::env::var_os(PACKAGER_ENV)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| OsString::from(DEFAULT_PACKAGER))
}

/// Executable suffix of the host.
pub fn exe_suffix() -> &'static str {
    if cfg!(windows) { ".exe" } else { "" }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
