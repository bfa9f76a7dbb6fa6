use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use firelink_runtime::{BUNDLE_ID_DOMAIN, BUNDLE_PROFILE_NAME, BUNDLE_VENDOR, PROGRAM_NAME};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    templates::{self, render},
};

/// How the app window starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
    Fullscreen,
    Kiosk,
}

impl WindowMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowMode::Normal => "normal",
            WindowMode::Maximized => "maximized",
            WindowMode::Fullscreen => "fullscreen",
            WindowMode::Kiosk => "kiosk",
        }
    }

    /// Value of the window's `sizemode` attribute. The runtime has no kiosk
    /// mode of its own.
    pub fn size_mode(self) -> &'static str {
        match self {
            WindowMode::Kiosk => WindowMode::Fullscreen.as_str(),
            other => other.as_str(),
        }
    }
}

impl FromStr for WindowMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(WindowMode::Normal),
            "maximized" => Ok(WindowMode::Maximized),
            "fullscreen" => Ok(WindowMode::Fullscreen),
            "kiosk" => Ok(WindowMode::Kiosk),
            _ => Err(AppError::InvalidArgument(format!(
                "unknown window mode '{s}' (expected normal, maximized, fullscreen or kiosk)"
            ))),
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BASE_FEATURES: &str = "resizable=1,minimizable=1,dialog=0,";

/// Initial window geometry, rendered into the runtime's default chrome
/// features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFeatures {
    size: Option<(u32, u32)>,
    position: Option<(i32, i32)>,
}

impl WindowFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn with_position(mut self, left: i32, top: i32) -> Self {
        self.position = Some((left, top));
        self
    }

    /// Geometry only applies to normal windows; position without a size is
    /// dropped.
    pub fn render(&self, mode: WindowMode) -> String {
        let mut out = String::from(BASE_FEATURES);

        if mode != WindowMode::Normal {
            return out;
        }

        if let Some((width, height)) = self.size {
            out.push_str(&format!("width={width},height={height}"));
            if let Some((left, top)) = self.position {
                out.push_str(&format!(",left={left},top={top}"));
            }
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBundle {
    pub title: String,
    pub id: String,
    pub url: String,
    pub window_features: WindowFeatures,
    pub window_mode: WindowMode,
    /// Icon file copied into the bundle, keeping its extension.
    pub icon: Option<PathBuf>,
}

impl AppBundle {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            url: url.into(),
            window_features: WindowFeatures::default(),
            window_mode: WindowMode::default(),
            icon: None,
        }
    }

    pub fn window_id(&self) -> String {
        format!("W{}", self.id)
    }

    pub fn chrome_name(&self) -> String {
        format!("{PROGRAM_NAME}_{}", self.id)
    }

    pub fn app_id(&self) -> String {
        format!("app_{}@{BUNDLE_ID_DOMAIN}", self.id)
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(AppError::InvalidArgument("app id must not be empty".into()));
        }
        if self
            .id
            .chars()
            .any(|c| std::path::is_separator(c) || c.is_control())
        {
            return Err(AppError::InvalidArgument(format!(
                "app id '{}' must not contain path separators",
                self.id
            )));
        }
        Ok(())
    }
}

const BUNDLE_DIRS: &[&str] = &[
    "chrome/content",
    "chrome/icons/default",
    "defaults/preferences",
];

/// Relative path of the bundle's icon for `window_id` with extension `ext`.
pub fn icon_path(window_id: &str, ext: &str) -> PathBuf {
    Path::new("chrome/icons/default").join(format!("{window_id}.{ext}"))
}

/// Write the XUL app definition for `bundle` into `dir`, replacing whatever
/// was there.
pub fn create_app_bundle(dir: &Path, bundle: &AppBundle) -> Result<()> {
    bundle.validate()?;

    if dir.exists() {
        debug!("[bundle] removing previous bundle at {}", dir.display());
        fs::remove_dir_all(dir).map_err(AppError::fs("remove", dir))?;
    }
    for sub in BUNDLE_DIRS {
        let path = dir.join(sub);
        fs::create_dir_all(&path).map_err(AppError::fs("create", path))?;
    }

    let name = bundle.chrome_name();
    let id = bundle.app_id();
    let window_id = bundle.window_id();
    let features = bundle.window_features.render(bundle.window_mode);
    let values: [(&str, &str); 11] = [
        ("vendor", BUNDLE_VENDOR),
        ("name", &name),
        ("version", "1.0"),
        ("buildid", "1"),
        ("id", &id),
        ("windowid", &window_id),
        ("title", &bundle.title),
        ("url", &bundle.url),
        ("sizemode", bundle.window_mode.size_mode()),
        ("windowfeatures", &features),
        ("profilename", BUNDLE_PROFILE_NAME),
    ];

    let files = [
        ("chrome.manifest", templates::CHROME_MANIFEST_LINK.to_string()),
        ("chrome/chrome.manifest", render(templates::CHROME_MANIFEST, &values)),
        ("application.ini", render(templates::APPLICATION_INI, &values)),
        ("defaults/preferences/prefs.js", render(templates::PREFS_JS, &values)),
        ("chrome/content/main.js", templates::MAIN_JS.to_string()),
        ("chrome/content/main.xul", render(templates::MAIN_XUL, &values)),
    ];
    for (rel, text) in files {
        let path = dir.join(rel);
        fs::write(&path, text).map_err(AppError::fs("write", path))?;
    }

    if let Some(icon) = &bundle.icon {
        let ext = icon.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            AppError::InvalidArgument(format!("icon '{}' has no extension", icon.display()))
        })?;
        let dest = dir.join(icon_path(&window_id, ext));
        fs::copy(icon, &dest).map_err(AppError::fs("copy icon", icon))?;
    }

    info!("[bundle] created {} in {}", name, dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
