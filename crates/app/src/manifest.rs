use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    bundle::{AppBundle, WindowFeatures, WindowMode},
    error::{AppError, Result},
};

/// Description of a standalone app, read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppManifest {
    /// Identifier for the bundle and name of the packaged executable.
    pub name: String,

    /// Window title; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,

    /// Script frozen into the app's executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<PathBuf>,

    /// Ship a copy of the browser runtime with the app.
    #[serde(default)]
    pub include_runtime: bool,

    #[serde(default)]
    pub window_mode: WindowMode,
}

impl AppManifest {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            url: url.into(),
            icon: None,
            launcher: None,
            include_runtime: false,
            window_mode: WindowMode::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(AppError::fs("read", path))?;
        let manifest: Self = serde_json::from_str(&text).map_err(|source| AppError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidArgument("app name must not be empty".into()));
        }
        if self.url.trim().is_empty() {
            return Err(AppError::InvalidArgument("app url must not be empty".into()));
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn to_bundle(&self) -> AppBundle {
        AppBundle {
            title: self.title().to_string(),
            id: self.name.clone(),
            url: self.url.clone(),
            window_features: WindowFeatures::default(),
            window_mode: self.window_mode,
            icon: self.icon.clone(),
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
