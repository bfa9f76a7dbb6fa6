//! Building and launching browser-hosted desktop apps.

mod assemble;
mod bundle;
mod error;
mod launch;
mod locate;
mod manifest;
mod package;
mod runtime;
mod templates;

pub use assemble::create_app;
pub use bundle::{AppBundle, WindowFeatures, WindowMode, create_app_bundle, icon_path};
pub use error::{AppError, Result};
pub use launch::{STUB_PROFILE_DIR, launch_app, launch_command, launcher_shortcut};
pub use locate::{executable_version, find_executable, first_existing, parse_version, path_candidates};
pub use manifest::AppManifest;
pub use package::Packager;
pub use runtime::copy_runtime;
