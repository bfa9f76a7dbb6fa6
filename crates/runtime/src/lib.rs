mod config;
pub mod logging;

pub use config::{
    BUNDLE_DIR, BUNDLE_ID_DOMAIN, BUNDLE_PROFILE_NAME, BUNDLE_VENDOR, DEFAULT_PACKAGER,
    LOCAL_RUNTIME_DIR, PACKAGER_ENV, PROGRAM_LOG_LEVEL, PROGRAM_NAME, default_runtime_dir,
    exe_suffix, firelink_dir, packager_program, temp_shortcut_path,
};

pub use logging::init;
