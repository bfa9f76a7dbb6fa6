use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};
use log::debug;

use crate::error::{LnkError, Result};

/// What the ID list needs to know about one path level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMeta {
    pub is_dir: bool,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub created: DateTime<Local>,
    pub accessed: DateTime<Local>,
}

/// Source of per-level metadata.
pub trait MetadataSource {
    fn level_meta(&self, level: &str) -> Result<LevelMeta>;
}

/// Reads metadata from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadata;

impl MetadataSource for FsMetadata {
    fn level_meta(&self, level: &str) -> Result<LevelMeta> {
        let path = Path::new(level);
        let fs_err = |source| LnkError::Filesystem {
            path: PathBuf::from(level),
            source,
        };

        let md = fs::metadata(path).map_err(fs_err)?;
        let modified = md.modified().map_err(fs_err)?;

        // Birth time is missing on some filesystems; the level itself was
        // readable, so fall back to mtime instead of failing.
        let created = md.created().unwrap_or_else(|e| {
            debug!("[idlist] no creation time for {level:?}: {e}");
            modified
        });
        let accessed = md.accessed().unwrap_or(modified);

        Ok(LevelMeta {
            is_dir: md.is_dir(),
            size: if md.is_dir() { 0 } else { md.len() },
            modified: to_local(modified),
            created: to_local(created),
            accessed: to_local(accessed),
        })
    }
}

fn to_local(t: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(t)
}
