use std::{
    fmt,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::{DateTime, Local};
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::{
    error::{LnkError, Result},
    flags::LinkFlags,
    header::ShellLinkHeader,
    idlist::{FsMetadata, MetadataSource, encode_id_list_with},
    strings::{TextEncoding, write_string_section},
    time::to_filetime,
};

/// Conventional shortcut extension, compared ASCII case-insensitively.
pub const LNK_EXTENSION: &str = "lnk";

/// Empty extra-data terminal block.
const TERMINAL_BLOCK: [u8; 4] = [0; 4];

/// Initial window state of the launched target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

impl RunMode {
    /// Show command stored in the header. Minimized maps to 7
    /// (SW_SHOWMINNOACTIVE), not 2.
    pub fn show_command(self) -> u32 {
        match self {
            RunMode::Normal => 1,
            RunMode::Maximized => 3,
            RunMode::Minimized => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Normal => "normal",
            RunMode::Maximized => "maximized",
            RunMode::Minimized => "minimized",
        }
    }
}

impl FromStr for RunMode {
    type Err = LnkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(RunMode::Normal),
            "maximized" => Ok(RunMode::Maximized),
            "minimized" => Ok(RunMode::Minimized),
            other => Err(LnkError::InvalidArgument(format!(
                "invalid run mode {other:?}, expected normal, maximized or minimized"
            ))),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything written into one shortcut file.
///
/// Optional strings that are empty count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    path: PathBuf,
    target: Option<String>,
    arguments: Option<String>,
    relative_path: Option<String>,
    work_dir: Option<String>,
    comment: Option<String>,
    icon: Option<String>,
    run_mode: RunMode,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl ShortcutDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_run_mode(mut self, run_mode: RunMode) -> Self {
        self.run_mode = run_mode;
        self
    }

    /// Set the run mode from its name; unknown names fail.
    pub fn with_run_mode_str(self, run_mode: &str) -> Result<Self> {
        Ok(self.with_run_mode(run_mode.parse()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn target(&self) -> Option<&str> {
        non_empty(&self.target)
    }

    pub fn arguments(&self) -> Option<&str> {
        non_empty(&self.arguments)
    }

    pub fn relative_path(&self) -> Option<&str> {
        non_empty(&self.relative_path)
    }

    pub fn work_dir(&self) -> Option<&str> {
        non_empty(&self.work_dir)
    }

    pub fn comment(&self) -> Option<&str> {
        non_empty(&self.comment)
    }

    pub fn icon(&self) -> Option<&str> {
        non_empty(&self.icon)
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Optional string sections in file order.
    fn string_sections(&self) -> [(LinkFlags, Option<&str>); 5] {
        [
            (LinkFlags::HAS_NAME, self.comment()),
            (LinkFlags::HAS_RELATIVE_PATH, self.relative_path()),
            (LinkFlags::HAS_WORKING_DIR, self.work_dir()),
            (LinkFlags::HAS_ARGUMENTS, self.arguments()),
            (LinkFlags::HAS_ICON_LOCATION, self.icon()),
        ]
    }

    /// File-wide string encoding.
    pub fn text_encoding(&self) -> TextEncoding {
        TextEncoding::for_fields(self.string_sections().map(|(_, s)| s))
    }

    /// Link flags; each bit depends only on its own field.
    pub fn flags(&self) -> LinkFlags {
        let mut flags = LinkFlags::base();
        flags.set(LinkFlags::HAS_TARGET_ID_LIST, self.target().is_some());
        for (flag, value) in self.string_sections() {
            flags.set(flag, value.is_some());
        }
        flags.set(LinkFlags::IS_UNICODE, self.text_encoding().is_unicode());
        flags
    }

    /// Fails unless the destination ends in `.lnk`.
    pub fn validate_path(&self) -> Result<()> {
        let ok = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(LNK_EXTENSION));

        if ok {
            Ok(())
        } else {
            Err(LnkError::InvalidArgument(format!(
                "shortcut path must end with .{LNK_EXTENSION}: {}",
                self.path.display()
            )))
        }
    }
}

/// Encode `desc` into `writer`, stamping the header with `now` and reading
/// ID list metadata from `source`.
///
/// The ID list is built before anything is written, so a missing target
/// leaves `writer` untouched.
pub fn encode_to<W, M>(
    desc: &ShortcutDescriptor,
    writer: &mut W,
    now: &DateTime<Local>,
    source: &M,
) -> Result<()>
where
    W: Write,
    M: MetadataSource + ?Sized,
{
    let id_list = match desc.target() {
        Some(target) => {
            let blob = encode_id_list_with(target, source)?;
            let len = u16::try_from(blob.len()).map_err(|_| {
                LnkError::InvalidArgument(format!(
                    "ID list of {} bytes exceeds the u16 size field",
                    blob.len()
                ))
            })?;
            Some((len, blob))
        }
        None => None,
    };

    let encoding = desc.text_encoding();
    let flags = desc.flags();
    debug!(
        "[lnk] flags={:#06x} encoding={:?} run_mode={}",
        flags.bits(),
        encoding,
        desc.run_mode()
    );

    let header = ShellLinkHeader::new(flags, to_filetime(now), desc.run_mode().show_command());
    writer.write_all(header.as_bytes())?;

    if let Some((len, blob)) = id_list {
        writer.write_all(&len.to_le_bytes())?;
        writer.write_all(&blob)?;
    }

    for (_, value) in desc.string_sections() {
        if let Some(text) = value {
            write_string_section(writer, text, encoding)?;
        }
    }

    writer.write_all(&TERMINAL_BLOCK)?;
    Ok(())
}

/// Encode `desc` into an in-memory buffer using the local filesystem.
pub fn encode_to_vec(desc: &ShortcutDescriptor, now: &DateTime<Local>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_to(desc, &mut out, now, &FsMetadata)?;
    Ok(out)
}

/// Write the shortcut file described by `desc`.
///
/// The file is written next to its destination and renamed over it, so the
/// destination is either replaced by a complete shortcut or left untouched.
pub fn write_shortcut(desc: &ShortcutDescriptor) -> Result<()> {
    write_shortcut_with(desc, &FsMetadata)
}

/// [`write_shortcut`] with an explicit metadata source.
pub fn write_shortcut_with<M: MetadataSource + ?Sized>(
    desc: &ShortcutDescriptor,
    source: &M,
) -> Result<()> {
    desc.validate_path()?;

    let path = desc.path();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let now = Local::now();
    let tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        encode_to(desc, &mut writer, &now, source)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    #[cfg(unix)]
    {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    info!("[lnk] wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
