//! Writer for Windows shell link (`.lnk`) files.

mod error;
mod flags;
mod header;
mod idlist;
mod link;
mod strings;
mod time;

pub use error::{LnkError, Result};
pub use flags::LinkFlags;
pub use header::{HEADER_SIZE, LINK_CLSID, ShellLinkHeader};
pub use idlist::{
    DRIVE_ITEM_LEN, EntryItem, EntryKind, FsMetadata, IdItem, LevelMeta, MetadataSource,
    ROOT_ITEM, build_items, drive_letter, encode_id_list, encode_id_list_with, encode_items,
    level_name, path_levels,
};
pub use link::{
    LNK_EXTENSION, RunMode, ShortcutDescriptor, encode_to, encode_to_vec, write_shortcut,
    write_shortcut_with,
};
pub use strings::{TextEncoding, write_string_section};
pub use time::{DosDateTime, filetime_to_unix, to_dos_datetime, to_filetime};
