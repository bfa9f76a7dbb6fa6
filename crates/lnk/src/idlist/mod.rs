//! Target ID list: the chain of shell items a shell walks from "My Computer"
//! down to the link target.
//!
//! Layout of the encoded list:
//!
//! ```text
//! [u16 len+2][Root item]      only for drive-rooted paths
//! [u16 len+2][Drive item]     "/C:\" padded to 23 bytes
//! [u16 len+2][Entry item]...  one per remaining path level
//! [u16 0]                     terminator
//! ```

mod item;
mod levels;
mod meta;

use log::debug;

pub use item::{DRIVE_ITEM_LEN, EntryItem, EntryKind, IdItem, ROOT_ITEM};
pub use levels::{drive_letter, level_name, path_levels};
pub use meta::{FsMetadata, LevelMeta, MetadataSource};

use crate::{
    error::{LnkError, Result},
    time::to_dos_datetime,
};

/// Build the item sequence for `path`, reading each level's metadata from
/// `source`.
pub fn build_items<M: MetadataSource + ?Sized>(path: &str, source: &M) -> Result<Vec<IdItem>> {
    let mut levels = path_levels(path);
    let mut items = Vec::with_capacity(levels.len() + 1);

    if let Some(letter) = levels.first().and_then(|first| drive_letter(first)) {
        items.push(IdItem::Root);
        items.push(IdItem::Drive(letter));
        levels.remove(0);
    }

    for level in levels {
        let meta = source.level_meta(level)?;
        let kind = if meta.is_dir {
            EntryKind::Folder
        } else {
            EntryKind::File
        };

        items.push(IdItem::Entry(EntryItem {
            kind,
            name: level_name(level).to_owned(),
            size: u32::try_from(meta.size).unwrap_or(u32::MAX),
            modified: to_dos_datetime(&meta.modified),
            created: to_dos_datetime(&meta.created),
            accessed: to_dos_datetime(&meta.accessed),
        }));
    }

    Ok(items)
}

/// Serialize items into a terminated ID list.
pub fn encode_items(items: &[IdItem]) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    for item in items {
        let payload = item.encode();
        let size = payload
            .len()
            .checked_add(2)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| {
                LnkError::InvalidArgument(format!(
                    "ID list item of {} bytes exceeds the u16 size field",
                    payload.len()
                ))
            })?;

        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&payload);
    }

    out.extend_from_slice(&[0, 0]);
    Ok(out)
}

/// Encode the ID list for `path` using metadata from `source`.
pub fn encode_id_list_with<M: MetadataSource + ?Sized>(path: &str, source: &M) -> Result<Vec<u8>> {
    let items = build_items(path, source)?;
    debug!("[idlist] {} items for {path:?}", items.len());
    encode_items(&items)
}

/// Encode the ID list for `path`, reading metadata from the local filesystem.
pub fn encode_id_list(path: &str) -> Result<Vec<u8>> {
    encode_id_list_with(path, &FsMetadata)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
