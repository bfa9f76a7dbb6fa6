use crate::time::DosDateTime;

/// "My Computer" shell item: type 0x1F, sort index 0x50, then
/// CLSID 20D04FE0-3AEA-1069-A2D8-08002B30309D.
pub const ROOT_ITEM: [u8; 18] = [
    0x1F, 0x50, 0xE0, 0x4F, 0xD0, 0x20, 0xEA, 0x3A, 0x69, 0x10, 0xA2, 0xD8, 0x08, 0x00, 0x2B, 0x30,
    0x30, 0x9D,
];

/// Drive item payload is `/X:\` padded with NULs to this width.
pub const DRIVE_ITEM_LEN: usize = 23;

const ENTRY_ATTRIBUTES: u16 = 0x10;
const EXT_VERSION: u16 = 0x03;
const EXT_SIGNATURE: [u16; 2] = [0x0004, 0xBEEF];
const LONG_NAME_OFFSET: u16 = 0x14;
/// Fixed part of the extension block around the UTF-16 long name.
const EXT_FIXED_LEN: u16 = 24;
const SHORT_NAME_OFFSET_BASE: u16 = 0x0E;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    /// Entry type code; the wide variants flag a UTF-16 short name.
    pub fn code(self, wide_short_name: bool) -> u16 {
        match (self, wide_short_name) {
            (EntryKind::Folder, false) => 0x31,
            (EntryKind::File, false) => 0x32,
            (EntryKind::Folder, true) => 0x35,
            (EntryKind::File, true) => 0x36,
        }
    }
}

/// One folder or file level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryItem {
    pub kind: EntryKind,
    pub name: String,
    pub size: u32,
    pub modified: DosDateTime,
    pub created: DosDateTime,
    pub accessed: DosDateTime,
}

/// A record of the ID list, root to leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdItem {
    Root,
    Drive(char),
    Entry(EntryItem),
}

impl IdItem {
    /// Item payload, without its own length prefix.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            IdItem::Root => ROOT_ITEM.to_vec(),
            IdItem::Drive(letter) => encode_drive(*letter),
            IdItem::Entry(entry) => encode_entry(entry),
        }
    }
}

fn encode_drive(letter: char) -> Vec<u8> {
    let mut out = Vec::with_capacity(DRIVE_ITEM_LEN);
    out.push(b'/');
    let mut buf = [0u8; 4];
    out.extend_from_slice(letter.encode_utf8(&mut buf).as_bytes());
    out.extend_from_slice(b":\\");
    out.resize(DRIVE_ITEM_LEN, 0);
    out
}

#[inline]
fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
fn put_utf16z(out: &mut Vec<u8>, s: &str) {
    for unit in s.encode_utf16() {
        put_u16(out, unit);
    }
    put_u16(out, 0);
}

fn encode_entry(entry: &EntryItem) -> Vec<u8> {
    let name = entry.name.as_str();
    let wide_short_name = !name.is_ascii();
    let name_units = name.encode_utf16().count() as u16;

    let mut out = Vec::with_capacity(64 + 4 * name.len());
    put_u16(&mut out, entry.kind.code(wide_short_name));
    out.extend_from_slice(&entry.size.to_le_bytes());
    out.extend_from_slice(&entry.modified.to_le_bytes());
    put_u16(&mut out, ENTRY_ATTRIBUTES);

    // Short name: NUL-terminated, 8-bit form padded to an even length.
    let short_start = out.len();
    if wide_short_name {
        put_utf16z(&mut out, name);
    } else {
        out.extend_from_slice(name.as_bytes());
        out.push(0);
        if name.len() % 2 == 0 {
            out.push(0);
        }
    }
    let short_len = (out.len() - short_start) as u16;

    // Extension block, long name always UTF-16.
    // Oversized names wrap here; the list encoder rejects the item by length.
    put_u16(&mut out, EXT_FIXED_LEN.wrapping_add(name_units.wrapping_mul(2)));
    put_u16(&mut out, EXT_VERSION);
    put_u16(&mut out, EXT_SIGNATURE[0]);
    put_u16(&mut out, EXT_SIGNATURE[1]);
    out.extend_from_slice(&entry.created.to_le_bytes());
    out.extend_from_slice(&entry.accessed.to_le_bytes());
    put_u16(&mut out, LONG_NAME_OFFSET);
    put_u16(&mut out, 0);
    put_utf16z(&mut out, name);
    put_u16(&mut out, SHORT_NAME_OFFSET_BASE.wrapping_add(short_len));

    out
}
