use super::*;

use std::{collections::HashMap, fs, io, path::PathBuf};

use chrono::{DateTime, Local, TimeZone};

/// In-memory metadata keyed by level string.
struct FakeMetadata {
    levels: HashMap<String, LevelMeta>,
}

impl FakeMetadata {
    fn new(entries: &[(&str, bool, u64)]) -> Self {
        let levels = entries
            .iter()
            .map(|(path, is_dir, size)| {
                (
                    path.to_string(),
                    LevelMeta {
                        is_dir: *is_dir,
                        size: *size,
                        modified: at(2020, 3, 4, 5, 6, 7),
                        created: at(2019, 1, 2, 3, 4, 5),
                        accessed: at(2021, 12, 31, 23, 59, 30),
                    },
                )
            })
            .collect();
        Self { levels }
    }
}

impl MetadataSource for FakeMetadata {
    fn level_meta(&self, level: &str) -> Result<LevelMeta> {
        self.levels
            .get(level)
            .cloned()
            .ok_or_else(|| LnkError::Filesystem {
                path: PathBuf::from(level),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Split an encoded list into item payloads, checking the terminator.
fn split_items(blob: &[u8]) -> Vec<&[u8]> {
    let mut items = Vec::new();
    let mut pos = 0;
    loop {
        let size = u16::from_le_bytes([blob[pos], blob[pos + 1]]) as usize;
        if size == 0 {
            assert_eq!(pos + 2, blob.len(), "terminator must end the list");
            break;
        }
        items.push(&blob[pos + 2..pos + size]);
        pos += size;
    }
    items
}

fn u16_at(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

fn sample_source() -> FakeMetadata {
    FakeMetadata::new(&[(r"D:\L1", true, 4096), (r"D:\L1\L2", false, 1234)])
}

#[test]
fn drive_path_yields_root_drive_and_one_item_per_level() {
    let blob = encode_id_list_with(r"D:\L1\L2", &sample_source()).unwrap();
    let items = split_items(&blob);

    assert_eq!(items.len(), 4);
    assert_eq!(items[0], ROOT_ITEM);

    let mut drive = b"/D:\\".to_vec();
    drive.resize(DRIVE_ITEM_LEN, 0);
    assert_eq!(items[1], drive.as_slice());

    assert_eq!(u16_at(items[2], 0), 0x31, "L1 is a folder");
    assert_eq!(u16_at(items[3], 0), 0x32, "L2 is a file");
}

#[test]
fn root_and_drive_item_sizes() {
    let blob = encode_id_list_with(r"D:\L1\L2", &sample_source()).unwrap();
    assert_eq!(u16_at(&blob, 0), 20);
    assert_eq!(u16_at(&blob, 20), 25);
}

#[test]
fn ascii_entry_layout() {
    let items = build_items(r"D:\L1\L2", &sample_source()).unwrap();
    let IdItem::Entry(file) = &items[3] else {
        panic!("expected entry, got {:?}", items[3]);
    };
    assert_eq!(file.name, "L2");
    assert_eq!(file.size, 1234);

    let bytes = items[3].encode();
    assert_eq!(bytes.len(), 44);

    assert_eq!(u16_at(&bytes, 0), 0x32);
    assert_eq!(&bytes[2..6], &1234u32.to_le_bytes());
    assert_eq!(&bytes[6..10], &file.modified.to_le_bytes());
    assert_eq!(u16_at(&bytes, 10), 0x10);
    // "L2" + NUL + pad
    assert_eq!(&bytes[12..16], b"L2\0\0");
    // extension block
    assert_eq!(u16_at(&bytes, 16), 24 + 2 * 2);
    assert_eq!(u16_at(&bytes, 18), 0x03);
    assert_eq!(u16_at(&bytes, 20), 0x04);
    assert_eq!(u16_at(&bytes, 22), 0xBEEF);
    assert_eq!(&bytes[24..28], &file.created.to_le_bytes());
    assert_eq!(&bytes[28..32], &file.accessed.to_le_bytes());
    assert_eq!(u16_at(&bytes, 32), 0x14);
    assert_eq!(u16_at(&bytes, 34), 0);
    assert_eq!(&bytes[36..40], &[b'L', 0, b'2', 0]);
    assert_eq!(u16_at(&bytes, 40), 0, "long name terminator");
    assert_eq!(u16_at(&bytes, 42), 0x0E + 4);
}

#[test]
fn odd_length_ascii_name_is_not_padded() {
    let entry = IdItem::Entry(EntryItem {
        kind: EntryKind::Folder,
        name: "abc".into(),
        size: 0,
        modified: Default::default(),
        created: Default::default(),
        accessed: Default::default(),
    });
    let bytes = entry.encode();

    assert_eq!(&bytes[12..16], b"abc\0");
    // trailing short-name offset: 0x0E + 4
    assert_eq!(u16_at(&bytes, bytes.len() - 2), 0x0E + 4);
}

#[test]
fn non_ascii_name_uses_wide_short_name() {
    let entry = IdItem::Entry(EntryItem {
        kind: EntryKind::File,
        name: "héllo.txt".into(),
        size: 7,
        modified: Default::default(),
        created: Default::default(),
        accessed: Default::default(),
    });
    let bytes = entry.encode();

    assert_eq!(u16_at(&bytes, 0), 0x36);
    let short_len = (9 + 1) * 2;
    assert_eq!(&bytes[12..14], &[b'h', 0]);
    assert_eq!(&bytes[14..16], &[0xE9, 0]);
    assert_eq!(u16_at(&bytes, 12 + short_len - 2), 0, "short name terminator");
    assert_eq!(u16_at(&bytes, 12 + short_len), 24 + 2 * 9);
    assert_eq!(u16_at(&bytes, bytes.len() - 2), 0x0E + short_len as u16);
}

#[test]
fn entry_codes() {
    assert_eq!(EntryKind::Folder.code(false), 0x31);
    assert_eq!(EntryKind::File.code(false), 0x32);
    assert_eq!(EntryKind::Folder.code(true), 0x35);
    assert_eq!(EntryKind::File.code(true), 0x36);
}

#[test]
fn relative_path_has_no_root_or_drive() {
    let source = FakeMetadata::new(&[("app", true, 0), ("app/run.exe", false, 10)]);
    let items = build_items("app/run.exe", &source).unwrap();

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| matches!(i, IdItem::Entry(_))));
}

#[test]
fn bare_drive_is_root_and_drive_only() {
    let source = FakeMetadata::new(&[]);
    let blob = encode_id_list_with(r"C:\", &source).unwrap();
    let items = split_items(&blob);
    assert_eq!(items.len(), 2);
}

#[test]
fn missing_level_is_a_filesystem_error() {
    let source = FakeMetadata::new(&[(r"D:\L1", true, 0)]);
    let err = encode_id_list_with(r"D:\L1\missing.exe", &source).unwrap_err();

    match err {
        LnkError::Filesystem { path, .. } => {
            assert_eq!(path, PathBuf::from(r"D:\L1\missing.exe"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn oversized_item_is_rejected() {
    let entry = IdItem::Entry(EntryItem {
        kind: EntryKind::File,
        name: "n".repeat(40_000),
        size: 0,
        modified: Default::default(),
        created: Default::default(),
        accessed: Default::default(),
    });
    let err = encode_items(&[entry]).unwrap_err();
    assert!(matches!(err, LnkError::InvalidArgument(_)));
}

#[test]
fn reads_real_filesystem_levels() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path().join("sub");
    fs::create_dir(&dir).expect("create sub dir");
    let file = dir.join("target.bin");
    fs::write(&file, b"0123456789").expect("write target");

    let path = file.to_str().expect("utf-8 temp path");
    let items = build_items(path, &FsMetadata).unwrap();

    assert_eq!(items.len(), expected_item_count(path));

    let Some(IdItem::Entry(leaf)) = items.last() else {
        panic!("last item should be an entry");
    };
    assert_eq!(leaf.kind, EntryKind::File);
    assert_eq!(leaf.name, "target.bin");
    assert_eq!(leaf.size, 10);

    let Some(IdItem::Entry(parent)) = items.get(items.len() - 2) else {
        panic!("parent should be an entry");
    };
    assert_eq!(parent.kind, EntryKind::Folder);
    assert_eq!(parent.name, "sub");
    assert_eq!(parent.size, 0);
}

/// Drive-rooted temp dirs (Windows) trade the drive level for Root + Drive.
fn expected_item_count(path: &str) -> usize {
    let levels = path_levels(path);
    match levels.first().and_then(|l| drive_letter(l)) {
        Some(_) => levels.len() + 1,
        None => levels.len(),
    }
}

#[test]
fn nonexistent_target_fails_on_real_filesystem() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("nope").join("app.exe");
    let err = encode_id_list(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, LnkError::Filesystem { .. }));
}
