use bytemuck::{Pod, Zeroable, bytes_of};

use crate::flags::LinkFlags;

/// Header size field, doubling as the file magic ("L\0\0\0").
pub const HEADER_SIZE: u32 = 0x4C;

/// Shell link CLSID 00021401-0000-0000-C000-000000000046, in on-disk order.
pub const LINK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/// Fixed 76-byte shell link header.
///
/// Every field is stored as little-endian bytes so the struct has alignment 1,
/// no padding, and the same layout on any host.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ShellLinkHeader {
    pub header_size: [u8; 4],
    pub link_clsid: [u8; 16],
    pub link_flags: [u8; 4],
    pub file_attributes: [u8; 4],
    pub creation_time: [u8; 8],
    pub access_time: [u8; 8],
    pub write_time: [u8; 8],
    pub file_size: [u8; 4],
    pub icon_index: [u8; 4],
    pub show_command: [u8; 4],
    pub hot_key: [u8; 2],
    pub reserved: [u8; 10],
}

impl ShellLinkHeader {
    /// Header with all three timestamps set to `filetime`. Attributes, file
    /// size, icon index and hot key stay zero.
    pub fn new(flags: LinkFlags, filetime: u64, show_command: u32) -> Self {
        let stamp = filetime.to_le_bytes();
        Self {
            header_size: HEADER_SIZE.to_le_bytes(),
            link_clsid: LINK_CLSID,
            link_flags: flags.to_le_bytes(),
            creation_time: stamp,
            access_time: stamp,
            write_time: stamp,
            show_command: show_command.to_le_bytes(),
            ..Self::zeroed()
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytes_of(self)
    }
}
