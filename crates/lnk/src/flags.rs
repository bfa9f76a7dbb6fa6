use bitflags::bitflags;

bitflags! {
    /// Link flags word of the shell link header. Bit order is fixed by the
    /// file format; only the first nine bits are ever set by this encoder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LinkFlags: u32 {
        /// An ID list follows the header.
        const HAS_TARGET_ID_LIST = 1 << 0;
        /// A link info section follows. Never emitted.
        const HAS_LINK_INFO      = 1 << 1;
        /// Comment string present.
        const HAS_NAME           = 1 << 2;
        const HAS_RELATIVE_PATH  = 1 << 3;
        const HAS_WORKING_DIR    = 1 << 4;
        const HAS_ARGUMENTS      = 1 << 5;
        const HAS_ICON_LOCATION  = 1 << 6;
        /// All string sections are UTF-16LE.
        const IS_UNICODE         = 1 << 7;
        const FORCE_NO_LINK_INFO = 1 << 8;
    }
}

impl LinkFlags {
    /// Flags every shortcut written here carries.
    pub fn base() -> Self {
        LinkFlags::FORCE_NO_LINK_INFO
    }

    pub fn to_le_bytes(self) -> [u8; 4] {
        self.bits().to_le_bytes()
    }
}
