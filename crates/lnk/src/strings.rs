use std::io::Write;

use crate::error::{LnkError, Result};

/// Encoding used for every string section of one shortcut file.
///
/// Decided once per file; the shell reads all string sections with the
/// encoding named by the `IS_UNICODE` link flag, so mixing is not possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// One byte per character. Only valid for ASCII text.
    #[default]
    Ascii,
    /// UTF-16LE, two bytes per code unit.
    Utf16,
}

impl TextEncoding {
    /// Pick the encoding for a set of optional fields: UTF-16 as soon as any
    /// present field holds a non-ASCII character.
    pub fn for_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if fields.into_iter().flatten().any(|s| !s.is_ascii()) {
            TextEncoding::Utf16
        } else {
            TextEncoding::Ascii
        }
    }

    pub fn is_unicode(self) -> bool {
        matches!(self, TextEncoding::Utf16)
    }
}

/// Write a string section: a little-endian u16 character count followed by
/// the encoded characters. No terminator.
pub fn write_string_section<W: Write>(
    writer: &mut W,
    text: &str,
    encoding: TextEncoding,
) -> Result<()> {
    let encoded: Vec<u8>;
    let count = match encoding {
        TextEncoding::Ascii => {
            if !text.is_ascii() {
                return Err(LnkError::Encoding(text.to_owned()));
            }
            encoded = text.as_bytes().to_vec();
            encoded.len()
        }
        TextEncoding::Utf16 => {
            encoded = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
            encoded.len() / 2
        }
    };

    let count = u16::try_from(count).map_err(|_| {
        LnkError::InvalidArgument(format!(
            "string of {count} characters does not fit a string section"
        ))
    })?;

    writer.write_all(&count.to_le_bytes())?;
    writer.write_all(&encoded)?;
    Ok(())
}

#[cfg(test)]
#[path = "strings_tests.rs"]
mod tests;
