//! Minimal DER tag-length-value framing.
//!
//! Only the subset the vault format needs is implemented: single-octet
//! identifiers (tag numbers up to 30), universal and context-specific
//! classes, the constructed bit, and definite short/long length forms.
//! Anything outside that subset is a parse error; keeping the reader
//! this small avoids the parse-gadget surface of a full ASN.1 decoder.

use crate::errors::{PassKeeperError, Result};

/// Universal tag number for SEQUENCE (the outer record-list frame).
pub const TAG_SEQUENCE: u32 = 16;

/// Universal tag number for SET (one record frame).
pub const TAG_SET: u32 = 17;

/// Identifier-octet class bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl Class {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0b00 => Class::Universal,
            0b01 => Class::Application,
            0b10 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }

    fn bits(self) -> u8 {
        match self {
            Class::Universal => 0b00,
            Class::Application => 0b01,
            Class::ContextSpecific => 0b10,
            Class::Private => 0b11,
        }
    }
}

/// A parsed identifier + length header.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub class: Class,
    pub constructed: bool,
    pub tag: u32,
    pub length: usize,
}

/// Parse one header at the front of `cursor` and advance past it.
///
/// The declared content length is validated against the bytes left in
/// the cursor, so a successful parse guarantees the body is in bounds.
/// On error the cursor position is unspecified; callers decide how far
/// to skip.
pub fn read_header(cursor: &mut &[u8]) -> Result<Header> {
    let (&id, rest) = cursor
        .split_first()
        .ok_or(PassKeeperError::StructureCorrupted)?;
    *cursor = rest;

    let tag = u32::from(id & 0x1F);
    if tag == 0x1F {
        // High-tag-number form is outside the supported subset.
        return Err(PassKeeperError::StructureCorrupted);
    }

    let (&first, rest) = cursor
        .split_first()
        .ok_or(PassKeeperError::StructureCorrupted)?;
    *cursor = rest;

    let length = if first < 0x80 {
        usize::from(first)
    } else {
        let count = usize::from(first & 0x7F);
        // 0x80 alone is the indefinite form, which DER forbids.
        if count == 0 || count > std::mem::size_of::<usize>() || count > cursor.len() {
            return Err(PassKeeperError::StructureCorrupted);
        }
        let (len_bytes, rest) = cursor.split_at(count);
        *cursor = rest;
        let mut length = 0usize;
        for &b in len_bytes {
            length = (length << 8) | usize::from(b);
        }
        length
    };

    if length > cursor.len() {
        return Err(PassKeeperError::StructureCorrupted);
    }

    Ok(Header {
        class: Class::from_bits(id >> 6),
        constructed: id & 0x20 != 0,
        tag,
        length,
    })
}

/// Append one header for `content_len` bytes of content.
pub fn put_header(dst: &mut Vec<u8>, class: Class, constructed: bool, tag: u32, content_len: usize) {
    debug_assert!(tag < 0x1F, "high tag numbers are not supported");

    let mut id = (class.bits() << 6) | (tag as u8);
    if constructed {
        id |= 0x20;
    }
    dst.push(id);

    if content_len < 0x80 {
        dst.push(content_len as u8);
    } else {
        let bytes = content_len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        dst.push(0x80 | (bytes.len() - skip) as u8);
        dst.extend_from_slice(&bytes[skip..]);
    }
}

/// Total frame size (header plus content) for `content_len` bytes.
pub fn object_size(content_len: usize) -> usize {
    let length_octets = if content_len < 0x80 {
        1
    } else {
        let bytes = content_len.to_be_bytes();
        1 + bytes.len() - bytes.iter().take_while(|&&b| b == 0).count()
    };
    1 + length_octets + content_len
}
