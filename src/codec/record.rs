//! The record codec and the in-memory record multiset.
//!
//! On the wire a vault payload is one outer SEQUENCE frame holding a
//! concatenation of record frames; a record is a SET frame holding
//! context-specific cell frames tagged by role.  Cell tags outside the
//! known roles are reserved and skipped on read.
//!
//! Decoding is deliberately lenient: a damaged record header skips the
//! rest of the payload, a damaged cell stops that record, and repeated
//! role tags append into the same cell.  Those behaviors are part of
//! the format's compatibility surface and are pinned by tests.

use crate::codec::der::{self, Class, TAG_SEQUENCE, TAG_SET};
use crate::errors::{PassKeeperError, Result};

/// Cell roles in canonical (persisted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Service,
    Login,
    Password,
    Comment,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 4] = [Role::Service, Role::Login, Role::Password, Role::Comment];

    /// The context-specific wire tag for this role.
    pub fn tag(self) -> u32 {
        match self {
            Role::Service => 0,
            Role::Login => 1,
            Role::Password => 2,
            Role::Comment => 16,
        }
    }

    fn from_tag(tag: u32) -> Option<Role> {
        match tag {
            0 => Some(Role::Service),
            1 => Some(Role::Login),
            2 => Some(Role::Password),
            16 => Some(Role::Comment),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One vault row: four byte-string cells identified by role.
///
/// Cells hold arbitrary bytes; in practice they are UTF-8 text. The
/// derived ordering compares cells lexicographically in role order,
/// which is exactly the multiset key the vault persists by.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Record {
    cells: [Vec<u8>; 4],
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from UTF-8 cell texts in role order.
    pub fn from_texts(service: &str, login: &str, password: &str, comment: &str) -> Self {
        let mut record = Self::new();
        record.set(Role::Service, service.as_bytes());
        record.set(Role::Login, login.as_bytes());
        record.set(Role::Password, password.as_bytes());
        record.set(Role::Comment, comment.as_bytes());
        record
    }

    pub fn get(&self, role: Role) -> &[u8] {
        &self.cells[role.index()]
    }

    pub fn set(&mut self, role: Role, bytes: &[u8]) {
        self.cells[role.index()] = bytes.to_vec();
    }

    /// Cell text for display; invalid UTF-8 is shown lossily.
    pub fn text(&self, role: Role) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.get(role))
    }

    /// True when every cell is empty.  Empty records are not persisted.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Encoded frame size in bytes; 0 when the record is empty.
    pub fn encoded_len(&self) -> usize {
        let inner = self.inner_len();
        if inner == 0 {
            0
        } else {
            der::object_size(inner)
        }
    }

    fn inner_len(&self) -> usize {
        Role::ALL
            .iter()
            .map(|role| {
                let cell = self.get(*role);
                if cell.is_empty() {
                    0
                } else {
                    der::object_size(cell.len())
                }
            })
            .sum()
    }

    /// Append this record's frame to `dst`; returns bytes written.
    ///
    /// Non-empty cells are emitted in canonical role order.  An empty
    /// record writes nothing and returns 0.
    pub fn encode_into(&self, dst: &mut Vec<u8>) -> usize {
        let inner = self.inner_len();
        if inner == 0 {
            return 0;
        }

        let start = dst.len();
        der::put_header(dst, Class::Universal, true, TAG_SET, inner);

        for role in Role::ALL {
            let cell = self.get(role);
            if cell.is_empty() {
                continue;
            }
            der::put_header(dst, Class::ContextSpecific, false, role.tag(), cell.len());
            dst.extend_from_slice(cell);
        }

        dst.len() - start
    }

    /// Parse one record frame at the cursor, advancing past it.
    ///
    /// A bad record header consumes the rest of the buffer (nothing
    /// after it can be trusted).  Within the record, a cell that is
    /// not a primitive context-specific frame ends the record; known
    /// role tags append into their cell, reserved tags are skipped.
    pub(crate) fn decode(cursor: &mut &[u8]) -> Record {
        let mut record = Record::new();

        let mut inner = match der::read_header(cursor) {
            Ok(header)
                if header.constructed
                    && header.class == Class::Universal
                    && header.tag == TAG_SET =>
            {
                let (inner, rest) = cursor.split_at(header.length);
                *cursor = rest;
                inner
            }
            _ => {
                *cursor = &[];
                return record;
            }
        };

        while !inner.is_empty() {
            let header = match der::read_header(&mut inner) {
                Ok(header) if !header.constructed && header.class == Class::ContextSpecific => {
                    header
                }
                _ => return record,
            };

            let (body, rest) = inner.split_at(header.length);
            inner = rest;

            if let Some(role) = Role::from_tag(header.tag) {
                record.cells[role.index()].extend_from_slice(body);
            }
        }

        record
    }
}

/// Encode a full record set as one outer SEQUENCE frame.
///
/// Empty records contribute nothing.  The emitted byte count is
/// cross-checked against the precomputed size.
pub fn encode_sequence<'a>(records: impl Iterator<Item = &'a Record> + Clone) -> Result<Vec<u8>> {
    let inner: usize = records.clone().map(Record::encoded_len).sum();
    let total = der::object_size(inner);

    let mut out = Vec::with_capacity(total);
    der::put_header(&mut out, Class::Universal, true, TAG_SEQUENCE, inner);
    for record in records {
        record.encode_into(&mut out);
    }

    if out.len() != total {
        return Err(PassKeeperError::Serialize);
    }
    Ok(out)
}

/// Decode an outer SEQUENCE frame into records.
///
/// The frame must span `bytes` exactly; trailing or missing bytes are
/// structural corruption.  Individual records are decoded leniently.
pub fn decode_sequence(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut cursor = bytes;
    let header = der::read_header(&mut cursor).map_err(|_| PassKeeperError::StructureCorrupted)?;

    if !header.constructed
        || header.class != Class::Universal
        || header.tag != TAG_SEQUENCE
        || header.length != cursor.len()
    {
        return Err(PassKeeperError::StructureCorrupted);
    }

    let mut records = Vec::new();
    while !cursor.is_empty() {
        records.push(Record::decode(&mut cursor));
    }
    Ok(records)
}

/// A multiset of records ordered by the 4-cell lexicographic key.
///
/// Duplicates are permitted and kept adjacent; iteration (and hence
/// the save path) always walks records in key order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    rows: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert preserving order; an equal-keyed record lands after its
    /// duplicates.
    pub fn insert(&mut self, record: Record) {
        let pos = self.rows.partition_point(|row| *row <= record);
        self.rows.insert(pos, record);
    }

    pub fn remove(&mut self, index: usize) -> Record {
        self.rows.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Replace the record at `index`, re-sorting it into place.
    pub fn replace(&mut self, index: usize, record: Record) {
        self.rows.remove(index);
        self.insert(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
