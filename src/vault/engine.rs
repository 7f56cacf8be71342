//! The vault engine: owns the key and the record set, and runs the
//! open/save pipelines.
//!
//! Open: file bytes → decrypt → decode → record set.
//! Save: record set → encode → encrypt → atomic file replace.
//!
//! Entry points return `Result` and additionally record the failure
//! message, which the editor shows verbatim.  A failed `read` leaves
//! the in-memory record set untouched so the user can retry or keep
//! working with what they have.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::codec::{decode_sequence, encode_sequence, RecordSet};
use crate::crypto::{self, MasterKey};
use crate::errors::{PassKeeperError, Result};
use crate::vault::file;

pub struct VaultEngine {
    path: PathBuf,
    key: Option<MasterKey>,
    records: RecordSet,
    last_error: Option<String>,
}

impl VaultEngine {
    /// Bind an engine to a vault path.  No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: None,
            records: RecordSet::new(),
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derive and install the master key.  Idempotent; any previous
    /// key is replaced (and zeroized on drop).
    pub fn set_password(&mut self, password: &str) {
        self.key = Some(crypto::derive_key(password));
    }

    /// Read, decrypt, and decode the vault file, replacing the
    /// in-memory record set on success.
    pub fn read(&mut self) -> Result<()> {
        let outcome = self.read_inner();
        self.note(&outcome);
        outcome
    }

    fn read_inner(&mut self) -> Result<()> {
        let key = self.key.as_ref().ok_or(PassKeeperError::KeyNotSet)?;

        let envelope = file::read(&self.path)?;
        let payload = Zeroizing::new(crypto::decrypt(key.as_bytes(), &envelope)?);
        let rows = decode_sequence(&payload)?;

        self.records.clear();
        for row in rows {
            self.records.insert(row);
        }
        Ok(())
    }

    /// Encode, encrypt, and atomically write the record set.
    pub fn write(&mut self) -> Result<()> {
        let outcome = self.write_inner();
        self.note(&outcome);
        outcome
    }

    fn write_inner(&mut self) -> Result<()> {
        let key = self.key.as_ref().ok_or(PassKeeperError::KeyNotSet)?;

        let payload = Zeroizing::new(encode_sequence(self.records.iter())?);
        let envelope = crypto::encrypt(key.as_bytes(), &payload)?;
        file::write(&self.path, &envelope)
    }

    /// Mutable access to the in-memory record set.
    pub fn records(&mut self) -> &mut RecordSet {
        &mut self.records
    }

    /// Read-only view of the record set.
    pub fn records_view(&self) -> &RecordSet {
        &self.records
    }

    /// The last failure message, for display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn note(&mut self, outcome: &Result<()>) {
        if let Err(e) = outcome {
            self.last_error = Some(e.to_string());
        }
    }
}
