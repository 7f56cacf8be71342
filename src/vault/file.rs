//! Durable vault file I/O.
//!
//! A save never touches the destination until the new content is fully
//! on disk: the bytes go to a sibling file named `"{path}_{i}"` (the
//! smallest free index), the old destination is unlinked, and the
//! sibling is renamed into place.  A reader therefore observes either
//! the old file or the new file, never a partial one.  If the unlink
//! or rename fails, the error names the sibling file so the user can
//! recover it by hand.
//!
//! The indexed naming means two concurrent saves pick different
//! siblings; the later rename wins.  There is no lockfile.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::{PassKeeperError, Result};

/// Read the entire vault file.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|_| PassKeeperError::FileOpen(path.to_path_buf()))
}

/// Replace the file at `path` with `bytes`, atomically.
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    let (temp_path, mut temp) = create_sibling(path)?;

    if let Err(e) = temp.write_all(bytes).and_then(|()| temp.sync_all()) {
        drop(temp);
        let _ = fs::remove_file(&temp_path);
        return Err(PassKeeperError::Write(e.to_string()));
    }
    drop(temp);

    // Keep the sibling if either step below fails; it holds the only
    // durable copy of the new content.
    if path.exists() && fs::remove_file(path).is_err() {
        return Err(PassKeeperError::RemoveOld { temp: temp_path });
    }

    if fs::rename(&temp_path, path).is_err() {
        return Err(PassKeeperError::Rename { temp: temp_path });
    }

    Ok(())
}

/// Create `"{path}_{i}"` for the smallest `i` not already taken.
///
/// `create_new` makes the existence check and the creation one step,
/// so two concurrent savers cannot claim the same sibling.
fn create_sibling(path: &Path) -> Result<(PathBuf, File)> {
    let mut index: u32 = 0;
    loop {
        let mut name = OsString::from(path.as_os_str());
        name.push(format!("_{index}"));
        let candidate = PathBuf::from(name);

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => index += 1,
            Err(_) => return Err(PassKeeperError::TempFileCreate(path.to_path_buf())),
        }
    }
}
