//! The derived master key, wrapped so its bytes are wiped on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// AEAD key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte symmetric key that zeroizes its memory when dropped.
///
/// Lives from `set_password` until the engine drops.  The wrapper does
/// not stop the OS from paging the bytes out; it only guarantees the
/// in-process copy is cleared.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Raw key bytes, e.g. to build the AEAD cipher.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
