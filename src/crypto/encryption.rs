//! AES-256-GCM authenticated encryption of the vault envelope.
//!
//! Each `encrypt` call draws a fresh random 12-byte IV from the system
//! CSPRNG (independent of the generator pool) and produces the on-disk
//! envelope layout:
//!
//! ```text
//! [ ciphertext (same length as the payload) | IV (12 bytes) | tag (16 bytes) ]
//! ```
//!
//! `decrypt` accepts the same layout.  Every decrypt failure (short
//! envelope, bad key, flipped ciphertext, tag mismatch) collapses to
//! the single opaque [`PassKeeperError::Decrypt`] so callers cannot be
//! used as a padding/tag oracle.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::crypto::keys::KEY_LEN;
use crate::errors::{PassKeeperError, Result};

/// GCM IV size in bytes.
pub const IV_LEN: usize = 12;

/// GCM authentication tag size in bytes.
pub const TAG_LEN: usize = 16;

/// Bytes appended after the ciphertext: IV plus tag.
pub const APPENDIX_LEN: usize = IV_LEN + TAG_LEN;

/// Encrypt `payload`, returning `ciphertext || iv || tag`.
pub fn encrypt(key: &[u8; KEY_LEN], payload: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassKeeperError::Encrypt)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // The aead API appends the tag to the ciphertext; the envelope
    // wants the IV between them.
    let mut sealed = cipher
        .encrypt(&nonce, payload)
        .map_err(|_| PassKeeperError::Encrypt)?;
    let tag = sealed.split_off(sealed.len() - TAG_LEN);

    let mut envelope = sealed;
    envelope.reserve_exact(APPENDIX_LEN);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&tag);
    Ok(envelope)
}

/// Decrypt an envelope produced by [`encrypt`].
pub fn decrypt(key: &[u8; KEY_LEN], envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() <= APPENDIX_LEN {
        return Err(PassKeeperError::Decrypt);
    }

    let (ciphertext, appendix) = envelope.split_at(envelope.len() - APPENDIX_LEN);
    let (iv, tag) = appendix.split_at(IV_LEN);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassKeeperError::Decrypt)?;
    let nonce = Nonce::from_slice(iv);

    let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);

    cipher
        .decrypt(nonce, sealed.as_slice())
        .map_err(|_| PassKeeperError::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_payload_plus_28_bytes() {
        let key = [0x42u8; KEY_LEN];
        let envelope = encrypt(&key, b"payload").unwrap();
        assert_eq!(envelope.len(), 7 + APPENDIX_LEN);
    }

    #[test]
    fn too_short_envelopes_are_rejected() {
        let key = [0u8; KEY_LEN];
        assert!(decrypt(&key, &[]).is_err());
        assert!(decrypt(&key, &[0u8; APPENDIX_LEN]).is_err());
    }
}
