//! Master-key derivation from the user's passphrase.
//!
//! PBKDF2-HMAC-SHA256 with a fixed salt and a single iteration.  Every
//! vault file ever written used exactly these parameters, and the
//! envelope carries no version byte to negotiate anything else, so the
//! salt, hash, and iteration count are load-bearing compatibility
//! constants.  One iteration does not stretch weak passphrases: the
//! passphrase itself must carry the entropy.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::crypto::keys::{MasterKey, KEY_LEN};

/// Exact salt bytes (25 ASCII characters, no terminator).
const KDF_SALT: &[u8] = b"PassKeeper key generation";

const KDF_ITERATIONS: u32 = 1;

/// Derive the 32-byte AEAD key from a passphrase.
///
/// Deterministic across runs and platforms; same passphrase, same key.
pub fn derive_key(password: &str) -> MasterKey {
    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), KDF_SALT, KDF_ITERATIONS, &mut bytes);

    let key = MasterKey::new(bytes);
    bytes.zeroize();
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_the_exact_25_byte_string() {
        assert_eq!(KDF_SALT.len(), 25);
        assert_eq!(KDF_SALT, b"PassKeeper key generation");
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_key("hunter2");
        let b = derive_key("hunter2");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn different_passphrases_differ() {
        let a = derive_key("abc");
        let b = derive_key("abd");
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn empty_passphrase_is_still_a_key() {
        let key = derive_key("");
        assert_ne!(key.as_bytes(), &[0u8; KEY_LEN]);
    }
}
