//! Cryptographic primitives for PassKeeper.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of the vault envelope
//!   (`encryption`)
//! - PBKDF2-HMAC-SHA256 master-key derivation (`kdf`)
//! - the zeroize-on-drop `MasterKey` wrapper (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

pub use encryption::{decrypt, encrypt, APPENDIX_LEN, IV_LEN, TAG_LEN};
pub use kdf::derive_key;
pub use keys::MasterKey;
