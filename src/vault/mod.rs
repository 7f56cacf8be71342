//! Vault module: the encrypted record store.
//!
//! This module provides:
//! - durable, atomic vault file replacement (`file`)
//! - the `VaultEngine` orchestrating keys, records, and I/O (`engine`)

pub mod engine;
pub mod file;

pub use engine::VaultEngine;
