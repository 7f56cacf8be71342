//! Record serialization: a restricted DER subset and the record codec
//! built on top of it.
//!
//! This module provides:
//! - minimal DER header reading/writing (`der`)
//! - `Record`, `RecordSet`, and the record/sequence codec (`record`)

pub mod der;
pub mod record;

pub use record::{decode_sequence, encode_sequence, Record, RecordSet, Role};
