use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassKeeper.
///
/// The message strings are the exact texts shown to the user, so wording
/// changes here are user-visible.
#[derive(Debug, Error)]
pub enum PassKeeperError {
    // --- Entropy errors ---
    #[error("System random generator failure")]
    EntropyPool,

    // --- Crypto errors ---
    #[error("Wrong password or file corruption")]
    Decrypt,

    #[error("Error encrypting the data")]
    Encrypt,

    #[error("Master password is not set")]
    KeyNotSet,

    // --- Codec errors ---
    #[error("Password DB structure is corrupted")]
    StructureCorrupted,

    #[error("Error serializing the data")]
    Serialize,

    // --- Vault file errors ---
    #[error("Cannot open DB file: {}", .0.display())]
    FileOpen(PathBuf),

    #[error("Cannot create indexed file next to {}", .0.display())]
    TempFileCreate(PathBuf),

    #[error("Error writing to the file: {0}")]
    Write(String),

    #[error("Cannot remove previous version of DB file.\nNew one is saved under name \"{}\"\nPlease resolve it manually or try again.", .temp.display())]
    RemoveOld { temp: PathBuf },

    #[error("Cannot rename new DB file.\nIt is saved under name \"{}\"\nPlease resolve it manually or try again.", .temp.display())]
    Rename { temp: PathBuf },

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- CLI errors ---
    #[error("Bad command line: {0}")]
    Usage(String),

    #[error("Password prompt failed: {0}")]
    Prompt(String),

    #[error("User cancelled operation")]
    Cancelled,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PassKeeper results.
pub type Result<T> = std::result::Result<T, PassKeeperError>;
