//! CLI module: Clap argument parsers, prompt helpers, output helpers,
//! and command implementations.

pub mod commands;
pub mod editor;
pub mod output;
pub mod rand;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PassKeeperError, Result};

/// PassKeeper vault CLI.
///
/// `vault <file>` alone opens the file if it exists and creates it
/// otherwise; the subcommands make the intent explicit.
#[derive(Parser)]
#[command(
    name = "vault",
    about = "Damn simple password keeper",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Vault file to open (created if it does not exist)
    pub file: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Open an existing password storage
    Open {
        /// Vault file path
        file: PathBuf,
    },

    /// Create a new password storage (an existing file will be overwritten)
    New {
        /// Vault file path
        file: PathBuf,
    },

    /// Change the master password of an existing storage
    Chpass {
        /// Vault file path
        file: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Ask for the master password of an existing vault.
///
/// `PASSKEEPER_PASSWORD` bypasses the prompt for scripted use.
/// Returns `Zeroizing<String>` so the password is wiped on drop.
pub fn prompt_password(prompt_text: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEPER_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt_text)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassKeeperError::Prompt(e.to_string()))?;
    Ok(Zeroizing::new(pw))
}

/// Ask for a new master password, twice, until both entries match.
///
/// Scripted use: `PASSKEEPER_NEW_PASSWORD` wins, then
/// `PASSKEEPER_PASSWORD`.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    for var in ["PASSKEEPER_NEW_PASSWORD", "PASSKEEPER_PASSWORD"] {
        if let Ok(pw) = std::env::var(var) {
            if !pw.is_empty() {
                return Ok(Zeroizing::new(pw));
            }
        }
    }

    let mut prompt_text = "Enter new master password";
    loop {
        let first = dialoguer::Password::new()
            .with_prompt(prompt_text)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PassKeeperError::Prompt(e.to_string()))?;
        let second = dialoguer::Password::new()
            .with_prompt("Enter password again to confirm")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PassKeeperError::Prompt(e.to_string()))?;

        if first == second {
            return Ok(Zeroizing::new(first));
        }

        prompt_text = "Passwords mismatch. Please try again or choose another one";
    }
}

/// Ask for the path of the vault to create (the no-argument flow).
pub fn prompt_vault_path() -> Result<PathBuf> {
    let path: String = dialoguer::Input::new()
        .with_prompt("Path for the new password storage")
        .interact_text()
        .map_err(|e| PassKeeperError::Prompt(e.to_string()))?;

    let path = path.trim();
    if path.is_empty() {
        return Err(PassKeeperError::Cancelled);
    }
    Ok(PathBuf::from(path))
}
