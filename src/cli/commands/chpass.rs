//! `vault chpass`: re-encrypt a storage under a new master password.

use std::path::Path;

use crate::cli::{output, prompt_new_password, prompt_password};
use crate::errors::Result;
use crate::vault::VaultEngine;

/// Execute the `chpass` command.  No editor is launched.
pub fn execute(file: &Path) -> Result<()> {
    let mut engine = VaultEngine::new(file);

    let password = prompt_password("Enter master password")?;
    engine.set_password(&password);
    engine.read()?;

    let new_password = prompt_new_password()?;
    engine.set_password(&new_password);
    engine.write()?;

    output::success("Password DB updated successfully");
    Ok(())
}
