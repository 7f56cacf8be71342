//! `vault new`: create a new password storage.

use std::path::Path;

use crate::cli::{editor, output, prompt_new_password, prompt_vault_path};
use crate::errors::Result;
use crate::vault::VaultEngine;

/// Execute the `new` command.
///
/// The empty storage is saved as soon as the password is set, so the
/// file exists even if the editor is quit without saving.  An existing
/// file at the path is overwritten.
pub fn execute(file: &Path) -> Result<()> {
    let mut engine = VaultEngine::new(file);

    let password = prompt_new_password()?;
    engine.set_password(&password);
    engine.write()?;
    output::success(&format!("Created password storage {}", file.display()));

    if console::user_attended() {
        editor::run(&mut engine)
    } else {
        Ok(())
    }
}

/// The no-argument flow: ask where to create the storage, then `new`.
pub fn execute_with_prompted_path() -> Result<()> {
    let path = prompt_vault_path()?;
    execute(&path)
}
