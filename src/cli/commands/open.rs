//! `vault open`: open an existing password storage.

use std::path::Path;

use crate::cli::{editor, output, prompt_password};
use crate::errors::Result;
use crate::vault::VaultEngine;

/// Execute the `open` command.
pub fn execute(file: &Path) -> Result<()> {
    let mut engine = VaultEngine::new(file);

    let password = prompt_password("Enter master password")?;
    engine.set_password(&password);
    engine.read()?;

    if console::user_attended() {
        editor::run(&mut engine)
    } else {
        // Non-interactive open verifies the password and reports.
        output::info(&format!(
            "Storage contains {} record(s)",
            engine.records_view().len()
        ));
        Ok(())
    }
}
