//! Interactive record editor.
//!
//! A terminal stand-in for a table UI: show the records, act on them
//! through a menu, save through the engine.  All mutations stay in
//! memory until the user picks Save, and quitting with unsaved changes
//! asks first.

use std::path::Path;

use dialoguer::{Confirm, Input, Select};

use crate::cli::output;
use crate::codec::{Record, Role};
use crate::config::Settings;
use crate::entropy;
use crate::errors::{PassKeeperError, Result};
use crate::generators;
use crate::vault::VaultEngine;

pub fn run(engine: &mut VaultEngine) -> Result<()> {
    let settings = Settings::load(Path::new("."))?;
    let mut dirty = false;

    loop {
        println!();
        output::print_records_table(engine.records_view());

        let actions = [
            "Add record",
            "Edit record",
            "Delete record",
            "Reveal password",
            "Search",
            "Save",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        match choice {
            0 => {
                add_record(engine, &settings)?;
                dirty = true;
            }
            1 => dirty |= edit_record(engine)?,
            2 => dirty |= delete_record(engine)?,
            3 => reveal_password(engine)?,
            4 => search(engine)?,
            5 => match engine.write() {
                Ok(()) => {
                    dirty = false;
                    output::success("Password DB saved");
                }
                Err(_) => {
                    output::error(engine.last_error().unwrap_or("Save failed"));
                }
            },
            _ => {
                if !dirty {
                    return Ok(());
                }
                let quit = Confirm::new()
                    .with_prompt("Quit without saving changes?")
                    .default(false)
                    .interact()
                    .map_err(prompt_err)?;
                if quit {
                    return Ok(());
                }
            }
        }
    }
}

fn add_record(engine: &mut VaultEngine, settings: &Settings) -> Result<()> {
    let service = ask("Service")?;
    let login = ask("Login")?;

    let mut password = ask("Password (leave empty to generate)")?;
    if password.is_empty() {
        let generate = Confirm::new()
            .with_prompt("Generate a password?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;
        if generate {
            let mut pool = entropy::global().lock().map_err(|_| PassKeeperError::EntropyPool)?;
            password = generators::make_password(&mut pool, settings.password_length)?;
            output::info(&format!("Generated password: {password}"));
        }
    }

    let comment = ask("Comment")?;

    engine
        .records()
        .insert(Record::from_texts(&service, &login, &password, &comment));
    Ok(())
}

fn edit_record(engine: &mut VaultEngine) -> Result<bool> {
    let Some(index) = pick_index(engine, "Record number to edit")? else {
        return Ok(false);
    };

    // Safe: pick_index bounds-checked the index.
    let current = engine.records().get(index).cloned().unwrap_or_default();

    let service = ask_with_initial("Service", &current.text(Role::Service))?;
    let login = ask_with_initial("Login", &current.text(Role::Login))?;
    let password = ask_with_initial("Password", &current.text(Role::Password))?;
    let comment = ask_with_initial("Comment", &current.text(Role::Comment))?;

    engine.records().replace(
        index,
        Record::from_texts(&service, &login, &password, &comment),
    );
    Ok(true)
}

fn delete_record(engine: &mut VaultEngine) -> Result<bool> {
    let Some(index) = pick_index(engine, "Record number to delete")? else {
        return Ok(false);
    };

    engine.records().remove(index);
    Ok(true)
}

fn reveal_password(engine: &mut VaultEngine) -> Result<()> {
    let Some(index) = pick_index(engine, "Record number")? else {
        return Ok(());
    };

    if let Some(record) = engine.records().get(index) {
        println!("{}", record.text(Role::Password));
    }
    Ok(())
}

/// Case-insensitive substring search across all cells.
fn search(engine: &mut VaultEngine) -> Result<()> {
    let query = ask("Search for")?;
    if query.is_empty() {
        return Ok(());
    }
    let needle = query.to_lowercase();

    let mut hits = 0;
    for (i, record) in engine.records_view().iter().enumerate() {
        let matched = Role::ALL
            .iter()
            .any(|role| record.text(*role).to_lowercase().contains(&needle));
        if matched {
            println!(
                "{:>4}  {}  {}  {}",
                i + 1,
                record.text(Role::Service),
                record.text(Role::Login),
                record.text(Role::Comment)
            );
            hits += 1;
        }
    }

    if hits == 0 {
        output::info("No matching records.");
    }
    Ok(())
}

/// Ask for a 1-based record number; `None` when the set is empty.
fn pick_index(engine: &VaultEngine, prompt: &str) -> Result<Option<usize>> {
    let len = engine.records_view().len();
    if len == 0 {
        output::info("No records in this storage yet.");
        return Ok(None);
    }

    let number: usize = Input::new()
        .with_prompt(format!("{prompt} (1-{len})"))
        .validate_with(move |n: &usize| {
            if (1..=len).contains(n) {
                Ok(())
            } else {
                Err(format!("enter a number between 1 and {len}"))
            }
        })
        .interact_text()
        .map_err(prompt_err)?;

    Ok(Some(number - 1))
}

fn ask(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)
}

fn ask_with_initial(prompt: &str, initial: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)
}

fn prompt_err(e: dialoguer::Error) -> PassKeeperError {
    PassKeeperError::Prompt(e.to_string())
}
