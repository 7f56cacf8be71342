//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so every
//! command styles its messages the same way.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::codec::{RecordSet, Role};

/// Print a green success message.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning to stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message.
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the record table.  Passwords are masked; use the editor's
/// reveal action to see one.
pub fn print_records_table(records: &RecordSet) {
    if records.is_empty() {
        info("No records in this storage yet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Service", "Login", "Password", "Comment"]);

    for (i, record) in records.iter().enumerate() {
        let password = if record.get(Role::Password).is_empty() {
            String::new()
        } else {
            "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}".to_string()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            record.text(Role::Service).into_owned(),
            record.text(Role::Login).into_owned(),
            password,
            record.text(Role::Comment).into_owned(),
        ]);
    }

    println!("{table}");
}
