use std::process;

use clap::{CommandFactory, Parser};
use passkeeper::cli::{commands, output, Cli, Commands};

fn main() {
    // Help aliases clap cannot express ("-?", "/?", "\?").
    let raw: Vec<String> = std::env::args().collect();
    if raw.len() == 2 && matches!(raw[1].as_str(), "-?" | "/?" | "\\?") {
        let _ = Cli::command().print_help();
        process::exit(0);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let result = match cli.command {
        Some(Commands::Open { file }) => commands::open::execute(&file),
        Some(Commands::New { file }) => commands::new::execute(&file),
        Some(Commands::Chpass { file }) => commands::chpass::execute(&file),
        None => match cli.file {
            // Simplified usage: open the file if it exists, create it
            // otherwise.
            Some(file) if file.exists() => commands::open::execute(&file),
            Some(file) => commands::new::execute(&file),
            None => commands::new::execute_with_prompted_path(),
        },
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        process::exit(1);
    }
}
