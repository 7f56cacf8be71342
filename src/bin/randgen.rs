use std::process;

use clap::Parser;
use passkeeper::cli::{output, rand::RandCli};

fn main() {
    let cli = match RandCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = passkeeper::cli::rand::execute(&cli) {
        output::error(&e.to_string());
        process::exit(1);
    }
}
