//! `randgen`: the command-line randomness dump.
//!
//! `randgen <count> <kind> [length]` prints one generated entity per
//! line.  The kind is matched by lowercase substring, so `pins`,
//! `PIN-codes`, and `pin` all work.  Length is a single number or a
//! `min-max` range; when it is a range, every non-name line draws its
//! own length uniformly from the range.

use clap::Parser;

use crate::config::Settings;
use crate::entropy;
use crate::errors::{PassKeeperError, Result};
use crate::generators;

/// Random name, PIN, password, and key generator.
#[derive(Parser)]
#[command(
    name = "randgen",
    about = "Dump random nicknames, PINs, passwords, or hex bytes",
    version,
    after_help = "KINDS:\n  \
        name  random pronounceable words of [length] syllables (default 2-5)\n  \
        pin   PIN codes of [length] digits (default 4)\n  \
        pass  passwords of [length] chars from a 64-symbol alphabet (default 12)\n  \
        byte  hex presentation of [length] random bytes (default 16)\n\n\
        Length can be a single decimal or a range, e.g. \"5-10\"."
)]
pub struct RandCli {
    /// How many entities to print
    pub count: u32,

    /// What to generate: name, pin, pass, or byte (substring match)
    pub kind: String,

    /// Length, a single number or a "min-max" range
    pub length: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Name,
    Pin,
    Password,
    Bytes,
}

fn identify_kind(kind: &str) -> Option<Kind> {
    let kind = kind.to_ascii_lowercase();
    if kind.contains("name") {
        Some(Kind::Name)
    } else if kind.contains("pin") {
        Some(Kind::Pin)
    } else if kind.contains("pass") {
        Some(Kind::Password)
    } else if kind.contains("byte") {
        Some(Kind::Bytes)
    } else {
        None
    }
}

/// Parse `"N"` or `"min-max"`.
fn parse_length(spec: &str) -> Option<(u32, u32)> {
    match spec.split_once('-') {
        Some((min, max)) => {
            let min = min.trim().parse().ok()?;
            let max = max.trim().parse().ok()?;
            if min > max {
                return None;
            }
            Some((min, max))
        }
        None => {
            let n = spec.trim().parse().ok()?;
            Some((n, n))
        }
    }
}

/// Execute the `randgen` command.
pub fn execute(cli: &RandCli) -> Result<()> {
    let kind = identify_kind(&cli.kind).ok_or_else(|| {
        PassKeeperError::Usage(format!(
            "unknown entity kind '{}' — expected name, pin, pass, or byte",
            cli.kind
        ))
    })?;

    let settings = Settings::load(std::path::Path::new("."))?;
    let (min, max) = match &cli.length {
        Some(spec) => parse_length(spec)
            .ok_or_else(|| PassKeeperError::Usage(format!("bad length '{spec}'")))?,
        None => match kind {
            Kind::Name => (settings.name_syllables_min, settings.name_syllables_max),
            Kind::Pin => (settings.pin_length as u32, settings.pin_length as u32),
            Kind::Password => (
                settings.password_length as u32,
                settings.password_length as u32,
            ),
            Kind::Bytes => (settings.hex_bytes as u32, settings.hex_bytes as u32),
        },
    };

    let mut pool = entropy::global()
        .lock()
        .map_err(|_| PassKeeperError::EntropyPool)?;

    for _ in 0..cli.count {
        if kind == Kind::Name {
            println!("{}", generators::make_name(&mut pool, min, max));
            continue;
        }

        // Non-name kinds draw each line's length from the range.
        let mut length = min;
        if min < max {
            length += generators::make_number(&mut pool, max - min + 1)?;
        }
        let length = length as usize;

        let line = match kind {
            Kind::Pin => generators::make_pin(&mut pool, length)?,
            Kind::Bytes => generators::make_hex_block(&mut pool, length)?,
            _ => generators::make_password(&mut pool, length)?,
        };
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_by_substring() {
        assert_eq!(identify_kind("nicknames"), Some(Kind::Name));
        assert_eq!(identify_kind("PINs"), Some(Kind::Pin));
        assert_eq!(identify_kind("passwords"), Some(Kind::Password));
        assert_eq!(identify_kind("bytes"), Some(Kind::Bytes));
        assert_eq!(identify_kind("frob"), None);
    }

    #[test]
    fn length_parses_single_and_range() {
        assert_eq!(parse_length("7"), Some((7, 7)));
        assert_eq!(parse_length("5-10"), Some((5, 10)));
        assert_eq!(parse_length(" 3 - 4 "), Some((3, 4)));
        assert_eq!(parse_length("10-5"), None);
        assert_eq!(parse_length("x"), None);
        assert_eq!(parse_length("5-"), None);
    }
}
