//! Implementations of the `vault` subcommands.

pub mod chpass;
pub mod new;
pub mod open;
