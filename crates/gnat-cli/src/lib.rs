//! GNAT CLI crate
//!
//! Library surface of the `gnat` binary: exposes the command modules so
//! the subcommands can be driven programmatically in tests or downstream
//! automation without spawning a process.

pub mod commands;
pub mod error;

pub use commands::GnatCli;
