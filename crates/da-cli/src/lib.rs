//! da-cli library
//!
//! Everything the `da` binary does besides argument handling: instruction
//! input, the work item type table, user-facing text and patch emission.

pub mod cli;
pub mod commands;
pub mod error;
pub mod formatter;
pub mod input;
pub mod logger;
pub mod patch_emitter;
pub mod type_overrides;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use patch_emitter::{PatchDocument, PatchEmitter};
pub use type_overrides::{TypeOverride, build_lookup, parse_type_override};
