use crate::commands::Commands;
use crate::type_overrides::{TypeOverride, parse_type_override};

use clap::Parser;

#[derive(Parser)]
#[command(name = "da")]
#[command(about = "Check free-form work item update instructions and emit JSON Patch documents")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Known work item type, e.g. --type 51311=task (repeatable)
    #[arg(long = "type", value_name = "ID=TYPE", global = true, value_parser = parse_type_override)]
    pub types: Vec<TypeOverride>,

    /// Print the validation outcome as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
