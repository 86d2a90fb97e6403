use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate an instruction without applying it
    Check {
        /// Instruction text (read from stdin when omitted)
        instruction: Option<String>,
    },

    /// Validate an instruction and print one JSON Patch document per work item
    Patch {
        /// Instruction text (read from stdin when omitted)
        instruction: Option<String>,
    },
}

impl Commands {
    pub fn instruction(&self) -> Option<&str> {
        match self {
            Commands::Check { instruction } | Commands::Patch { instruction } => {
                instruction.as_deref()
            }
        }
    }
}
