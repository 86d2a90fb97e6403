//! da - work item update assistant
//!
//! Checks free-form update instructions and turns them into JSON Patch
//! documents for the work item tracker.
//!
//! # Examples
//!
//! ```bash
//! # Validate a single update
//! da check "Update TASK-12345 Remaining -> 8 and Completed -> 4"
//!
//! # Validate a batch from stdin
//! printf 'Update following individual tasks:\nTASK 51311 -> Status -> Active\n' | da check
//!
//! # Emit patch documents; the known type of 67890 governs its allowed states
//! da patch --type 67890=story --pretty "Update TASK-67890 Status -> Resolved"
//! ```

use da_cli::{
    Cli, CliErrorResult, Commands, PatchEmitter, build_lookup,
    formatter::{render_execution, render_notice, render_outcome, to_json},
    input::read_instruction,
    logger,
};
use da_config::Config;
use da_core::{UpdateValidator, execute_plan};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let lookup = build_lookup(&config.work_items, &cli.types)?;
    let instruction = read_instruction(cli.command.instruction())?;

    let validator = UpdateValidator::new(config.validation.clone());
    let outcome = validator.interpret(&instruction, &lookup);

    if !outcome.is_accepted() || matches!(cli.command, Commands::Check { .. }) {
        let output = if cli.json {
            to_json(&outcome, cli.pretty)?
        } else {
            render_outcome(&outcome)
        };
        println!("{}", output);

        return Ok(if outcome.is_accepted() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let emitter = PatchEmitter::default();
    let results = execute_plan(&emitter, &outcome.updates).await;
    let all_applied = results.iter().all(|result| result.is_applied());

    for (work_item_id, notice) in outcome.notices() {
        eprintln!("{}", render_notice(work_item_id, notice));
    }
    eprintln!("{}", render_execution(&outcome.updates, &results));

    let documents = emitter.into_documents();
    info!("Emitting {} patch document(s)", documents.len());
    println!("{}", to_json(&documents, cli.pretty)?);

    Ok(if all_applied {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
