use anyhow::{Context, Result};
use returnlint::cli::{self, Cli};
use returnlint::config::{load_config, load_config_from};
use std::path::Path;
use std::process::ExitCode;

const EXIT_CLEAN: u8 = 0;
const EXIT_FINDINGS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    // Deeply nested handlers recurse deeply; give the work a roomy stack.
    let worker = std::thread::Builder::new()
        .name("returnlint".into())
        .stack_size(cli::MAIN_STACK_SIZE)
        .spawn(move || run(cli));

    let outcome = match worker {
        Ok(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(anyhow::anyhow!("analysis thread panicked"))),
        Err(e) => Err(e).context("Failed to start analysis thread"),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let file_config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(cli.paths.first().map(|p| p.as_path()).unwrap_or(Path::new("."))),
    };

    cli::configure_thread_pool(cli.jobs(&file_config));

    let outcome = returnlint::commands::handle_check(cli.check_config(&file_config))?;

    Ok(exit_code(outcome.failures, outcome.diagnostic_count()))
}

/// Skipped files mean the report is incomplete, which outranks findings.
fn exit_code(failures: usize, diagnostics: usize) -> u8 {
    if failures > 0 {
        log::warn!("{} files could not be analyzed", failures);
        EXIT_FAILURE
    } else if diagnostics > 0 {
        EXIT_FINDINGS
    } else {
        EXIT_CLEAN
    }
}
