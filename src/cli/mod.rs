//! Command-line interface for returnlint
//!
//! - Argument parsing (`Cli`)
//! - Runtime setup (`setup`)

pub mod setup;

use crate::config::ReturnlintConfig;
use crate::commands::CheckConfig;
use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

pub use setup::{configure_thread_pool, init_logging, MAIN_STACK_SIZE};

#[derive(Parser, Debug)]
#[command(name = "returnlint")]
#[command(
    about = "Checks that w.WriteHeader() calls are followed by return statements in http.Handler middleware",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Go files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format (defaults to the config file value, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to .returnlint.toml in the first path or its ancestors)
    #[arg(short, long, env = "RETURNLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra glob patterns to skip, added to the configured ones
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Skip _test.go files
    #[arg(long = "no-tests")]
    pub no_tests: bool,

    /// Number of worker threads (0 = one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Merge flags over file configuration. Flags win.
    pub fn check_config(&self, file: &ReturnlintConfig) -> CheckConfig {
        let mut exclude = file.exclude.clone();
        exclude.extend(self.exclude.iter().cloned());

        CheckConfig {
            paths: self.paths.clone(),
            format: self.format.or(file.format).unwrap_or(OutputFormat::Text),
            output: self.output.clone(),
            exclude,
            include_tests: file.include_tests && !self.no_tests,
        }
    }

    pub fn jobs(&self, file: &ReturnlintConfig) -> usize {
        self.jobs.unwrap_or(file.jobs)
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
