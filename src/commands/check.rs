use crate::analyzers::parse_file;
use crate::io::{create_writer, FileReport, FileWalker, OutputFormat};
use crate::rules;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub include_tests: bool,
}

#[derive(Debug, Default)]
pub struct CheckOutcome {
    /// One report per file analyzed, sorted by path
    pub reports: Vec<FileReport>,
    /// Files that could not be read or parsed
    pub failures: usize,
}

impl CheckOutcome {
    pub fn diagnostic_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }
}

pub fn handle_check(config: CheckConfig) -> Result<CheckOutcome> {
    let files = FileWalker::new(config.paths.clone())
        .with_exclude_patterns(&config.exclude)?
        .with_tests(config.include_tests)
        .walk()
        .context("Failed to collect Go files")?;

    let outcome = check_files(&files);

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, sink).write_results(&outcome.reports)?;

    Ok(outcome)
}

/// Analyze files in parallel. Each file gets its own diagnostics list; the
/// lists are merged once every file is done.
pub fn check_files(files: &[PathBuf]) -> CheckOutcome {
    let results: Vec<Option<FileReport>> = files
        .par_iter()
        .map(|path| match check_file(path) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Skipping {}: {:#}", path.display(), e);
                None
            }
        })
        .collect();

    let failures = results.iter().filter(|r| r.is_none()).count();
    let mut reports: Vec<FileReport> = results.into_iter().flatten().collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    log::info!(
        "Checked {} files, {} failed",
        reports.len() + failures,
        failures
    );
    CheckOutcome { reports, failures }
}

pub fn check_file(path: &Path) -> Result<FileReport> {
    let unit = parse_file(path)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        diagnostics: rules::analyze(&unit),
    })
}
