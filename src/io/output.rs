use crate::core::Diagnostic;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `path:line:column: message`, one per line
    Text,
    /// Machine-readable JSON array
    Json,
}

/// Diagnostics for one analyzed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

pub trait OutputWriter {
    fn write_results(&mut self, reports: &[FileReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let with_findings: Vec<&FileReport> = reports
            .iter()
            .filter(|report| !report.diagnostics.is_empty())
            .collect();
        let json = serde_json::to_string_pretty(&with_findings)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let mut total = 0;
        for report in reports {
            for diagnostic in &report.diagnostics {
                writeln!(
                    self.writer,
                    "{}:{}: {}",
                    report.path.display().to_string().bold(),
                    diagnostic.position,
                    diagnostic.message.yellow()
                )?;
                total += 1;
            }
        }

        let files = reports.len();
        let summary = format!(
            "{} {} in {} {} checked",
            total,
            if total == 1 { "issue" } else { "issues" },
            files,
            if files == 1 { "file" } else { "files" }
        );
        if total == 0 {
            writeln!(self.writer, "{}", summary.green())?;
        } else {
            writeln!(self.writer, "{}", summary.red())?;
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
    }
}
