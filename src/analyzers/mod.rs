//! Source front-ends that turn files into [`CompilationUnit`]s.

pub mod go;

pub use go::{is_go_source, is_go_test, GoParser};

use crate::core::CompilationUnit;
use crate::errors::{Error, Result};
use std::path::Path;

/// Read and parse one Go file from disk.
pub fn parse_file(path: &Path) -> Result<CompilationUnit> {
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    GoParser::new()?.parse(&source, path)
}
