// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use crate::analyzers::GoParser;
pub use crate::core::{CompilationUnit, Diagnostic, Position};
pub use crate::errors::{Error, Result};
pub use crate::report::Reporter;
pub use crate::rules::status_return::MISSING_RETURN_MESSAGE;
pub use crate::rules::{all_rules, analyze, Rule};

use std::path::PathBuf;

/// Parse Go source and run every rule over it.
///
/// Lowering the parse tree recurses once per nesting level of the source. A
/// default 2 MiB thread handles ordinary code; sources nested hundreds of
/// levels deep need a larger stack, such as a thread built with
/// [`cli::MAIN_STACK_SIZE`].
pub fn analyze_source(source: &str, path: impl Into<PathBuf>) -> Result<Vec<Diagnostic>> {
    let unit = GoParser::new()?.parse(source, path)?;
    Ok(analyze(&unit))
}
