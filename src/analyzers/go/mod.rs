//! Go front-end.
//!
//! Parses Go source with tree-sitter and lowers it into a
//! [`CompilationUnit`]. Files with syntax errors still produce a unit:
//! unparsable fragments become opaque statements and the rest is kept.

mod lower;

use crate::core::CompilationUnit;
use crate::errors::{Error, Result};
use lower::Lowering;
use std::path::{Path, PathBuf};
use tree_sitter::Parser;

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::TreeSitter(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Lowering recurses once per nesting level; deeply nested sources need a
    /// thread with a large stack.
    pub fn parse(&mut self, source: &str, path: impl Into<PathBuf>) -> Result<CompilationUnit> {
        let path = path.into();
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(&path, "parser returned no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            log::warn!(
                "{}: syntax errors found, analyzing recognizable declarations only",
                path.display()
            );
        }

        let functions = Lowering::new(source).functions(root);
        log::debug!(
            "{}: lowered {} function declarations",
            path.display(),
            functions.len()
        );

        Ok(CompilationUnit { path, functions })
    }
}

/// Whether a path names a Go source file.
pub fn is_go_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Whether a path names a Go test file (`*_test.go`).
pub fn is_go_test(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}
