pub mod ast;
pub mod visit;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use ast::{
    Block, CallNode, CaseClause, CompilationUnit, ElseBranch, Expr, FuncLit, FunctionNode, IfStmt,
    LoopStmt, Param, Stmt, StmtKind, SwitchStmt, TypeRef,
};

/// Source location of a node, as reported by the front-end.
///
/// `line` and `column` are 1-based; `column` counts bytes like the Go toolchain does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1, // tree-sitter uses 0-based rows
            column: start.column + 1,
            offset: node.start_byte(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single rule violation. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}
