//! Language-neutral view of one parsed compilation unit.
//!
//! The front-end lowers its concrete syntax tree into these types once; the
//! rules only ever read them. Statement order inside a [`Block`] is execution
//! order and is kept exactly as parsed. Comments and blank lines never appear.

use super::Position;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct CompilationUnit {
    pub path: PathBuf,
    pub functions: Vec<FunctionNode>,
}

/// A top-level function or method declaration.
#[derive(Clone, Debug)]
pub struct FunctionNode {
    pub name: String,
    pub receiver: Option<Param>,
    pub params: Vec<Param>,
    /// One entry per declared result; `(a, b T)` contributes two.
    pub results: Vec<TypeRef>,
    pub body: Option<Block>,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: TypeRef,
}

/// A type as written in source. Compared by name only, never resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    /// `package.Name`
    Qualified { package: String, name: String },
    /// `Name`
    Named(String),
    /// Pointers, slices, maps, function types and the rest, kept as source text.
    Other(String),
}

impl TypeRef {
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn is_qualified(&self, package: &str, name: &str) -> bool {
        matches!(self, TypeRef::Qualified { package: p, name: n } if p == package && n == name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[derive(Clone, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn is_return(&self) -> bool {
        matches!(self.kind, StmtKind::Return(_))
    }

    /// The call made by an expression statement, if that is what this is.
    pub fn as_call(&self) -> Option<&CallNode> {
        match &self.kind {
            StmtKind::Expr(Expr::Call(call)) => Some(call),
            _ => None,
        }
    }
}

/// Closed set of statement shapes the rules care about.
#[derive(Clone, Debug)]
pub enum StmtKind {
    Expr(Expr),
    Return(Vec<Expr>),
    If(IfStmt),
    Switch(SwitchStmt),
    TypeSwitch(SwitchStmt),
    Select(SwitchStmt),
    For(LoopStmt),
    RangeFor(LoopStmt),
    Block(Block),
    /// `label: stmt`. Neither a return nor a call statement itself.
    Labeled(Box<Stmt>),
    /// Any other statement, with the expressions it contains.
    Other(Vec<Expr>),
}

#[derive(Clone, Debug)]
pub struct IfStmt {
    /// Initializer and condition.
    pub header: Vec<Expr>,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Clone, Debug)]
pub enum ElseBranch {
    Block(Block),
    If(Box<IfStmt>),
}

/// Expression switch, type switch or select.
#[derive(Clone, Debug)]
pub struct SwitchStmt {
    pub header: Vec<Expr>,
    pub clauses: Vec<CaseClause>,
}

/// One `case`/`default` arm. Its body is a statement list of its own.
#[derive(Clone, Debug)]
pub struct CaseClause {
    pub header: Vec<Expr>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct LoopStmt {
    pub header: Vec<Expr>,
    pub body: Block,
}

#[derive(Clone, Debug)]
pub enum Expr {
    Ident(String),
    Selector { operand: Box<Expr>, field: String },
    Call(CallNode),
    FuncLit(FuncLit),
    /// Any other expression, with its sub-expressions.
    Other(Vec<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn selector(operand: Expr, field: impl Into<String>) -> Self {
        Expr::Selector {
            operand: Box::new(operand),
            field: field.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CallNode {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub position: Position,
}

impl CallNode {
    pub fn new(callee: Expr, args: Vec<Expr>, position: Position) -> Self {
        Self {
            callee: Box::new(callee),
            args,
            position,
        }
    }

    /// Method or field name for `x.Name(...)` calls, whatever `x` is.
    pub fn selector_name(&self) -> Option<&str> {
        match self.callee.as_ref() {
            Expr::Selector { field, .. } => Some(field),
            _ => None,
        }
    }

    /// `(package, name)` for `package.Name(...)` calls.
    pub fn qualified_callee(&self) -> Option<(&str, &str)> {
        match self.callee.as_ref() {
            Expr::Selector { operand, field } => match operand.as_ref() {
                Expr::Ident(package) => Some((package, field)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// An anonymous function value.
#[derive(Clone, Debug)]
pub struct FuncLit {
    pub params: Vec<Param>,
    pub results: Vec<TypeRef>,
    pub body: Block,
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(callee: Expr) -> CallNode {
        CallNode::new(callee, vec![], Position::default())
    }

    #[test]
    fn test_type_ref_is_qualified() {
        let handler = TypeRef::qualified("http", "Handler");
        assert!(handler.is_qualified("http", "Handler"));
        assert!(!handler.is_qualified("http", "HandlerFunc"));
        assert!(!TypeRef::Named("Handler".into()).is_qualified("http", "Handler"));
    }

    #[test]
    fn test_selector_name_ignores_receiver_shape() {
        let nested = call(Expr::selector(
            Expr::selector(Expr::ident("s"), "w"),
            "WriteHeader",
        ));
        assert_eq!(nested.selector_name(), Some("WriteHeader"));
        assert_eq!(nested.qualified_callee(), None);
    }

    #[test]
    fn test_qualified_callee() {
        let adapter = call(Expr::selector(Expr::ident("http"), "HandlerFunc"));
        assert_eq!(adapter.qualified_callee(), Some(("http", "HandlerFunc")));
        assert_eq!(call(Expr::ident("HandlerFunc")).qualified_callee(), None);
        assert_eq!(call(Expr::ident("HandlerFunc")).selector_name(), None);
    }

    #[test]
    fn test_stmt_as_call() {
        let stmt = Stmt::new(
            StmtKind::Expr(Expr::Call(call(Expr::ident("f")))),
            Position::default(),
        );
        assert!(stmt.as_call().is_some());
        assert!(!stmt.is_return());

        let ret = Stmt::new(StmtKind::Return(vec![]), Position::default());
        assert!(ret.as_call().is_none());
        assert!(ret.is_return());
    }
}
