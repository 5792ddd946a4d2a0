//! Read-only traversal over [`ast`](super::ast) nodes.
//!
//! Default methods recurse into every child. Override the node you care about
//! and call the matching `walk_*` function to keep descending, or skip it to
//! prune that subtree.

use super::ast::{Block, CallNode, ElseBranch, Expr, FuncLit, IfStmt, Stmt, StmtKind};

pub trait Visitor<'ast>: Sized {
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_call(&mut self, call: &'ast CallNode) {
        walk_call(self, call);
    }

    fn visit_func_lit(&mut self, func_lit: &'ast FuncLit) {
        walk_func_lit(self, func_lit);
    }
}

pub fn walk_block<'ast, V: Visitor<'ast>>(visitor: &mut V, block: &'ast Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast>>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Expr(expr) => visitor.visit_expr(expr),
        StmtKind::Return(exprs) | StmtKind::Other(exprs) => walk_exprs(visitor, exprs),
        StmtKind::If(if_stmt) => walk_if(visitor, if_stmt),
        StmtKind::Switch(switch) | StmtKind::TypeSwitch(switch) | StmtKind::Select(switch) => {
            walk_exprs(visitor, &switch.header);
            for clause in &switch.clauses {
                walk_exprs(visitor, &clause.header);
                for stmt in &clause.body {
                    visitor.visit_stmt(stmt);
                }
            }
        }
        StmtKind::For(looped) | StmtKind::RangeFor(looped) => {
            walk_exprs(visitor, &looped.header);
            visitor.visit_block(&looped.body);
        }
        StmtKind::Block(block) => visitor.visit_block(block),
        StmtKind::Labeled(inner) => visitor.visit_stmt(inner),
    }
}

fn walk_if<'ast, V: Visitor<'ast>>(visitor: &mut V, if_stmt: &'ast IfStmt) {
    walk_exprs(visitor, &if_stmt.header);
    visitor.visit_block(&if_stmt.then_block);
    match &if_stmt.else_branch {
        Some(ElseBranch::Block(block)) => visitor.visit_block(block),
        Some(ElseBranch::If(nested)) => walk_if(visitor, nested),
        None => {}
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast>>(visitor: &mut V, expr: &'ast Expr) {
    match expr {
        Expr::Ident(_) => {}
        Expr::Selector { operand, .. } => visitor.visit_expr(operand),
        Expr::Call(call) => visitor.visit_call(call),
        Expr::FuncLit(func_lit) => visitor.visit_func_lit(func_lit),
        Expr::Other(children) => walk_exprs(visitor, children),
    }
}

pub fn walk_call<'ast, V: Visitor<'ast>>(visitor: &mut V, call: &'ast CallNode) {
    visitor.visit_expr(&call.callee);
    walk_exprs(visitor, &call.args);
}

pub fn walk_func_lit<'ast, V: Visitor<'ast>>(visitor: &mut V, func_lit: &'ast FuncLit) {
    visitor.visit_block(&func_lit.body);
}

fn walk_exprs<'ast, V: Visitor<'ast>>(visitor: &mut V, exprs: &'ast [Expr]) {
    for expr in exprs {
        visitor.visit_expr(expr);
    }
}
