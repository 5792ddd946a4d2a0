//! The adjacency check.
//!
//! Every statement list reachable through nested control constructs is
//! scanned on its own. A `WriteHeader` call statement is fine only when the
//! very next statement of the same list is a `return`. The check is purely
//! syntactic: it never asks whether either statement can execute, and a
//! labeled `return` is not a `return`.
//!
//! Nested lists are kept on an explicit work-list, so nesting depth costs heap
//! rather than stack.

use super::{MISSING_RETURN_MESSAGE, STATUS_METHOD};
use crate::core::{Block, Diagnostic, ElseBranch, Stmt, StmtKind};
use crate::report::Reporter;

/// All violations in `block` and the blocks nested inside it, in source order.
pub fn check(block: &Block) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    check_block(block, &mut diagnostics);
    diagnostics.sort_by_key(|d| d.position);
    diagnostics
}

/// Reports every violation in `block` and its nested lists. Report order
/// follows the work-list, not the source.
pub fn check_block(block: &Block, reporter: &mut dyn Reporter) {
    let mut pending = vec![block.stmts.as_slice()];
    while let Some(stmts) = pending.pop() {
        for (index, stmt) in stmts.iter().enumerate() {
            if is_status_call(stmt) && !is_followed_by_return(stmts, index) {
                reporter.report(Diagnostic::new(stmt.position, MISSING_RETURN_MESSAGE));
            }
            push_nested(stmt, &mut pending);
        }
    }
}

fn push_nested<'a>(mut stmt: &'a Stmt, pending: &mut Vec<&'a [Stmt]>) {
    while let StmtKind::Labeled(inner) = &stmt.kind {
        stmt = &**inner;
    }
    match &stmt.kind {
        StmtKind::If(if_stmt) => {
            let mut next = Some(if_stmt);
            while let Some(if_stmt) = next.take() {
                pending.push(if_stmt.then_block.stmts.as_slice());
                match &if_stmt.else_branch {
                    Some(ElseBranch::Block(block)) => pending.push(block.stmts.as_slice()),
                    Some(ElseBranch::If(else_if)) => next = Some(&**else_if),
                    None => {}
                }
            }
        }
        StmtKind::Switch(switch) | StmtKind::TypeSwitch(switch) | StmtKind::Select(switch) => {
            pending.extend(switch.clauses.iter().map(|clause| clause.body.as_slice()));
        }
        StmtKind::For(looped) | StmtKind::RangeFor(looped) => pending.push(looped.body.stmts.as_slice()),
        StmtKind::Block(block) => pending.push(block.stmts.as_slice()),
        StmtKind::Expr(_) | StmtKind::Return(_) | StmtKind::Labeled(_) | StmtKind::Other(_) => {}
    }
}

/// `x.WriteHeader(...)` as a statement, for any receiver and arguments.
pub fn is_status_call(stmt: &Stmt) -> bool {
    stmt.as_call()
        .and_then(|call| call.selector_name())
        .is_some_and(|name| name == STATUS_METHOD)
}

/// Whether `stmts[index + 1]` exists and is a `return`.
pub fn is_followed_by_return(stmts: &[Stmt], index: usize) -> bool {
    stmts.get(index + 1).is_some_and(Stmt::is_return)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallNode, CaseClause, Expr, IfStmt, LoopStmt, Position, SwitchStmt};
    use pretty_assertions::assert_eq;

    fn at(line: usize) -> Position {
        Position::new(line, 3, line * 10)
    }

    fn method_call(line: usize, receiver: &str, method: &str) -> Stmt {
        let call = CallNode::new(
            Expr::selector(Expr::ident(receiver), method),
            vec![Expr::Other(vec![])],
            at(line),
        );
        Stmt::new(StmtKind::Expr(Expr::Call(call)), at(line))
    }

    fn set_status(line: usize) -> Stmt {
        method_call(line, "w", "WriteHeader")
    }

    fn write_body(line: usize) -> Stmt {
        method_call(line, "w", "Write")
    }

    fn ret(line: usize) -> Stmt {
        Stmt::new(StmtKind::Return(vec![]), at(line))
    }

    fn if_then(line: usize, then: Vec<Stmt>) -> Stmt {
        Stmt::new(
            StmtKind::If(IfStmt {
                header: vec![],
                then_block: Block::new(then),
                else_branch: None,
            }),
            at(line),
        )
    }

    fn clause(line: usize, body: Vec<Stmt>) -> CaseClause {
        CaseClause {
            header: vec![],
            body,
            position: at(line),
        }
    }

    fn lines(diagnostics: &[Diagnostic]) -> Vec<usize> {
        diagnostics.iter().map(|d| d.position.line).collect()
    }

    #[test]
    fn test_status_then_write_is_flagged() {
        let diagnostics = check(&Block::new(vec![set_status(1), write_body(2)]));

        assert_eq!(lines(&diagnostics), vec![1]);
        assert_eq!(diagnostics[0].position, at(1));
        assert_eq!(diagnostics[0].message, MISSING_RETURN_MESSAGE);
    }

    #[test]
    fn test_status_then_return_is_clean() {
        assert!(check(&Block::new(vec![set_status(1), ret(2)])).is_empty());
    }

    #[test]
    fn test_status_as_last_statement_is_flagged() {
        assert_eq!(lines(&check(&Block::new(vec![set_status(1)]))), vec![1]);
    }

    #[test]
    fn test_empty_block() {
        assert!(check(&Block::default()).is_empty());
    }

    #[test]
    fn test_no_look_ahead_past_one_statement() {
        let block = Block::new(vec![set_status(1), write_body(2), ret(3)]);
        assert_eq!(lines(&check(&block)), vec![1]);
    }

    #[test]
    fn test_nested_if_two_levels_deep() {
        let block = Block::new(vec![
            if_then(1, vec![if_then(2, vec![set_status(3), write_body(4)])]),
            method_call(6, "handler", "ServeHTTP"),
        ]);
        assert_eq!(lines(&check(&block)), vec![3]);
    }

    #[test]
    fn test_return_in_enclosing_block_does_not_count() {
        let block = Block::new(vec![if_then(1, vec![set_status(2)]), ret(4)]);
        assert_eq!(lines(&check(&block)), vec![2]);
    }

    #[test]
    fn test_else_and_else_if_branches_are_checked() {
        let chain = IfStmt {
            header: vec![],
            then_block: Block::new(vec![set_status(2), ret(3)]),
            else_branch: Some(ElseBranch::If(Box::new(IfStmt {
                header: vec![],
                then_block: Block::new(vec![set_status(5)]),
                else_branch: Some(ElseBranch::Block(Block::new(vec![
                    set_status(7),
                    write_body(8),
                ]))),
            }))),
        };
        let block = Block::new(vec![Stmt::new(StmtKind::If(chain), at(1))]);
        assert_eq!(lines(&check(&block)), vec![5, 7]);
    }

    #[test]
    fn test_switch_arms_are_independent() {
        let switch = SwitchStmt {
            header: vec![Expr::ident("method")],
            clauses: vec![
                clause(2, vec![set_status(3), write_body(4)]),
                clause(5, vec![set_status(6), ret(7)]),
            ],
        };
        let block = Block::new(vec![Stmt::new(StmtKind::Switch(switch), at(1))]);
        assert_eq!(lines(&check(&block)), vec![3]);
    }

    #[test]
    fn test_type_switch_and_select_arms() {
        let arms = || SwitchStmt {
            header: vec![],
            clauses: vec![clause(2, vec![set_status(3)])],
        };
        let block = Block::new(vec![
            Stmt::new(StmtKind::TypeSwitch(arms()), at(1)),
            Stmt::new(StmtKind::Select(arms()), at(1)),
        ]);
        assert_eq!(check(&block).len(), 2);
    }

    #[test]
    fn test_loop_bodies_and_plain_blocks() {
        let looped = |body| LoopStmt {
            header: vec![],
            body: Block::new(body),
        };
        let block = Block::new(vec![
            Stmt::new(StmtKind::For(looped(vec![set_status(2), ret(3)])), at(1)),
            Stmt::new(StmtKind::RangeFor(looped(vec![set_status(5)])), at(4)),
            Stmt::new(
                StmtKind::Block(Block::new(vec![set_status(7), write_body(8)])),
                at(6),
            ),
        ]);
        assert_eq!(lines(&check(&block)), vec![5, 7]);
    }

    #[test]
    fn test_unreachable_status_followed_by_return_is_not_flagged() {
        let block = Block::new(vec![set_status(1), ret(2), set_status(3), ret(4)]);
        assert!(check(&block).is_empty());
    }

    #[test]
    fn test_each_candidate_needs_its_own_return() {
        let block = Block::new(vec![set_status(1), set_status(2), ret(3)]);
        assert_eq!(lines(&check(&block)), vec![1]);
    }

    #[test]
    fn test_receiver_shape_does_not_matter() {
        assert!(is_status_call(&method_call(1, "resp", "WriteHeader")));
        assert!(!is_status_call(&method_call(1, "w", "Header")));

        let bare = Stmt::new(
            StmtKind::Expr(Expr::Call(CallNode::new(
                Expr::ident("WriteHeader"),
                vec![],
                at(1),
            ))),
            at(1),
        );
        assert!(!is_status_call(&bare));
    }

    fn labeled(line: usize, stmt: Stmt) -> Stmt {
        Stmt::new(StmtKind::Labeled(Box::new(stmt)), at(line))
    }

    #[test]
    fn test_labeled_return_does_not_count() {
        let block = Block::new(vec![set_status(1), labeled(2, ret(3))]);
        assert_eq!(lines(&check(&block)), vec![1]);
    }

    #[test]
    fn test_labeled_status_call_is_not_a_candidate() {
        let block = Block::new(vec![labeled(1, set_status(1)), write_body(2)]);
        assert!(check(&block).is_empty());
    }

    #[test]
    fn test_labeled_constructs_are_still_searched() {
        let looped = LoopStmt {
            header: vec![],
            body: Block::new(vec![set_status(3), write_body(4)]),
        };
        let block = Block::new(vec![labeled(
            1,
            labeled(1, Stmt::new(StmtKind::For(looped), at(2))),
        )]);
        assert_eq!(lines(&check(&block)), vec![3]);
    }

    #[test]
    fn test_deep_nesting_is_checked_without_recursion() {
        let mut innermost = Block::new(vec![set_status(1_001)]);
        for line in (1..=1_000).rev() {
            innermost = Block::new(vec![if_then(line, innermost.stmts)]);
        }
        assert_eq!(lines(&check(&innermost)), vec![1_001]);
    }

    #[test]
    fn test_is_followed_by_return() {
        let stmts = vec![set_status(1), ret(2), write_body(3)];
        assert!(is_followed_by_return(&stmts, 0));
        assert!(!is_followed_by_return(&stmts, 1));
        assert!(!is_followed_by_return(&stmts, 2));
    }
}
