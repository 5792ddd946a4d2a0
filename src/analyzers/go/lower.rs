// Lowering from the tree-sitter-go concrete syntax tree into core::ast

use crate::core::ast::{
    Block, CallNode, CaseClause, ElseBranch, Expr, FuncLit, FunctionNode, IfStmt, LoopStmt, Param,
    Stmt, StmtKind, SwitchStmt, TypeRef,
};
use crate::core::Position;
use tree_sitter::Node;

pub(super) struct Lowering<'src> {
    source: &'src str,
}

impl<'src> Lowering<'src> {
    pub(super) fn new(source: &'src str) -> Self {
        Self { source }
    }

    pub(super) fn functions(&self, root: Node) -> Vec<FunctionNode> {
        named_children(root)
            .into_iter()
            .filter(|node| matches!(node.kind(), "function_declaration" | "method_declaration"))
            .map(|node| self.function(node))
            .collect()
    }

    fn function(&self, node: Node) -> FunctionNode {
        FunctionNode {
            name: node
                .child_by_field_name("name")
                .map(|name| self.text(name).to_string())
                .unwrap_or_default(),
            receiver: node
                .child_by_field_name("receiver")
                .and_then(|receiver| self.params(receiver).into_iter().next()),
            params: node
                .child_by_field_name("parameters")
                .map(|params| self.params(params))
                .unwrap_or_default(),
            results: node
                .child_by_field_name("result")
                .map(|result| self.results(result))
                .unwrap_or_default(),
            body: node.child_by_field_name("body").map(|body| self.block(body)),
            position: Position::from_node(node),
        }
    }

    fn params(&self, list: Node) -> Vec<Param> {
        let mut params = Vec::new();
        for decl in named_children(list) {
            if !matches!(
                decl.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            ) {
                continue;
            }
            let ty = decl
                .child_by_field_name("type")
                .map(|ty| self.type_ref(ty))
                .unwrap_or_else(|| TypeRef::Other(String::new()));

            let mut cursor = decl.walk();
            let names: Vec<String> = decl
                .children_by_field_name("name", &mut cursor)
                .map(|name| self.text(name).to_string())
                .collect();

            if names.is_empty() {
                params.push(Param { name: None, ty });
            } else {
                params.extend(names.into_iter().map(|name| Param {
                    name: Some(name),
                    ty: ty.clone(),
                }));
            }
        }
        params
    }

    fn results(&self, result: Node) -> Vec<TypeRef> {
        if result.kind() == "parameter_list" {
            self.params(result).into_iter().map(|param| param.ty).collect()
        } else {
            vec![self.type_ref(result)]
        }
    }

    fn type_ref(&self, node: Node) -> TypeRef {
        match node.kind() {
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(package), Some(name)) => {
                        TypeRef::qualified(self.text(package), self.text(name))
                    }
                    _ => TypeRef::Other(self.text(node).to_string()),
                }
            }
            "type_identifier" => TypeRef::Named(self.text(node).to_string()),
            _ => TypeRef::Other(self.text(node).to_string()),
        }
    }

    fn block(&self, node: Node) -> Block {
        let mut stmts = Vec::new();
        for child in named_children(node) {
            self.push_statement(child, &mut stmts);
        }
        Block::new(stmts)
    }

    /// Statements of a case arm: everything after the `case ...:` header.
    fn clause_statements(&self, clause: Node) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        let mut cursor = clause.walk();
        if !cursor.goto_first_child() {
            return stmts;
        }
        loop {
            let node = cursor.node();
            let in_header = matches!(
                cursor.field_name(),
                Some("value" | "type" | "communication")
            );
            if node.is_named() && !in_header {
                self.push_statement(node, &mut stmts);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        stmts
    }

    fn push_statement(&self, node: Node, out: &mut Vec<Stmt>) {
        match node.kind() {
            "statement_list" => {
                for child in named_children(node) {
                    self.push_statement(child, out);
                }
            }
            "comment" => {}
            kind if is_statement(kind) || node.is_error() => out.push(self.stmt(node)),
            _ => {}
        }
    }

    fn stmt(&self, node: Node) -> Stmt {
        let position = Position::from_node(node);
        let kind = match node.kind() {
            "expression_statement" => StmtKind::Expr(self.first_expr(node)),
            "return_statement" => StmtKind::Return(self.child_exprs(node)),
            "if_statement" => StmtKind::If(self.if_stmt(node)),
            "expression_switch_statement" => StmtKind::Switch(self.switch(node)),
            "type_switch_statement" => StmtKind::TypeSwitch(self.switch(node)),
            "select_statement" => StmtKind::Select(self.switch(node)),
            "for_statement" => {
                let looped = self.loop_stmt(node);
                let ranged = named_children(node)
                    .iter()
                    .any(|child| child.kind() == "range_clause");
                if ranged {
                    StmtKind::RangeFor(looped)
                } else {
                    StmtKind::For(looped)
                }
            }
            "block" => StmtKind::Block(self.block(node)),
            "labeled_statement" => match named_children(node)
                .into_iter()
                .find(|child| is_statement(child.kind()))
            {
                Some(inner) => StmtKind::Labeled(Box::new(self.stmt(inner))),
                // `L:` right before a closing brace
                None => StmtKind::Other(Vec::new()),
            },
            _ => StmtKind::Other(self.child_exprs(node)),
        };
        Stmt::new(kind, position)
    }

    fn if_stmt(&self, node: Node) -> IfStmt {
        let header = ["initializer", "condition"]
            .into_iter()
            .filter_map(|field| node.child_by_field_name(field))
            .map(|child| self.expr(child))
            .collect();
        let then_block = node
            .child_by_field_name("consequence")
            .map(|block| self.block(block))
            .unwrap_or_default();
        let else_branch = node
            .child_by_field_name("alternative")
            .map(|alternative| match alternative.kind() {
                "if_statement" => ElseBranch::If(Box::new(self.if_stmt(alternative))),
                _ => ElseBranch::Block(self.block(alternative)),
            });

        IfStmt {
            header,
            then_block,
            else_branch,
        }
    }

    fn switch(&self, node: Node) -> SwitchStmt {
        let mut header = Vec::new();
        let mut clauses = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "expression_case" | "type_case" | "communication_case" | "default_case" => {
                    clauses.push(self.clause(child))
                }
                "comment" => {}
                _ => header.push(self.expr(child)),
            }
        }
        SwitchStmt { header, clauses }
    }

    fn clause(&self, node: Node) -> CaseClause {
        let mut header = Vec::new();
        for field in ["value", "type", "communication"] {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.children_by_field_name(field, &mut cursor).collect();
            header.extend(children.into_iter().map(|child| self.expr(child)));
        }

        CaseClause {
            header,
            body: self.clause_statements(node),
            position: Position::from_node(node),
        }
    }

    fn loop_stmt(&self, node: Node) -> LoopStmt {
        let body = node.child_by_field_name("body");
        let header = named_children(node)
            .into_iter()
            .filter(|child| Some(*child) != body && child.kind() != "comment")
            .map(|child| self.expr(child))
            .collect();

        LoopStmt {
            header,
            body: body.map(|body| self.block(body)).unwrap_or_default(),
        }
    }

    fn expr(&self, node: Node) -> Expr {
        match node.kind() {
            "identifier" | "field_identifier" | "package_identifier" | "type_identifier" => {
                Expr::Ident(self.text(node).to_string())
            }
            "selector_expression" => match (
                node.child_by_field_name("operand"),
                node.child_by_field_name("field"),
            ) {
                (Some(operand), Some(field)) => Expr::selector(self.expr(operand), self.text(field)),
                _ => Expr::Other(self.child_exprs(node)),
            },
            "qualified_type" => match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    Expr::selector(Expr::ident(self.text(package)), self.text(name))
                }
                _ => Expr::Other(self.child_exprs(node)),
            },
            "call_expression" => match node.child_by_field_name("function") {
                Some(function) => {
                    let args = node
                        .child_by_field_name("arguments")
                        .map(|args| self.child_exprs(args))
                        .unwrap_or_default();
                    Expr::Call(CallNode::new(
                        self.expr(function),
                        args,
                        Position::from_node(node),
                    ))
                }
                None => Expr::Other(self.child_exprs(node)),
            },
            // `pkg.Type(x)` may come out as a conversion rather than a call
            "type_conversion_expression" => match (
                node.child_by_field_name("type"),
                node.child_by_field_name("operand"),
            ) {
                (Some(ty), Some(operand)) => Expr::Call(CallNode::new(
                    self.expr(ty),
                    vec![self.expr(operand)],
                    Position::from_node(node),
                )),
                _ => Expr::Other(self.child_exprs(node)),
            },
            "func_literal" => Expr::FuncLit(self.func_lit(node)),
            _ => Expr::Other(self.child_exprs(node)),
        }
    }

    fn func_lit(&self, node: Node) -> FuncLit {
        FuncLit {
            params: node
                .child_by_field_name("parameters")
                .map(|params| self.params(params))
                .unwrap_or_default(),
            results: node
                .child_by_field_name("result")
                .map(|result| self.results(result))
                .unwrap_or_default(),
            body: node
                .child_by_field_name("body")
                .map(|body| self.block(body))
                .unwrap_or_default(),
            position: Position::from_node(node),
        }
    }

    fn first_expr(&self, node: Node) -> Expr {
        named_children(node)
            .into_iter()
            .find(|child| child.kind() != "comment")
            .map(|child| self.expr(child))
            .unwrap_or(Expr::Other(Vec::new()))
    }

    fn child_exprs(&self, node: Node) -> Vec<Expr> {
        named_children(node)
            .into_iter()
            .filter(|child| child.kind() != "comment")
            .map(|child| self.expr(child))
            .collect()
    }

    fn text(&self, node: Node) -> &'src str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.named_children(&mut cursor).collect();
    children
}

fn is_statement(kind: &str) -> bool {
    matches!(
        kind,
        "expression_statement"
            | "return_statement"
            | "if_statement"
            | "for_statement"
            | "expression_switch_statement"
            | "type_switch_statement"
            | "select_statement"
            | "block"
            | "labeled_statement"
            | "short_var_declaration"
            | "assignment_statement"
            | "inc_statement"
            | "dec_statement"
            | "send_statement"
            | "go_statement"
            | "defer_statement"
            | "var_declaration"
            | "const_declaration"
            | "type_declaration"
            | "break_statement"
            | "continue_statement"
            | "goto_statement"
            | "fallthrough_statement"
            | "empty_statement"
    )
}
