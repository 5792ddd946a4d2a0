use super::{ADAPTER_NAME, HANDLER_PACKAGE};
use crate::core::visit::{walk_call, Visitor};
use crate::core::{Block, CallNode, Expr, FunctionNode};

/// Bodies of every `http.HandlerFunc(func(...) { ... })` inside `function`,
/// in source order. Adapter calls nested inside other adapters are included.
pub fn find_closure_bodies(function: &FunctionNode) -> Vec<&Block> {
    let mut locator = ClosureLocator::default();
    if let Some(body) = &function.body {
        locator.visit_block(body);
    }
    locator.bodies
}

#[derive(Default)]
struct ClosureLocator<'ast> {
    bodies: Vec<&'ast Block>,
}

impl<'ast> Visitor<'ast> for ClosureLocator<'ast> {
    fn visit_call(&mut self, call: &'ast CallNode) {
        if is_adapter_call(call) {
            if let Some(Expr::FuncLit(literal)) = call.args.first() {
                self.bodies.push(&literal.body);
            }
        }
        walk_call(self, call);
    }
}

fn is_adapter_call(call: &CallNode) -> bool {
    call.qualified_callee() == Some((HANDLER_PACKAGE, ADAPTER_NAME))
}
