//! `status-return`: in HTTP middleware, `w.WriteHeader(...)` must be
//! immediately followed by `return`.
//!
//! Applies to functions returning `http.Handler` and, inside them, to the body
//! of every `http.HandlerFunc(func(w, r) { ... })` adapter call. Names are
//! matched syntactically; no type information is needed.

pub mod adjacency;
pub mod locator;
pub mod signature;

use super::Rule;
use crate::core::CompilationUnit;
use crate::report::Reporter;

pub const RULE_NAME: &str = "status-return";

pub const MISSING_RETURN_MESSAGE: &str =
    "status-setting call not immediately followed by a return statement";

pub(crate) const HANDLER_PACKAGE: &str = "http";
pub(crate) const HANDLER_TYPE: &str = "Handler";
pub(crate) const ADAPTER_NAME: &str = "HandlerFunc";
pub(crate) const STATUS_METHOD: &str = "WriteHeader";

#[derive(Debug, Default, Clone, Copy)]
pub struct StatusReturnRule;

impl Rule for StatusReturnRule {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn doc(&self) -> &'static str {
        "checks that w.WriteHeader() calls are followed by return statements in http.Handler middleware"
    }

    fn check(&self, unit: &CompilationUnit, reporter: &mut dyn Reporter) {
        for function in unit.functions.iter().filter(|f| signature::matches(f)) {
            let bodies = locator::find_closure_bodies(function);
            log::trace!(
                "{}: {} matches, {} handler closures",
                unit.path.display(),
                function.name,
                bodies.len()
            );
            for body in bodies {
                adjacency::check_block(body, reporter);
            }
        }
    }
}
