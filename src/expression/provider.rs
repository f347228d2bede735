use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::expression::bytecode::Program;
use crate::expression::deriv::differentiate;
use crate::expression::lower::lower_to_program;
use crate::expression::parser::parse_expr;
use crate::expression::vm::eval_program;
use crate::foundation::error::{PlotlineError, PlotlineResult};

/// The expression-evaluation capability the engine consumes.
///
/// The analysis and raster layers never parse text themselves; they ask
/// this seam for a compiled function and (for extrema) for symbolic
/// derivative text. Implementations must be pure per call: the same
/// source text always yields an identically-behaving function.
pub trait ExpressionSource {
    /// Compile expression text into an evaluatable function of `x`.
    fn compile(&self, src: &str) -> PlotlineResult<CompiledExpr>;

    /// Symbolic derivative of `src` with respect to `var`, as expression
    /// text that [`ExpressionSource::compile`] accepts.
    fn symbolic_derivative(&self, src: &str, var: &str) -> PlotlineResult<String>;
}

/// A compiled expression, cheap to clone and share.
#[derive(Clone, Debug)]
pub struct CompiledExpr {
    program: Arc<Program>,
}

impl CompiledExpr {
    /// Evaluate at `x`. Domain errors come back as non-finite values.
    pub fn eval(&self, x: f64) -> f64 {
        eval_program(&self.program, x)
    }
}

/// Native [`ExpressionSource`] backed by the crate's own parser and VM.
///
/// Holds a content-addressed compile cache. The cache is pure
/// memoization: a hit and a miss produce bit-identical programs, and the
/// whole cache may be dropped at any time. Only successful compiles are
/// cached.
#[derive(Debug, Default)]
pub struct Expressions {
    cache: Mutex<HashMap<String, Arc<Program>>>,
}

impl Expressions {
    /// Build a provider with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn compile_uncached(src: &str) -> PlotlineResult<Program> {
        let ast = parse_expr(src)?;
        let program = lower_to_program(&ast)?;
        Ok(program)
    }
}

impl ExpressionSource for Expressions {
    fn compile(&self, src: &str) -> PlotlineResult<CompiledExpr> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(program) = cache.get(src) {
            tracing::trace!(src, "expression cache hit");
            return Ok(CompiledExpr {
                program: Arc::clone(program),
            });
        }
        let program = Arc::new(Self::compile_uncached(src)?);
        cache.insert(src.to_owned(), Arc::clone(&program));
        Ok(CompiledExpr { program })
    }

    fn symbolic_derivative(&self, src: &str, var: &str) -> PlotlineResult<String> {
        if var != "x" {
            return Err(PlotlineError::validation(format!(
                "unsupported differentiation variable \"{var}\" (only \"x\")"
            )));
        }
        let ast = parse_expr(src)?;
        let dx = differentiate(&ast)
            .map_err(|e| PlotlineError::evaluation(e.to_string()))?;
        Ok(dx.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/provider.rs"]
mod tests;
