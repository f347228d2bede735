use crate::analysis::extrema::find_extrema;
use crate::analysis::intersect::find_intersections;
use crate::expression::provider::ExpressionSource;
use crate::foundation::core::ViewPort;
use crate::graph::model::{
    AnalysisRequest, AnalysisResult, DerivativeResult, Equation, EquationId, ExtremaResult,
    IntegralResult, IntersectionResult, TangentLine,
};
use crate::numeric::diff::{DEFAULT_STEP, differentiate};
use crate::numeric::integral::{TRAPEZOID_STEPS, integrate};

/// Stateless dispatcher from analysis requests to results.
pub struct Analyzer;

impl Analyzer {
    /// Run one analysis request against the current equations and window.
    ///
    /// Pure and synchronous: identical inputs produce bit-identical
    /// results. Failures are local: an unknown equation id or an
    /// expression that does not compile yields the request's empty
    /// result shape (all-NaN derivative, `None` integral, empty point
    /// sequences), never an error.
    #[tracing::instrument(skip(source, equations))]
    pub fn analyze(
        source: &impl ExpressionSource,
        equations: &[Equation],
        viewport: &ViewPort,
        request: &AnalysisRequest,
    ) -> AnalysisResult {
        match *request {
            AnalysisRequest::Derivative { equation, x } => {
                AnalysisResult::Derivative(derivative_at(source, equations, equation, x))
            }
            AnalysisRequest::Integral { equation, a, b } => {
                let value = lookup(equations, equation)
                    .and_then(|eq| source.compile(&eq.expression).ok())
                    .map(|f| integrate(|x| f.eval(x), a, b, TRAPEZOID_STEPS));
                AnalysisResult::Integral(IntegralResult { value })
            }
            AnalysisRequest::Intersections { first, second } => {
                let result = match (lookup(equations, first), lookup(equations, second)) {
                    (Some(a), Some(b)) => {
                        find_intersections(source, &a.expression, &b.expression, viewport)
                    }
                    _ => IntersectionResult::default(),
                };
                AnalysisResult::Intersections(result)
            }
            AnalysisRequest::Extrema { equation } => {
                let result = match lookup(equations, equation) {
                    Some(eq) => find_extrema(source, &eq.expression, viewport),
                    None => ExtremaResult::default(),
                };
                AnalysisResult::Extrema(result)
            }
        }
    }
}

fn lookup(equations: &[Equation], id: EquationId) -> Option<&Equation> {
    equations.iter().find(|e| e.id == id)
}

fn derivative_at(
    source: &impl ExpressionSource,
    equations: &[Equation],
    id: EquationId,
    x: f64,
) -> DerivativeResult {
    let compiled = lookup(equations, id).and_then(|eq| source.compile(&eq.expression).ok());
    let Some(f) = compiled else {
        return DerivativeResult {
            x,
            y: f64::NAN,
            value: f64::NAN,
            left: f64::NAN,
            right: f64::NAN,
            tangent: None,
        };
    };

    let y = f.eval(x);
    let d = differentiate(|x| f.eval(x), x, DEFAULT_STEP);
    let tangent = (d.value.is_finite() && y.is_finite()).then(|| TangentLine {
        slope: d.value,
        intercept: y - d.value * x,
    });

    DerivativeResult {
        x,
        y,
        value: d.value,
        left: d.left,
        right: d.right,
        tangent,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/engine.rs"]
mod tests;
