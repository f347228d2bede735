use crate::expression::provider::ExpressionSource;
use crate::foundation::core::{Point, ViewPort};
use crate::graph::model::ExtremaResult;
use crate::numeric::root::{SCAN_STEPS, scan_for_roots};

/// Second-derivative magnitudes at or below this are ambiguous: the
/// critical point is discarded, reported neither as minimum nor maximum.
pub const ZERO_CLASSIFICATION_EPSILON: f64 = 1e-7;

/// Locate local extrema and inflection points over the viewport x-range.
///
/// First and second derivative expressions come from the capability's
/// symbolic differentiation; if either is unavailable (the expression
/// does not compile, or has no closed-form derivative) the result is
/// empty rather than an error.
pub(crate) fn find_extrema(
    source: &impl ExpressionSource,
    expression: &str,
    viewport: &ViewPort,
) -> ExtremaResult {
    let Ok(f) = source.compile(expression) else {
        return ExtremaResult::default();
    };
    let Ok(d1_text) = source.symbolic_derivative(expression, "x") else {
        return ExtremaResult::default();
    };
    let Ok(d2_text) = source.symbolic_derivative(&d1_text, "x") else {
        return ExtremaResult::default();
    };
    let (Ok(d1), Ok(d2)) = (source.compile(&d1_text), source.compile(&d2_text)) else {
        return ExtremaResult::default();
    };

    let mut out = ExtremaResult::default();

    let critical = scan_for_roots(|x| d1.eval(x), viewport.x_min, viewport.x_max, SCAN_STEPS);
    for x in critical {
        let concavity = d2.eval(x);
        // y always comes from the original equation, not the derivative.
        let p = Point::new(x, f.eval(x));
        if concavity > ZERO_CLASSIFICATION_EPSILON {
            out.minima.push(p);
        } else if concavity < -ZERO_CLASSIFICATION_EPSILON {
            out.maxima.push(p);
        }
        // Near-zero concavity is ambiguous; the point is dropped.
    }

    let inflections = scan_for_roots(|x| d2.eval(x), viewport.x_min, viewport.x_max, SCAN_STEPS);
    out.inflections = inflections
        .into_iter()
        .map(|x| Point::new(x, f.eval(x)))
        .collect();

    tracing::debug!(
        minima = out.minima.len(),
        maxima = out.maxima.len(),
        inflections = out.inflections.len(),
        "extrema scan complete"
    );
    out
}
