use crate::expression::provider::ExpressionSource;
use crate::foundation::core::{Point, ViewPort};
use crate::graph::model::IntersectionResult;
use crate::numeric::root::{SCAN_STEPS, scan_for_roots};

/// Find points where two equations meet over the viewport x-range.
///
/// Scans the difference function `d(x) = a(x) - b(x)` for roots; each
/// root is reported as `(x, a(x))` (the curves agree there by
/// construction). Either expression failing to compile yields an empty
/// result.
pub(crate) fn find_intersections(
    source: &impl ExpressionSource,
    expr_a: &str,
    expr_b: &str,
    viewport: &ViewPort,
) -> IntersectionResult {
    let (Ok(a), Ok(b)) = (source.compile(expr_a), source.compile(expr_b)) else {
        return IntersectionResult::default();
    };

    let roots = scan_for_roots(
        |x| a.eval(x) - b.eval(x),
        viewport.x_min,
        viewport.x_max,
        SCAN_STEPS,
    );

    IntersectionResult {
        points: roots.into_iter().map(|x| Point::new(x, a.eval(x))).collect(),
    }
}
