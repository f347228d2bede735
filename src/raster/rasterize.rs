use crate::expression::provider::ExpressionSource;
use crate::foundation::core::{Point, ViewPort};
use crate::graph::model::Equation;

/// A jump is called a vertical asymptote when it flips sign and exceeds
/// this fraction of the visible y-range. Pragmatic and tunable, not
/// derived from first principles.
pub const ASYMPTOTE_JUMP_FRACTION: f64 = 0.5;

/// A jump within this distance of a nonzero integer is called a step
/// (floor/ceiling-style functions legitimately jump by whole units).
pub const INTEGER_JUMP_EPSILON: f64 = 1e-9;

/// One evaluated sample: world-x and the (possibly non-finite) world-y.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SamplePoint {
    /// World-space x.
    pub x: f64,
    /// World-space y; non-finite marks "undefined at this column".
    pub y: f64,
}

/// A drawable polyline in world space.
///
/// A new segment starts wherever continuity breaks. Segments have no
/// identity beyond their points and are rebuilt on every rasterization
/// call. The shell maps them to pixels via
/// [`ViewPort::screen_transform`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveSegment {
    /// At least two points, in increasing-x order (step connectors may
    /// repeat an x).
    pub points: Vec<Point>,
}

/// Convert one equation into drawable segments across the viewport.
///
/// Evaluates once per pixel column in `[0, pixel_width]` and classifies
/// each consecutive pair of finite samples as continuous, an asymptote
/// break, or a step jump. Every emitted world-x lies inside
/// `[viewport.x_min, viewport.x_max]`. Hidden or non-compiling
/// equations produce no segments; rasterization never raises.
#[tracing::instrument(skip(source, equation), fields(equation = equation.id.0))]
pub fn rasterize(
    source: &impl ExpressionSource,
    equation: &Equation,
    viewport: &ViewPort,
    pixel_width: u32,
) -> Vec<CurveSegment> {
    if !equation.visible || pixel_width == 0 {
        return Vec::new();
    }
    let Ok(f) = source.compile(&equation.expression) else {
        tracing::debug!(expression = %equation.expression, "expression did not compile; nothing drawn");
        return Vec::new();
    };

    let y_span = viewport.y_span();
    let mut segments: Vec<CurveSegment> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    // Last finite sample, if the previous column had one.
    let mut last: Option<SamplePoint> = None;

    for px in 0..=pixel_width {
        let x = viewport.x_at(px, pixel_width);
        let y = f.eval(x);

        if !y.is_finite() {
            flush(&mut segments, &mut current);
            last = None;
            continue;
        }

        match last {
            None => {
                // First finite sample at start or after a gap.
                current.push(Point::new(x, y));
            }
            Some(prev) => {
                let delta = y - prev.y;
                if is_asymptote_break(prev.y, y, delta, y_span) {
                    // Pole, not a real transition: never connect across it.
                    flush(&mut segments, &mut current);
                    current.push(Point::new(x, y));
                } else if is_step_jump(delta) {
                    // Vertical riser at the previous column, then restart.
                    current.push(Point::new(prev.x, y));
                    flush(&mut segments, &mut current);
                    current.push(Point::new(x, y));
                } else {
                    current.push(Point::new(x, y));
                }
            }
        }

        last = Some(SamplePoint { x, y });
    }

    flush(&mut segments, &mut current);
    segments
}

fn is_asymptote_break(last_y: f64, y: f64, delta: f64, y_span: f64) -> bool {
    y.signum() != last_y.signum() && delta.abs() > ASYMPTOTE_JUMP_FRACTION * y_span
}

fn is_step_jump(delta: f64) -> bool {
    let nearest = delta.round();
    nearest != 0.0 && (delta - nearest).abs() <= INTEGER_JUMP_EPSILON
}

/// Close the current segment; a lone point is not drawable and is
/// dropped.
fn flush(segments: &mut Vec<CurveSegment>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        segments.push(CurveSegment {
            points: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterize.rs"]
mod tests;
