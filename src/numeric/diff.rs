/// Default sampling step for difference quotients.
pub const DEFAULT_STEP: f64 = 1e-7;

/// One-sided slope disagreement beyond which a point is treated as a
/// corner (non-differentiable), e.g. `abs(x)` at 0.
///
/// This threshold is the sole mechanism for detecting non-
/// differentiability without symbolic analysis; tune with care.
pub const CORNER_TOLERANCE: f64 = 1e-3;

/// Derivative estimate at a point, with one-sided slopes.
///
/// `value` is NaN when the function is undefined near the point or when
/// the point is a corner; in the corner case `left` and `right` still
/// carry the one-sided slopes so callers can report them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Derivative {
    /// Central-difference estimate, or NaN (undefined or corner).
    pub value: f64,
    /// Backward-difference slope.
    pub left: f64,
    /// Forward-difference slope.
    pub right: f64,
}

impl Derivative {
    fn undefined() -> Self {
        Self {
            value: f64::NAN,
            left: f64::NAN,
            right: f64::NAN,
        }
    }
}

/// Estimate `f'(x0)` from samples, detecting corners.
pub fn differentiate(f: impl Fn(f64) -> f64, x0: f64, h: f64) -> Derivative {
    let at = f(x0);
    if !at.is_finite() {
        return Derivative::undefined();
    }

    let ahead = f(x0 + h);
    let behind = f(x0 - h);
    if !ahead.is_finite() || !behind.is_finite() {
        return Derivative::undefined();
    }

    let right = (ahead - at) / h;
    let left = (at - behind) / h;

    if (right - left).abs() > CORNER_TOLERANCE {
        return Derivative {
            value: f64::NAN,
            left,
            right,
        };
    }

    Derivative {
        value: (ahead - behind) / (2.0 * h),
        left,
        right,
    }
}
