use crate::foundation::core::Point;

/// Stable identifier the shell assigns to each equation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EquationId(pub u64);

/// One user-entered equation `y = f(x)`.
///
/// The expression text is opaque to this model; an equation whose text
/// does not compile is skipped by every downstream algorithm and never
/// raises past the analysis boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Equation {
    /// Shell-assigned identifier.
    pub id: EquationId,
    /// Right-hand side of `y = f(x)`, e.g. `"x^2 - 3"`.
    pub expression: String,
    /// Opaque display token (the engine never interprets it).
    pub color: String,
    /// Hidden equations are not rasterized; analysis still sees them.
    pub visible: bool,
}

/// One-shot analysis request, constructed fresh per invocation.
///
/// The shell owns the "currently active mode" toggle; the engine holds
/// no request state between calls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnalysisRequest {
    /// Derivative (and tangent line) of an equation at a probe x.
    Derivative {
        /// Target equation.
        equation: EquationId,
        /// Probe point.
        x: f64,
    },
    /// Definite integral of an equation over `[a, b]`.
    Integral {
        /// Target equation.
        equation: EquationId,
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },
    /// Intersection points of two equations over the viewport x-range.
    Intersections {
        /// First equation.
        first: EquationId,
        /// Second equation.
        second: EquationId,
    },
    /// Local extrema and inflection points over the viewport x-range.
    Extrema {
        /// Target equation.
        equation: EquationId,
    },
}

/// Analysis outcome, tagged to match the request.
///
/// NaN-valued fields mean "evaluated but undefined"; `None` and empty
/// sequences mean "nothing found". Callers can always tell the two
/// apart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnalysisResult {
    /// Outcome of [`AnalysisRequest::Derivative`].
    Derivative(DerivativeResult),
    /// Outcome of [`AnalysisRequest::Integral`].
    Integral(IntegralResult),
    /// Outcome of [`AnalysisRequest::Intersections`].
    Intersections(IntersectionResult),
    /// Outcome of [`AnalysisRequest::Extrema`].
    Extrema(ExtremaResult),
}

/// Derivative probe outcome.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DerivativeResult {
    /// Probe x.
    pub x: f64,
    /// `f(x)` at the probe, NaN if undefined there.
    pub y: f64,
    /// Central-difference derivative, NaN at corners and undefined points.
    pub value: f64,
    /// Backward one-sided slope.
    pub left: f64,
    /// Forward one-sided slope.
    pub right: f64,
    /// Tangent line at the probe, present only when `value` is finite.
    pub tangent: Option<TangentLine>,
}

/// A line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TangentLine {
    /// Slope.
    pub slope: f64,
    /// Y-intercept.
    pub intercept: f64,
}

/// Definite integral outcome.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntegralResult {
    /// Trapezoid estimate; `None` when the equation is unknown or does
    /// not compile, NaN inside `Some` when evaluated but undefined.
    pub value: Option<f64>,
}

/// Intersection points of two equations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionResult {
    /// Points `(x, f(x))` where the difference function vanishes.
    pub points: Vec<Point>,
}

/// Local extrema and inflection points of one equation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtremaResult {
    /// Critical points with positive second derivative.
    pub minima: Vec<Point>,
    /// Critical points with negative second derivative.
    pub maxima: Vec<Point>,
    /// Sign changes of the second derivative, reported independently of
    /// the min/max classification.
    pub inflections: Vec<Point>,
}
