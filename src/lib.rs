//! Plotline is the function analysis and curve rasterization engine of an
//! interactive graphing calculator.
//!
//! The shell (window, widgets, dialogs) supplies equation text, a world
//! window and analysis requests; Plotline returns numeric results and
//! drawable polylines. Everything in between is this crate:
//!
//! 1. **Compile**: equation text -> stack program (`ExpressionSource`)
//! 2. **Analyze**: `AnalysisRequest -> AnalysisResult` (derivatives,
//!    integrals, intersections, extrema) via purely numerical methods
//! 3. **Rasterize**: equation + `ViewPort` + pixel width ->
//!    `CurveSegment` polylines, with asymptotes and step jumps kept
//!    apart from ordinary continuity
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure and deterministic**: every operation is a pure function of
//!   its inputs; identical inputs give bit-identical outputs. The only
//!   shared state is a drop-anytime expression compile cache.
//! - **Errors stay local**: parse failures, domain errors and numeric
//!   dead ends degrade to NaN, `None` or empty sequences; nothing in
//!   this crate aborts a redraw.
//! - **Synchronous**: no queueing, no cancellation; latest-request-wins
//!   is the shell's concern.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analysis;
mod expression;
mod foundation;
mod graph;
mod numeric;
mod raster;

pub use analysis::engine::Analyzer;
pub use analysis::extrema::ZERO_CLASSIFICATION_EPSILON;
pub use expression::provider::{CompiledExpr, ExpressionSource, Expressions};
pub use foundation::core::{Affine, Point, Rect, Vec2, ViewPort};
pub use foundation::error::{PlotlineError, PlotlineResult};
pub use graph::model::{
    AnalysisRequest, AnalysisResult, DerivativeResult, Equation, EquationId, ExtremaResult,
    IntegralResult, IntersectionResult, TangentLine,
};
pub use graph::state::{AnalysisStatus, GraphAction, GraphState, apply_action};
pub use numeric::diff::{CORNER_TOLERANCE, DEFAULT_STEP, Derivative, differentiate};
pub use numeric::integral::{TRAPEZOID_STEPS, integrate};
pub use numeric::root::{
    DEDUP_EPSILON, MAX_BISECT_ITERS, ROOT_TOLERANCE, SCAN_STEPS, find_root, scan_for_roots,
};
pub use raster::rasterize::{
    ASYMPTOTE_JUMP_FRACTION, CurveSegment, INTEGER_JUMP_EPSILON, SamplePoint, rasterize,
};
