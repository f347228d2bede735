use crate::foundation::core::ViewPort;
use crate::foundation::error::{PlotlineError, PlotlineResult};
use crate::graph::model::{AnalysisResult, Equation, EquationId};

/// Shell-owned analysis display state.
///
/// The engine never holds this; the shell flips it by dispatching
/// [`GraphAction::StoreAnalysis`] / [`GraphAction::ClearAnalysis`] after
/// each request/response round trip.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnalysisStatus {
    /// No analysis overlay.
    #[default]
    Idle,
    /// An analysis result is being displayed.
    Active(AnalysisResult),
}

/// Immutable application state: the complete input to a redraw.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphState {
    /// Equations in entry order.
    pub equations: Vec<Equation>,
    /// Current world window.
    pub viewport: ViewPort,
    /// Analysis overlay state.
    pub analysis: AnalysisStatus,
}

impl GraphState {
    /// Starting state: no equations, a symmetric 10x10 window.
    pub fn new() -> Self {
        Self {
            equations: Vec::new(),
            viewport: ViewPort {
                x_min: -5.0,
                x_max: 5.0,
                y_min: -5.0,
                y_max: 5.0,
            },
            analysis: AnalysisStatus::Idle,
        }
    }

    /// Look up an equation by id.
    pub fn equation(&self, id: EquationId) -> Option<&Equation> {
        self.equations.iter().find(|e| e.id == id)
    }
}

impl Default for GraphState {
    fn default() -> Self {
        Self::new()
    }
}

/// State transitions the shell can dispatch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum GraphAction {
    /// Append an equation. Its id must not collide with an existing one.
    AddEquation(Equation),
    /// Remove an equation by id.
    RemoveEquation(EquationId),
    /// Replace an equation's expression text.
    SetExpression {
        /// Target equation.
        id: EquationId,
        /// New right-hand-side text.
        expression: String,
    },
    /// Show or hide an equation.
    SetVisible {
        /// Target equation.
        id: EquationId,
        /// New visibility.
        visible: bool,
    },
    /// Replace the viewport wholesale (e.g. "reset view").
    SetViewPort(ViewPort),
    /// Shift the window by world-space deltas.
    Pan {
        /// Horizontal shift.
        dx: f64,
        /// Vertical shift.
        dy: f64,
    },
    /// Scale both spans about the window center. `factor` > 1 zooms out.
    Zoom {
        /// Span multiplier, must be finite and positive.
        factor: f64,
    },
    /// Store a finished analysis result for display.
    StoreAnalysis(AnalysisResult),
    /// Drop the analysis overlay.
    ClearAnalysis,
}

/// Pure reducer: `state + action -> state'`.
///
/// Never mutates its input; invalid actions (id collisions, unknown
/// ids, degenerate viewports) come back as validation errors with the
/// prior state intact at the caller.
pub fn apply_action(state: &GraphState, action: &GraphAction) -> PlotlineResult<GraphState> {
    let mut next = state.clone();
    match action {
        GraphAction::AddEquation(eq) => {
            if state.equation(eq.id).is_some() {
                return Err(PlotlineError::validation(format!(
                    "equation id {:?} already exists",
                    eq.id
                )));
            }
            next.equations.push(eq.clone());
        }
        GraphAction::RemoveEquation(id) => {
            let before = next.equations.len();
            next.equations.retain(|e| e.id != *id);
            if next.equations.len() == before {
                return Err(PlotlineError::validation(format!(
                    "unknown equation id {id:?}"
                )));
            }
        }
        GraphAction::SetExpression { id, expression } => {
            let eq = find_mut(&mut next, *id)?;
            eq.expression = expression.clone();
        }
        GraphAction::SetVisible { id, visible } => {
            let eq = find_mut(&mut next, *id)?;
            eq.visible = *visible;
        }
        GraphAction::SetViewPort(v) => {
            // Revalidate: the value may come from deserialized input.
            next.viewport = ViewPort::new(v.x_min, v.x_max, v.y_min, v.y_max)?;
        }
        GraphAction::Pan { dx, dy } => {
            let v = state.viewport;
            next.viewport = ViewPort::new(v.x_min + dx, v.x_max + dx, v.y_min + dy, v.y_max + dy)?;
        }
        GraphAction::Zoom { factor } => {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(PlotlineError::validation("zoom factor must be positive"));
            }
            let v = state.viewport;
            let cx = 0.5 * (v.x_min + v.x_max);
            let cy = 0.5 * (v.y_min + v.y_max);
            let hx = 0.5 * v.x_span() * factor;
            let hy = 0.5 * v.y_span() * factor;
            next.viewport = ViewPort::new(cx - hx, cx + hx, cy - hy, cy + hy)?;
        }
        GraphAction::StoreAnalysis(result) => {
            next.analysis = AnalysisStatus::Active(result.clone());
        }
        GraphAction::ClearAnalysis => {
            next.analysis = AnalysisStatus::Idle;
        }
    }
    Ok(next)
}

fn find_mut(state: &mut GraphState, id: EquationId) -> PlotlineResult<&mut Equation> {
    state
        .equations
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| PlotlineError::validation(format!("unknown equation id {id:?}")))
}

#[cfg(test)]
#[path = "../../tests/unit/graph/state.rs"]
mod tests;
