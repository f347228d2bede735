use super::*;
use crate::graph::model::{DerivativeResult, TangentLine};

fn eq(id: u64, expression: &str) -> Equation {
    Equation {
        id: EquationId(id),
        expression: expression.to_owned(),
        color: "#4477aa".to_owned(),
        visible: true,
    }
}

#[test]
fn add_and_remove_equations() {
    let s0 = GraphState::new();
    let s1 = apply_action(&s0, &GraphAction::AddEquation(eq(1, "x^2"))).unwrap();
    let s2 = apply_action(&s1, &GraphAction::AddEquation(eq(2, "sin(x)"))).unwrap();
    assert_eq!(s2.equations.len(), 2);

    let s3 = apply_action(&s2, &GraphAction::RemoveEquation(EquationId(1))).unwrap();
    assert_eq!(s3.equations.len(), 1);
    assert!(s3.equation(EquationId(1)).is_none());

    // Inputs are never mutated.
    assert!(s0.equations.is_empty());
    assert_eq!(s2.equations.len(), 2);
}

#[test]
fn duplicate_and_unknown_ids_are_rejected() {
    let s0 = GraphState::new();
    let s1 = apply_action(&s0, &GraphAction::AddEquation(eq(1, "x"))).unwrap();
    assert!(apply_action(&s1, &GraphAction::AddEquation(eq(1, "x+1"))).is_err());
    assert!(apply_action(&s1, &GraphAction::RemoveEquation(EquationId(9))).is_err());
    assert!(
        apply_action(
            &s1,
            &GraphAction::SetVisible {
                id: EquationId(9),
                visible: false,
            },
        )
        .is_err()
    );
}

#[test]
fn pan_shifts_both_axes() {
    let s0 = GraphState::new();
    let s1 = apply_action(&s0, &GraphAction::Pan { dx: 2.0, dy: -1.0 }).unwrap();
    assert_eq!(s1.viewport.x_min, -3.0);
    assert_eq!(s1.viewport.x_max, 7.0);
    assert_eq!(s1.viewport.y_min, -6.0);
    assert_eq!(s1.viewport.y_max, 4.0);
}

#[test]
fn zoom_scales_about_the_center() {
    let s0 = GraphState::new();
    let s1 = apply_action(&s0, &GraphAction::Zoom { factor: 0.5 }).unwrap();
    assert_eq!(s1.viewport.x_min, -2.5);
    assert_eq!(s1.viewport.x_max, 2.5);
    assert_eq!(s1.viewport.y_span(), 5.0);

    assert!(apply_action(&s0, &GraphAction::Zoom { factor: 0.0 }).is_err());
    assert!(apply_action(&s0, &GraphAction::Zoom { factor: f64::NAN }).is_err());
}

#[test]
fn degenerate_viewport_is_rejected() {
    let s0 = GraphState::new();
    let bad = ViewPort {
        x_min: 1.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };
    assert!(apply_action(&s0, &GraphAction::SetViewPort(bad)).is_err());
}

#[test]
fn analysis_status_is_a_tri_state_round_trip() {
    let s0 = GraphState::new();
    assert_eq!(s0.analysis, AnalysisStatus::Idle);

    let result = AnalysisResult::Derivative(DerivativeResult {
        x: 1.0,
        y: 1.0,
        value: 2.0,
        left: 2.0,
        right: 2.0,
        tangent: Some(TangentLine {
            slope: 2.0,
            intercept: -1.0,
        }),
    });
    let s1 = apply_action(&s0, &GraphAction::StoreAnalysis(result.clone())).unwrap();
    assert_eq!(s1.analysis, AnalysisStatus::Active(result));

    let s2 = apply_action(&s1, &GraphAction::ClearAnalysis).unwrap();
    assert_eq!(s2.analysis, AnalysisStatus::Idle);
}

#[test]
fn state_serde_round_trips() {
    let s0 = GraphState::new();
    let s1 = apply_action(&s0, &GraphAction::AddEquation(eq(1, "floor(x)"))).unwrap();
    let json = serde_json::to_string(&s1).unwrap();
    let back: GraphState = serde_json::from_str(&json).unwrap();
    assert_eq!(s1, back);
}
