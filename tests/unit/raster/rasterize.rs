use super::*;
use crate::expression::provider::Expressions;
use crate::graph::model::EquationId;

fn eq(expression: &str) -> Equation {
    Equation {
        id: EquationId(1),
        expression: expression.to_owned(),
        color: "#228833".to_owned(),
        visible: true,
    }
}

fn window(y_min: f64, y_max: f64) -> ViewPort {
    ViewPort::new(-5.0, 5.0, y_min, y_max).unwrap()
}

#[test]
fn continuous_curve_is_one_segment() {
    let source = Expressions::new();
    let segments = rasterize(&source, &eq("x^2"), &window(-1.0, 26.0), 200);
    assert_eq!(segments.len(), 1);
    let points = &segments[0].points;
    // One sample per column, both edges included.
    assert_eq!(points.len(), 201);
    assert_eq!(points[0], Point::new(-5.0, 25.0));
    assert_eq!(points[200], Point::new(5.0, 25.0));
}

#[test]
fn emitted_x_never_leaves_the_window() {
    let source = Expressions::new();
    let viewport = ViewPort::new(-1.0, 0.3, -2.0, 2.0).unwrap();
    for expression in ["sin(x)", "x^3", "exp(x)"] {
        for width in [1, 7, 333, 1024] {
            let segments = rasterize(&source, &eq(expression), &viewport, width);
            for segment in &segments {
                for p in &segment.points {
                    assert!(
                        (viewport.x_min..=viewport.x_max).contains(&p.x),
                        "{expression} at width {width}: x {} out of window",
                        p.x
                    );
                }
            }
        }
    }
}

#[test]
fn asymptote_splits_and_never_bridges_the_pole() {
    let source = Expressions::new();
    // Width 999 keeps x = 0 off the sample grid, so the pole shows up as
    // a sign-flipping jump rather than a non-finite sample.
    let segments = rasterize(&source, &eq("1/x"), &window(-5.0, 5.0), 999);
    assert_eq!(segments.len(), 2, "segments: {}", segments.len());
    for segment in &segments {
        let all_left = segment.points.iter().all(|p| p.x < 0.0);
        let all_right = segment.points.iter().all(|p| p.x > 0.0);
        assert!(all_left || all_right, "segment bridges the pole");
    }
}

#[test]
fn step_function_gets_vertical_risers() {
    let source = Expressions::new();
    let viewport = ViewPort::new(-2.5, 2.5, -3.0, 3.0).unwrap();
    let segments = rasterize(&source, &eq("floor(x)"), &viewport, 500);
    // One flat run per floor value in [-2.5, 2.5].
    assert_eq!(segments.len(), 6, "segments: {}", segments.len());
    for segment in &segments[..5] {
        let n = segment.points.len();
        assert!(n >= 2);
        // Each run closes with a riser: same x, the next run's y.
        assert_eq!(segment.points[n - 1].x, segment.points[n - 2].x);
        assert_ne!(segment.points[n - 1].y, segment.points[n - 2].y);
    }
}

#[test]
fn undefined_region_produces_no_points() {
    let source = Expressions::new();
    let segments = rasterize(&source, &eq("ln(x)"), &window(-5.0, 5.0), 400);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].points.iter().all(|p| p.x > 0.0));
}

#[test]
fn hidden_or_broken_equations_draw_nothing() {
    let source = Expressions::new();

    let mut hidden = eq("x^2");
    hidden.visible = false;
    assert!(rasterize(&source, &hidden, &window(-5.0, 5.0), 200).is_empty());

    assert!(rasterize(&source, &eq("2 +* x"), &window(-5.0, 5.0), 200).is_empty());
    assert!(rasterize(&source, &eq("x^2"), &window(-5.0, 5.0), 0).is_empty());
}

#[test]
fn segments_round_trip_through_serde() {
    let source = Expressions::new();
    let segments = rasterize(&source, &eq("sin(x)"), &window(-2.0, 2.0), 400);
    let json = serde_json::to_string(&segments).unwrap();
    let back: Vec<CurveSegment> = serde_json::from_str(&json).unwrap();
    assert_eq!(segments, back);
}
