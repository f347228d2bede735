use super::*;
use crate::expression::provider::Expressions;

fn eq(id: u64, expression: &str) -> Equation {
    Equation {
        id: EquationId(id),
        expression: expression.to_owned(),
        color: "#cc3311".to_owned(),
        visible: true,
    }
}

fn window() -> ViewPort {
    ViewPort::new(-5.0, 5.0, -5.0, 5.0).unwrap()
}

#[test]
fn derivative_of_square_at_one() {
    let source = Expressions::new();
    let eqs = [eq(1, "x^2")];
    let req = AnalysisRequest::Derivative {
        equation: EquationId(1),
        x: 1.0,
    };
    let AnalysisResult::Derivative(d) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert!((d.value - 2.0).abs() < 1e-3);
    assert!((d.y - 1.0).abs() < 1e-12);
    let t = d.tangent.unwrap();
    assert!((t.slope - 2.0).abs() < 1e-3);
    assert!((t.intercept + 1.0).abs() < 1e-3);
}

#[test]
fn derivative_of_abs_reports_one_sided_slopes() {
    let source = Expressions::new();
    let eqs = [eq(1, "abs(x)")];
    let req = AnalysisRequest::Derivative {
        equation: EquationId(1),
        x: 0.0,
    };
    let AnalysisResult::Derivative(d) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert!(d.value.is_nan());
    assert!((d.left + 1.0).abs() < 1e-6);
    assert!((d.right - 1.0).abs() < 1e-6);
    assert!(d.tangent.is_none());
}

#[test]
fn integral_of_identity() {
    let source = Expressions::new();
    let eqs = [eq(1, "x")];
    let run = |a: f64, b: f64| {
        let req = AnalysisRequest::Integral {
            equation: EquationId(1),
            a,
            b,
        };
        match Analyzer::analyze(&source, &eqs, &window(), &req) {
            AnalysisResult::Integral(r) => r.value.unwrap(),
            _ => panic!("wrong result variant"),
        }
    };
    assert!((run(0.0, 1.0) - 0.5).abs() < 1e-3);
    assert!((run(1.0, 0.0) + 0.5).abs() < 1e-3);
}

#[test]
fn intersections_of_parabola_and_constant() {
    let source = Expressions::new();
    let eqs = [eq(1, "x^2"), eq(2, "4")];
    let req = AnalysisRequest::Intersections {
        first: EquationId(1),
        second: EquationId(2),
    };
    let AnalysisResult::Intersections(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert_eq!(r.points.len(), 2, "points: {:?}", r.points);
    assert!((r.points[0].x + 2.0).abs() < 1e-4);
    assert!((r.points[0].y - 4.0).abs() < 1e-4);
    assert!((r.points[1].x - 2.0).abs() < 1e-4);
    assert!((r.points[1].y - 4.0).abs() < 1e-4);
}

#[test]
fn extrema_of_parabola() {
    let source = Expressions::new();
    let eqs = [eq(1, "x^2")];
    let req = AnalysisRequest::Extrema {
        equation: EquationId(1),
    };
    let AnalysisResult::Extrema(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert_eq!(r.minima.len(), 1, "minima: {:?}", r.minima);
    assert!(r.minima[0].x.abs() < 1e-4);
    assert!(r.minima[0].y.abs() < 1e-8);
    assert!(r.maxima.is_empty());
    assert!(r.inflections.is_empty());
}

#[test]
fn cubic_has_one_of_each() {
    let source = Expressions::new();
    let eqs = [eq(1, "x^3 - 3*x")];
    let req = AnalysisRequest::Extrema {
        equation: EquationId(1),
    };
    let AnalysisResult::Extrema(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    // Max at x=-1, min at x=1, inflection at x=0.
    assert_eq!(r.maxima.len(), 1);
    assert!((r.maxima[0].x + 1.0).abs() < 1e-4);
    assert!((r.maxima[0].y - 2.0).abs() < 1e-4);
    assert_eq!(r.minima.len(), 1);
    assert!((r.minima[0].x - 1.0).abs() < 1e-4);
    assert_eq!(r.inflections.len(), 1);
    assert!(r.inflections[0].x.abs() < 1e-4);
}

#[test]
fn linear_and_constant_equations_have_no_extrema() {
    // Their derivative expressions simplify to literals ("2", "0"); a
    // scan over those must not manufacture critical or inflection
    // points out of the zero function.
    let source = Expressions::new();
    let eqs = [eq(1, "2*x + 1"), eq(2, "3")];
    for id in [1, 2] {
        let req = AnalysisRequest::Extrema {
            equation: EquationId(id),
        };
        let AnalysisResult::Extrema(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
            panic!("wrong result variant");
        };
        assert!(r.minima.is_empty(), "minima: {:?}", r.minima);
        assert!(r.maxima.is_empty(), "maxima: {:?}", r.maxima);
        assert!(r.inflections.is_empty(), "inflections: {:?}", r.inflections);
    }
}

#[test]
fn identical_equations_have_no_discrete_intersections() {
    let source = Expressions::new();
    let eqs = [eq(1, "x"), eq(2, "x")];
    let req = AnalysisRequest::Intersections {
        first: EquationId(1),
        second: EquationId(2),
    };
    let AnalysisResult::Intersections(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert!(r.points.is_empty(), "points: {:?}", r.points);
}

#[test]
fn unknown_or_unparsable_equations_yield_empty_shapes() {
    let source = Expressions::new();
    let eqs = [eq(1, "2 +* x")];

    let req = AnalysisRequest::Integral {
        equation: EquationId(1),
        a: 0.0,
        b: 1.0,
    };
    let AnalysisResult::Integral(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert_eq!(r.value, None);

    let req = AnalysisRequest::Extrema {
        equation: EquationId(42),
    };
    let AnalysisResult::Extrema(r) = Analyzer::analyze(&source, &eqs, &window(), &req) else {
        panic!("wrong result variant");
    };
    assert!(r.minima.is_empty() && r.maxima.is_empty() && r.inflections.is_empty());
}

#[test]
fn analysis_is_idempotent() {
    let source = Expressions::new();
    let eqs = [eq(1, "sin(x)"), eq(2, "x/2")];
    let req = AnalysisRequest::Intersections {
        first: EquationId(1),
        second: EquationId(2),
    };
    let first = Analyzer::analyze(&source, &eqs, &window(), &req);
    let second = Analyzer::analyze(&source, &eqs, &window(), &req);
    // Debug text is bit-faithful for f64, including any NaNs.
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn replayed_request_reproduces_the_result() {
    let source = Expressions::new();
    let eqs = [eq(1, "x^2"), eq(2, "4")];
    let req = AnalysisRequest::Intersections {
        first: EquationId(1),
        second: EquationId(2),
    };

    let eqs_json = serde_json::to_string(&eqs).unwrap();
    let req_json = serde_json::to_string(&req).unwrap();
    let eqs_back: Vec<Equation> = serde_json::from_str(&eqs_json).unwrap();
    let req_back: AnalysisRequest = serde_json::from_str(&req_json).unwrap();

    let direct = Analyzer::analyze(&source, &eqs, &window(), &req);
    let replayed = Analyzer::analyze(&source, &eqs_back, &window(), &req_back);
    assert_eq!(direct, replayed);
}
