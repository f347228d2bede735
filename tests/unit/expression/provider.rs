use super::*;

#[test]
fn compiles_and_evaluates() {
    let source = Expressions::new();
    let f = source.compile("x^2 - 3*x + 1").unwrap();
    assert_eq!(f.eval(0.0), 1.0);
    assert_eq!(f.eval(3.0), 1.0);
}

#[test]
fn parse_failure_is_a_parse_error() {
    let source = Expressions::new();
    let err = source.compile("2 +* x").unwrap_err();
    assert!(matches!(err, PlotlineError::Parse(_)), "got {err:?}");
    let err = source.compile("").unwrap_err();
    assert!(matches!(err, PlotlineError::Parse(_)), "got {err:?}");
}

#[test]
fn cache_hit_is_invisible() {
    let source = Expressions::new();
    let first = source.compile("sin(x)/x").unwrap();
    let second = source.compile("sin(x)/x").unwrap();
    // Same program object, and bit-identical behavior.
    assert!(Arc::ptr_eq(&first.program, &second.program));
    for x in [-2.0, -0.5, 0.0, 0.5, 2.0, 100.0] {
        assert_eq!(first.eval(x).to_bits(), second.eval(x).to_bits());
    }
}

#[test]
fn fresh_provider_matches_cached_one() {
    let warm = Expressions::new();
    warm.compile("x^3").unwrap();
    let cached = warm.compile("x^3").unwrap();
    let cold = Expressions::new().compile("x^3").unwrap();
    for x in [-1.5, 0.0, 2.25] {
        assert_eq!(cached.eval(x).to_bits(), cold.eval(x).to_bits());
    }
}

#[test]
fn symbolic_derivative_text_recompiles() {
    let source = Expressions::new();
    let d1 = source.symbolic_derivative("x^3 - x", "x").unwrap();
    let f = source.compile(&d1).unwrap();
    // 3x^2 - 1
    assert!((f.eval(2.0) - 11.0).abs() < 1e-12);

    let d2 = source.symbolic_derivative(&d1, "x").unwrap();
    let g = source.compile(&d2).unwrap();
    // 6x
    assert!((g.eval(2.0) - 12.0).abs() < 1e-12);
}

#[test]
fn derivative_of_abs_is_unavailable() {
    let source = Expressions::new();
    let err = source.symbolic_derivative("abs(x)", "x").unwrap_err();
    assert!(matches!(err, PlotlineError::Evaluation(_)), "got {err:?}");
}

#[test]
fn only_x_is_a_differentiation_variable() {
    let source = Expressions::new();
    let err = source.symbolic_derivative("x^2", "t").unwrap_err();
    assert!(matches!(err, PlotlineError::Validation(_)), "got {err:?}");
}
