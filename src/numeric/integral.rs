/// Default panel count for the composite trapezoidal rule.
pub const TRAPEZOID_STEPS: u32 = 1000;

/// Composite trapezoidal estimate of the definite integral over `[a, b]`.
///
/// Returns NaN when a bound or an endpoint value is non-finite.
/// Non-finite *interior* samples are skipped and contribute zero, so an
/// integrand with an isolated singularity still yields the trapezoid
/// estimate of its finite part instead of NaN.
///
/// Antisymmetric in the bounds: swapping `a` and `b` negates the result.
pub fn integrate(f: impl Fn(f64) -> f64, a: f64, b: f64, n: u32) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    debug_assert!(n > 0);

    let fa = f(a);
    let fb = f(b);
    if !fa.is_finite() || !fb.is_finite() {
        return f64::NAN;
    }

    let h = (b - a) / f64::from(n);
    let mut sum = 0.5 * (fa + fb);
    for i in 1..n {
        let y = f(a + f64::from(i) * h);
        if y.is_finite() {
            sum += y;
        }
    }

    h * sum
}
