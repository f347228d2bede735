/// Convergence tolerance for bisection, on both `|f(c)|` and interval
/// half-width.
pub const ROOT_TOLERANCE: f64 = 1e-7;

/// Iteration cap for bisection; past it the last midpoint is returned as
/// a best-effort answer.
pub const MAX_BISECT_ITERS: u32 = 100;

/// Subinterval count used when scanning a domain for sign changes.
pub const SCAN_STEPS: u32 = 2000;

/// Two candidate roots closer than this are considered the same root.
pub const DEDUP_EPSILON: f64 = 1e-5;

/// Bisection on a bracketed sign change.
///
/// Returns `None` without a genuine bracket: endpoint values must be
/// finite and of opposite sign. A non-finite midpoint value aborts the
/// search (the bracket crosses a pole or a domain boundary, not a root).
pub fn find_root(f: impl Fn(f64) -> f64, a: f64, b: f64, tol: f64, max_iter: u32) -> Option<f64> {
    let fa = f(a);
    let fb = f(b);
    if !fa.is_finite() || !fb.is_finite() || fa * fb >= 0.0 {
        return None;
    }

    let (mut lo, mut hi) = (a, b);
    let mut flo = fa;
    let mut mid = 0.5 * (lo + hi);

    for _ in 0..max_iter {
        mid = 0.5 * (lo + hi);
        let fmid = f(mid);
        if !fmid.is_finite() {
            return None;
        }
        if fmid.abs() < tol || 0.5 * (hi - lo) < tol {
            return Some(mid);
        }
        if flo * fmid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            flo = fmid;
        }
    }

    Some(mid)
}

/// Scan `[x_min, x_max]` for roots by sign change.
///
/// The domain is split into `steps` equal subintervals; each consecutive
/// pair of *finite* samples with opposite sign is handed to
/// [`find_root`]. Samples that are exactly zero are roots too (a strict
/// sign-change test would walk right past them), but a maximal run of
/// consecutive zero samples collapses to its single midpoint, and a run
/// with no nonzero finite sample on either side is the zero function
/// over the window, not a root. Non-finite samples are unknowns, not
/// zeros: they are skipped without synthesizing a sign change across
/// them. Accepted roots closer than [`DEDUP_EPSILON`] to an earlier one
/// are dropped (the same root re-detected from floating point jitter at
/// shared boundaries).
pub fn scan_for_roots(f: impl Fn(f64) -> f64, x_min: f64, x_max: f64, steps: u32) -> Vec<f64> {
    debug_assert!(x_min < x_max);
    debug_assert!(steps > 0);

    let dx = (x_max - x_min) / f64::from(steps);
    let mut roots: Vec<f64> = Vec::new();
    let mut accept = |root: f64, roots: &mut Vec<f64>| {
        if !roots.iter().any(|r| (r - root).abs() < DEDUP_EPSILON) {
            roots.push(root);
        }
    };

    let mut prev_x = x_min;
    let mut prev_y = f(x_min);
    // Open run of exactly-zero samples: first x, last x, and whether a
    // nonzero finite sample preceded it.
    let mut zero_run: Option<(f64, f64, bool)> = None;
    if prev_y == 0.0 {
        zero_run = Some((x_min, x_min, false));
    }

    for i in 1..=steps {
        let x = x_min + f64::from(i) * dx;
        let y = f(x);

        if y == 0.0 {
            zero_run = Some(match zero_run {
                Some((start, _, bounded)) => (start, x, bounded),
                None => (x, x, prev_y.is_finite()),
            });
        } else {
            if let Some((start, end, bounded)) = zero_run.take()
                && (bounded || y.is_finite())
            {
                accept(0.5 * (start + end), &mut roots);
            }
            if prev_y.is_finite() && y.is_finite() && prev_y * y < 0.0
                && let Some(root) = find_root(&f, prev_x, x, ROOT_TOLERANCE, MAX_BISECT_ITERS)
            {
                accept(root, &mut roots);
            }
        }

        prev_x = x;
        prev_y = y;
    }

    // A run still open here touches the right window edge; without a
    // nonzero finite sample on its left it covers every sample.
    if let Some((start, end, bounded)) = zero_run
        && bounded
    {
        accept(0.5 * (start + end), &mut roots);
    }

    roots
}
