//! Observed order of convergence from (step, error) pairs.

use crate::Float;

/// Least-squares slope of ln(error) against ln(step).
///
/// For a method of order p the global error behaves like C * h^p, so the
/// slope estimates p. Pairs with a zero or non-finite error are skipped.
/// Returns `None` when fewer than two distinct usable steps remain.
///
/// ```
/// use ivp_errors::convergence::observed_order;
///
/// let steps = [0.1, 0.05, 0.025];
/// let errors: Vec<f64> = steps.iter().map(|h| 3.0 * h * h).collect();
/// let p = observed_order(&steps, &errors).unwrap();
/// assert!((p - 2.0).abs() < 1e-9);
/// ```
pub fn observed_order(steps: &[Float], errors: &[Float]) -> Option<Float> {
    let pts: Vec<(Float, Float)> = steps
        .iter()
        .zip(errors)
        .filter(|&(&h, &e)| h > 0.0 && e > 0.0 && e.is_finite())
        .map(|(&h, &e)| (h.ln(), e.ln()))
        .collect();
    if pts.len() < 2 {
        return None;
    }

    let n = pts.len() as Float;
    let mx = pts.iter().map(|p| p.0).sum::<Float>() / n;
    let my = pts.iter().map(|p| p.1).sum::<Float>() / n;

    let sxx: Float = pts.iter().map(|p| (p.0 - mx) * (p.0 - mx)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: Float = pts.iter().map(|p| (p.0 - mx) * (p.1 - my)).sum();

    Some(sxy / sxx)
}
