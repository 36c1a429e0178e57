//! Common numeric helpers.

/// Iterate `0, step, 2·step, ...` while the value is less than `end + step`.
///
/// This is the inclusive stepping used by every sampling loop in the crate:
/// the endpoint is always reached, and because the bound is one step past
/// `end`, the final value may overshoot `end` by up to a full step. Callers
/// accept that overshoot (a closing sample slightly past the nominal range)
/// rather than special-casing the boundary.
///
/// Yields nothing if `step` is not strictly positive.
pub(crate) fn arange_inclusive(end: f64, step: f64) -> impl Iterator<Item = f64> {
    let mut t = 0.0;
    std::iter::from_fn(move || {
        if step > 0.0 && t < end + step {
            let v = t;
            t += step;
            Some(v)
        } else {
            None
        }
    })
}
