/// Largest integer whose factorial is still a finite `f64` (`170!`).
pub const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use calcdescent::util::num::is_integral;
///
/// assert!(is_integral(5.0));
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
