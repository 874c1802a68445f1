//! Search-axis construction for the affordability grid.
//!
//! The grid has three axes: down payment (descending), interest rate
//! (descending), and loan amount (ascending). Down-payment and rate axes are
//! generated index-based (`start - i * step`) so repeated subtraction never
//! accumulates floating-point drift.

/// Fixed decrement of the down-payment axis.
pub const DOWN_PAYMENT_STEP: f64 = 5_000.0;

/// Smallest loan amount considered.
pub const LOAN_AMOUNT_MIN: f64 = 5_000.0;

/// Largest loan amount considered (inclusive).
pub const LOAN_AMOUNT_MAX: f64 = 99_500.0;

/// Increment of the loan-amount axis.
pub const LOAN_AMOUNT_STEP: f64 = 500.0;

/// Descending down-payment axis: `max_down`, `max_down - 5000`, ... down to
/// and including the last non-negative value.
///
/// A negative `max_down` produces an empty axis.
///
/// # Example
///
/// ```
/// use afford_core::search::grid::down_payment_axis;
///
/// assert_eq!(
///     down_payment_axis(20_000.0),
///     vec![20_000.0, 15_000.0, 10_000.0, 5_000.0, 0.0]
/// );
/// assert!(down_payment_axis(-1.0).is_empty());
/// ```
pub fn down_payment_axis(max_down: f64) -> Vec<f64> {
    if max_down < 0.0 {
        return Vec::new();
    }
    // Step count is derived up front; the float-to-int cast saturates, so
    // there is no index to overflow however large the bound.
    let steps = (max_down / DOWN_PAYMENT_STEP).floor() as u64;
    (0..=steps)
        .map(|i| max_down - i as f64 * DOWN_PAYMENT_STEP)
        .collect()
}

/// Descending interest-rate axis: `max_rate`, `max_rate - step`, ...
///
/// The lower boundary is inclusive with a half-step tolerance, so a value
/// that lands on `min_rate` up to half a step below it (float drift) is
/// still produced. An inverted range or non-positive step yields an empty
/// axis.
///
/// # Example
///
/// ```
/// use afford_core::search::grid::interest_rate_axis;
///
/// assert_eq!(interest_rate_axis(5.0, 6.0, 0.5), vec![6.0, 5.5, 5.0]);
/// assert!(interest_rate_axis(8.0, 5.0, 0.5).is_empty());
/// ```
pub fn interest_rate_axis(min_rate: f64, max_rate: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return Vec::new();
    }
    let span = max_rate - (min_rate - step / 2.0);
    if span < 0.0 {
        return Vec::new();
    }
    let steps = (span / step).floor() as u64;
    (0..=steps).map(|i| max_rate - i as f64 * step).collect()
}

/// Ascending loan-amount axis: 5000, 5500, ... 99500.
///
/// Bounds and step are fixed constants of the search, not parameters.
pub fn loan_amount_axis() -> impl Iterator<Item = f64> {
    let steps = ((LOAN_AMOUNT_MAX - LOAN_AMOUNT_MIN) / LOAN_AMOUNT_STEP) as u32;
    (0..=steps).map(|i| LOAN_AMOUNT_MIN + f64::from(i) * LOAN_AMOUNT_STEP)
}
