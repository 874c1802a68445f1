//! Level-payment formula for fixed-rate amortizing loans.

use num_traits::Float;

/// Level monthly payment that fully repays `loan_amount` over
/// `term_months` at the given nominal annual rate.
///
/// Uses the standard amortizing-loan formula
/// `L * r / (1 - (1 + r)^-n)` with the monthly rate
/// `r = annual_rate_percent / 100 / 12`. A zero monthly rate degenerates the
/// formula to straight principal division `L / n`.
///
/// For a fixed positive rate the payment is strictly increasing in
/// `loan_amount`; the grid search relies on this to stop the loan-amount
/// axis at the first unaffordable point.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Arguments
///
/// * `loan_amount` - Financed principal
/// * `annual_rate_percent` - Nominal annual rate as a percentage (e.g., 5.5)
/// * `term_months` - Amortization period in months (must be non-zero)
///
/// # Example
///
/// ```
/// use afford_core::math::monthly_payment;
///
/// // 60-month loan at 0%: straight division
/// let p = monthly_payment(60_000.0_f64, 0.0, 60);
/// assert!((p - 1_000.0).abs() < 1e-12);
///
/// // Positive rate costs more per month than zero rate
/// let p = monthly_payment(60_000.0_f64, 6.0, 60);
/// assert!(p > 1_000.0);
/// ```
pub fn monthly_payment<T: Float>(loan_amount: T, annual_rate_percent: T, term_months: u32) -> T {
    let months = T::from(term_months).unwrap();
    let monthly_rate = annual_rate_percent / T::from(100.0).unwrap() / T::from(12.0).unwrap();

    if monthly_rate > T::zero() {
        let discount = T::one() - (T::one() + monthly_rate).powf(-months);
        loan_amount * monthly_rate / discount
    } else {
        loan_amount / months
    }
}
