//! Grid enumeration and ranking.
//!
//! This module provides:
//! - `grid`: Axis construction for the 3-dimensional search grid
//! - [`enumerate`]: Walk the grid and collect every affordable scenario
//! - [`rank`]: Stable sort by total affordable price, descending
//! - [`affordability`]: Enumerate and rank in one call
//! - [`best`] / [`best_or_err`]: Head of the ranked sequence
//!
//! The search is pure and deterministic: identical parameters produce
//! identical ordered sequences.

pub mod grid;

use crate::math::monthly_payment;
use crate::types::{AffordError, BudgetParameters, Scenario};

/// Enumerate every affordable scenario in the search grid.
///
/// Walks down payments (descending), interest rates (descending), and loan
/// amounts (ascending). For a fixed `(down payment, rate)` pair the monthly
/// payment rises monotonically with the loan amount, so the first loan
/// amount over the ceiling ends the inner axis for that pair without
/// skipping any affordable candidate.
///
/// The returned sequence is in enumeration order, not ranked; an
/// unsatisfiable parameter set yields an empty sequence rather than an
/// error.
///
/// # Example
///
/// ```
/// use afford_core::search::enumerate;
/// use afford_core::types::BudgetParameters;
///
/// let scenarios = enumerate(&BudgetParameters::default());
/// assert!(!scenarios.is_empty());
/// assert!(scenarios.iter().all(|s| s.monthly_payment <= 750.0));
/// ```
pub fn enumerate(params: &BudgetParameters) -> Vec<Scenario> {
    let down_payments = grid::down_payment_axis(params.max_down_payment);
    let rates = grid::interest_rate_axis(
        params.min_interest_rate,
        params.max_interest_rate,
        params.interest_step,
    );

    let mut scenarios = Vec::new();
    for &down_payment in &down_payments {
        for &rate in &rates {
            for loan_amount in grid::loan_amount_axis() {
                let payment = monthly_payment(loan_amount, rate, params.loan_term_months);
                if payment > params.max_monthly_payment {
                    break;
                }
                scenarios.push(Scenario::new(
                    down_payment,
                    rate,
                    loan_amount,
                    params.trade_in,
                    payment,
                ));
            }
        }
    }
    scenarios
}

/// Stable sort by `max_car_price`, descending.
///
/// Ties keep enumeration order: descending down payment, then descending
/// rate, then ascending loan amount. No secondary sort key is applied.
pub fn rank(mut scenarios: Vec<Scenario>) -> Vec<Scenario> {
    scenarios.sort_by(|a, b| b.max_car_price.total_cmp(&a.max_car_price));
    scenarios
}

/// Enumerate and rank in one call.
///
/// # Example
///
/// ```
/// use afford_core::search::affordability;
/// use afford_core::types::BudgetParameters;
///
/// let ranked = affordability(&BudgetParameters::default());
/// assert!(ranked[0].max_car_price >= ranked[ranked.len() - 1].max_car_price);
/// ```
pub fn affordability(params: &BudgetParameters) -> Vec<Scenario> {
    rank(enumerate(params))
}

/// Head of a ranked sequence, if any.
pub fn best(ranked: &[Scenario]) -> Option<&Scenario> {
    ranked.first()
}

/// Head of a ranked sequence, or a structured empty-result error.
///
/// Distinguishes a search space that was empty before any payment was
/// computed (inverted rate range, negative down-payment bound) from a grid
/// whose every candidate exceeded the ceiling.
///
/// # Example
///
/// ```
/// use afford_core::search::{affordability, best_or_err};
/// use afford_core::types::{AffordError, BudgetParameters};
///
/// let params = BudgetParameters::default().with_rate_range(8.0, 5.0);
/// let ranked = affordability(&params);
/// assert!(matches!(
///     best_or_err(&params, &ranked),
///     Err(AffordError::EmptySearchSpace { .. })
/// ));
/// ```
pub fn best_or_err<'a>(
    params: &BudgetParameters,
    ranked: &'a [Scenario],
) -> Result<&'a Scenario, AffordError> {
    if let Some(top) = ranked.first() {
        return Ok(top);
    }

    let no_grid = grid::down_payment_axis(params.max_down_payment).is_empty()
        || grid::interest_rate_axis(
            params.min_interest_rate,
            params.max_interest_rate,
            params.interest_step,
        )
        .is_empty();

    if no_grid {
        Err(AffordError::EmptySearchSpace {
            min_rate: params.min_interest_rate,
            max_rate: params.max_interest_rate,
        })
    } else {
        Err(AffordError::NoAffordableOption {
            ceiling: params.max_monthly_payment,
        })
    }
}
