//! Affordable-scenario output records.

use serde::{Deserialize, Serialize};

/// One accepted grid point of the affordability search.
///
/// A scenario is a combination of down payment, interest rate, and loan
/// amount whose amortizing monthly payment stays within the buyer's ceiling.
/// Scenarios have no identity beyond their field values: the full set is
/// materialized, ranked, and discarded after reporting.
///
/// Invariants maintained by the enumerator:
/// - `monthly_payment <= max_monthly_payment` of the generating parameters
/// - `max_car_price == loan_amount + down_payment + trade_in` exactly
///
/// # Examples
///
/// ```
/// use afford_core::types::Scenario;
///
/// let s = Scenario::new(20_000.0, 6.0, 15_000.0, 6_000.0, 290.0);
/// assert!((s.max_car_price - 41_000.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Total affordable price: loan amount + down payment + trade-in.
    pub max_car_price: f64,

    /// Cash down payment for this combination.
    pub down_payment: f64,

    /// Nominal annual interest rate (percent).
    pub interest_rate: f64,

    /// Financed principal.
    pub loan_amount: f64,

    /// Level monthly payment over the loan term.
    pub monthly_payment: f64,
}

impl Scenario {
    /// Assemble a scenario from its grid coordinates and computed payment.
    ///
    /// The price decomposition is applied here so every constructed scenario
    /// satisfies it by construction.
    pub fn new(
        down_payment: f64,
        interest_rate: f64,
        loan_amount: f64,
        trade_in: f64,
        monthly_payment: f64,
    ) -> Self {
        Self {
            max_car_price: loan_amount + down_payment + trade_in,
            down_payment,
            interest_rate,
            loan_amount,
            monthly_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_decomposition() {
        let s = Scenario::new(10_000.0, 5.5, 25_500.0, 6_000.0, 487.0);
        assert_eq!(s.max_car_price, s.loan_amount + s.down_payment + 6_000.0);
    }

    #[test]
    fn test_zero_down_zero_trade() {
        let s = Scenario::new(0.0, 5.0, 5_000.0, 0.0, 94.36);
        assert_eq!(s.max_car_price, 5_000.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = Scenario::new(20_000.0, 6.0, 15_000.0, 6_000.0, 290.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
