//! Budget parameter types.
//!
//! This module provides the immutable parameter set that drives one
//! affordability search, with conventional defaults for a mid-size budget.

use serde::{Deserialize, Serialize};

/// Budget constraints for one affordability search.
///
/// Supplied once per run and never mutated during enumeration. All monetary
/// values are in whole currency units; rates are nominal annual percentages.
///
/// # Fields
///
/// - `max_monthly_payment`: ceiling on the amortizing monthly payment
/// - `loan_term_months`: amortization period
/// - `max_down_payment`: upper bound of the down-payment axis
/// - `trade_in`: flat addend to every affordable price
/// - `min_interest_rate` / `max_interest_rate`: rate range searched
///   (`min <= max` for a non-empty axis)
/// - `interest_step`: decrement granularity of the rate axis
///
/// # Examples
///
/// ```
/// use afford_core::types::BudgetParameters;
///
/// // Use default parameters
/// let params = BudgetParameters::default();
/// assert_eq!(params.loan_term_months, 60);
///
/// // Custom parameters
/// let params = BudgetParameters::builder()
///     .max_monthly_payment(800.0)
///     .max_down_payment(15_000.0)
///     .build();
/// assert!((params.max_monthly_payment - 800.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetParameters {
    /// Monthly payment ceiling.
    ///
    /// Scenarios whose amortizing payment exceeds this value are rejected.
    /// Default: 750
    pub max_monthly_payment: f64,

    /// Loan term in months.
    ///
    /// Default: 60
    pub loan_term_months: u32,

    /// Upper bound for the down-payment search axis.
    ///
    /// The axis descends from here in fixed steps of 5000 down to zero.
    /// Default: 20000
    pub max_down_payment: f64,

    /// Trade-in value added flat to every affordable price.
    ///
    /// Default: 6000
    pub trade_in: f64,

    /// Lower bound of the interest-rate range (annual percent).
    ///
    /// Default: 5.0
    pub min_interest_rate: f64,

    /// Upper bound of the interest-rate range (annual percent).
    ///
    /// Default: 6.0
    pub max_interest_rate: f64,

    /// Decrement granularity of the rate axis (percentage points).
    ///
    /// Default: 0.5
    pub interest_step: f64,
}

impl Default for BudgetParameters {
    fn default() -> Self {
        Self {
            max_monthly_payment: 750.0,
            loan_term_months: 60,
            max_down_payment: 20_000.0,
            trade_in: 6_000.0,
            min_interest_rate: 5.0,
            max_interest_rate: 6.0,
            interest_step: 0.5,
        }
    }
}

impl BudgetParameters {
    /// Create a new parameter set with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter builder for fluent construction.
    pub fn builder() -> BudgetParametersBuilder {
        BudgetParametersBuilder::new()
    }

    /// Set the monthly payment ceiling.
    pub fn with_max_monthly_payment(mut self, ceiling: f64) -> Self {
        self.max_monthly_payment = ceiling;
        self
    }

    /// Set the loan term in months.
    pub fn with_loan_term_months(mut self, months: u32) -> Self {
        self.loan_term_months = months;
        self
    }

    /// Set the maximum down payment.
    pub fn with_max_down_payment(mut self, down: f64) -> Self {
        self.max_down_payment = down;
        self
    }

    /// Set the trade-in value.
    pub fn with_trade_in(mut self, trade_in: f64) -> Self {
        self.trade_in = trade_in;
        self
    }

    /// Set the interest-rate range.
    pub fn with_rate_range(mut self, min: f64, max: f64) -> Self {
        self.min_interest_rate = min;
        self.max_interest_rate = max;
        self
    }

    /// Set the rate-axis step.
    pub fn with_interest_step(mut self, step: f64) -> Self {
        self.interest_step = step;
        self
    }
}

/// Builder for [`BudgetParameters`].
///
/// Provides a fluent interface for constructing parameter sets.
#[derive(Debug, Clone)]
pub struct BudgetParametersBuilder {
    params: BudgetParameters,
}

impl BudgetParametersBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            params: BudgetParameters::default(),
        }
    }

    /// Set the monthly payment ceiling.
    pub fn max_monthly_payment(mut self, ceiling: f64) -> Self {
        self.params.max_monthly_payment = ceiling;
        self
    }

    /// Set the loan term in months.
    pub fn loan_term_months(mut self, months: u32) -> Self {
        self.params.loan_term_months = months;
        self
    }

    /// Set the maximum down payment.
    pub fn max_down_payment(mut self, down: f64) -> Self {
        self.params.max_down_payment = down;
        self
    }

    /// Set the trade-in value.
    pub fn trade_in(mut self, trade_in: f64) -> Self {
        self.params.trade_in = trade_in;
        self
    }

    /// Set the minimum interest rate.
    pub fn min_interest_rate(mut self, rate: f64) -> Self {
        self.params.min_interest_rate = rate;
        self
    }

    /// Set the maximum interest rate.
    pub fn max_interest_rate(mut self, rate: f64) -> Self {
        self.params.max_interest_rate = rate;
        self
    }

    /// Set the rate-axis step.
    pub fn interest_step(mut self, step: f64) -> Self {
        self.params.interest_step = step;
        self
    }

    /// Build the parameter set.
    pub fn build(self) -> BudgetParameters {
        self.params
    }
}

impl Default for BudgetParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}
