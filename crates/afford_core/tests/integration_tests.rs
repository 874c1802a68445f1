//! Integration tests for the affordability search.
//!
//! These tests verify end-to-end behavior of enumeration and ranking across
//! the public API, plus property-based checks of the invariants the search
//! relies on.

use afford_core::math::monthly_payment;
use afford_core::search::{affordability, best, best_or_err, enumerate, grid};
use afford_core::types::{AffordError, BudgetParameters};
use proptest::prelude::*;

// ============================================================================
// End-to-End Search Flow Tests
// ============================================================================

/// Full search with default parameters produces a well-formed ranking.
#[test]
fn test_end_to_end_defaults() {
    let params = BudgetParameters::default();
    let ranked = affordability(&params);

    assert!(!ranked.is_empty());

    // Head carries the maximum price of the whole sequence.
    let top = best(&ranked).unwrap();
    for s in &ranked {
        assert!(top.max_car_price >= s.max_car_price);
    }

    // Best price floor: full down payment + trade-in + smallest loan.
    assert!(top.max_car_price >= 31_000.0);

    // Every scenario respects the ceiling and the price decomposition.
    for s in &ranked {
        assert!(s.monthly_payment <= params.max_monthly_payment);
        assert_eq!(
            s.max_car_price,
            s.loan_amount + s.down_payment + params.trade_in
        );
    }
}

/// The best option under defaults uses the full down payment and the
/// cheapest rate, maximizing the financed amount under the ceiling.
#[test]
fn test_defaults_best_option_shape() {
    let params = BudgetParameters::default();
    let ranked = affordability(&params);
    let top = best(&ranked).unwrap();

    assert_eq!(top.down_payment, 20_000.0);
    assert_eq!(top.interest_rate, 5.0);
    assert!(top.loan_amount >= 5_000.0 && top.loan_amount <= 99_500.0);
}

/// Inverted rate range yields an empty sequence and a structured error,
/// never an out-of-range access.
#[test]
fn test_inverted_rate_range_reports_no_option() {
    let params = BudgetParameters::default().with_rate_range(8.0, 5.0);
    let ranked = affordability(&params);

    assert!(ranked.is_empty());
    assert!(best(&ranked).is_none());

    let err = best_or_err(&params, &ranked).unwrap_err();
    assert_eq!(
        err,
        AffordError::EmptySearchSpace {
            min_rate: 8.0,
            max_rate: 5.0,
        }
    );
}

/// A ceiling below the cheapest grid point leaves the grid intact but
/// rejects every candidate.
#[test]
fn test_unreachable_ceiling_reports_no_option() {
    let params = BudgetParameters::default().with_max_monthly_payment(10.0);
    let ranked = affordability(&params);

    assert!(ranked.is_empty());
    assert_eq!(
        best_or_err(&params, &ranked).unwrap_err(),
        AffordError::NoAffordableOption { ceiling: 10.0 }
    );
}

/// Zero rate degenerates the payment formula to straight division.
#[test]
fn test_zero_rate_edge() {
    assert_eq!(monthly_payment(60_000.0, 0.0, 60), 1_000.0);

    let params = BudgetParameters::default()
        .with_rate_range(0.0, 0.0)
        .with_max_monthly_payment(1_000.0);
    let scenarios = enumerate(&params);

    // At zero rate the 60_000 loan sits exactly on the 1000 ceiling.
    assert!(scenarios
        .iter()
        .any(|s| s.loan_amount == 60_000.0 && s.monthly_payment == 1_000.0));
    assert!(scenarios.iter().all(|s| s.loan_amount <= 60_000.0));
}

/// Negative down-payment bound empties the search space entirely.
#[test]
fn test_negative_down_payment_bound() {
    let params = BudgetParameters::default().with_max_down_payment(-1.0);
    let ranked = affordability(&params);
    assert!(ranked.is_empty());
    assert!(matches!(
        best_or_err(&params, &ranked),
        Err(AffordError::EmptySearchSpace { .. })
    ));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn arb_params() -> impl Strategy<Value = BudgetParameters> {
    (
        100.0_f64..1_500.0,  // max_monthly_payment
        12_u32..=84,         // loan_term_months
        0.0_f64..30_000.0,   // max_down_payment
        0.0_f64..10_000.0,   // trade_in
        0.5_f64..5.0,        // min_interest_rate
        0.0_f64..3.0,        // rate spread above min
        0.25_f64..1.0,       // interest_step
    )
        .prop_map(|(ceiling, term, down, trade, min_rate, spread, step)| {
            BudgetParameters::builder()
                .max_monthly_payment(ceiling)
                .loan_term_months(term)
                .max_down_payment(down)
                .trade_in(trade)
                .min_interest_rate(min_rate)
                .max_interest_rate(min_rate + spread)
                .interest_step(step)
                .build()
        })
}

proptest! {
    /// Every emitted scenario respects the monthly-payment ceiling.
    #[test]
    fn prop_ceiling_invariant(params in arb_params()) {
        for s in enumerate(&params) {
            prop_assert!(s.monthly_payment <= params.max_monthly_payment);
        }
    }

    /// Exact price decomposition on every emitted scenario.
    #[test]
    fn prop_price_decomposition(params in arb_params()) {
        for s in enumerate(&params) {
            prop_assert_eq!(
                s.max_car_price,
                s.loan_amount + s.down_payment + params.trade_in
            );
        }
    }

    /// Two calls with identical parameters produce identical sequences.
    #[test]
    fn prop_determinism(params in arb_params()) {
        prop_assert_eq!(affordability(&params), affordability(&params));
    }

    /// The head of the ranked sequence dominates every element.
    #[test]
    fn prop_head_dominates(params in arb_params()) {
        let ranked = affordability(&params);
        if let Some(top) = best(&ranked) {
            for s in &ranked {
                prop_assert!(top.max_car_price >= s.max_car_price);
            }
        }
    }

    /// Monthly payment is strictly increasing in loan amount for any
    /// positive rate, which licenses the early exit on the inner axis.
    #[test]
    fn prop_payment_monotone_in_loan(
        rate in 0.1_f64..15.0,
        term in 12_u32..=84,
    ) {
        let mut prev = f64::NEG_INFINITY;
        for loan in grid::loan_amount_axis() {
            let p = monthly_payment(loan, rate, term);
            prop_assert!(p > prev);
            prev = p;
        }
    }
}
