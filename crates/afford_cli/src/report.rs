//! Result reporting: ranked table, best-option summary, JSON output.

use afford_core::types::{AffordError, BudgetParameters, Scenario};
use serde_json::json;

use crate::Result;

/// Format a monetary value as whole currency units with thousands
/// separators, e.g. `$65,500`.
pub fn format_money(value: f64) -> String {
    format!("${}", group_thousands(value.round() as i64))
}

/// Format a payment with two decimals and thousands separators in the
/// integer part, e.g. `$1,004.99`.
pub fn format_payment(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    format!("${}.{:02}", group_thousands(cents / 100), (cents % 100).abs())
}

/// Format an interest rate with two decimals, e.g. `3.90`.
///
/// Off-grid steps produce rates like `3.9000000000000004`; bounded
/// precision keeps them inside their table column.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

/// The report line for a search that found nothing affordable.
///
/// An empty result is reported as a normal message with a successful exit,
/// never as a crash or an out-of-range access.
pub fn no_option_message(err: &AffordError) -> String {
    format!("No affordable option found: {}", err)
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Print the top ranked scenarios as a box-drawing table.
pub fn print_table(ranked: &[Scenario], top: usize) {
    println!("\nTop {} Affordable Car Price Options:", top.min(ranked.len()));
    println!("┌───────────────┬─────────────┬───────────────┬─────────────┬─────────────────┐");
    println!("│ Max Car Price │ Money Down  │ Interest Rate │ Loan Amount │ Monthly Payment │");
    println!("├───────────────┼─────────────┼───────────────┼─────────────┼─────────────────┤");
    for s in ranked.iter().take(top) {
        println!(
            "│ {:>13} │ {:>11} │ {:>12}% │ {:>11} │ {:>15} │",
            format_money(s.max_car_price),
            format_money(s.down_payment),
            format_rate(s.interest_rate),
            format_money(s.loan_amount),
            format_payment(s.monthly_payment),
        );
    }
    println!("└───────────────┴─────────────┴───────────────┴─────────────┴─────────────────┘");
}

/// Print the best-option summary and echo the input parameters.
pub fn print_summary(best: &Scenario, params: &BudgetParameters) {
    println!("\nMaximum affordable car price: {}", format_money(best.max_car_price));

    println!("\nFinancial Parameters Summary:");
    println!("Monthly Payment Budget: {}", format_payment(params.max_monthly_payment));
    println!("Loan Term: {} months", params.loan_term_months);
    println!("Down Payment: {}", format_money(params.max_down_payment));
    println!("Trade-in Value: {}", format_money(params.trade_in));
    println!(
        "Interest Rate Range: {}% - {}%",
        params.min_interest_rate, params.max_interest_rate
    );

    println!("\nBest Option Details:");
    println!("Maximum Car Price: {}", format_money(best.max_car_price));
    println!("Down Payment: {}", format_money(best.down_payment));
    println!("Trade-in Value: {}", format_money(params.trade_in));
    println!("Loan Amount: {}", format_money(best.loan_amount));
    println!("Interest Rate: {}%", format_rate(best.interest_rate));
    println!("Monthly Payment: {}", format_payment(best.monthly_payment));
}

/// Print the top ranked scenarios and the parameter set as JSON.
pub fn print_json(ranked: &[Scenario], top: usize, params: &BudgetParameters) -> Result<()> {
    let doc = json!({
        "parameters": params,
        "scenarios": ranked.iter().take(top).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(65_500.0), "$65,500");
        assert_eq!(format_money(1_234_567.0), "$1,234,567");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_money_rounds() {
        assert_eq!(format_money(749.6), "$750");
    }

    #[test]
    fn test_format_payment_two_decimals() {
        assert_eq!(format_payment(741.614), "$741.61");
        assert_eq!(format_payment(1_234.5), "$1,234.50");
        assert_eq!(format_payment(750.0), "$750.00");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-4_500), "-4,500");
    }

    #[test]
    fn test_format_rate_bounded_precision() {
        assert_eq!(format_rate(3.9000000000000004), "3.90");
        assert_eq!(format_rate(5.0), "5.00");
        assert_eq!(format_rate(5.5), "5.50");
    }

    #[test]
    fn test_no_option_message_inverted_range() {
        use afford_core::search::{affordability, best_or_err};

        let params = BudgetParameters::default().with_rate_range(8.0, 5.0);
        let ranked = affordability(&params);
        let err = best_or_err(&params, &ranked).unwrap_err();

        let msg = no_option_message(&err);
        assert!(msg.starts_with("No affordable option found"));
        assert!(msg.contains("empty search space"));
    }

    #[test]
    fn test_no_option_message_unreachable_ceiling() {
        use afford_core::search::{affordability, best_or_err};

        let params = BudgetParameters::default().with_max_monthly_payment(10.0);
        let ranked = affordability(&params);
        let err = best_or_err(&params, &ranked).unwrap_err();

        let msg = no_option_message(&err);
        assert!(msg.starts_with("No affordable option found"));
        assert!(msg.contains("10.00 monthly ceiling"));
    }
}
