//! afford - Command Line Car Affordability Search
//!
//! Computes the maximum car price a buyer can afford from budget
//! constraints by enumerating down payments, interest rates, and loan
//! amounts, then ranking the affordable combinations by total price.
//!
//! # Usage
//!
//! - `afford` - Search with default parameters
//! - `afford --max-monthly 800 --down-payment 15000 --min-rate 4.5` -
//!   Custom budget
//! - `afford --format json --top 5` - Machine-readable output

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use afford_core::search::{affordability, best_or_err};
use afford_core::types::BudgetParameters;

mod error;
mod report;

pub use error::{CliError, Result};

/// Car affordability search CLI
#[derive(Parser)]
#[command(name = "afford")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum monthly payment
    #[arg(long, default_value_t = 750.0)]
    max_monthly: f64,

    /// Loan term in months
    #[arg(long, default_value_t = 60)]
    loan_term: u32,

    /// Maximum down payment
    #[arg(long, default_value_t = 20_000.0)]
    down_payment: f64,

    /// Trade-in value
    #[arg(long, default_value_t = 6_000.0)]
    trade_in: f64,

    /// Minimum interest rate (annual percent)
    #[arg(long, default_value_t = 5.0)]
    min_rate: f64,

    /// Maximum interest rate (annual percent)
    #[arg(long, default_value_t = 6.0)]
    max_rate: f64,

    /// Interest rate step for the search
    #[arg(long, default_value_t = 0.5)]
    interest_step: f64,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,

    /// Number of ranked scenarios to report
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let params = BudgetParameters::builder()
        .max_monthly_payment(cli.max_monthly)
        .loan_term_months(cli.loan_term)
        .max_down_payment(cli.down_payment)
        .trade_in(cli.trade_in)
        .min_interest_rate(cli.min_rate)
        .max_interest_rate(cli.max_rate)
        .interest_step(cli.interest_step)
        .build();

    info!("Searching affordable scenarios...");
    let ranked = affordability(&params);
    info!("Search complete: {} scenarios", ranked.len());

    // An empty result is a report, not a failure: print the message and
    // exit normally rather than surfacing an error.
    let top = match best_or_err(&params, &ranked) {
        Ok(top) => top,
        Err(err) => {
            println!("{}", report::no_option_message(&err));
            return Ok(());
        }
    };

    match cli.format.as_str() {
        "table" => {
            report::print_table(&ranked, cli.top);
            report::print_summary(top, &params);
        }
        "json" => {
            report::print_json(&ranked, cli.top, &params)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}
