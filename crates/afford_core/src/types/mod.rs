//! Budget parameter, scenario, and error types.
//!
//! This module provides:
//! - `params`: Immutable budget parameter set supplied once per search
//! - `scenario`: Affordable-scenario output records
//! - `error`: Structured error types for empty-result conditions
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`BudgetParameters`] from `params`
//! - [`Scenario`] from `scenario`
//! - [`AffordError`] from `error`

pub mod error;
pub mod params;
pub mod scenario;

// Re-export commonly used types at module level
pub use error::AffordError;
pub use params::BudgetParameters;
pub use scenario::Scenario;
