//! Error types for structured error handling.
//!
//! This module provides:
//! - `AffordError`: Errors from affordability searches that came up empty

use thiserror::Error;

/// Empty-result conditions of an affordability search.
///
/// Enumeration itself never fails: an unsatisfiable parameter set simply
/// produces an empty sequence. These errors exist for callers that need
/// "the best scenario" and must report emptiness instead of indexing out
/// of range.
///
/// # Variants
/// - `EmptySearchSpace`: No grid points existed at all (inverted rate range
///   or negative down-payment bound)
/// - `NoAffordableOption`: The grid was searched but every candidate exceeded
///   the payment ceiling
///
/// # Examples
/// ```
/// use afford_core::types::AffordError;
///
/// let err = AffordError::EmptySearchSpace {
///     min_rate: 8.0,
///     max_rate: 5.0,
/// };
/// assert!(format!("{}", err).contains("empty search space"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AffordError {
    /// The parameter set produced no grid points to evaluate.
    #[error("empty search space: rate range [{min_rate}, {max_rate}] or down-payment bound produced no candidates")]
    EmptySearchSpace {
        /// Lower bound of the requested rate range.
        min_rate: f64,
        /// Upper bound of the requested rate range.
        max_rate: f64,
    },

    /// Every candidate's monthly payment exceeded the ceiling.
    #[error("no affordable option: every candidate exceeds the {ceiling:.2} monthly ceiling")]
    NoAffordableOption {
        /// The monthly payment ceiling that rejected every candidate.
        ceiling: f64,
    },
}
