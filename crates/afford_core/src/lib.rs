//! # afford_core: Car Affordability Grid Search
//!
//! ## Role
//!
//! afford_core is the kernel of the affordability tool, providing:
//! - Budget parameter types (`types::params`)
//! - Affordable-scenario records (`types::scenario`)
//! - Error types: `AffordError` (`types::error`)
//! - Amortizing-loan payment math (`math::amortization`)
//! - Grid enumeration and ranking (`search`)
//!
//! ## Design
//!
//! The whole computation is a bounded search over a 3-dimensional discrete
//! grid (down payment x interest rate x loan amount) followed by a stable
//! sort on total affordable price. It is pure and deterministic: no I/O, no
//! shared mutable state, no randomness. A fresh call restarts the search.
//!
//! ## Usage Examples
//!
//! ```rust
//! use afford_core::search::{affordability, best};
//! use afford_core::types::BudgetParameters;
//!
//! let params = BudgetParameters::default();
//! let ranked = affordability(&params);
//!
//! let top = best(&ranked).expect("defaults always afford something");
//! assert!(top.monthly_payment <= params.max_monthly_payment);
//! assert!(top.max_car_price >= 31_000.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod search;
pub mod types;
