//! Amortization math.
//!
//! This module provides:
//! - `amortization`: Level-payment formula for fixed-rate amortizing loans
//!
//! # Re-exports
//!
//! - [`monthly_payment`] from `amortization`

pub mod amortization;

pub use amortization::monthly_payment;
