//! Splits shared trip expenses into a short list of settling transfers.
//!
//! Expenses fold into per-participant net balances
//! ([`application::balances::compute_balances`]), which a greedy matcher turns
//! into debtor-to-creditor transfers
//! ([`application::settlement::compute_settlements`]).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logger;

pub use application::balances::{Balances, compute_balances};
pub use application::settlement::{compute_settlements, settle_balances};
