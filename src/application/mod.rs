//! Application layer: the balance accumulator, the settlement matcher, the
//! in-memory trip session built on top of them and the export boundary.
//!
//! Balances and settlements are always recomputed from the full expense list.
//! Nothing here keeps running totals.

pub mod balances;
pub mod export;
pub mod settlement;
pub mod trip;
