//! The aggregation engine
//!
//! Every report follows the same pipeline: resolve the period to a date
//! interval, filter transactions by dealer and date, sum amounts by a
//! grouping key, then rank and shape the sums for display. The stages live
//! here as pure functions; the `reports` module composes them.

pub mod filter;
pub mod group;
pub mod shape;

pub use filter::TransactionFilter;
