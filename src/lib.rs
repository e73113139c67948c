//! salesdash - Terminal-based sales analytics dashboard
//!
//! This library provides the reporting engine behind the salesdash CLI: a
//! set of pure query functions over an immutable in-memory table of sales
//! transactions, aggregated per dealer and reporting period into
//! display-ready breakdowns, time series, and leaderboards.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (dealers, customers, products, transactions, periods)
//! - `store`: The immutable in-memory dataset
//! - `generator`: Seeded synthetic dataset generation
//! - `engine`: Filtering, grouping, and shaping primitives
//! - `reports`: The reporting facade (five report types)
//! - `display`: Terminal formatting helpers
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use salesdash::generator;
//! use salesdash::models::ReportPeriod;
//! use salesdash::reports::CategoryBreakdownReport;
//!
//! let store = generator::generate(generator::DEFAULT_SEED);
//! let period = ReportPeriod::parse("Q1 2025").unwrap();
//! let report = CategoryBreakdownReport::generate(&store, None, &period).unwrap();
//! assert_eq!(report.rows.len(), 6);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod generator;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{SalesError, SalesResult};
pub use store::SalesStore;
