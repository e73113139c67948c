//! Core data models for salesdash
//!
//! This module contains all the data structures that represent the sales
//! domain: dealers, customers, products, transactions, and reporting periods.

pub mod category;
pub mod customer;
pub mod dealer;
pub mod ids;
pub mod money;
pub mod period;
pub mod product;
pub mod transaction;

pub use category::Category;
pub use customer::Customer;
pub use dealer::Dealer;
pub use ids::{CustomerId, DealerId, ProductId};
pub use money::Money;
pub use period::{PeriodParseError, ReportPeriod, TimeBucket};
pub use product::Product;
pub use transaction::Transaction;
