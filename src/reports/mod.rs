//! Reports module for salesdash
//!
//! The reporting facade: five report types, each composing the same
//! pipeline (resolve period, filter by dealer and date, group, rank and
//! shape) with a different grouping key. Reports are pure functions of the
//! store and their arguments; identical inputs always produce identical
//! output.

pub mod category_breakdown;
pub mod dealer_summary;
pub mod product_breakdown;
pub mod sales_over_time;
pub mod top_customers;

pub use category_breakdown::{CategoryBreakdownReport, CategoryRow};
pub use dealer_summary::{DealerRow, DealerSummaryReport};
pub use product_breakdown::{CategoryProductRow, ProductBreakdownReport, ProductRow};
pub use sales_over_time::{SalesOverTimeReport, SeriesPoint};
pub use top_customers::{
    CustomerCategoryRow, CustomerDetailReport, CustomerRow, TopCustomersReport,
};
