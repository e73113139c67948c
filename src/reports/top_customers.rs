//! Top customers leaderboard
//!
//! Customer totals for a dealer/period selection, sorted descending and
//! truncated to the caller's top-N. Ties keep reference-table order, so the
//! leaderboard is deterministic. When no dealer filter is active each row
//! also carries the customer's owning dealer name.
//!
//! Also provides the per-customer category drill-down backing the customer
//! detail view (dealer-filtered but not date-filtered).

use std::io::Write;

use tracing::warn;

use crate::engine::{group, shape, TransactionFilter};
use crate::error::{SalesError, SalesResult};
use crate::models::{Category, CustomerId, DealerId, Money, ReportPeriod};
use crate::store::SalesStore;

use super::category_breakdown::resolve_dealer_name;

/// One leaderboard entry
#[derive(Debug, Clone)]
pub struct CustomerRow {
    /// The customer
    pub id: CustomerId,
    /// Customer name
    pub name: String,
    /// Owning dealer name; present only when no dealer filter is active
    pub dealer: Option<String>,
    /// Summed sales amount
    pub amount: Money,
}

/// Top transacting customers
#[derive(Debug, Clone)]
pub struct TopCustomersReport {
    /// Resolved dealer name, when a dealer filter was active
    pub dealer: Option<String>,
    /// The reporting period
    pub period: ReportPeriod,
    /// Requested leaderboard size
    pub top_n: usize,
    /// At most `top_n` rows, sorted by amount descending
    pub rows: Vec<CustomerRow>,
}

impl TopCustomersReport {
    /// Generate the leaderboard for a dealer/period selection
    pub fn generate(
        store: &SalesStore,
        dealer: Option<DealerId>,
        period: &ReportPeriod,
        top_n: usize,
    ) -> SalesResult<Self> {
        if top_n == 0 {
            return Err(SalesError::Validation(
                "leaderboard size must be positive".to_string(),
            ));
        }

        let filter = TransactionFilter::new(dealer, period);
        let sums = group::sum_by(filter.apply(store.transactions()), |t| t.customer_id);

        // Transactions pointing at customers missing from the reference
        // table are skipped, not fatal
        for customer_id in sums.keys() {
            if store.customer(*customer_id).is_none() {
                warn!(customer = %customer_id, "skipping unknown customer reference");
            }
        }

        let show_dealer = dealer.is_none();
        let mut rows: Vec<CustomerRow> = store
            .customers()
            .iter()
            .filter_map(|customer| {
                let amount = *sums.get(&customer.id)?;
                let dealer_name = show_dealer.then(|| {
                    match store.dealer(customer.dealer_id) {
                        Some(d) => d.name.clone(),
                        None => {
                            warn!(dealer = %customer.dealer_id, "customer bound to unknown dealer");
                            "N/A".to_string()
                        }
                    }
                });
                Some(CustomerRow {
                    id: customer.id,
                    name: customer.name.clone(),
                    dealer: dealer_name,
                    amount,
                })
            })
            .collect();
        shape::rank_by_value_desc(&mut rows, |r| r.amount, Some(top_n));

        Ok(Self {
            dealer: resolve_dealer_name(store, dealer),
            period: period.clone(),
            top_n,
            rows,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Top {} Transacting Customers - {}\n",
            self.top_n,
            self.period.display_label()
        ));
        output.push_str(&format!(
            "Dealer: {}\n\n",
            self.dealer.as_deref().unwrap_or("All Dealers")
        ));

        if self.rows.is_empty() {
            output.push_str("No customer data available\n");
            return output;
        }

        let show_dealer = self.dealer.is_none();
        if show_dealer {
            output.push_str(&format!(
                "{:<4} {:<30} {:<12} {:>12}\n",
                "#", "Name", "Dealer", "Amount"
            ));
        } else {
            output.push_str(&format!("{:<4} {:<30} {:>12}\n", "#", "Name", "Amount"));
        }
        output.push_str(&crate::display::separator(60));
        output.push('\n');

        for (rank, row) in self.rows.iter().enumerate() {
            if show_dealer {
                output.push_str(&format!(
                    "{:<4} {:<30} {:<12} {:>12}\n",
                    rank + 1,
                    row.name,
                    row.dealer.as_deref().unwrap_or("N/A"),
                    crate::display::format_usd(row.amount),
                ));
            } else {
                output.push_str(&format!(
                    "{:<4} {:<30} {:>12}\n",
                    rank + 1,
                    row.name,
                    crate::display::format_usd(row.amount),
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SalesResult<()> {
        writeln!(writer, "Period,Rank,Customer,Dealer,Amount")
            .map_err(|e| SalesError::Export(e.to_string()))?;

        for (rank, row) in self.rows.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                self.period,
                rank + 1,
                row.name,
                row.dealer
                    .as_deref()
                    .or(self.dealer.as_deref())
                    .unwrap_or("N/A"),
                row.amount.cents() as f64 / 100.0
            )
            .map_err(|e| SalesError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

/// One category slice of a customer's purchases
#[derive(Debug, Clone)]
pub struct CustomerCategoryRow {
    /// The category
    pub category: Category,
    /// Display name
    pub name: String,
    /// Summed sales amount
    pub amount: Money,
    /// Share of the customer's total
    pub percentage: f64,
}

/// Category breakdown for a single customer (the detail drill-down).
/// Dealer-filtered like the leaderboard, but spans all dates; categories
/// with no purchases are omitted.
#[derive(Debug, Clone)]
pub struct CustomerDetailReport {
    /// Customer name
    pub customer: String,
    /// Rows sorted by amount descending
    pub rows: Vec<CustomerCategoryRow>,
    /// The customer's total
    pub total: Money,
}

impl CustomerDetailReport {
    /// Generate the drill-down for one customer
    pub fn generate(
        store: &SalesStore,
        customer_id: CustomerId,
        dealer: Option<DealerId>,
    ) -> SalesResult<Self> {
        let customer = store
            .customer(customer_id)
            .ok_or_else(|| SalesError::customer_not_found(customer_id.to_string()))?;

        let matching = store.transactions().iter().filter(|t| {
            t.customer_id == customer_id && dealer.map_or(true, |d| t.dealer_id == d)
        });
        let sums = group::sum_by(matching, |t| t.category);
        let total: Money = sums.values().copied().sum();

        let mut rows: Vec<CustomerCategoryRow> = Category::ALL
            .iter()
            .filter_map(|&category| {
                let amount = sums.get(&category).copied()?;
                Some(CustomerCategoryRow {
                    category,
                    name: category.display_name(),
                    amount,
                    percentage: shape::percentage_of(amount, total),
                })
            })
            .collect();
        shape::rank_by_value_desc(&mut rows, |r| r.amount, None);

        Ok(Self {
            customer: customer.name.clone(),
            rows,
            total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.customer));
        output.push_str(&format!(
            "Category breakdown - Total: {}\n\n",
            crate::display::format_usd(self.total)
        ));

        if self.rows.is_empty() {
            output.push_str("No transaction data available for this customer\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>12} {:>8}\n",
                row.name,
                crate::display::format_usd(row.amount),
                crate::display::format_percentage(row.percentage),
            ));
        }

        output
    }
}
