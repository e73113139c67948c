//! Category breakdown report
//!
//! Net sales summed per category for a dealer/period selection. Every
//! category in the closed set appears in the output, zero-sales categories
//! included, so chart axes stay stable across filters.

use std::io::Write;

use crate::engine::{group, shape, TransactionFilter};
use crate::error::{SalesError, SalesResult};
use crate::models::{Category, DealerId, Money, ReportPeriod};
use crate::store::SalesStore;

/// One category's share of the filtered sales
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// The category
    pub category: Category,
    /// Display name ("Herbicide")
    pub name: String,
    /// Summed sales amount
    pub amount: Money,
    /// Share of the report total (0.0 when the total is zero)
    pub percentage: f64,
}

/// Net sales by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    /// Resolved dealer name, when a dealer filter was active
    pub dealer: Option<String>,
    /// The reporting period
    pub period: ReportPeriod,
    /// One row per category, sorted by amount descending
    pub rows: Vec<CategoryRow>,
    /// Sum of all rows (equals the filtered transaction total)
    pub total: Money,
}

impl CategoryBreakdownReport {
    /// Generate the breakdown for a dealer/period selection
    pub fn generate(
        store: &SalesStore,
        dealer: Option<DealerId>,
        period: &ReportPeriod,
    ) -> SalesResult<Self> {
        let filter = TransactionFilter::new(dealer, period);
        let sums = group::sum_by(filter.apply(store.transactions()), |t| t.category);
        let total: Money = sums.values().copied().sum();

        let mut rows: Vec<CategoryRow> = Category::ALL
            .iter()
            .map(|&category| {
                let amount = sums.get(&category).copied().unwrap_or_default();
                CategoryRow {
                    category,
                    name: category.display_name(),
                    amount,
                    percentage: shape::percentage_of(amount, total),
                }
            })
            .collect();
        shape::rank_by_value_desc(&mut rows, |r| r.amount, None);

        Ok(Self {
            dealer: resolve_dealer_name(store, dealer),
            period: period.clone(),
            rows,
            total,
        })
    }

    /// Rows reordered alphabetically by display name (fixed bar-chart axis)
    pub fn rows_alphabetical(&self) -> Vec<&CategoryRow> {
        let mut rows: Vec<&CategoryRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Net Sales by Category - {}\n",
            self.period.display_label()
        ));
        output.push_str(&format!(
            "Dealer: {}\n",
            self.dealer.as_deref().unwrap_or("All Dealers")
        ));
        output.push_str(&format!(
            "Total: {}\n\n",
            crate::display::format_usd(self.total)
        ));

        output.push_str(&format!(
            "{:<16} {:>12} {:>8}  {}\n",
            "Category", "Amount", "%", "Share"
        ));
        output.push_str(&crate::display::separator(60));
        output.push('\n');

        let max = self
            .rows
            .iter()
            .map(|r| r.amount.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>12} {:>8}  {}\n",
                row.name,
                crate::display::format_usd(row.amount),
                crate::display::format_percentage(row.percentage),
                crate::display::format_bar(row.amount.cents() as f64, max, 20),
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SalesResult<()> {
        writeln!(writer, "Period,Dealer,Category,Amount,Percentage")
            .map_err(|e| SalesError::Export(e.to_string()))?;

        let dealer = self.dealer.as_deref().unwrap_or("All Dealers");
        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{:.2},{:.1}",
                self.period,
                dealer,
                row.name,
                row.amount.cents() as f64 / 100.0,
                row.percentage
            )
            .map_err(|e| SalesError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},{},TOTAL,{:.2},100.0",
            self.period,
            dealer,
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| SalesError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Resolve a dealer id to its display name, falling back to the raw id when
/// the reference table does not know it
pub(crate) fn resolve_dealer_name(store: &SalesStore, dealer: Option<DealerId>) -> Option<String> {
    dealer.map(|id| match store.dealer(id) {
        Some(d) => d.name.clone(),
        None => format!("Dealer {}", id),
    })
}
