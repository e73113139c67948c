//! Dealer summary report
//!
//! The headline numbers: net sales across all dealers for the period, and
//! either one dealer's total with its share of the whole (when filtered) or
//! a per-dealer breakdown (when unfiltered). Breakdown rows keep reference
//! order so the dealer legend never jumps around between periods.

use std::io::Write;

use crate::engine::{group, shape, TransactionFilter};
use crate::error::{SalesError, SalesResult};
use crate::models::{DealerId, Money, ReportPeriod};
use crate::store::SalesStore;

/// One dealer's slice of the period total
#[derive(Debug, Clone)]
pub struct DealerRow {
    /// The dealer
    pub id: DealerId,
    /// Dealer name
    pub name: String,
    /// Summed sales amount
    pub amount: Money,
    /// Share of the all-dealer total (0.0 when the total is zero)
    pub percentage: f64,
}

/// Sales summary across the dealer network
#[derive(Debug, Clone)]
pub struct DealerSummaryReport {
    /// The reporting period
    pub period: ReportPeriod,
    /// Net sales across all dealers for the period
    pub total: Money,
    /// The filtered dealer's numbers, when a dealer filter was active
    pub dealer: Option<DealerRow>,
    /// Per-dealer breakdown in reference order, when unfiltered
    pub breakdown: Vec<DealerRow>,
}

impl DealerSummaryReport {
    /// Generate the summary for a dealer/period selection
    pub fn generate(
        store: &SalesStore,
        dealer: Option<DealerId>,
        period: &ReportPeriod,
    ) -> SalesResult<Self> {
        // The all-dealer total is always date-filtered only
        let unfiltered = TransactionFilter::new(None, period);
        let total = unfiltered.total(store.transactions());

        match dealer {
            Some(id) => {
                let narrowed = TransactionFilter::new(Some(id), period);
                let amount = narrowed.total(store.transactions());
                let name = match store.dealer(id) {
                    Some(d) => d.name.clone(),
                    None => format!("Dealer {}", id),
                };

                Ok(Self {
                    period: period.clone(),
                    total,
                    dealer: Some(DealerRow {
                        id,
                        name,
                        amount,
                        percentage: shape::percentage_of(amount, total),
                    }),
                    breakdown: Vec::new(),
                })
            }
            None => {
                let sums = group::sum_by(unfiltered.apply(store.transactions()), |t| t.dealer_id);
                let breakdown = store
                    .dealers()
                    .iter()
                    .map(|d| {
                        let amount = sums.get(&d.id).copied().unwrap_or_default();
                        DealerRow {
                            id: d.id,
                            name: d.name.clone(),
                            amount,
                            percentage: shape::percentage_of(amount, total),
                        }
                    })
                    .collect();

                Ok(Self {
                    period: period.clone(),
                    total,
                    dealer: None,
                    breakdown,
                })
            }
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Sales Summary - {}\n\n", self.period.display_label()));
        output.push_str(&format!(
            "Total Sales: {}\n",
            crate::display::format_usd(self.total)
        ));

        match &self.dealer {
            Some(row) => {
                output.push_str(&format!(
                    "{} Sales: {}\n",
                    row.name,
                    crate::display::format_usd(row.amount)
                ));
                output.push_str(&format!(
                    "Dealer Revenue Share: {}\n",
                    crate::display::format_percentage(row.percentage)
                ));
            }
            None => {
                output.push('\n');
                output.push_str(&format!(
                    "{:<16} {:>12} {:>8}\n",
                    "Dealer", "Amount", "%"
                ));
                output.push_str(&crate::display::separator(40));
                output.push('\n');

                for row in &self.breakdown {
                    output.push_str(&format!(
                        "{:<16} {:>12} {:>8}\n",
                        row.name,
                        crate::display::format_usd(row.amount),
                        crate::display::format_percentage(row.percentage),
                    ));
                }
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SalesResult<()> {
        writeln!(writer, "Period,Dealer,Amount,Percentage")
            .map_err(|e| SalesError::Export(e.to_string()))?;

        let rows: Vec<&DealerRow> = match &self.dealer {
            Some(row) => vec![row],
            None => self.breakdown.iter().collect(),
        };

        for row in rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.1}",
                self.period,
                row.name,
                row.amount.cents() as f64 / 100.0,
                row.percentage
            )
            .map_err(|e| SalesError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},All Dealers,{:.2},100.0",
            self.period,
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| SalesError::Export(e.to_string()))?;

        Ok(())
    }
}
