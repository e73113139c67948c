//! Sales-over-time report
//!
//! Net sales summed into the chronological buckets of the reporting period:
//! 7-day buckets within a quarter, calendar months across the trailing
//! twelve-month window. Every bucket appears in order, zeros included; the
//! series is never re-sorted by value.

use std::io::Write;

use tracing::warn;

use crate::engine::TransactionFilter;
use crate::error::{SalesError, SalesResult};
use crate::models::{DealerId, Money, ReportPeriod};
use crate::store::SalesStore;

use super::category_breakdown::resolve_dealer_name;

/// One bucket of the time series
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    /// Bucket label ("1/1-1/7" or "Oct 2024")
    pub label: String,
    /// Summed sales amount for the bucket
    pub value: Money,
}

/// Net sales over time
#[derive(Debug, Clone)]
pub struct SalesOverTimeReport {
    /// Resolved dealer name, when a dealer filter was active
    pub dealer: Option<String>,
    /// The reporting period
    pub period: ReportPeriod,
    /// Chronological series, one point per bucket
    pub points: Vec<SeriesPoint>,
    /// Sum of all points (equals the filtered transaction total)
    pub total: Money,
}

impl SalesOverTimeReport {
    /// Generate the series for a dealer/period selection
    pub fn generate(
        store: &SalesStore,
        dealer: Option<DealerId>,
        period: &ReportPeriod,
    ) -> SalesResult<Self> {
        let filter = TransactionFilter::new(dealer, period);
        let buckets = period.buckets();

        let mut values = vec![Money::zero(); buckets.len()];
        let mut total = Money::zero();

        for txn in filter.apply(store.transactions()) {
            // The date filter already guarantees the date is in range
            match period.bucket_index(txn.date) {
                Some(index) => {
                    values[index] += txn.amount;
                    total += txn.amount;
                }
                None => warn!(date = %txn.date, "transaction date outside resolved period"),
            }
        }

        let points = buckets
            .into_iter()
            .map(|bucket| SeriesPoint {
                value: values[bucket.index],
                label: bucket.label,
            })
            .collect();

        Ok(Self {
            dealer: resolve_dealer_name(store, dealer),
            period: period.clone(),
            points,
            total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Net Sales - {}\n", self.period.display_label()));
        output.push_str(&format!(
            "Dealer: {}\n",
            self.dealer.as_deref().unwrap_or("All Dealers")
        ));
        output.push_str(&format!(
            "Total: {}\n\n",
            crate::display::format_usd(self.total)
        ));

        let max = self
            .points
            .iter()
            .map(|p| p.value.cents())
            .max()
            .unwrap_or(0) as f64;

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>12}  {}\n",
                point.label,
                crate::display::format_usd(point.value),
                crate::display::format_bar(point.value.cents() as f64, max, 30),
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SalesResult<()> {
        writeln!(writer, "Period,Dealer,Bucket,Amount")
            .map_err(|e| SalesError::Export(e.to_string()))?;

        let dealer = self.dealer.as_deref().unwrap_or("All Dealers");
        for point in &self.points {
            writeln!(
                writer,
                "{},{},{},{:.2}",
                self.period,
                dealer,
                point.label,
                point.value.cents() as f64 / 100.0
            )
            .map_err(|e| SalesError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Customer, CustomerId, Dealer, Transaction};
    use chrono::NaiveDate;

    fn store() -> SalesStore {
        let dealers = vec![
            Dealer::new(DealerId::new(1), "Barrett"),
            Dealer::new(DealerId::new(2), "Landus"),
        ];
        let customers = vec![
            Customer::new(CustomerId::new(1), "Customer A", DealerId::new(1)),
            Customer::new(CustomerId::new(2), "Customer B", DealerId::new(2)),
        ];
        let transactions = vec![
            // First week of Q1 2025
            Transaction::new(
                Money::from_dollars(100),
                Category::Herbicide,
                None,
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            ),
            Transaction::new(
                Money::from_dollars(25),
                Category::Fungicide,
                None,
                CustomerId::new(2),
                DealerId::new(2),
                NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            ),
            // Second week
            Transaction::new(
                Money::from_dollars(50),
                Category::Herbicide,
                None,
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            ),
            // Last day of the quarter
            Transaction::new(
                Money::from_dollars(75),
                Category::Adjuvants,
                None,
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            ),
            // Outside the quarter
            Transaction::new(
                Money::from_dollars(999),
                Category::Herbicide,
                None,
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            ),
        ];
        SalesStore::new(dealers, customers, Vec::new(), transactions)
    }

    #[test]
    fn test_weekly_series_for_quarter() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = SalesOverTimeReport::generate(&store(), None, &period).unwrap();

        // Q1 2025 spans 90 days -> 13 weekly buckets
        assert_eq!(report.points.len(), 13);
        assert_eq!(report.points[0].value.dollars(), 125);
        assert_eq!(report.points[1].value.dollars(), 50);
        assert_eq!(report.points[12].value.dollars(), 75);
        assert_eq!(report.total.dollars(), 250);
    }

    #[test]
    fn test_zero_buckets_present() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = SalesOverTimeReport::generate(&store(), None, &period).unwrap();

        let zero_count = report.points.iter().filter(|p| p.value.is_zero()).count();
        assert_eq!(zero_count, 10);
    }

    #[test]
    fn test_series_total_matches_filter_total() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let store = store();
        let report = SalesOverTimeReport::generate(&store, None, &period).unwrap();

        let filter = TransactionFilter::new(None, &period);
        assert_eq!(report.total, filter.total(store.transactions()));

        let point_sum: Money = report.points.iter().map(|p| p.value).sum();
        assert_eq!(point_sum, report.total);
    }

    #[test]
    fn test_dealer_filter() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report =
            SalesOverTimeReport::generate(&store(), Some(DealerId::new(2)), &period).unwrap();

        assert_eq!(report.total.dollars(), 25);
        assert_eq!(report.points[0].value.dollars(), 25);
    }

    #[test]
    fn test_monthly_series_for_trailing_window() {
        let report =
            SalesOverTimeReport::generate(&store(), None, &ReportPeriod::Trailing12).unwrap();

        assert_eq!(report.points.len(), 12);
        assert_eq!(report.points[0].label, "Oct 2024");
        assert_eq!(report.points[3].label, "Jan 2025");
        // All the Q1 transactions land in January except the March one
        assert_eq!(report.points[3].value.dollars(), 175);
        assert_eq!(report.points[5].value.dollars(), 75);
        // The April transaction is inside the trailing window
        assert_eq!(report.points[6].value.dollars(), 999);
    }

    #[test]
    fn test_export_csv() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = SalesOverTimeReport::generate(&store(), None, &period).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Period,Dealer,Bucket,Amount"));
        assert!(csv.contains("Q1 2025,All Dealers,1/1-1/7,125.00"));
        // One line per bucket plus the header
        assert_eq!(csv.lines().count(), 14);
    }
}
