//! Category and product breakdown report
//!
//! Two-level aggregation: net sales per category, with a nested per-product
//! breakdown inside each category. The product rows enumerate the full
//! catalog for the category rather than just observed transactions, so
//! zero-sales products still render.

use std::io::Write;

use tracing::warn;

use crate::engine::{group, shape, TransactionFilter};
use crate::error::{SalesError, SalesResult};
use crate::models::{Category, DealerId, Money, ProductId, ReportPeriod};
use crate::store::SalesStore;

use super::category_breakdown::resolve_dealer_name;

/// One product's sales within its category
#[derive(Debug, Clone)]
pub struct ProductRow {
    /// The product
    pub product_id: ProductId,
    /// Product name
    pub name: String,
    /// Summed sales amount
    pub amount: Money,
}

/// One category with its nested product breakdown
#[derive(Debug, Clone)]
pub struct CategoryProductRow {
    /// The category
    pub category: Category,
    /// Display name
    pub name: String,
    /// Category total, including transactions with no product reference
    pub amount: Money,
    /// Share of the report total (0.0 when the total is zero)
    pub percentage: f64,
    /// Products in this category, sorted by amount descending
    pub products: Vec<ProductRow>,
}

/// Net sales by category and product
#[derive(Debug, Clone)]
pub struct ProductBreakdownReport {
    /// Resolved dealer name, when a dealer filter was active
    pub dealer: Option<String>,
    /// The reporting period
    pub period: ReportPeriod,
    /// One row per category, sorted by amount descending
    pub rows: Vec<CategoryProductRow>,
    /// Sum of all category totals
    pub total: Money,
}

impl ProductBreakdownReport {
    /// Generate the breakdown for a dealer/period selection
    pub fn generate(
        store: &SalesStore,
        dealer: Option<DealerId>,
        period: &ReportPeriod,
    ) -> SalesResult<Self> {
        let filter = TransactionFilter::new(dealer, period);

        let category_sums = group::sum_by(filter.apply(store.transactions()), |t| t.category);
        let product_sums = group::sum_by_some(filter.apply(store.transactions()), |t| t.product_id);

        // A product id in the transactions but missing from the catalog is a
        // data inconsistency; skip it rather than fail the whole report
        for product_id in product_sums.keys() {
            if store.product(*product_id).is_none() {
                warn!(product = %product_id, "skipping unknown product reference");
            }
        }

        let total: Money = category_sums.values().copied().sum();

        let mut rows: Vec<CategoryProductRow> = Category::ALL
            .iter()
            .map(|&category| {
                let amount = category_sums.get(&category).copied().unwrap_or_default();

                let mut products: Vec<ProductRow> = store
                    .products_in(category)
                    .into_iter()
                    .map(|product| ProductRow {
                        product_id: product.id,
                        name: product.name.clone(),
                        amount: product_sums.get(&product.id).copied().unwrap_or_default(),
                    })
                    .collect();
                shape::rank_by_value_desc(&mut products, |p| p.amount, None);

                CategoryProductRow {
                    category,
                    name: category.display_name(),
                    amount,
                    percentage: shape::percentage_of(amount, total),
                    products,
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

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Net Sales by Product - {}\n",
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

        for row in &self.rows {
            output.push_str(&format!(
                "{} ({}, {})\n",
                row.name.to_uppercase(),
                crate::display::format_usd(row.amount),
                crate::display::format_percentage(row.percentage),
            ));

            for product in &row.products {
                output.push_str(&format!(
                    "  {:<24} {:>12}\n",
                    product.name,
                    crate::display::format_usd(product.amount),
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SalesResult<()> {
        writeln!(writer, "Period,Dealer,Category,Product,Amount")
            .map_err(|e| SalesError::Export(e.to_string()))?;

        let dealer = self.dealer.as_deref().unwrap_or("All Dealers");
        for row in &self.rows {
            for product in &row.products {
                writeln!(
                    writer,
                    "{},{},{},{},{:.2}",
                    self.period,
                    dealer,
                    row.name,
                    product.name,
                    product.amount.cents() as f64 / 100.0
                )
                .map_err(|e| SalesError::Export(e.to_string()))?;
            }

            writeln!(
                writer,
                "{},{},{},Category Total,{:.2}",
                self.period,
                dealer,
                row.name,
                row.amount.cents() as f64 / 100.0
            )
            .map_err(|e| SalesError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, CustomerId, Dealer, Product, Transaction};
    use chrono::NaiveDate;

    fn store() -> SalesStore {
        let dealers = vec![Dealer::new(DealerId::new(1), "Barrett")];
        let customers = vec![Customer::new(
            CustomerId::new(1),
            "Customer A",
            DealerId::new(1),
        )];
        let products = vec![
            Product::new(ProductId::new(10), "Alachlore", Category::Herbicide),
            Product::new(ProductId::new(11), "Armour", Category::Herbicide),
            Product::new(ProductId::new(5), "Bluestone", Category::Fungicide),
        ];
        let transactions = vec![
            Transaction::new(
                Money::from_dollars(300),
                Category::Herbicide,
                Some(ProductId::new(10)),
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            ),
            Transaction::new(
                Money::from_dollars(100),
                Category::Herbicide,
                Some(ProductId::new(11)),
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            ),
            // No product reference: counts toward the category only
            Transaction::new(
                Money::from_dollars(40),
                Category::Herbicide,
                None,
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
            ),
            Transaction::new(
                Money::from_dollars(200),
                Category::Fungicide,
                Some(ProductId::new(5)),
                CustomerId::new(1),
                DealerId::new(1),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            ),
        ];
        SalesStore::new(dealers, customers, products, transactions)
    }

    fn row<'a>(report: &'a ProductBreakdownReport, category: Category) -> &'a CategoryProductRow {
        report
            .rows
            .iter()
            .find(|r| r.category == category)
            .unwrap()
    }

    #[test]
    fn test_two_level_totals() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = ProductBreakdownReport::generate(&store(), None, &period).unwrap();

        let herbicide = row(&report, Category::Herbicide);
        assert_eq!(herbicide.amount.dollars(), 440);
        assert_eq!(herbicide.products.len(), 2);
        assert_eq!(herbicide.products[0].name, "Alachlore");
        assert_eq!(herbicide.products[0].amount.dollars(), 300);
        assert_eq!(herbicide.products[1].amount.dollars(), 100);

        assert_eq!(report.total.dollars(), 640);
    }

    #[test]
    fn test_categories_sorted_descending() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = ProductBreakdownReport::generate(&store(), None, &period).unwrap();

        for pair in report.rows.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
        assert_eq!(report.rows[0].category, Category::Herbicide);
    }

    #[test]
    fn test_zero_sales_products_still_render() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        // Dealer 9 has no transactions at all
        let report =
            ProductBreakdownReport::generate(&store(), Some(DealerId::new(9)), &period).unwrap();

        let herbicide = row(&report, Category::Herbicide);
        assert_eq!(herbicide.products.len(), 2);
        for product in &herbicide.products {
            assert!(product.amount.is_zero());
        }
        assert!(report.total.is_zero());
    }

    #[test]
    fn test_all_categories_present() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = ProductBreakdownReport::generate(&store(), None, &period).unwrap();
        assert_eq!(report.rows.len(), Category::ALL.len());
    }

    #[test]
    fn test_export_csv() {
        let period = ReportPeriod::quarter(1, 2025).unwrap();
        let report = ProductBreakdownReport::generate(&store(), None, &period).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Period,Dealer,Category,Product,Amount"));
        assert!(csv.contains("Herbicide,Alachlore,300.00"));
        assert!(csv.contains("Herbicide,Category Total,440.00"));
    }
}
