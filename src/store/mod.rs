//! In-memory sales dataset
//!
//! `SalesStore` holds the transaction table plus the reference tables it
//! points into (dealers, customers, products). A store is constructed once,
//! before first use, and never mutated afterwards; every report borrows it
//! read-only, so reports can run repeatedly or concurrently without locking.
//! Rebuilding the dataset means constructing a new store.

use std::collections::{HashMap, HashSet};

use crate::error::{SalesError, SalesResult};
use crate::models::{Category, Customer, CustomerId, Dealer, DealerId, Product, ProductId, Transaction};

/// The immutable in-memory dataset every report reads from
#[derive(Debug, Clone)]
pub struct SalesStore {
    dealers: Vec<Dealer>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    transactions: Vec<Transaction>,

    dealer_index: HashMap<DealerId, usize>,
    customer_index: HashMap<CustomerId, usize>,
    product_index: HashMap<ProductId, usize>,
}

impl SalesStore {
    /// Build a store from reference tables and a transaction table
    pub fn new(
        dealers: Vec<Dealer>,
        customers: Vec<Customer>,
        products: Vec<Product>,
        transactions: Vec<Transaction>,
    ) -> Self {
        let dealer_index = dealers.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let customer_index = customers.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        let product_index = products.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

        Self {
            dealers,
            customers,
            products,
            transactions,
            dealer_index,
            customer_index,
            product_index,
        }
    }

    /// All dealers, in reference order
    pub fn dealers(&self) -> &[Dealer] {
        &self.dealers
    }

    /// All customers, in reference order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All products, in reference order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The full transaction table
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a dealer by id
    pub fn dealer(&self, id: DealerId) -> Option<&Dealer> {
        self.dealer_index.get(&id).map(|&i| &self.dealers[i])
    }

    /// Look up a customer by id
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customer_index.get(&id).map(|&i| &self.customers[i])
    }

    /// Look up a product by id
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index.get(&id).map(|&i| &self.products[i])
    }

    /// Products belonging to a category, in reference order. This is the
    /// per-category universe for breakdown reports, independent of which
    /// products actually have sales.
    pub fn products_in(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Check the dataset invariants the reports assume:
    /// unique reference ids, every customer bound to a known dealer, and
    /// every transaction consistent with the reference tables (known
    /// customer, dealer matching the customer's binding, known product whose
    /// category matches the transaction's).
    ///
    /// Reports do not call this; they warn-and-skip bad records instead so
    /// one stray row cannot blank out a whole dashboard. The generator calls
    /// it once after building a dataset.
    pub fn validate(&self) -> SalesResult<()> {
        let mut seen_dealers = HashSet::new();
        for dealer in &self.dealers {
            if !seen_dealers.insert(dealer.id) {
                return Err(SalesError::Validation(format!(
                    "duplicate dealer id: {}",
                    dealer.id
                )));
            }
        }

        let mut seen_customers = HashSet::new();
        for customer in &self.customers {
            if !seen_customers.insert(customer.id) {
                return Err(SalesError::Validation(format!(
                    "duplicate customer id: {}",
                    customer.id
                )));
            }
            if self.dealer(customer.dealer_id).is_none() {
                return Err(SalesError::InconsistentReference {
                    entity: "dealer",
                    identifier: customer.dealer_id.to_string(),
                });
            }
        }

        let mut seen_products = HashSet::new();
        for product in &self.products {
            if !seen_products.insert(product.id) {
                return Err(SalesError::Validation(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }

        for txn in &self.transactions {
            if !txn.amount.is_positive() && !txn.amount.is_zero() {
                return Err(SalesError::Validation(format!(
                    "negative transaction amount: {}",
                    txn.amount
                )));
            }

            let customer = self.customer(txn.customer_id).ok_or_else(|| {
                SalesError::InconsistentReference {
                    entity: "customer",
                    identifier: txn.customer_id.to_string(),
                }
            })?;

            if txn.dealer_id != customer.dealer_id {
                return Err(SalesError::Validation(format!(
                    "transaction dealer {} does not match customer {}'s dealer {}",
                    txn.dealer_id, customer.id, customer.dealer_id
                )));
            }

            if let Some(product_id) = txn.product_id {
                let product = self.product(product_id).ok_or_else(|| {
                    SalesError::InconsistentReference {
                        entity: "product",
                        identifier: product_id.to_string(),
                    }
                })?;

                if product.category != txn.category {
                    return Err(SalesError::Validation(format!(
                        "transaction category {} does not match product {}'s category {}",
                        txn.category, product.id, product.category
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn fixture() -> SalesStore {
        let dealers = vec![
            Dealer::new(DealerId::new(1), "Barrett"),
            Dealer::new(DealerId::new(2), "Landus"),
        ];
        let customers = vec![
            Customer::new(CustomerId::new(1), "Customer A", DealerId::new(1)),
            Customer::new(CustomerId::new(2), "Customer B", DealerId::new(2)),
        ];
        let products = vec![
            Product::new(ProductId::new(1), "Silwet Gold", Category::Adjuvants),
            Product::new(ProductId::new(2), "Bluestone", Category::Fungicide),
        ];
        let transactions = vec![Transaction::new(
            Money::from_dollars(100),
            Category::Adjuvants,
            Some(ProductId::new(1)),
            CustomerId::new(1),
            DealerId::new(1),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )];

        SalesStore::new(dealers, customers, products, transactions)
    }

    #[test]
    fn test_lookups() {
        let store = fixture();
        assert_eq!(store.dealer(DealerId::new(1)).unwrap().name, "Barrett");
        assert_eq!(store.customer(CustomerId::new(2)).unwrap().name, "Customer B");
        assert_eq!(store.product(ProductId::new(2)).unwrap().name, "Bluestone");
        assert!(store.dealer(DealerId::new(9)).is_none());
    }

    #[test]
    fn test_products_in_category() {
        let store = fixture();
        let adjuvants = store.products_in(Category::Adjuvants);
        assert_eq!(adjuvants.len(), 1);
        assert_eq!(adjuvants[0].name, "Silwet Gold");
        assert!(store.products_in(Category::Herbicide).is_empty());
    }

    #[test]
    fn test_validate_ok() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_customer() {
        let mut store = fixture();
        store.transactions.push(Transaction::new(
            Money::from_dollars(50),
            Category::Fungicide,
            None,
            CustomerId::new(99),
            DealerId::new(1),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        ));
        let err = store.validate().unwrap_err();
        assert!(matches!(
            err,
            SalesError::InconsistentReference {
                entity: "customer",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_dealer_mismatch() {
        let mut store = fixture();
        // Customer 1 belongs to dealer 1, not dealer 2
        store.transactions.push(Transaction::new(
            Money::from_dollars(50),
            Category::Fungicide,
            None,
            CustomerId::new(1),
            DealerId::new(2),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        ));
        assert!(matches!(
            store.validate().unwrap_err(),
            SalesError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_rejects_category_mismatch() {
        let mut store = fixture();
        // Product 2 is a fungicide, not an adjuvant
        store.transactions.push(Transaction::new(
            Money::from_dollars(50),
            Category::Adjuvants,
            Some(ProductId::new(2)),
            CustomerId::new(1),
            DealerId::new(1),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        ));
        assert!(matches!(
            store.validate().unwrap_err(),
            SalesError::Validation(_)
        ));
    }
}
