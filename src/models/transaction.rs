//! Transaction model
//!
//! An immutable fact record: one sale of an amount, attributed to a customer,
//! the customer's dealer, a category, and optionally a specific product.
//! Transactions are created once by the data source and never mutated; the
//! reporting engine only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{CustomerId, DealerId, ProductId};
use super::money::Money;

/// A sales transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sale amount (non-negative)
    pub amount: Money,

    /// Product category of the sale
    pub category: Category,

    /// Specific product sold, when known. Its category must match `category`.
    pub product_id: Option<ProductId>,

    /// The purchasing customer
    pub customer_id: CustomerId,

    /// The dealer attributed with the sale; must equal the customer's
    /// owning dealer
    pub dealer_id: DealerId,

    /// Calendar date of the sale (no time-of-day semantics)
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        category: Category,
        product_id: Option<ProductId>,
        customer_id: CustomerId,
        dealer_id: DealerId,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category,
            product_id,
            customer_id,
            dealer_id,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_cents(12_345),
            Category::Herbicide,
            Some(ProductId::new(10)),
            CustomerId::new(7),
            DealerId::new(1),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = sample();
        assert_eq!(txn.amount.cents(), 12_345);
        assert_eq!(txn.category, Category::Herbicide);
        assert_eq!(txn.product_id, Some(ProductId::new(10)));
    }

    #[test]
    fn test_serialization() {
        let txn = sample();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
