//! Keyed accumulation of transaction amounts
//!
//! Grouping is a pure fold: amounts are summed into a map keyed by whatever
//! dimension the report asks for (category, product, customer, dealer, time
//! bucket). The map imposes no output order; ranking and shaping decide that
//! later. Callers materialize zero-valued groups by iterating their key
//! universe and looking up the sums, so absent keys never vanish from a
//! report.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Money, Transaction};

/// Sum transaction amounts by an arbitrary key
pub fn sum_by<'a, K, I, F>(transactions: I, mut key: F) -> HashMap<K, Money>
where
    K: Eq + Hash,
    I: IntoIterator<Item = &'a Transaction>,
    F: FnMut(&Transaction) -> K,
{
    let mut sums: HashMap<K, Money> = HashMap::new();
    for txn in transactions {
        *sums.entry(key(txn)).or_insert_with(Money::zero) += txn.amount;
    }
    sums
}

/// Sum transaction amounts by an optional key, dropping records where the
/// key is absent (e.g. transactions with no product reference)
pub fn sum_by_some<'a, K, I, F>(transactions: I, mut key: F) -> HashMap<K, Money>
where
    K: Eq + Hash,
    I: IntoIterator<Item = &'a Transaction>,
    F: FnMut(&Transaction) -> Option<K>,
{
    let mut sums: HashMap<K, Money> = HashMap::new();
    for txn in transactions {
        if let Some(k) = key(txn) {
            *sums.entry(k).or_insert_with(Money::zero) += txn.amount;
        }
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CustomerId, DealerId, ProductId};
    use chrono::NaiveDate;

    fn txn(category: Category, product: Option<u32>, cents: i64) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            category,
            product.map(ProductId::new),
            CustomerId::new(1),
            DealerId::new(1),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_sum_by_category() {
        let transactions = vec![
            txn(Category::Herbicide, None, 10_000),
            txn(Category::Herbicide, None, 5_000),
            txn(Category::Fungicide, None, 2_500),
        ];

        let sums = sum_by(&transactions, |t| t.category);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums[&Category::Herbicide].cents(), 15_000);
        assert_eq!(sums[&Category::Fungicide].cents(), 2_500);
        assert!(!sums.contains_key(&Category::Adjuvants));
    }

    #[test]
    fn test_sum_by_empty_input() {
        let transactions: Vec<Transaction> = Vec::new();
        let sums = sum_by(&transactions, |t| t.category);
        assert!(sums.is_empty());
    }

    #[test]
    fn test_sum_by_some_skips_missing_keys() {
        let transactions = vec![
            txn(Category::Herbicide, Some(10), 10_000),
            txn(Category::Herbicide, None, 5_000),
            txn(Category::Herbicide, Some(10), 1_000),
        ];

        let sums = sum_by_some(&transactions, |t| t.product_id);
        assert_eq!(sums.len(), 1);
        assert_eq!(sums[&ProductId::new(10)].cents(), 11_000);
    }

    #[test]
    fn test_grouped_sums_conserve_the_total() {
        let transactions = vec![
            txn(Category::Herbicide, None, 10_000),
            txn(Category::Fungicide, None, 5_000),
            txn(Category::Adjuvants, None, 2_500),
        ];

        let total: Money = transactions.iter().map(|t| t.amount).sum();
        let grouped: Money = sum_by(&transactions, |t| t.category).values().copied().sum();
        assert_eq!(grouped, total);
    }
}
