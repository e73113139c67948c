//! Transaction filtering
//!
//! Every report applies the same two predicates before grouping: an optional
//! dealer filter and an inclusive date-interval filter derived from the
//! reporting period. Filtering borrows the transaction table and never
//! copies or mutates it.

use chrono::NaiveDate;

use crate::models::{DealerId, Money, ReportPeriod, Transaction};

/// The dealer/date predicate pair applied before grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Keep only this dealer's transactions; None means all dealers
    pub dealer: Option<DealerId>,

    /// First day of the interval (inclusive)
    pub start: NaiveDate,

    /// Last day of the interval (inclusive)
    pub end: NaiveDate,
}

impl TransactionFilter {
    /// Build the filter for a dealer selection and reporting period
    pub fn new(dealer: Option<DealerId>, period: &ReportPeriod) -> Self {
        Self {
            dealer,
            start: period.start_date(),
            end: period.end_date(),
        }
    }

    /// Check whether a transaction satisfies both predicates
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(dealer_id) = self.dealer {
            if txn.dealer_id != dealer_id {
                return false;
            }
        }
        txn.date >= self.start && txn.date <= self.end
    }

    /// Iterate over the matching transactions
    pub fn apply<'a>(
        &'a self,
        transactions: &'a [Transaction],
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |t| self.matches(t))
    }

    /// Sum of amounts over the matching transactions
    pub fn total(&self, transactions: &[Transaction]) -> Money {
        self.apply(transactions).map(|t| t.amount).sum()
    }
}
