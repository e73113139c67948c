//! Customer model
//!
//! Customers are the purchasing accounts in the dealer network. Each customer
//! is bound to exactly one dealer at creation time; the dealer on every
//! transaction must agree with this binding.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CustomerId, DealerId};

/// A purchasing customer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,

    /// Customer name
    pub name: String,

    /// The dealer this customer belongs to
    pub dealer_id: DealerId,
}

impl Customer {
    /// Create a new customer bound to a dealer
    pub fn new(id: CustomerId, name: impl Into<String>, dealer_id: DealerId) -> Self {
        Self {
            id,
            name: name.into(),
            dealer_id,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer() {
        let customer = Customer::new(CustomerId::new(4), "Prairie Ridge Farms", DealerId::new(1));
        assert_eq!(customer.id.raw(), 4);
        assert_eq!(customer.dealer_id, DealerId::new(1));
    }

    #[test]
    fn test_serialization() {
        let customer = Customer::new(CustomerId::new(9), "Cedar Valley Ag", DealerId::new(3));
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, deserialized);
    }
}
