//! Dealer model
//!
//! A dealer is a top-level sales-channel partner. Each customer belongs to
//! exactly one dealer, and every transaction is attributed to the owning
//! dealer of its customer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DealerId;

/// A sales-channel partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    /// Unique, stable identifier
    pub id: DealerId,

    /// Dealer name
    pub name: String,
}

impl Dealer {
    /// Create a new dealer
    pub fn new(id: DealerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
