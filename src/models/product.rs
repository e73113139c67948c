//! Product model
//!
//! Products belong to exactly one category, fixed at creation. The product
//! catalog defines the per-category universe for breakdown reports, so
//! zero-sales products still show up in chart output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ProductId;

/// A sellable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// The category this product belongs to (immutable)
    pub category: Category,
}

impl Product {
    /// Create a new product in a category
    pub fn new(id: ProductId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new(ProductId::new(5), "Bluestone", Category::Fungicide);
        assert_eq!(product.id.raw(), 5);
        assert_eq!(product.category, Category::Fungicide);
        assert_eq!(format!("{}", product), "Bluestone");
    }

    #[test]
    fn test_serialization() {
        let product = Product::new(ProductId::new(1), "Silwet Gold", Category::Adjuvants);
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }
}
