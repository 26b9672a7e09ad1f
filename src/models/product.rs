//! Product record - a catalog item shown in the storefront.
//!
//! The serde shape is the stored shape: the same JSON is written to the local
//! `products` cache and used as the body of a remote `products/{id}` document.

use super::Karat;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fixed set of jewelry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rings
    Ring,
    /// Full sets (necklace, bracelet, earrings, ring)
    Set,
    /// Necklaces
    Necklace,
    /// Bracelets
    Bracelet,
    /// Earrings
    Earring,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the caller (or stamped on first save)
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Product category
    pub category: Category,
    /// Weight in grams
    pub weight: f64,
    /// Rough price in whole currency units
    pub price_estimate: u64,
    /// Image reference (URL)
    #[serde(default)]
    pub image_url: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Gold purity
    pub karat: Karat,
}

impl Product {
    /// Checks the fields the storefront relies on.
    ///
    /// # Errors
    /// Returns `Error::InvalidProduct` when the name is blank or the weight is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidProduct {
                message: "Product name cannot be empty".to_string(),
            });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidProduct {
                message: format!("Weight must be a non-negative number, got {}", self.weight),
            });
        }
        Ok(())
    }

    /// Stamps a timestamp-derived id when none was assigned.
    pub fn ensure_id(&mut self) {
        if self.id.trim().is_empty() {
            self.id = chrono::Utc::now().timestamp_millis().to_string();
        }
    }
}

/// Replaces the product with the same id in place, or appends it.
pub fn upsert_by_id(products: &mut Vec<Product>, product: Product) {
    match products.iter_mut().find(|p| p.id == product.id) {
        Some(existing) => *existing = product,
        None => products.push(product),
    }
}

/// Removes every product with `id`. Returns whether anything was removed.
pub fn remove_by_id(products: &mut Vec<Product>, id: &str) -> bool {
    let before = products.len();
    products.retain(|p| p.id != id);
    products.len() != before
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_product;

    #[test]
    fn test_product_json_shape() {
        let product = sample_product("7", "Desert Rose Ring");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "7");
        assert_eq!(json["category"], "ring");
        assert_eq!(json["karat"], 21);
        assert_eq!(json["priceEstimate"], 850_000);
        assert!(json.get("imageUrl").is_some());
    }

    #[test]
    fn test_validate_rejects_blank_name_and_bad_weight() {
        let mut product = sample_product("1", "   ");
        assert!(matches!(
            product.validate(),
            Err(Error::InvalidProduct { message: _ })
        ));

        product.name = "Ring".to_string();
        product.weight = -1.0;
        assert!(product.validate().is_err());

        product.weight = f64::NAN;
        assert!(product.validate().is_err());

        product.weight = 0.0;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_ensure_id_keeps_existing() {
        let mut product = sample_product("abc", "Ring");
        product.ensure_id();
        assert_eq!(product.id, "abc");

        product.id = String::new();
        product.ensure_id();
        assert!(!product.id.is_empty());
        assert!(product.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut products = vec![sample_product("1", "A"), sample_product("2", "B")];

        upsert_by_id(&mut products, sample_product("1", "A2"));
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A2");

        upsert_by_id(&mut products, sample_product("3", "C"));
        assert_eq!(products.len(), 3);
        assert_eq!(products[2].id, "3");
    }

    #[test]
    fn test_remove_by_id_reports_absence() {
        let mut products = vec![sample_product("1", "A")];
        assert!(!remove_by_id(&mut products, "9"));
        assert_eq!(products.len(), 1);
        assert!(remove_by_id(&mut products, "1"));
        assert!(products.is_empty());
    }
}
