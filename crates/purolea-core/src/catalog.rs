//! # Product Catalog
//!
//! The fixed list of product templates an operator can start a quote from.
//!
//! The catalog is reference data: built once, never mutated. A missing id
//! is answered with `None`, not an error.
//!
//! ```text
//!  id           name                    category    $/oz    size
//!  ───────────  ──────────────────────  ──────────  ──────  ────
//!  serum        Vitamin C Serum         Skincare    15.50   1
//!  moisturizer  Hydrating Moisturizer   Skincare    12.50   2
//!  cleanser     Gentle Face Cleanser    Skincare     8.75   4
//!  toner        Balancing Toner         Skincare    10.25   3
//!  mask         Clay Face Mask          Treatment   18.00   2
//!  oil          Facial Oil Blend        Treatment   22.50   1
//!  cream        Anti-Aging Cream        Skincare    25.00   2
//!  lotion       Body Lotion             Body Care    6.50   8
//!  custom       Custom Formula          Custom      12.50   2
//! ```

use std::sync::OnceLock;

use crate::money::Money;
use crate::types::{ProductTemplate, Volume};

/// (id, name, category, cents per oz, size in oz, icon)
const STANDARD_TEMPLATES: [(&str, &str, &str, i64, i64, &str); 9] = [
    ("serum", "Vitamin C Serum", "Skincare", 1550, 1, "✨"),
    ("moisturizer", "Hydrating Moisturizer", "Skincare", 1250, 2, "💧"),
    ("cleanser", "Gentle Face Cleanser", "Skincare", 875, 4, "🧼"),
    ("toner", "Balancing Toner", "Skincare", 1025, 3, "🌿"),
    ("mask", "Clay Face Mask", "Treatment", 1800, 2, "🎭"),
    ("oil", "Facial Oil Blend", "Treatment", 2250, 1, "🌸"),
    ("cream", "Anti-Aging Cream", "Skincare", 2500, 2, "⭐"),
    ("lotion", "Body Lotion", "Body Care", 650, 8, "🧴"),
    ("custom", "Custom Formula", "Custom", 1250, 2, "🔬"),
];

/// An ordered, read-only set of product templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<ProductTemplate>,
}

impl Catalog {
    /// Builds the standard nine-entry catalog.
    pub fn standard() -> Self {
        let products = STANDARD_TEMPLATES
            .iter()
            .map(|&(id, name, category, cents, size, icon)| ProductTemplate {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                base_formula_cost_per_volume: Money::from_cents(cents),
                suggested_size: Volume::from_units(size),
                icon: icon.to_string(),
            })
            .collect();

        Catalog { products }
    }

    /// All templates, in insertion order.
    pub fn list_products(&self) -> &[ProductTemplate] {
        &self.products
    }

    /// Looks up a template by its id.
    ///
    /// ```rust
    /// use purolea_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.find_product("mask").unwrap().name, "Clay Face Mask");
    /// assert!(catalog.find_product("shampoo").is_none());
    /// ```
    pub fn find_product(&self, id: &str) -> Option<&ProductTemplate> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

/// The process-wide standard catalog.
pub fn standard_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_catalog_has_nine_entries_in_order() {
        let ids: Vec<_> = standard_catalog()
            .list_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "serum",
                "moisturizer",
                "cleanser",
                "toner",
                "mask",
                "oil",
                "cream",
                "lotion",
                "custom"
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::standard();
        let ids: HashSet<_> = catalog.list_products().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_product() {
        let lotion = standard_catalog().find_product("lotion").unwrap();
        assert_eq!(lotion.category, "Body Care");
        assert_eq!(lotion.base_formula_cost_per_volume.cents(), 650);
        assert_eq!(lotion.suggested_size, Volume::from_units(8));
        assert_eq!(lotion.icon, "🧴");
    }

    #[test]
    fn test_find_product_is_exact_match() {
        assert!(standard_catalog().find_product("Serum").is_none());
        assert!(standard_catalog().find_product("").is_none());
    }
}
