//! # Catalog Commands
//!
//! Commands that feed the product picker and quantity menu.

use purolea_core::{standard_catalog, CoreError, Money, ProductTemplate, Volume, QUANTITY_OPTIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Product DTO for the picker.
///
/// ## Why DTO?
/// - Adds the ready-made picker caption
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub base_formula_cost_per_volume: Money,
    pub suggested_size: Volume,
    /// e.g. "Skincare • $15.5/oz"
    pub caption: String,
}

impl From<&ProductTemplate> for ProductDto {
    fn from(p: &ProductTemplate) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            icon: p.icon.clone(),
            base_formula_cost_per_volume: p.base_formula_cost_per_volume,
            suggested_size: p.suggested_size,
            caption: p.picker_caption(),
        }
    }
}

/// Lists every product template, in picker order.
pub fn list_products() -> Vec<ProductDto> {
    debug!("list_products command");
    standard_catalog()
        .list_products()
        .iter()
        .map(ProductDto::from)
        .collect()
}

/// Fetches one product template.
///
/// ## Returns
/// - `Ok(ProductDto)` if found
/// - `Err(ApiError)` with code NOT_FOUND otherwise
pub fn get_product(id: String) -> Result<ProductDto, ApiError> {
    debug!(%id, "get_product command");
    standard_catalog()
        .find_product(&id)
        .map(ProductDto::from)
        .ok_or_else(|| CoreError::ProductNotFound(id).into())
}

/// Production run sizes offered by the quantity picker.
pub fn get_quantity_options() -> Vec<u32> {
    QUANTITY_OPTIONS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_products() {
        let products = list_products();
        assert_eq!(products.len(), 9);
        assert_eq!(products[0].id, "serum");
        assert_eq!(products[0].caption, "Skincare • $15.5/oz");
        assert_eq!(products[8].id, "custom");
    }

    #[test]
    fn test_get_product_not_found() {
        let err = get_product("shampoo".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_product_dto_shape() {
        let dto = get_product("toner".to_string()).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["baseFormulaCostPerVolume"], 102_500);
        assert_eq!(json["suggestedSize"], 300);
        assert_eq!(json["icon"], "🌿");
    }

    #[test]
    fn test_quantity_options() {
        assert_eq!(get_quantity_options(), vec![100, 250, 500, 750, 1000, 1500, 2000]);
    }
}
