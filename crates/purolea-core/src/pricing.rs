//! # Pricing Engine
//!
//! Turns a [`QuoteInput`] into a [`CostBreakdown`].
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  formula/unit       = formula_cost_per_volume × product_size            │
//! │  packaging/unit     = client supplies packaging ? 0 : packaging_cost    │
//! │  label/unit         = client supplies label     ? 0 : LABEL_TIERS[qty]  │
//! │  manufacturing/unit = MANUFACTURING_TIERS[qty]                          │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │  total_unit_cost    = sum of the four                                   │
//! │  total_project_cost = total_unit_cost × quantity                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity Tiers
//! Lower bounds are inclusive and checked highest first:
//! ```text
//!   quantity      manufacturing   labels
//!   ──────────    ─────────────   ──────
//!   >= 1000           $2.50       $0.50
//!   >= 500            $3.00       $0.65
//!   otherwise         $4.00       $0.75
//! ```
//!
//! Nothing here validates input. Negative or zero values flow through the
//! arithmetic unchanged.
//!
//! ## Example
//! ```rust
//! use purolea_core::pricing::compute_breakdown;
//! use purolea_core::QuoteInput;
//!
//! let costs = compute_breakdown(&QuoteInput::default());
//! // $25.00 formula + $3.50 packaging + $0.75 labels + $4.00 manufacturing
//! assert_eq!(costs.total_unit_cost.to_string(), "$33.25");
//! assert_eq!(costs.total_project_cost.to_string(), "$3325.00");
//! ```

use crate::money::Money;
use crate::types::{CostBreakdown, QuoteInput};

// =============================================================================
// Tier Tables
// =============================================================================

/// One row of a tier table: the rate applies from `min_quantity` upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub min_quantity: u32,
    pub per_unit: Money,
}

/// A quantity-banded per-unit rate.
///
/// Tiers are stored highest threshold first; the last tier is the base rate
/// and must have `min_quantity == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTable {
    tiers: &'static [PriceTier],
}

impl TierTable {
    pub const fn new(tiers: &'static [PriceTier]) -> Self {
        TierTable { tiers }
    }

    /// Per-unit rate for a production run of `quantity` units.
    ///
    /// ```rust
    /// use purolea_core::pricing::MANUFACTURING_TIERS;
    ///
    /// assert_eq!(MANUFACTURING_TIERS.rate_for(499).cents(), 400);
    /// assert_eq!(MANUFACTURING_TIERS.rate_for(500).cents(), 300);
    /// assert_eq!(MANUFACTURING_TIERS.rate_for(1000).cents(), 250);
    /// ```
    pub fn rate_for(&self, quantity: u32) -> Money {
        self.tiers
            .iter()
            .find(|tier| quantity >= tier.min_quantity)
            .map(|tier| tier.per_unit)
            .unwrap_or_default()
    }

    /// Rates from the smallest run to the largest, e.g.
    /// `$0.75 → $0.65 → $0.50`. Shown as a hint next to the label toggle.
    pub fn summary(&self) -> String {
        self.tiers
            .iter()
            .rev()
            .map(|tier| tier.per_unit.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

const MANUFACTURING_RATES: [PriceTier; 3] = [
    PriceTier {
        min_quantity: 1000,
        per_unit: Money::from_cents(250),
    },
    PriceTier {
        min_quantity: 500,
        per_unit: Money::from_cents(300),
    },
    PriceTier {
        min_quantity: 0,
        per_unit: Money::from_cents(400),
    },
];

const LABEL_RATES: [PriceTier; 3] = [
    PriceTier {
        min_quantity: 1000,
        per_unit: Money::from_cents(50),
    },
    PriceTier {
        min_quantity: 500,
        per_unit: Money::from_cents(65),
    },
    PriceTier {
        min_quantity: 0,
        per_unit: Money::from_cents(75),
    },
];

/// Manufacturing fee per unit.
pub const MANUFACTURING_TIERS: TierTable = TierTable::new(&MANUFACTURING_RATES);

/// Label printing cost per unit, when we print the labels.
pub const LABEL_TIERS: TierTable = TierTable::new(&LABEL_RATES);

// =============================================================================
// Breakdown
// =============================================================================

/// Computes the full cost breakdown for a quote.
///
/// Pure and deterministic: the same input always yields the same
/// breakdown, so callers recompute wholesale instead of patching.
pub fn compute_breakdown(input: &QuoteInput) -> CostBreakdown {
    let formula_cost_per_unit = input.formula_cost_per_volume.scale_by(input.product_size);

    let packaging_cost_per_unit = if input.client_supplies_packaging {
        Money::zero()
    } else {
        input.packaging_cost_per_unit
    };

    let label_cost_per_unit = if input.client_supplies_label {
        Money::zero()
    } else {
        LABEL_TIERS.rate_for(input.quantity)
    };

    let manufacturing_fee_per_unit = MANUFACTURING_TIERS.rate_for(input.quantity);

    let total_unit_cost = formula_cost_per_unit
        + packaging_cost_per_unit
        + label_cost_per_unit
        + manufacturing_fee_per_unit;

    CostBreakdown {
        formula_cost_per_unit,
        packaging_cost_per_unit,
        label_cost_per_unit,
        manufacturing_fee_per_unit,
        total_unit_cost,
        total_project_cost: total_unit_cost.multiply_quantity(input.quantity),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Volume;

    fn input_with_quantity(quantity: u32) -> QuoteInput {
        QuoteInput {
            quantity,
            ..QuoteInput::default()
        }
    }

    #[test]
    fn test_manufacturing_tier_edges() {
        assert_eq!(MANUFACTURING_TIERS.rate_for(1).cents(), 400);
        assert_eq!(MANUFACTURING_TIERS.rate_for(499).cents(), 400);
        assert_eq!(MANUFACTURING_TIERS.rate_for(500).cents(), 300);
        assert_eq!(MANUFACTURING_TIERS.rate_for(999).cents(), 300);
        assert_eq!(MANUFACTURING_TIERS.rate_for(1000).cents(), 250);
        assert_eq!(MANUFACTURING_TIERS.rate_for(u32::MAX).cents(), 250);
    }

    #[test]
    fn test_label_tier_edges() {
        assert_eq!(LABEL_TIERS.rate_for(499).cents(), 75);
        assert_eq!(LABEL_TIERS.rate_for(500).cents(), 65);
        assert_eq!(LABEL_TIERS.rate_for(1000).cents(), 50);
    }

    #[test]
    fn test_zero_quantity_uses_base_tier() {
        let costs = compute_breakdown(&input_with_quantity(0));
        assert_eq!(costs.manufacturing_fee_per_unit.cents(), 400);
        assert!(costs.total_project_cost.is_zero());
    }

    #[test]
    fn test_tier_summary() {
        assert_eq!(LABEL_TIERS.summary(), "$0.75 → $0.65 → $0.50");
        assert_eq!(MANUFACTURING_TIERS.summary(), "$4.00 → $3.00 → $2.50");
    }

    #[test]
    fn test_client_packaging_zeroes_packaging() {
        let input = QuoteInput {
            packaging_cost_per_unit: Money::from_cents(999),
            client_supplies_packaging: true,
            ..QuoteInput::default()
        };
        let costs = compute_breakdown(&input);
        assert!(costs.packaging_cost_per_unit.is_zero());
        // 25.00 + 0 + 0.75 + 4.00
        assert_eq!(costs.total_unit_cost.cents(), 2975);
    }

    #[test]
    fn test_client_label_zeroes_label_at_every_tier() {
        for quantity in [100, 500, 1000, 2000] {
            let input = QuoteInput {
                quantity,
                client_supplies_label: true,
                ..QuoteInput::default()
            };
            assert!(compute_breakdown(&input).label_cost_per_unit.is_zero());
        }
    }

    #[test]
    fn test_fractional_size() {
        let input = QuoteInput {
            formula_cost_per_volume: Money::from_cents(875),
            product_size: Volume::from_hundredths(150),
            ..QuoteInput::default()
        };
        // 8.75 × 1.5 = 13.125, shown as 13.13
        let costs = compute_breakdown(&input);
        assert_eq!(costs.formula_cost_per_unit.ten_thousandths(), 131_250);
        assert_eq!(costs.formula_cost_per_unit.to_string(), "$13.13");
    }

    #[test]
    fn test_fractional_size_does_not_drift_with_quantity() {
        let input = QuoteInput {
            formula_cost_per_volume: Money::from_cents(875),
            product_size: Volume::from_hundredths(150),
            quantity: 2000,
            ..QuoteInput::default()
        };
        // (13.125 + 3.50 + 0.50 + 2.50) × 2000
        let costs = compute_breakdown(&input);
        assert_eq!(costs.total_unit_cost.to_string(), "$19.63");
        assert_eq!(costs.total_project_cost.to_string(), "$39250.00");
    }

    #[test]
    fn test_negative_values_pass_through() {
        let input = QuoteInput {
            packaging_cost_per_unit: Money::from_cents(-100),
            ..QuoteInput::default()
        };
        let costs = compute_breakdown(&input);
        assert_eq!(costs.packaging_cost_per_unit.cents(), -100);
        assert_eq!(costs.total_unit_cost.cents(), 2500 - 100 + 75 + 400);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let input = input_with_quantity(750);
        assert_eq!(compute_breakdown(&input), compute_breakdown(&input));
    }
}
