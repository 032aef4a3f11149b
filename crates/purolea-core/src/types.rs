//! # Domain Types
//!
//! Core domain types used throughout Purolea Quote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ ProductTemplate  │   │   QuoteInput     │   │  CostBreakdown   │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ id (business)    │──►│ formula_cost     │──►│ formula/unit     │    │
//! │  │ base_formula_cost│   │ product_size     │   │ packaging/unit   │    │
//! │  │ suggested_size   │   │ packaging_cost   │   │ label/unit       │    │
//! │  │ (immutable)      │   │ quantity, flags  │   │ manufacturing    │    │
//! │  └──────────────────┘   │ (operator edits) │   │ (always derived) │    │
//! │                         └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐                           │
//! │  │     Volume       │   │  CostComponent   │                           │
//! │  │  hundredths (i64)│   │  Formula         │                           │
//! │  │  150 = 1.5 oz    │   │  Packaging       │                           │
//! │  └──────────────────┘   │  Labels          │                           │
//! │                         │  Manufacturing   │                           │
//! │                         └──────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Volume
// =============================================================================

/// A product size in hundredths of the volume unit (ounces).
///
/// ## Why Hundredths?
/// The size field accepts decimals (`1.5 oz`). Keeping it as an integer
/// lets `Money::scale_by` stay in integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Volume(i64);

impl Volume {
    /// Creates a volume from hundredths of a unit.
    #[inline]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Volume(hundredths)
    }

    /// Creates a volume from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Volume(units.saturating_mul(100))
    }

    /// Converts a decimal size, rounding to the nearest hundredth.
    /// Non-finite input becomes zero.
    pub fn from_decimal(units: f64) -> Self {
        if !units.is_finite() {
            return Volume::zero();
        }
        Volume((units * 100.0).round() as i64)
    }

    /// Returns the size in hundredths of a unit.
    #[inline]
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Volume(0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume::zero()
    }
}

/// Prints the shortest decimal form: `2`, `1.5`, `0.25`.
impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();
        match frac {
            0 => write!(f, "{}{}", sign, whole),
            f10 if f10 % 10 == 0 => write!(f, "{}{}.{}", sign, whole, f10 / 10),
            _ => write!(f, "{}{}.{:02}", sign, whole, frac),
        }
    }
}

// =============================================================================
// Product Template
// =============================================================================

/// A catalog entry the operator can start a quote from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductTemplate {
    /// Business identifier (`serum`, `lotion`, ...).
    pub id: String,

    /// Display name shown in the picker.
    pub name: String,

    /// Grouping shown under the name.
    pub category: String,

    /// Formula cost per ounce copied into the quote on selection.
    pub base_formula_cost_per_volume: Money,

    /// Unit size copied into the quote on selection.
    pub suggested_size: Volume,

    /// Emoji shown next to the name.
    pub icon: String,
}

impl ProductTemplate {
    /// Subtitle shown under the product name in the picker.
    ///
    /// ```rust
    /// use purolea_core::catalog::standard_catalog;
    ///
    /// let serum = standard_catalog().find_product("serum").unwrap();
    /// assert_eq!(serum.picker_caption(), "Skincare • $15.5/oz");
    /// ```
    pub fn picker_caption(&self) -> String {
        format!(
            "{} • {}/oz",
            self.category,
            self.base_formula_cost_per_volume.format_compact("$")
        )
    }
}

// =============================================================================
// Quote Input
// =============================================================================

/// The values the operator edits. One instance per quote session.
///
/// Only `set_field` and `select_product` on the session change it; the
/// cost breakdown is recomputed from it after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// Template last picked, if any. Informational only; pricing never
    /// reads it.
    pub selected_product_id: Option<String>,

    /// Formula cost per ounce.
    pub formula_cost_per_volume: Money,

    /// Unit size in ounces.
    pub product_size: Volume,

    /// Packaging cost per unit when we source the packaging.
    pub packaging_cost_per_unit: Money,

    /// Units in the production run.
    pub quantity: u32,

    pub client_supplies_packaging: bool,

    pub client_supplies_label: bool,

    /// Free-form special requirements, printed on the quote.
    pub notes: String,
}

impl Default for QuoteInput {
    /// A blank custom quote: $12.50/oz, 2 oz, $3.50 packaging, 100 units.
    fn default() -> Self {
        QuoteInput {
            selected_product_id: None,
            formula_cost_per_volume: Money::from_cents(1250),
            product_size: Volume::from_units(2),
            packaging_cost_per_unit: Money::from_cents(350),
            quantity: 100,
            client_supplies_packaging: false,
            client_supplies_label: false,
            notes: String::new(),
        }
    }
}

// =============================================================================
// Cost Breakdown
// =============================================================================

/// The four per-unit components of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    Formula,
    Packaging,
    Labels,
    Manufacturing,
}

impl CostComponent {
    /// Row label on the printed quote.
    pub const fn label(&self) -> &'static str {
        match self {
            CostComponent::Formula => "Formula Cost",
            CostComponent::Packaging => "Packaging",
            CostComponent::Labels => "Label Printing",
            CostComponent::Manufacturing => "Manufacturing",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            CostComponent::Formula => "🧪",
            CostComponent::Packaging => "📦",
            CostComponent::Labels => "🏷️",
            CostComponent::Manufacturing => "🏭",
        }
    }
}

/// One row of the cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub component: CostComponent,
    pub per_unit: Money,
}

impl CostLine {
    /// Row total for a production run.
    #[inline]
    pub fn extended(&self, quantity: u32) -> Money {
        self.per_unit.multiply_quantity(quantity)
    }
}

/// Per-unit and project totals derived from a [`QuoteInput`].
///
/// ## Invariants
/// - `total_unit_cost` = formula + packaging + label + manufacturing
/// - `total_project_cost` = `total_unit_cost` × quantity
///
/// Built only by [`crate::pricing::compute_breakdown`]. Never patch a
/// field by hand; recompute from the input instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub formula_cost_per_unit: Money,
    pub packaging_cost_per_unit: Money,
    pub label_cost_per_unit: Money,
    pub manufacturing_fee_per_unit: Money,
    pub total_unit_cost: Money,
    pub total_project_cost: Money,
}

impl CostBreakdown {
    /// The four component rows in printing order.
    pub fn lines(&self) -> [CostLine; 4] {
        [
            CostLine {
                component: CostComponent::Formula,
                per_unit: self.formula_cost_per_unit,
            },
            CostLine {
                component: CostComponent::Packaging,
                per_unit: self.packaging_cost_per_unit,
            },
            CostLine {
                component: CostComponent::Labels,
                per_unit: self.label_cost_per_unit,
            },
            CostLine {
                component: CostComponent::Manufacturing,
                per_unit: self.manufacturing_fee_per_unit,
            },
        ]
    }
}

// =============================================================================
// Quote Snapshot
// =============================================================================

/// The pair published to observers after every successful change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    pub input: QuoteInput,
    pub costs: CostBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================
