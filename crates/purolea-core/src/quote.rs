//! # Quote State
//!
//! The editable quote and its always-current cost breakdown.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Session Operations                             │
//! │                                                                         │
//! │  Form Action              Session Method          State Change          │
//! │  ───────────              ──────────────          ────────────          │
//! │                                                                         │
//! │  Edit a field ──────────► set_field() ──────────► one field replaced    │
//! │                                                                         │
//! │  Pick a product ────────► select_product() ─────► formula cost + size   │
//! │                                                   (unknown id: nothing) │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                  compute_breakdown(&input)   (full recompute)           │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                  observers(&QuoteSnapshot)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use purolea_core::{FieldUpdate, QuoteSession};
//!
//! let mut session = QuoteSession::new();
//! assert!(session.select_product("serum"));
//! session.set_field(FieldUpdate::Quantity(250));
//!
//! assert_eq!(session.costs().total_unit_cost.to_string(), "$23.75");
//! assert_eq!(session.costs().total_project_cost.to_string(), "$5937.50");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{standard_catalog, Catalog};
use crate::coerce::{coerce_money, coerce_quantity, coerce_toggle, coerce_volume};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::compute_breakdown;
use crate::types::{CostBreakdown, QuoteInput, QuoteSnapshot, Volume};

// =============================================================================
// Field Updates
// =============================================================================

/// A single-field edit of a [`QuoteInput`].
///
/// Serialized adjacently tagged, which is what the quote form sends:
/// ```json
/// { "field": "quantity", "value": 500 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    FormulaCostPerVolume(Money),
    ProductSize(Volume),
    PackagingCostPerUnit(Money),
    Quantity(u32),
    ClientSuppliesPackaging(bool),
    ClientSuppliesLabel(bool),
    Notes(String),
}

impl FieldUpdate {
    /// Builds an update from a control's field name and raw text.
    ///
    /// Field names are accepted in camelCase (as the form sends them) or
    /// snake_case. Values are coerced, never rejected; see
    /// [`crate::coerce`].
    ///
    /// ```rust
    /// use purolea_core::{FieldUpdate, Money};
    ///
    /// let update = FieldUpdate::from_raw("packagingCostPerUnit", "oops").unwrap();
    /// assert_eq!(update, FieldUpdate::PackagingCostPerUnit(Money::zero()));
    ///
    /// assert!(FieldUpdate::from_raw("labelCost", "0.75").is_err());
    /// ```
    pub fn from_raw(field: &str, raw: &str) -> CoreResult<Self> {
        let update = match field {
            "formulaCostPerVolume" | "formula_cost_per_volume" => {
                FieldUpdate::FormulaCostPerVolume(coerce_money(raw))
            }
            "productSize" | "product_size" => FieldUpdate::ProductSize(coerce_volume(raw)),
            "packagingCostPerUnit" | "packaging_cost_per_unit" => {
                FieldUpdate::PackagingCostPerUnit(coerce_money(raw))
            }
            "quantity" => FieldUpdate::Quantity(coerce_quantity(raw)),
            "clientSuppliesPackaging" | "client_supplies_packaging" => {
                FieldUpdate::ClientSuppliesPackaging(coerce_toggle(raw))
            }
            "clientSuppliesLabel" | "client_supplies_label" => {
                FieldUpdate::ClientSuppliesLabel(coerce_toggle(raw))
            }
            "notes" => FieldUpdate::Notes(raw.to_string()),
            other => return Err(CoreError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    /// The camelCase name of the field this update targets.
    pub const fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::FormulaCostPerVolume(_) => "formulaCostPerVolume",
            FieldUpdate::ProductSize(_) => "productSize",
            FieldUpdate::PackagingCostPerUnit(_) => "packagingCostPerUnit",
            FieldUpdate::Quantity(_) => "quantity",
            FieldUpdate::ClientSuppliesPackaging(_) => "clientSuppliesPackaging",
            FieldUpdate::ClientSuppliesLabel(_) => "clientSuppliesLabel",
            FieldUpdate::Notes(_) => "notes",
        }
    }
}

impl QuoteInput {
    /// Replaces exactly the field named by `update`.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FormulaCostPerVolume(cost) => self.formula_cost_per_volume = cost,
            FieldUpdate::ProductSize(size) => self.product_size = size,
            FieldUpdate::PackagingCostPerUnit(cost) => self.packaging_cost_per_unit = cost,
            FieldUpdate::Quantity(quantity) => self.quantity = quantity,
            FieldUpdate::ClientSuppliesPackaging(on) => self.client_supplies_packaging = on,
            FieldUpdate::ClientSuppliesLabel(on) => self.client_supplies_label = on,
            FieldUpdate::Notes(notes) => self.notes = notes,
        }
    }
}

// =============================================================================
// Quote Session
// =============================================================================

/// Callback invoked with every newly published snapshot.
pub type QuoteObserver = Box<dyn Fn(&QuoteSnapshot) + Send>;

/// One operator's quote: the input, its breakdown, and who is watching.
///
/// ## Invariants
/// - `costs == compute_breakdown(&input)` after every public method returns
/// - Observers are notified once per successful mutation, in subscription
///   order, after the breakdown is current
pub struct QuoteSession {
    catalog: Catalog,
    input: QuoteInput,
    costs: CostBreakdown,
    observers: Vec<QuoteObserver>,
}

impl QuoteSession {
    /// A fresh session over the standard catalog with default input.
    pub fn new() -> Self {
        Self::with_catalog(standard_catalog().clone())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let input = QuoteInput::default();
        let costs = compute_breakdown(&input);
        QuoteSession {
            catalog,
            input,
            costs,
            observers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn input(&self) -> &QuoteInput {
        &self.input
    }

    pub fn costs(&self) -> &CostBreakdown {
        &self.costs
    }

    /// Owned copy of the current `(input, costs)` pair.
    pub fn snapshot(&self) -> QuoteSnapshot {
        QuoteSnapshot {
            input: self.input.clone(),
            costs: self.costs,
        }
    }

    /// Registers an observer. It is not called for the current state, only
    /// for later changes.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&QuoteSnapshot) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replaces one field, recomputes the breakdown, and notifies observers.
    ///
    /// The breakdown is computed for a copy of the input; input and costs
    /// are committed together.
    pub fn set_field(&mut self, update: FieldUpdate) -> &CostBreakdown {
        let mut next = self.input.clone();
        next.apply(update);
        self.commit_and_publish(next);
        &self.costs
    }

    /// Copies a template's formula cost and size into the quote.
    ///
    /// ## Behavior
    /// - Known id: overwrites `formula_cost_per_volume` and `product_size`,
    ///   records the selection, recomputes, notifies. Returns `true`.
    /// - Unknown id: nothing changes and nobody is notified. Returns `false`.
    ///
    /// Quantity, supply toggles, packaging cost and notes are kept.
    pub fn select_product(&mut self, id: &str) -> bool {
        let Some(product) = self.catalog.find_product(id) else {
            return false;
        };

        let next = QuoteInput {
            formula_cost_per_volume: product.base_formula_cost_per_volume,
            product_size: product.suggested_size,
            selected_product_id: Some(product.id.clone()),
            ..self.input.clone()
        };
        self.commit_and_publish(next);
        true
    }

    fn commit_and_publish(&mut self, next: QuoteInput) {
        let costs = compute_breakdown(&next);
        self.input = next;
        self.costs = costs;
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuoteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteSession")
            .field("input", &self.input)
            .field("costs", &self.costs)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_session() -> (QuoteSession, Arc<Mutex<Vec<QuoteSnapshot>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut session = QuoteSession::new();
        session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));
        (session, seen)
    }

    #[test]
    fn test_new_session_has_current_costs() {
        let session = QuoteSession::new();
        assert_eq!(*session.costs(), compute_breakdown(session.input()));
        assert_eq!(session.costs().total_unit_cost.cents(), 3325);
    }

    #[test]
    fn test_set_field_replaces_only_that_field() {
        let mut session = QuoteSession::new();
        let before = session.input().clone();

        session.set_field(FieldUpdate::Notes("Airless pump".to_string()));

        let after = session.input();
        assert_eq!(after.notes, "Airless pump");
        assert_eq!(
            QuoteInput {
                notes: before.notes.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_set_field_recomputes() {
        let mut session = QuoteSession::new();
        let costs = *session.set_field(FieldUpdate::Quantity(1000));
        assert_eq!(costs.manufacturing_fee_per_unit.cents(), 250);
        assert_eq!(costs.label_cost_per_unit.cents(), 50);
        assert_eq!(costs, compute_breakdown(session.input()));
    }

    #[test]
    fn test_select_known_product_overwrites_formula_and_size_only() {
        let mut session = QuoteSession::new();
        session.set_field(FieldUpdate::Quantity(750));
        session.set_field(FieldUpdate::ClientSuppliesPackaging(true));
        session.set_field(FieldUpdate::ClientSuppliesLabel(true));
        session.set_field(FieldUpdate::PackagingCostPerUnit(Money::from_cents(420)));
        session.set_field(FieldUpdate::Notes("rush".to_string()));

        assert!(session.select_product("lotion"));

        let input = session.input();
        assert_eq!(input.formula_cost_per_volume.cents(), 650);
        assert_eq!(input.product_size, Volume::from_units(8));
        assert_eq!(input.selected_product_id.as_deref(), Some("lotion"));
        assert_eq!(input.quantity, 750);
        assert!(input.client_supplies_packaging);
        assert!(input.client_supplies_label);
        assert_eq!(input.packaging_cost_per_unit.cents(), 420);
        assert_eq!(input.notes, "rush");
    }

    #[test]
    fn test_select_unknown_product_is_silent_noop() {
        let (mut session, seen) = recording_session();
        let before = session.snapshot();

        assert!(!session.select_product("shampoo"));

        assert_eq!(session.snapshot(), before);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_observers_receive_each_mutation() {
        let (mut session, seen) = recording_session();

        session.set_field(FieldUpdate::Quantity(500));
        session.select_product("oil");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].input.quantity, 500);
        assert_eq!(seen[0].costs.manufacturing_fee_per_unit.cents(), 300);
        assert_eq!(seen[1].input.formula_cost_per_volume.cents(), 2250);
        assert_eq!(seen[1], session.snapshot());
    }

    #[test]
    fn test_from_raw_accepts_both_casings() {
        assert_eq!(
            FieldUpdate::from_raw("product_size", "1.5").unwrap(),
            FieldUpdate::ProductSize(Volume::from_hundredths(150))
        );
        assert_eq!(
            FieldUpdate::from_raw("clientSuppliesLabel", "on").unwrap(),
            FieldUpdate::ClientSuppliesLabel(true)
        );
        assert_eq!(
            FieldUpdate::from_raw("quantity", "").unwrap(),
            FieldUpdate::Quantity(0)
        );
    }

    #[test]
    fn test_from_raw_keeps_notes_verbatim() {
        assert_eq!(
            FieldUpdate::from_raw("notes", "  12 <b>fragrance-free</b> ").unwrap(),
            FieldUpdate::Notes("  12 <b>fragrance-free</b> ".to_string())
        );
    }

    #[test]
    fn test_from_raw_unknown_field() {
        assert_eq!(
            FieldUpdate::from_raw("manufacturingFee", "2.5"),
            Err(CoreError::UnknownField("manufacturingFee".to_string()))
        );
    }

    #[test]
    fn test_field_update_wire_format() {
        let json = serde_json::to_value(FieldUpdate::Quantity(500)).unwrap();
        assert_eq!(json, serde_json::json!({ "field": "quantity", "value": 500 }));

        let parsed: FieldUpdate = serde_json::from_value(serde_json::json!({
            "field": "clientSuppliesPackaging",
            "value": true
        }))
        .unwrap();
        assert_eq!(parsed, FieldUpdate::ClientSuppliesPackaging(true));
        assert_eq!(parsed.field_name(), "clientSuppliesPackaging");
    }

    #[test]
    fn test_huge_raw_values_keep_costs_in_step_with_input() {
        let mut session = QuoteSession::new();
        session.set_field(FieldUpdate::Quantity(2000));
        let update = FieldUpdate::from_raw("formulaCostPerVolume", "1000000000000000").unwrap();
        session.set_field(update);

        assert_eq!(*session.costs(), compute_breakdown(session.input()));
        assert_eq!(session.input().formula_cost_per_volume.to_string(), "$1000000.00");
        assert_eq!(session.costs().formula_cost_per_unit.to_string(), "$2000000.00");
        assert_eq!(
            session.costs().total_project_cost,
            session.costs().total_unit_cost.multiply_quantity(2000)
        );
    }

    #[test]
    fn test_extreme_typed_values_saturate_instead_of_panicking() {
        let mut session = QuoteSession::new();
        session.set_field(FieldUpdate::FormulaCostPerVolume(Money::from_cents(i64::MAX)));
        session.set_field(FieldUpdate::ProductSize(Volume::from_hundredths(i64::MAX)));
        session.set_field(FieldUpdate::Quantity(u32::MAX));

        assert_eq!(*session.costs(), compute_breakdown(session.input()));
        assert_eq!(session.costs().total_project_cost.ten_thousandths(), i64::MAX);
    }
}
