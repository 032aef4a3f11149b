//! # Quote Commands
//!
//! Commands the quote form invokes while the operator edits.
//!
//! ## Quote Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────┐                    │
//! │  │ Default  │────►│   Editing    │────►│ Exported │                    │
//! │  │  Quote   │     │              │     │ Document │                    │
//! │  └──────────┘     └──────────────┘     └──────────┘                    │
//! │                        │                                                │
//! │                   select_product                                        │
//! │                   update_field                                          │
//! │                   update_field_raw                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   every call returns the fresh QuoteSummary            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use purolea_core::pricing::LABEL_TIERS;
use purolea_core::{CostLine, FieldUpdate, QuoteSession, QuoteSnapshot, QUANTITY_OPTIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, QuoteState};

/// Short lead-time line in the cost summary panel.
pub const LEAD_TIME_SUMMARY: &str = "Lead time: 3–4 weeks";

/// Everything the cost summary panel shows.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │  COST SUMMARY                                           │
/// │  Formula                                      $15.50    │
/// │  Packaging                                     $3.50    │
/// │  Labels                                        $0.75    │
/// │  Manufacturing                                 $4.00    │
/// │  ─────────────────────────────────────────────────────  │
/// │  Cost per Unit                                $23.75    │
/// │  × 250 units                                            │
/// │  Total Project                              $5937.50    │
/// │                                                         │
/// │  🕒 Lead time: 3–4 weeks                                │
/// │  📋 Quote valid for 30 days                             │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub snapshot: QuoteSnapshot,
    pub lines: Vec<CostLine>,
    pub quantity_options: Vec<u32>,
    /// e.g. "Qty-based: $0.75 → $0.65 → $0.50"; absent when the client
    /// supplies labels.
    pub label_tier_hint: Option<String>,
    pub lead_time: String,
    pub validity: String,
}

impl QuoteSummary {
    pub fn build(session: &QuoteSession, config: &ConfigState) -> Self {
        let snapshot = session.snapshot();
        let label_tier_hint = (!snapshot.input.client_supplies_label)
            .then(|| format!("Qty-based: {}", LABEL_TIERS.summary()));

        QuoteSummary {
            lines: snapshot.costs.lines().to_vec(),
            quantity_options: QUANTITY_OPTIONS.to_vec(),
            label_tier_hint,
            lead_time: LEAD_TIME_SUMMARY.to_string(),
            validity: format!("Quote valid for {} days", config.quote_validity_days),
            snapshot,
        }
    }
}

/// Gets the current quote and its breakdown.
pub fn get_quote(quote: &QuoteState, config: &ConfigState) -> QuoteSummary {
    debug!("get_quote command");
    quote.with_session(|s| QuoteSummary::build(s, config))
}

/// Applies a typed single-field edit.
pub fn update_field(quote: &QuoteState, config: &ConfigState, update: FieldUpdate) -> QuoteSummary {
    debug!(field = update.field_name(), "update_field command");
    quote.with_session_mut(|s| {
        s.set_field(update);
        QuoteSummary::build(s, config)
    })
}

/// Applies an edit straight from a form control.
///
/// Numeric text that does not parse becomes 0.
///
/// ## Errors
/// `VALIDATION_ERROR` when `field` is not a quote field.
pub fn update_field_raw(
    quote: &QuoteState,
    config: &ConfigState,
    field: String,
    raw: String,
) -> Result<QuoteSummary, ApiError> {
    debug!(%field, "update_field_raw command");
    let update = FieldUpdate::from_raw(&field, &raw)?;
    Ok(update_field(quote, config, update))
}

/// Starts the quote from a catalog product.
///
/// An unknown id leaves the quote as it was; the summary returned is then
/// simply the unchanged quote.
pub fn select_product(quote: &QuoteState, config: &ConfigState, product_id: String) -> QuoteSummary {
    debug!(%product_id, "select_product command");
    quote.with_session_mut(|s| {
        if !s.select_product(&product_id) {
            debug!(%product_id, "unknown product, quote unchanged");
        }
        QuoteSummary::build(s, config)
    })
}
