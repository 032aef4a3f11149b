//! # purolea-core: Pure Quoting Logic for Purolea Quote
//!
//! This crate holds everything needed to price a cosmetic contract
//! manufacturing run and print the quote, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Purolea Quote Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Quote Form (web UI)                          │   │
//! │  │    Product Picker ──► Field Inputs ──► Cost Summary ──► Export  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    purolea-desk (app shell)                     │   │
//! │  │    update_field, select_product, export_quote, ...              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ purolea-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │ catalog │ │ pricing │ │  quote  │ │document │ │  coerce  │  │   │
//! │  │  │Templates│ │  Tiers  │ │ Session │ │  HTML   │ │ raw text │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WINDOWS • NO LOGGING SUBSCRIBER • PURE FUNCTIONS  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductTemplate, QuoteInput, CostBreakdown)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product template list
//! - [`pricing`] - Quantity tiers and the breakdown function
//! - [`quote`] - Quote session: field updates, product selection, observers
//! - [`document`] - Printable quote rendering and document sinks
//! - [`coerce`] - Raw form text to typed values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use purolea_core::{FieldUpdate, QuoteSession};
//!
//! let mut session = QuoteSession::new();
//! session.select_product("serum");
//! session.set_field(FieldUpdate::Quantity(1000));
//!
//! let costs = session.costs();
//! assert_eq!(costs.label_cost_per_unit.cents(), 50);
//! assert_eq!(costs.manufacturing_fee_per_unit.cents(), 250);
//! assert_eq!(costs.total_project_cost.to_string(), "$22000.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod coerce;
pub mod document;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{standard_catalog, Catalog};
pub use document::{DocumentBranding, DocumentSink, MemorySink, PresentOutcome};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::compute_breakdown;
pub use quote::{FieldUpdate, QuoteObserver, QuoteSession};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Production run sizes offered by the quantity picker.
///
/// Pricing itself accepts any quantity; this is only the menu.
pub const QUANTITY_OPTIONS: [u32; 7] = [100, 250, 500, 750, 1000, 1500, 2000];

/// How long a printed quote is honoured unless configured otherwise.
pub const DEFAULT_QUOTE_VALIDITY_DAYS: u32 = 30;
