//! # Quote Document
//!
//! Renders a quote as a printable, self-contained HTML page and hands it to
//! an injected [`DocumentSink`].
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Purolea Production Quote                             │
//! │                    Generated on 10/19/2026                              │
//! │                                                                         │
//! │  Product Specifications                                                 │
//! │  Formula Cost: $15.50 per oz     Product Size: 1 oz                     │
//! │  Production Quantity: 250 units                                         │
//! │  Packaging: $3.50 per unit       Labels: Client Provided                │
//! │                                                                         │
//! │  Cost Component      Per Unit     Total (250 units)                     │
//! │  🧪 Formula Cost      $15.50       $3875.00                              │
//! │  📦 Packaging          $3.50        $875.00                              │
//! │  🏷️ Label Printing     $0.00          $0.00                              │
//! │  🏭 Manufacturing      $4.00       $1000.00                              │
//! │  Total                $23.00       $5750.00                              │
//! │                                                                         │
//! │  Notes: ...                        (only when notes are non-empty)      │
//! │  Lead time: 3–4 weeks from order confirmation                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The renderer formats numbers that were already derived; it never prices.

use chrono::{DateTime, Utc};
use html_escape::encode_text;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CostBreakdown, QuoteInput, QuoteSnapshot};

/// Fixed notice printed at the bottom of every quote.
pub const LEAD_TIME_NOTICE: &str = "Lead time: 3–4 weeks from order confirmation";

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; }
.header { text-align: center; margin-bottom: 30px; }
.section { margin-bottom: 20px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f5f5f5; font-weight: bold; }
.total { font-weight: bold; background-color: #f0f0f0; }
.notes { background-color: #f9f9f9; padding: 15px; border-left: 4px solid #ccc; }";

// =============================================================================
// Branding
// =============================================================================

/// Presentation settings that vary per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBranding {
    /// Shown in the title and header.
    pub company_name: String,

    /// Prefix for every amount.
    pub currency_symbol: String,

    /// Unit of `product_size` and of the per-volume formula cost.
    pub volume_unit: String,
}

impl Default for DocumentBranding {
    fn default() -> Self {
        DocumentBranding {
            company_name: "Purolea".to_string(),
            currency_symbol: "$".to_string(),
            volume_unit: "oz".to_string(),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a quote with the default branding.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use purolea_core::document::{render, LEAD_TIME_NOTICE};
/// use purolea_core::{compute_breakdown, QuoteInput};
///
/// let input = QuoteInput::default();
/// let costs = compute_breakdown(&input);
/// let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
///
/// let html = render(&input, &costs, at);
/// assert!(html.contains("Generated on 10/19/2026"));
/// assert!(html.contains("$3325.00"));
/// assert!(html.contains(LEAD_TIME_NOTICE));
/// ```
pub fn render(input: &QuoteInput, costs: &CostBreakdown, generated_at: DateTime<Utc>) -> String {
    render_with(&DocumentBranding::default(), input, costs, generated_at)
}

/// Renders a quote as a standalone HTML page.
pub fn render_with(
    branding: &DocumentBranding,
    input: &QuoteInput,
    costs: &CostBreakdown,
    generated_at: DateTime<Utc>,
) -> String {
    let company = encode_text(&branding.company_name);
    let unit = encode_text(&branding.volume_unit);
    let money = |amount: Money| {
        encode_text(&amount.format_with(&branding.currency_symbol)).into_owned()
    };
    let date = generated_at.format("%-m/%-d/%Y").to_string();
    let quantity = input.quantity;

    let packaging = if input.client_supplies_packaging {
        "Client Provided".to_string()
    } else {
        format!("{} per unit", money(input.packaging_cost_per_unit))
    };
    let labels = if input.client_supplies_label {
        "Client Provided".to_string()
    } else {
        format!("{} per unit", money(costs.label_cost_per_unit))
    };

    let rows: String = costs
        .lines()
        .iter()
        .map(|line| {
            format!(
                "      <tr><td>{} {}</td><td>{}</td><td>{}</td></tr>\n",
                line.component.icon(),
                line.component.label(),
                money(line.per_unit),
                money(line.extended(quantity)),
            )
        })
        .collect();

    let notes = if input.notes.is_empty() {
        String::new()
    } else {
        format!(
            "    <div class=\"notes\"><h4>Notes:</h4><p>{}</p></div>\n",
            encode_text(&input.notes)
        )
    };

    format!(
        "<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>{company} Quote - {date}</title>
    <style>
{STYLESHEET}
    </style>
  </head>
  <body>
    <div class=\"header\">
      <h1>{company} Production Quote</h1>
      <p>Generated on {date}</p>
    </div>

    <div class=\"section\">
      <h3>Product Specifications</h3>
      <p><strong>Formula Cost:</strong> {formula_cost} per {unit}</p>
      <p><strong>Product Size:</strong> {size} {unit}</p>
      <p><strong>Production Quantity:</strong> {quantity} units</p>
      <p><strong>Packaging:</strong> {packaging}</p>
      <p><strong>Labels:</strong> {labels}</p>
    </div>

    <table>
      <tr><th>Cost Component</th><th>Per Unit</th><th>Total ({quantity} units)</th></tr>
{rows}      <tr class=\"total\"><td><strong>Total</strong></td><td><strong>{unit_total}</strong></td><td><strong>{project_total}</strong></td></tr>
    </table>

{notes}    <div class=\"section\">
      <p><small>{LEAD_TIME_NOTICE}</small></p>
    </div>
  </body>
</html>
",
        formula_cost = money(input.formula_cost_per_volume),
        size = input.product_size,
        unit_total = money(costs.total_unit_cost),
        project_total = money(costs.total_project_cost),
    )
}

// =============================================================================
// Document Sinks
// =============================================================================

/// Result of handing a document to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentOutcome {
    /// The surface accepted the document.
    Presented,
    /// No surface could be opened (e.g. a blocked popup). Nothing was shown.
    Unavailable,
}

/// Where rendered quotes go: a print window, a preview pane, a test buffer.
///
/// A sink reports an unavailable surface through its return value; it
/// must not panic.
pub trait DocumentSink {
    fn present(&mut self, document: &str) -> PresentOutcome;
}

/// Collects presented documents in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    documents: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl DocumentSink for MemorySink {
    fn present(&mut self, document: &str) -> PresentOutcome {
        self.documents.push(document.to_string());
        PresentOutcome::Presented
    }
}

/// Renders `snapshot` and hands it to `sink`.
///
/// An unavailable sink is not an error: the outcome says so and the quote
/// is untouched.
pub fn export<S>(
    branding: &DocumentBranding,
    snapshot: &QuoteSnapshot,
    generated_at: DateTime<Utc>,
    sink: &mut S,
) -> PresentOutcome
where
    S: DocumentSink + ?Sized,
{
    let document = render_with(branding, &snapshot.input, &snapshot.costs, generated_at);
    sink.present(&document)
}

// =============================================================================
// Unit Tests
// =============================================================================
