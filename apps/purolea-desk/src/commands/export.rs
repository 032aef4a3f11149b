//! # Export Commands
//!
//! Renders the current quote and hands it to a print surface.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator clicks "Export PDF"                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  export_quote(quote, config, sink)                                      │
//! │       │                                                                 │
//! │       ├── snapshot taken under the lock                                 │
//! │       ├── document rendered outside the lock                            │
//! │       ▼                                                                 │
//! │  sink.present(html)                                                     │
//! │       │                                                                 │
//! │       ├── Presented   → surface prints / saves                          │
//! │       └── Unavailable → logged, nothing else happens                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use purolea_core::document;
use purolea_core::{DocumentSink, PresentOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::state::{ConfigState, QuoteState};

/// Result of an export, as reported to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub outcome: PresentOutcome,
    pub generated_at: DateTime<Utc>,
}

/// Exports the current quote, stamped with the current time.
///
/// Never fails: a surface that cannot be opened yields
/// `PresentOutcome::Unavailable`.
pub fn export_quote<S>(quote: &QuoteState, config: &ConfigState, sink: &mut S) -> ExportResponse
where
    S: DocumentSink + ?Sized,
{
    export_quote_at(quote, config, sink, Utc::now())
}

/// Same as [`export_quote`] with an explicit timestamp.
pub fn export_quote_at<S>(
    quote: &QuoteState,
    config: &ConfigState,
    sink: &mut S,
    generated_at: DateTime<Utc>,
) -> ExportResponse
where
    S: DocumentSink + ?Sized,
{
    debug!("export_quote command");
    let snapshot = quote.with_session(|s| s.snapshot());

    let outcome = document::export(&config.branding(), &snapshot, generated_at, sink);
    match outcome {
        PresentOutcome::Presented => info!(
            quantity = snapshot.input.quantity,
            total = %snapshot.costs.total_project_cost,
            "quote document presented"
        ),
        PresentOutcome::Unavailable => {
            warn!("print surface unavailable, no quote document produced")
        }
    }

    ExportResponse {
        outcome,
        generated_at,
    }
}
