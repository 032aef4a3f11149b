//! # Purolea Desk Library
//!
//! Application shell for Purolea Quote: logging, configuration, state, and
//! the commands a quote form host binds to. The bundled binary drives the
//! same commands over a line protocol on stdin/stdout (see [`serve`]).
//!
//! ## Module Organization
//! ```text
//! purolea_desk/
//! ├── main.rs         ◄─── Binary entry point, calls run()
//! ├── lib.rs          ◄─── You are here (startup, line protocol)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── quote.rs    ◄─── Quote session behind a mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product picker commands
//! │   ├── quote.rs    ◄─── Field edit / selection commands
//! │   ├── export.rs   ◄─── Document export command
//! │   └── config.rs   ◄─── Config command
//! ├── sink.rs         ◄─── Channel-backed print surface
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup
//! ```rust
//! use purolea_desk::commands::quote::{get_quote, select_product};
//!
//! let app = purolea_desk::bootstrap();
//! let summary = select_product(&app.quote, &app.config, "cream".to_string());
//! assert_eq!(summary.snapshot.costs.formula_cost_per_unit.to_string(), "$50.00");
//! assert_eq!(get_quote(&app.quote, &app.config), summary);
//! ```

pub mod commands;
pub mod error;
pub mod sink;
pub mod state;

use std::io::{self, BufRead, Write};

use purolea_core::QuoteSession;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{catalog, config, export, quote};
use error::ApiError;
use sink::ChannelSink;
use state::{ConfigState, QuoteState};

/// The managed state a host hands to every command.
#[derive(Debug, Clone)]
pub struct AppState {
    pub quote: QuoteState,
    pub config: ConfigState,
}

/// Initializes logging, loads configuration, and opens a quote session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─────────────────────────────────────────────►  │
/// │     • tracing-subscriber with env filter                               │
/// │     • Default: INFO, purolea crates at DEBUG; override with RUST_LOG   │
/// │                                                                         │
/// │  2. Load Configuration ─────────────────────────────────────────────►  │
/// │     • PUROLEA_* environment variables over defaults                    │
/// │                                                                         │
/// │  3. Open Quote Session ─────────────────────────────────────────────►  │
/// │     • Default custom quote over the standard catalog                   │
/// │     • Observer logs every recomputed total                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap() -> AppState {
    init_tracing();

    info!("Starting Purolea Quote");

    let config = ConfigState::from_env();
    info!(company = %config.company_name, "Configuration loaded");

    let mut session = QuoteSession::new();
    session.subscribe(|snapshot| {
        debug!(
            quantity = snapshot.input.quantity,
            unit = %snapshot.costs.total_unit_cost,
            project = %snapshot.costs.total_project_cost,
            "quote recomputed"
        );
    });

    info!("State initialized");
    AppState {
        quote: QuoteState::from_session(session),
        config,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=purolea_core=trace` - Narrow to one crate
/// - Default: INFO, DEBUG for the purolea crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,purolea_desk=debug,purolea_core=debug"));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        debug!(%err, "tracing subscriber already installed, keeping it");
    }
}

/// Bootstraps the app and serves stdin until end of input.
pub fn run() -> io::Result<()> {
    let app = bootstrap();
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&app, stdin.lock(), stdout.lock())
}

/// Answers one form event per input line.
///
/// ## Line Protocol
/// ```text
/// products                  → [ProductDto, ...]
/// product <id>              → ProductDto | ApiError
/// quantities                → [100, 250, ...]
/// config                    → ConfigState
/// show                      → QuoteSummary
/// select <id>               → QuoteSummary
/// set <field> <raw text>    → QuoteSummary | ApiError
/// export                    → HTML document, then ExportResponse
/// quit                      → stops reading
/// ```
/// Every reply except the document is one line of JSON.
pub fn serve<R: BufRead, W: Write>(app: &AppState, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let mut parts = line.trim().splitn(3, ' ');
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default();

        match command {
            "" => continue,
            "quit" => break,
            "products" => reply(&mut output, &catalog::list_products())?,
            "product" => match catalog::get_product(arg.to_string()) {
                Ok(product) => reply(&mut output, &product)?,
                Err(err) => reply(&mut output, &err)?,
            },
            "quantities" => reply(&mut output, &catalog::get_quantity_options())?,
            "config" => reply(&mut output, &config::get_config(&app.config))?,
            "show" => reply(&mut output, &quote::get_quote(&app.quote, &app.config))?,
            "select" => reply(
                &mut output,
                &quote::select_product(&app.quote, &app.config, arg.to_string()),
            )?,
            "set" => {
                match quote::update_field_raw(&app.quote, &app.config, arg.to_string(), rest.to_string())
                {
                    Ok(summary) => reply(&mut output, &summary)?,
                    Err(err) => reply(&mut output, &err)?,
                }
            }
            "export" => {
                let (mut sink, surface) = ChannelSink::channel();
                let response = export::export_quote(&app.quote, &app.config, &mut sink);
                for document in surface.try_iter() {
                    output.write_all(document.as_bytes())?;
                }
                reply(&mut output, &response)?;
            }
            other => {
                debug!(command = other, "unknown desk command");
                reply(&mut output, &ApiError::validation(format!("Unknown command: {other}")))?;
            }
        }
    }
    output.flush()
}

fn reply<W: Write, T: Serialize>(output: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::quote::update_field;
    use purolea_core::FieldUpdate;

    #[test]
    fn test_bootstrap_twice_is_harmless() {
        let first = bootstrap();
        let second = bootstrap();

        update_field(&first.quote, &first.config, FieldUpdate::Quantity(500));

        assert_eq!(first.quote.with_session(|s| s.input().quantity), 500);
        assert_eq!(second.quote.with_session(|s| s.input().quantity), 100);
    }

    fn serve_lines(app: &AppState, script: &str) -> Vec<serde_json::Value> {
        let mut output = Vec::new();
        serve(app, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_serve_answers_each_line() {
        let app = bootstrap();
        let replies = serve_lines(
            &app,
            "quantities\nselect serum\nset quantity 250\n\nset notes Pump top, frosted\n",
        );

        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0][6], 2000);
        assert_eq!(replies[1]["snapshot"]["input"]["selectedProductId"], "serum");
        assert_eq!(replies[2]["snapshot"]["costs"]["totalProjectCost"], 59_375_000);
        assert_eq!(replies[3]["snapshot"]["input"]["notes"], "Pump top, frosted");
    }

    #[test]
    fn test_serve_reports_errors_as_json() {
        let app = bootstrap();
        let replies = serve_lines(&app, "set labelCost 1\nproduct shampoo\nfrobnicate\n");

        assert_eq!(replies[0]["code"], "VALIDATION_ERROR");
        assert_eq!(replies[1]["code"], "NOT_FOUND");
        assert_eq!(replies[2]["message"], "Unknown command: frobnicate");
    }

    #[test]
    fn test_serve_stops_at_quit() {
        let app = bootstrap();
        let replies = serve_lines(&app, "show\nquit\nset quantity 500\n");

        assert_eq!(replies.len(), 1);
        assert_eq!(app.quote.with_session(|s| s.input().quantity), 100);
    }

    #[test]
    fn test_serve_export_writes_document() {
        let app = bootstrap();
        let mut output = Vec::new();
        serve(&app, "export\n".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("Purolea Production Quote"));
        assert!(text.trim_end().ends_with('}'));
        assert!(text.contains("\"outcome\":\"presented\""));
    }
}
