//! # Commands Module
//!
//! The command layer a quote form host binds to. Commands are plain
//! functions over the managed state; `serve` in lib.rs is one such host.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product picker, quantity menu
//! ├── quote.rs    ◄─── Field edits, product selection, summary
//! ├── export.rs   ◄─── Printable quote document
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // No state: catalog is static
//! fn list_products() -> Vec<ProductDto>
//!
//! // Quote + config (summary shows validity days)
//! fn update_field(quote: &QuoteState, config: &ConfigState, update: FieldUpdate)
//!
//! // Quote + config + an output surface
//! fn export_quote(quote: &QuoteState, config: &ConfigState, sink: &mut S)
//! ```

pub mod catalog;
pub mod config;
pub mod export;
pub mod quote;
