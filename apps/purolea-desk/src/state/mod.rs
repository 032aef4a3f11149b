//! # State Module
//!
//! Manages application state for the desk app.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┬──────────────────────┐               │
//! │          ▼                      ▼                                       │
//! │  ┌──────────────────┐  ┌──────────────────┐                            │
//! │  │   QuoteState     │  │   ConfigState    │                            │
//! │  │                  │  │                  │                            │
//! │  │  Arc<Mutex<      │  │  company_name    │                            │
//! │  │   QuoteSession   │  │  currency_symbol │                            │
//! │  │  >>              │  │  validity days   │                            │
//! │  └──────────────────┘  └──────────────────┘                            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • QuoteState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod quote;

pub use config::ConfigState;
pub use quote::QuoteState;
