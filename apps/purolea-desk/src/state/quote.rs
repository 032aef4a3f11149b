//! # Quote State
//!
//! Holds the operator's quote session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or edits the same quote
//! 2. A field edit and its recomputation must not interleave with another
//! 3. Commands may be invoked from any thread
//!
//! ## Quote Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote State Operations                               │
//! │                                                                         │
//! │  Form Action              Command                 Session Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │                                                                         │
//! │  Edit an input ──────────► update_field_raw() ──► set_field(update)     │
//! │                                                                         │
//! │  Pick a product ─────────► select_product() ────► select_product(id)    │
//! │                                                                         │
//! │  View summary ───────────► get_quote() ─────────► (read only)           │
//! │                                                                         │
//! │  Click Export PDF ───────► export_quote() ──────► (read only)           │
//! │                                                                         │
//! │  NOTE: Each command holds the lock for the whole edit + recompute.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use purolea_core::QuoteSession;

/// Managed quote state.
///
/// ## Poisoning
/// Session edits compute the new breakdown before committing input and
/// costs together, and money arithmetic saturates rather than panicking.
/// A panic while the lock is held therefore cannot leave a half-updated
/// quote behind, and a poisoned lock is recovered instead of propagated.
#[derive(Debug, Clone)]
pub struct QuoteState {
    session: Arc<Mutex<QuoteSession>>,
}

impl QuoteState {
    /// Creates state around a fresh default quote.
    pub fn new() -> Self {
        Self::from_session(QuoteSession::new())
    }

    pub fn from_session(session: QuoteSession) -> Self {
        QuoteState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// # use purolea_desk::state::QuoteState;
    /// let quote = QuoteState::new();
    /// let total = quote.with_session(|s| s.costs().total_project_cost);
    /// assert_eq!(total.to_string(), "$3325.00");
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&QuoteSession) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut QuoteSession) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}
