//! # Error Types
//!
//! Domain-specific error types for purolea-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  purolea-core errors (this file)                                       │
//! │  └── CoreError        - unknown field, unknown product                 │
//! │                                                                         │
//! │  App errors (purolea-desk)                                             │
//! │  └── ApiError         - What the quote form sees (serialized)          │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Quote form                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The quote form is forgiving by design of its users' workflow:
//! - Non-numeric text in a numeric field is coerced to 0
//! - Selecting an unknown product leaves the quote unchanged
//! - A blocked print surface simply produces no document
//!
//! Only programming mistakes at the command boundary surface as errors.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A raw edit named a field the quote does not have.
    ///
    /// ## When This Occurs
    /// - The form was built against a newer field list
    /// - A typo in a hand-written command invocation
    #[error("Unknown quote field: {0}")]
    UnknownField(String),

    /// A product id was required but is not in the catalog.
    ///
    /// Selection itself never raises this; it is a silent no-op.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
