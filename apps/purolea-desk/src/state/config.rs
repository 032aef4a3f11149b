//! # Configuration State
//!
//! Branding and quote terms loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PUROLEA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use purolea_core::{DocumentBranding, DEFAULT_QUOTE_VALIDITY_DAYS};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name on the printed quote
    pub company_name: String,

    /// Currency symbol (display only, no conversion)
    pub currency_symbol: String,

    /// Unit for product size and formula cost
    pub volume_unit: String,

    /// Days a quote is honoured, shown in the cost summary
    pub quote_validity_days: u32,
}

impl Default for ConfigState {
    fn default() -> Self {
        let branding = DocumentBranding::default();
        ConfigState {
            company_name: branding.company_name,
            currency_symbol: branding.currency_symbol,
            volume_unit: branding.volume_unit,
            quote_validity_days: DEFAULT_QUOTE_VALIDITY_DAYS,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PUROLEA_COMPANY_NAME`: Override company name
    /// - `PUROLEA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PUROLEA_VOLUME_UNIT`: Override volume unit
    /// - `PUROLEA_QUOTE_VALIDITY_DAYS`: Override validity (ignored if not a number)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("PUROLEA_COMPANY_NAME") {
            config.company_name = name;
        }

        if let Some(symbol) = lookup("PUROLEA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(unit) = lookup("PUROLEA_VOLUME_UNIT") {
            config.volume_unit = unit;
        }

        if let Some(days) = lookup("PUROLEA_QUOTE_VALIDITY_DAYS") {
            match days.trim().parse::<u32>() {
                Ok(days) => config.quote_validity_days = days,
                Err(_) => tracing::warn!(
                    value = %days,
                    "ignoring unparsable PUROLEA_QUOTE_VALIDITY_DAYS"
                ),
            }
        }

        config
    }

    /// Branding handed to the document renderer.
    pub fn branding(&self) -> DocumentBranding {
        DocumentBranding {
            company_name: self.company_name.clone(),
            currency_symbol: self.currency_symbol.clone(),
            volume_unit: self.volume_unit.clone(),
        }
    }
}
