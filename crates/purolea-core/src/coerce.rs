//! # Input Coercion
//!
//! Turns raw text from form controls into typed values.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw text            Numeric field        Toggle field                  │
//! │  ────────            ─────────────        ────────────                  │
//! │  "12.5"        ──►   12.50                 false                        │
//! │  "3.5oz"       ──►   3.50 (prefix)         false                        │
//! │  ""            ──►   0                     false                        │
//! │  "abc"         ──►   0                     false                        │
//! │  "true" / "on" ──►   0                     true                         │
//! │                                                                         │
//! │  Nothing here returns an error: bad input becomes a harmless value.    │
//! │  Magnitudes are clamped to MAX_MONEY_INPUT / MAX_VOLUME_INPUT.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::Volume;

/// Largest money amount, in dollars, accepted from raw text (either sign).
pub const MAX_MONEY_INPUT: f64 = 1_000_000.0;

/// Largest volume, in ounces, accepted from raw text (either sign).
pub const MAX_VOLUME_INPUT: f64 = 10_000.0;

/// Parses the leading decimal number of `raw`, or 0.
///
/// Leading whitespace is skipped and the longest numeric prefix is used,
/// so `"3.5 oz"` reads as 3.5. Anything without a numeric prefix is 0.
///
/// ```rust
/// use purolea_core::coerce::parse_decimal;
///
/// assert_eq!(parse_decimal("12.5"), 12.5);
/// assert_eq!(parse_decimal("  -2.25kg"), -2.25);
/// assert_eq!(parse_decimal(".5"), 0.5);
/// assert_eq!(parse_decimal("abc"), 0.0);
/// assert_eq!(parse_decimal(""), 0.0);
/// ```
pub fn parse_decimal(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0.0;
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Coerces raw text to a money amount, clamped to [`MAX_MONEY_INPUT`].
///
/// ```rust
/// use purolea_core::coerce::coerce_money;
///
/// assert_eq!(coerce_money("1000000000000000").to_string(), "$1000000.00");
/// ```
pub fn coerce_money(raw: &str) -> Money {
    let value = parse_decimal(raw).clamp(-MAX_MONEY_INPUT, MAX_MONEY_INPUT);
    Money::from_decimal(value)
}

/// Coerces raw text to a volume, clamped to [`MAX_VOLUME_INPUT`].
pub fn coerce_volume(raw: &str) -> Volume {
    let value = parse_decimal(raw).clamp(-MAX_VOLUME_INPUT, MAX_VOLUME_INPUT);
    Volume::from_decimal(value)
}

/// Coerces raw text to a production quantity.
///
/// Fractions are truncated; negative or non-numeric text becomes 0.
///
/// ```rust
/// use purolea_core::coerce::coerce_quantity;
///
/// assert_eq!(coerce_quantity("1000"), 1000);
/// assert_eq!(coerce_quantity("250 units"), 250);
/// assert_eq!(coerce_quantity("-5"), 0);
/// assert_eq!(coerce_quantity("lots"), 0);
/// ```
pub fn coerce_quantity(raw: &str) -> u32 {
    let value = parse_decimal(raw).trunc();
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Coerces raw text from a switch control.
///
/// `true`, `on`, `yes` and `1` (any case) are on; everything else is off.
pub fn coerce_toggle(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "yes" | "1"
    )
}
