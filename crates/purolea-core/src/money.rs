//! # Money Module
//!
//! Provides the `Money` type for quote amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quote sums four per-unit components, then multiplies by the run     │
//! │  size. Float drift shows up as a total that disagrees with its rows.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Ten-Thousandths of a Dollar                      │
//! │    Prices are typed in cents and sizes in hundredths of an ounce, so   │
//! │    price × size is exact at four decimals. Nothing is rounded until    │
//! │    an amount is shown:                                                  │
//! │      $8.75/oz × 1.5 oz = 13.1250, × 2000 = $26250.00 (not $26260.00)    │
//! │    The total row always equals the sum of the line rows.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! All arithmetic saturates at the `i64` range. A pathological edit yields a
//! pinned total instead of a panic in the middle of a recomputation.
//!
//! ## Usage
//! ```rust
//! use purolea_core::money::Money;
//! use purolea_core::types::Volume;
//!
//! let per_oz = Money::from_cents(1550); // $15.50 per oz
//! let per_unit = per_oz.scale_by(Volume::from_hundredths(150)); // 1.5 oz
//! assert_eq!(per_unit.cents(), 2325);
//!
//! let run = per_unit.multiply_quantity(250);
//! assert_eq!(run.to_string(), "$5812.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::Volume;

/// Internal units per cent.
const UNITS_PER_CENT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in ten-thousandths of a dollar.
///
/// ## Design Decisions
/// - **i64 (signed)**: raw form input is not range-checked for sign, so a
///   negative cost typed by the operator must still be representable
/// - **Sub-cent precision**: per-unit amounts keep four decimals so that
///   multiplying by the run size never amplifies a display rounding
/// - **Serializes as a plain number of ten-thousandths** (`$12.50` is `125000`)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  ProductTemplate.base_formula_cost ──► QuoteInput.formula_cost         │
/// │                                              │                          │
/// │                                              ▼ × product_size           │
/// │  QuoteInput.packaging_cost ──┐      CostBreakdown.formula_per_unit     │
/// │  TierTable rates ────────────┼────► CostBreakdown.total_unit_cost      │
/// │                              │              │ × quantity                │
/// │                              │              ▼                           │
/// │                              └────► CostBreakdown.total_project_cost   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use purolea_core::money::Money;
    ///
    /// let fee = Money::from_cents(250); // $2.50
    /// assert_eq!(fee.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents.saturating_mul(UNITS_PER_CENT))
    }

    /// Converts a decimal amount typed into the form, rounding to four
    /// decimals. Non-finite input becomes zero; out-of-range input pins
    /// to the `i64` bounds.
    ///
    /// ```rust
    /// use purolea_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(12.5).cents(), 1250);
    /// assert_eq!(Money::from_decimal(0.125).cents(), 13);
    /// assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        // float-to-int `as` saturates
        Money((amount * (UNITS_PER_CENT * 100) as f64).round() as i64)
    }

    /// Returns the value rounded half away from zero to whole cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        let half = UNITS_PER_CENT / 2;
        if self.0 >= 0 {
            self.0.saturating_add(half) / UNITS_PER_CENT
        } else {
            self.0.saturating_sub(half) / UNITS_PER_CENT
        }
    }

    /// Returns the unrounded value in ten-thousandths of a dollar.
    #[inline]
    pub const fn ten_thousandths(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion of the rounded amount.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.cents() / 100
    }

    /// Returns the cents portion of the rounded amount (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.cents() % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a per-unit amount by a production quantity.
    ///
    /// ## Example
    /// ```rust
    /// use purolea_core::money::Money;
    ///
    /// let unit_cost = Money::from_cents(2200); // $22.00
    /// assert_eq!(unit_cost.multiply_quantity(1000).cents(), 2_200_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Multiplies a per-volume price by a volume.
    ///
    /// ## Rounding
    /// Volumes carry two decimals, so the exact product has six. It is
    /// rounded half away from zero back to four, computed in i128. For
    /// prices typed in whole cents the product is exact.
    ///
    /// ```text
    /// $12.50/oz × 2.00 oz = 125000 × 200 / 100 = 250000 → $25.0000
    /// $10.25/oz × 0.50 oz = 102500 ×  50 / 100 =  51250 → $5.1250
    /// ```
    pub fn scale_by(&self, volume: Volume) -> Money {
        let product = self.0 as i128 * volume.hundredths() as i128;
        let rounded = if product >= 0 {
            (product + 50) / 100
        } else {
            (product - 50) / 100
        };
        let pinned = if rounded < 0 { i64::MIN } else { i64::MAX };
        Money(i64::try_from(rounded).unwrap_or(pinned))
    }

    /// Formats the amount, rounded to cents, with an arbitrary currency symbol.
    ///
    /// ```rust
    /// use purolea_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(350).format_with("€"), "€3.50");
    /// assert_eq!(Money::from_cents(-5).format_with("$"), "-$0.05");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.cents() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Formats the amount like a bare number: trailing zero cents are
    /// dropped (`$15.5`, `$25`, `$10.25`).
    ///
    /// ```rust
    /// use purolea_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1550).format_compact("$"), "$15.5");
    /// assert_eq!(Money::from_cents(2500).format_compact("$"), "$25");
    /// assert_eq!(Money::from_cents(1025).format_compact("$"), "$10.25");
    /// ```
    pub fn format_compact(&self, symbol: &str) -> String {
        let sign = if self.cents() < 0 { "-" } else { "" };
        let whole = self.dollars().abs();
        match self.cents_part() {
            0 => format!("{sign}{symbol}{whole}"),
            c if c % 10 == 0 => format!("{sign}{symbol}{whole}.{}", c / 10),
            c => format!("{sign}{symbol}{whole}.{c:02}"),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the quote form does: `$` and two decimals,
/// no thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a production quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
