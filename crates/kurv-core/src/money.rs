//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    Every amount is an i64 count of the smallest currency unit.      │
//! │    Discount percentages truncate (floor) at each application, and   │
//! │    the truncation is part of the contract, not an accident.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Floor, Not Rounding?
//! Every voucher application computes its discount independently and
//! truncates independently. Three 1% vouchers therefore may total less
//! than one 3% voucher. Downstream systems reconcile against exactly
//! this behavior, so the floor at each step must be preserved bit for
//! bit. Do NOT "fix" this with half-up rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: a cart total can go negative when vouchers are
///   misconfigured (percent > 100); the core does not clamp
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, serialized as a bare integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents, øre, ...).
    ///
    /// ## Example
    /// ```rust
    /// use kurv_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies this unit price by a quantity to get a line total.
    ///
    /// ## Example
    /// ```rust
    /// use kurv_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Computes a percentage discount over `quantity` units at this
    /// unit price, truncated with floor division.
    ///
    /// Formula: `floor(quantity × unit_price × percent / 100)`.
    ///
    /// ## Implementation
    /// The product is widened to i128 before dividing so that large
    /// quantities and prices cannot overflow. Quantities and prices
    /// are non-negative, so integer division is a true floor here.
    ///
    /// ## Example
    /// ```rust
    /// use kurv_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(10000);
    /// // 13 units at 25% of 10000 = 32500
    /// assert_eq!(unit_price.discount_for(13, 25).minor(), 32500);
    /// // Truncation: 3 units at 333, 10% = floor(99.9) = 99
    /// assert_eq!(Money::from_minor(333).discount_for(3, 10).minor(), 99);
    /// ```
    pub fn discount_for(&self, quantity: i64, percent: u32) -> Money {
        let discount = (quantity as i128 * self.0 as i128 * percent as i128) / 100;
        Money(discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw minor-unit count.
///
/// Currency formatting is explicitly out of scope for this core; the
/// host localizes for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line amounts into a cart total.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.minor(), 500);
    }

    #[test]
    fn test_discount_exact() {
        // 13 × 10000 × 25% = 32500, no truncation
        let unit_price = Money::from_minor(10000);
        assert_eq!(unit_price.discount_for(13, 25).minor(), 32500);
    }

    #[test]
    fn test_discount_floors() {
        // 3 × 333 × 10% = 99.9 → 99
        assert_eq!(Money::from_minor(333).discount_for(3, 10).minor(), 99);
        // 1 × 999 × 1% = 9.99 → 9
        assert_eq!(Money::from_minor(999).discount_for(1, 1).minor(), 9);
    }

    /// Critical test: several small vouchers do NOT equal one large
    /// voucher, because each application truncates independently.
    #[test]
    fn test_independent_truncation_documented() {
        let unit_price = Money::from_minor(999);
        let q = 1;

        let stacked = unit_price.discount_for(q, 1)
            + unit_price.discount_for(q, 2)
            + unit_price.discount_for(q, 3);
        let single = unit_price.discount_for(q, 6);

        // floor(9.99) + floor(19.98) + floor(29.97) = 9 + 19 + 29 = 57
        assert_eq!(stacked.minor(), 57);
        // floor(59.94) = 59
        assert_eq!(single.minor(), 59);
        assert_ne!(stacked, single);
    }

    #[test]
    fn test_percent_over_100_flows_through() {
        // 1 × 1000 × 150% = 1500 - larger than the price, and allowed
        assert_eq!(Money::from_minor(1000).discount_for(1, 150).minor(), 1500);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        // qty and price near the practical ceiling; i128 widening keeps
        // the intermediate product in range
        let unit_price = Money::from_minor(10_000_000_000);
        let discount = unit_price.discount_for(1_000_000, 99);
        assert_eq!(discount.minor(), 9_900_000_000_000_000);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_minor(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("1099").unwrap();
        assert_eq!(back, Money::from_minor(1099));
    }
}
