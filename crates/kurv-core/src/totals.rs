//! # Totals Calculator
//!
//! Derives the aggregate totals from the current item ledger. A pure
//! function of cart state: recomputed on every read, never cached.
//! The cart is small, and recomputation cannot go stale.
//!
//! ## Aggregate Identity
//! ```text
//! total_price    = Σ unit_price × quantity
//! total_discount = Σ (exclusive claim + regular discounts)  per item
//! total          = total_price − total_discount              (exact)
//! ```
//!
//! `total_discount <= total_price` is NOT guaranteed: discounts are
//! not capped against price, so a misconfigured voucher percentage can
//! drive `total` negative. That flows through as-is; clamping it here
//! would hide the misconfiguration from the caller.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;

/// The distinguished response for a cart with no items.
pub const EMPTY_CART_MESSAGE: &str = "CART_IS_EMPTY";

/// Aggregate totals over a non-empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_price: Money,
    pub total_discount: Money,
    pub total: Money,
}

/// Totals response for the read surface.
///
/// Callers must branch on the cart being empty rather than doing
/// arithmetic over an empty set, so the empty case is a distinguished
/// message object, not a zeroed triple.
///
/// ## Wire Shapes
/// ```text
/// non-empty: {"total_price":155000,"total_discount":33500,"total":121500}
/// empty:     {"message":"CART_IS_EMPTY"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalsResponse {
    Totals(CartTotals),
    Empty { message: String },
}

impl TotalsResponse {
    fn empty() -> Self {
        TotalsResponse::Empty {
            message: EMPTY_CART_MESSAGE.to_string(),
        }
    }
}

impl From<&Cart> for TotalsResponse {
    fn from(cart: &Cart) -> Self {
        if cart.is_empty() {
            return TotalsResponse::empty();
        }

        let total_price: Money = cart.items.iter().map(|i| i.line_total()).sum();
        let total_discount: Money = cart.items.iter().map(|i| i.total_discount()).sum();

        TotalsResponse::Totals(CartTotals {
            total_price,
            total_discount,
            total: total_price - total_discount,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::Voucher;

    #[test]
    fn test_empty_cart_returns_message() {
        let cart = Cart::new();
        assert_eq!(
            TotalsResponse::from(&cart),
            TotalsResponse::Empty {
                message: "CART_IS_EMPTY".to_string()
            }
        );
    }

    #[test]
    fn test_empty_cart_wire_shape() {
        let json = serde_json::to_string(&TotalsResponse::from(&Cart::new())).unwrap();
        assert_eq!(json, r#"{"message":"CART_IS_EMPTY"}"#);
    }

    #[test]
    fn test_totals_wire_shape() {
        let mut cart = Cart::new();
        cart.add_or_update_item("Milk", "Dairy", 2, Money::from_minor(1000));
        cart.apply_voucher(&Voucher::parse("REG-Milk-z10").unwrap());

        let json = serde_json::to_string(&TotalsResponse::from(&cart)).unwrap();
        assert_eq!(
            json,
            r#"{"total_price":2000,"total_discount":200,"total":1800}"#
        );
    }

    #[test]
    fn test_aggregate_identity_holds() {
        let mut cart = Cart::new();
        cart.add_or_update_item("Milk", "Dairy", 3, Money::from_minor(999));
        cart.add_or_update_item("Bread", "Bakery", 2, Money::from_minor(501));
        cart.apply_voucher(&Voucher::parse("REG-Dairy-z7").unwrap());
        cart.apply_voucher(&Voucher::parse("EKS-Bread-x1y1-z13").unwrap());

        match TotalsResponse::from(&cart) {
            TotalsResponse::Totals(t) => {
                // Exact at the aggregate level: all rounding already
                // happened per application
                assert_eq!(t.total, t.total_price - t.total_discount);
                assert_eq!(t.total_price, Money::from_minor(3 * 999 + 2 * 501));
            }
            TotalsResponse::Empty { .. } => panic!("cart is not empty"),
        }
    }

    #[test]
    fn test_total_can_go_negative() {
        let mut cart = Cart::new();
        cart.add_or_update_item("Milk", "Dairy", 1, Money::from_minor(1000));
        cart.apply_voucher(&Voucher::parse("REG-Milk-z250").unwrap());

        match TotalsResponse::from(&cart) {
            TotalsResponse::Totals(t) => {
                assert_eq!(t.total, Money::from_minor(-1500));
                assert!(t.total.is_negative());
            }
            TotalsResponse::Empty { .. } => panic!("cart is not empty"),
        }
    }

    #[test]
    fn test_zero_quantity_item_counts_as_non_empty() {
        // An item with quantity 0 still makes the cart non-empty; the
        // empty branch is about item COUNT, not total quantity
        let mut cart = Cart::new();
        cart.add_or_update_item("Milk", "Dairy", 0, Money::from_minor(1000));

        match TotalsResponse::from(&cart) {
            TotalsResponse::Totals(t) => {
                assert_eq!(t.total_price, Money::zero());
                assert_eq!(t.total, Money::zero());
            }
            TotalsResponse::Empty { .. } => panic!("cart has an item"),
        }
    }
}
