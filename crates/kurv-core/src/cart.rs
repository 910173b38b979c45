//! # Cart Store
//!
//! The ordered collection of line items and the per-item discount
//! ledger that voucher application writes into.
//!
//! ## Discount Ledger Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  LineItem                                                           │
//! │                                                                     │
//! │  quantity ──────────┐                                               │
//! │                     ▼                                               │
//! │  exclusive_claim: { claimed_qty, discount_amount }                  │
//! │        │            at most ONE outstanding claim; a new            │
//! │        │            exclusive voucher REPLACES it wholesale         │
//! │        │                                                            │
//! │  regular_discount: running sum                                      │
//! │        │            every regular voucher ADDS to it                │
//! │        ▼                                                            │
//! │  total_discount() = claim.discount_amount + regular_discount        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two fields are deliberately separate so the replace policy
//! (exclusive) and the accumulate policy (regular) cannot be conflated
//! into one mutable "current discount" number.
//!
//! ## Invariants
//! - Items are unique by normalized name, insertion order preserved
//! - `exclusive_claim.claimed_qty <= quantity`
//! - Re-adding an item resets BOTH discount fields: a re-added item
//!   starts with no discount history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::normalize::normalize;

// =============================================================================
// Line Items
// =============================================================================

/// The portion of an item's quantity allocated to an exclusive voucher,
/// together with the discount computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveClaim {
    /// Units claimed by the voucher; excluded from regular discounting.
    pub claimed_qty: i64,
    pub discount_amount: Money,
}

/// A line item in the cart.
///
/// ## Design Notes
/// - `key`: the normalized name, computed once on insert; identity and
///   all voucher matching go through it
/// - `name`: the raw spelling as last provided, kept for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Normalized name (see [`crate::normalize`]); unique per cart.
    pub key: String,

    /// Display name as last provided by the caller.
    pub name: String,

    /// Category, the alternate targeting key for regular vouchers.
    pub category: String,

    /// Units in the cart. Non-negative.
    pub quantity: i64,

    /// Price per unit in minor currency units.
    pub unit_price: Money,

    /// Outstanding exclusive-voucher allocation, if any.
    pub exclusive_claim: Option<ExclusiveClaim>,

    /// Accumulated regular-voucher discounts.
    pub regular_discount: Money,

    /// When this item was (last) added.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(name: &str, category: &str, quantity: i64, unit_price: Money) -> Self {
        LineItem {
            key: normalize(name),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price,
            exclusive_claim: None,
            regular_discount: Money::zero(),
            added_at: Utc::now(),
        }
    }

    /// Line total before discounts (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Units not yet claimed by an exclusive voucher.
    ///
    /// Regular vouchers discount only this portion, so the two voucher
    /// kinds never double-discount the same units.
    pub fn available_qty(&self) -> i64 {
        self.quantity - self.claimed_qty()
    }

    /// Units currently claimed by the exclusive voucher (0 if none).
    pub fn claimed_qty(&self) -> i64 {
        self.exclusive_claim.map_or(0, |c| c.claimed_qty)
    }

    /// Total discount on this line: exclusive claim plus accumulated
    /// regular discounts.
    pub fn total_discount(&self) -> Money {
        self.exclusive_claim
            .map_or(Money::zero(), |c| c.discount_amount)
            + self.regular_discount
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The order cart.
///
/// ## Lifecycle
/// Created empty at session start, mutated by [`Cart::add_or_update_item`]
/// and voucher application (see [`crate::apply`]), wiped by
/// [`Cart::clear`]. Nothing here persists across process restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in insertion order.
    pub items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item, or replaces it if one with the same normalized
    /// name already exists.
    ///
    /// ## Behavior
    /// - New normalized name: appended at the end, zero discount state
    /// - Existing normalized name: `name`, `category`, `quantity` and
    ///   `unit_price` are overwritten and BOTH discount fields are
    ///   reset - the item starts over with no discount history. Its
    ///   position among the other items is kept.
    ///
    /// There is no quantity-merge on re-add: the caller supplies the
    /// full new quantity each time.
    pub fn add_or_update_item(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        unit_price: Money,
    ) {
        let key = normalize(name);
        if let Some(item) = self.items.iter_mut().find(|i| i.key == key) {
            item.name = name.to_string();
            item.category = category.to_string();
            item.quantity = quantity;
            item.unit_price = unit_price;
            item.exclusive_claim = None;
            item.regular_discount = Money::zero();
            return;
        }

        self.items
            .push(LineItem::new(name, category, quantity, unit_price));
    }

    /// Looks up an item by its normalized name.
    pub fn item(&self, name: &str) -> Option<&LineItem> {
        let key = normalize(name);
        self.items.iter().find(|i| i.key == key)
    }

    /// Clears all items and discount state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
