//! # Voucher Application Engine
//!
//! Given a parsed [`Voucher`] and the current cart, decides which items
//! are affected and writes their discount ledgers.
//!
//! ## Two Policies, Two Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  EXCLUSIVE  (EKS)                    REGULAR  (REG)                 │
//! │                                                                     │
//! │  matches: exactly one item,          matches: every item whose      │
//! │  by normalized NAME                  normalized NAME or CATEGORY    │
//! │                                      equals the target (fan-out)    │
//! │                                                                     │
//! │  requires quantity >= min_qty        no quantity gate               │
//! │  claims min(quantity, max_qty)       discounts only the quantity    │
//! │                                      NOT claimed exclusively        │
//! │                                                                     │
//! │  REPLACES the prior claim            ADDS to the running sum,       │
//! │  wholesale (last one wins)           each computed against the      │
//! │                                      same available quantity        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A voucher that matches nothing is a silent no-op, not an error: the
//! cashier may scan a promotion for an item that was never added.
//!
//! ## Ordering Caveat
//! Because an exclusive claim is replaced, not compared, the final
//! state depends on submission order whenever several exclusive
//! vouchers target the same item. Callers wanting "best offer wins"
//! must sort their vouchers before submitting. Whether that ordering
//! dependence is intended product behavior is an open product
//! question; the replace policy is kept as observed.
//!
//! All percentage arithmetic floors at each individual application
//! (see [`Money::discount_for`]); nothing is deferred to a final
//! floating-point step.

use crate::cart::{Cart, ExclusiveClaim};
#[cfg(test)]
use crate::money::Money;
use crate::normalize::normalize;
use crate::voucher::Voucher;

impl Cart {
    /// Applies a parsed voucher to the cart, updating the discount
    /// ledger of every affected item.
    ///
    /// Infallible by design: zero matches, an unmet minimum quantity,
    /// or an over-100 percentage all just run their arithmetic (which
    /// may be a no-op). Rejection of bad input happens earlier, in
    /// [`Voucher::parse`].
    pub fn apply_voucher(&mut self, voucher: &Voucher) {
        match voucher {
            Voucher::Exclusive {
                target,
                min_qty,
                max_qty,
                discount_percent,
            } => self.apply_exclusive(target, *min_qty, *max_qty, *discount_percent),
            Voucher::Regular {
                target,
                discount_percent,
            } => self.apply_regular(target, *discount_percent),
        }
    }

    /// Exclusive vouchers target at most one item, by name only.
    fn apply_exclusive(&mut self, target: &str, min_qty: i64, max_qty: i64, percent: u32) {
        let key = normalize(target);
        let Some(item) = self.items.iter_mut().find(|i| i.key == key) else {
            return; // no such item: silent no-op
        };

        if item.quantity < min_qty {
            return;
        }

        let claimed_qty = item.quantity.min(max_qty);
        let discount_amount = item.unit_price.discount_for(claimed_qty, percent);

        // Replace wholesale. No magnitude comparison with the prior
        // claim and no accumulation: the last submitted voucher wins.
        item.exclusive_claim = Some(ExclusiveClaim {
            claimed_qty,
            discount_amount,
        });
    }

    /// Regular vouchers fan out over name and category matches.
    fn apply_regular(&mut self, target: &str, percent: u32) {
        let key = normalize(target);

        for item in self
            .items
            .iter_mut()
            .filter(|i| i.key == key || normalize(&i.category) == key)
        {
            // Units already claimed exclusively are off limits, so the
            // two mechanisms never discount the same units twice.
            let available_qty = item.available_qty();
            let discount = item.unit_price.discount_for(available_qty, percent);

            // Accumulate, never replace. Each regular voucher computes
            // against the same available quantity, not a shrinking
            // remainder.
            item.regular_discount += discount;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
