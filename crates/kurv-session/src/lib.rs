//! # kurv-session: Session-Owned Cart State
//!
//! Wraps a [`Cart`] in a lock and exposes the operations the host's
//! request layer calls. One `CartSession` per cart identity (e.g. per
//! user session); the engine itself is single-threaded and synchronous,
//! so the lock here is the only serialization point.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                          │
//! │                                                                     │
//! │  Host request              Session op              Cart change      │
//! │  ────────────              ──────────              ───────────      │
//! │                                                                     │
//! │  POST item ──────────────► add_item() ───────────► upsert + reset   │
//! │                                                     discount ledger │
//! │                                                                     │
//! │  POST voucher ───────────► apply_voucher() ──────► parse, then      │
//! │                                                     mutate ledgers  │
//! │                                                                     │
//! │  GET totals ─────────────► totals() ─────────────► (read only)      │
//! │                                                                     │
//! │  GET cart ───────────────► snapshot() ───────────► (read only)      │
//! │                                                                     │
//! │  DELETE cart ────────────► reset() ──────────────► items.clear()    │
//! │                                                                     │
//! │  NOTE: apply_voucher parses BEFORE taking the lock, so a            │
//! │        malformed code can never leave a half-applied cart.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. The host may route concurrent requests at the same session
//! 2. Only one request should mutate the cart at a time
//! 3. Operations are quick; a `RwLock` would add complexity with
//!    minimal benefit

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use kurv_core::{Cart, CoreResult, LineItem, Money, TotalsResponse, Voucher};

// =============================================================================
// Response Shapes
// =============================================================================

/// Cart snapshot including items and totals, for read responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: TotalsResponse,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items.clone(),
            totals: TotalsResponse::from(cart),
        }
    }
}

// =============================================================================
// Cart Session
// =============================================================================

/// A session-owned cart behind a lock.
///
/// Cloning the session clones the handle, not the cart: clones share
/// the same underlying state. Independent carts (different sessions)
/// share nothing.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    cart: Arc<Mutex<Cart>>,
}

impl CartSession {
    /// Creates a session with a new empty cart.
    pub fn new() -> Self {
        CartSession {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Adds or replaces an item in the cart.
    ///
    /// Quantities and prices are non-negative by contract with the
    /// host; re-adding an existing item wipes its discount history
    /// (see [`Cart::add_or_update_item`]).
    pub fn add_item(&self, name: &str, category: &str, quantity: i64, unit_price: Money) {
        debug!(name = %name, category = %category, quantity = %quantity, "add_item");
        self.with_cart_mut(|c| c.add_or_update_item(name, category, quantity, unit_price));
    }

    /// Parses and applies a voucher code.
    ///
    /// ## Errors
    /// [`kurv_core::CoreError::MalformedVoucher`] when the code matches
    /// neither grammar. Parsing happens before the lock is taken, so a
    /// rejected code leaves the cart untouched - there is no partial
    /// application.
    pub fn apply_voucher(&self, code: &str) -> CoreResult<()> {
        debug!(code = %code, "apply_voucher");
        let voucher = Voucher::parse(code)?;
        self.with_cart_mut(|c| c.apply_voucher(&voucher));
        Ok(())
    }

    /// Computes the current totals.
    pub fn totals(&self) -> TotalsResponse {
        debug!("totals");
        self.with_cart(|c| TotalsResponse::from(c))
    }

    /// Returns the full cart snapshot (items + totals).
    pub fn snapshot(&self) -> CartView {
        debug!("snapshot");
        self.with_cart(|c| CartView::from(c))
    }

    /// Clears the cart and all voucher state.
    pub fn reset(&self) {
        debug!("reset");
        self.with_cart_mut(Cart::clear);
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
