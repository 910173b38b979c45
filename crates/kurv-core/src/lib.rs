//! # kurv-core: Pure Pricing Logic for Kurv
//!
//! This crate is the **heart** of Kurv. It holds the order cart and
//! the voucher pricing rules as pure, synchronous functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Kurv Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Host service (HTTP routing, auth,              │   │
//! │  │              persistence - NOT in this repo)                │   │
//! │  └──────────────────────────────┬──────────────────────────────┘   │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼──────────────────────────────┐   │
//! │  │                     kurv-session                             │   │
//! │  │        one lock-guarded cart per session identity            │   │
//! │  └──────────────────────────────┬──────────────────────────────┘   │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼──────────────────────────────┐   │
//! │  │                ★ kurv-core (THIS CRATE) ★                    │   │
//! │  │                                                              │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐  │   │
//! │  │  │  voucher  │ │   cart    │ │   apply   │ │   totals   │  │   │
//! │  │  │  parsing  │ │   store   │ │  engine   │ │ calculator │  │   │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └────────────┘  │   │
//! │  │                                                              │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`normalize`] - name canonicalization for fuzzy-typed voucher targets
//! - [`voucher`] - voucher code grammar and parser
//! - [`cart`] - line items and the per-item discount ledger
//! - [`apply`] - the voucher application engine
//! - [`totals`] - aggregate totals over the ledger
//! - [`error`] - domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is a deterministic state
//!    transition - same cart + same voucher = same ledger
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are minor units (i64),
//!    percentage discounts floor at each application
//! 4. **Explicit Errors**: the only failure is a malformed voucher code,
//!    typed, never a string or a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use kurv_core::{Cart, Money, TotalsResponse, Voucher};
//!
//! let mut cart = Cart::new();
//! cart.add_or_update_item("Milk", "Dairy", 15, Money::from_minor(10000));
//!
//! cart.apply_voucher(&Voucher::parse("EKS-Milk-x10y13-z25").unwrap());
//! cart.apply_voucher(&Voucher::parse("REG-Milk-z5").unwrap());
//!
//! match TotalsResponse::from(&cart) {
//!     TotalsResponse::Totals(t) => {
//!         assert_eq!(t.total_price, Money::from_minor(150000));
//!         assert_eq!(t.total_discount, Money::from_minor(32500 + 1000));
//!     }
//!     TotalsResponse::Empty { .. } => unreachable!(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod apply;
pub mod cart;
pub mod error;
pub mod money;
pub mod normalize;
pub mod totals;
pub mod voucher;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kurv_core::Cart` instead of
// `use kurv_core::cart::Cart`

pub use cart::{Cart, ExclusiveClaim, LineItem};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use normalize::normalize;
pub use totals::{CartTotals, TotalsResponse, EMPTY_CART_MESSAGE};
pub use voucher::Voucher;
