//! # Voucher Codes
//!
//! Parsing of promotional voucher codes into structured descriptors.
//!
//! ## Code Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  exclusive := "EKS-" <name> "-x" <int> "y" <int> "-z" <int>         │
//! │               (4 dash-separated segments)                           │
//! │                                                                     │
//! │      EKS-Cheese-x10y13-z25                                          │
//! │      │   │      │  │    └── 25% discount                            │
//! │      │   │      │  └─────── claim at most 13 units                  │
//! │      │   │      └────────── require at least 10 units in cart       │
//! │      │   └───────────────── target item name (pre-normalization)    │
//! │      └───────────────────── exclusive variant                       │
//! │                                                                     │
//! │  regular   := "REG-" <nameOrCategory> "-z" <int>                    │
//! │               (3 dash-separated segments)                           │
//! │                                                                     │
//! │      REG-Dairy-z5                                                   │
//! │      │   │     └── 5% discount                                      │
//! │      │   └──────── target item name OR category                     │
//! │      └──────────── regular variant                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Literals (`EKS`, `REG`, `x`, `y`, `z`, `-`) are case-sensitive.
//!
//! Exclusive codes also circulate in a fused spelling with the
//! quantity and discount clauses in one trailing segment
//! (`EKS-Cheese-x10y13z25`); both spellings must keep parsing.
//!
//! ## What the Parser Does NOT Check
//! Semantic ranges are deliberately not validated: `z150` (150%) and
//! `x10y5` (min above max) parse fine, and their arithmetic flows
//! through the engine unchanged. Only the shape of the code is
//! checked here; a shape failure is [`CoreError::MalformedVoucher`].
//!
//! Vouchers are not entities. Each code is parsed, applied once and
//! discarded - there is no uniqueness or expiry tracking in this core.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Voucher Type
// =============================================================================

/// A validated, structured voucher descriptor.
///
/// ## Variants
/// - `Exclusive` targets exactly one item by name, claims a bounded
///   quantity and *replaces* any prior exclusive claim on that item
/// - `Regular` targets an item name or a whole category and
///   *accumulates* on top of whatever is already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Voucher {
    #[serde(rename_all = "camelCase")]
    Exclusive {
        /// Raw target item name (normalized at application time).
        target: String,
        /// Minimum cart quantity for the voucher to take effect.
        min_qty: i64,
        /// Maximum quantity the voucher may claim.
        max_qty: i64,
        discount_percent: u32,
    },
    #[serde(rename_all = "camelCase")]
    Regular {
        /// Raw target item name or category.
        target: String,
        discount_percent: u32,
    },
}

impl Voucher {
    /// Parses a raw voucher code into a [`Voucher`].
    ///
    /// ## Errors
    /// [`CoreError::MalformedVoucher`] when the code matches neither
    /// grammar. The error carries the offending code and a reason
    /// suitable for a client-facing 4xx message.
    ///
    /// ## Example
    /// ```rust
    /// use kurv_core::voucher::Voucher;
    ///
    /// let v = Voucher::parse("EKS-Cheese-x10y13z25").unwrap();
    /// assert_eq!(
    ///     v,
    ///     Voucher::Exclusive {
    ///         target: "Cheese".to_string(),
    ///         min_qty: 10,
    ///         max_qty: 13,
    ///         discount_percent: 25,
    ///     }
    /// );
    ///
    /// assert!(Voucher::parse("XYZ-foo-z10").is_err());
    /// ```
    pub fn parse(code: &str) -> CoreResult<Voucher> {
        let segments: Vec<&str> = code.split('-').collect();

        match segments.as_slice() {
            ["EKS", target, quantities, percent] => {
                let (min_qty, max_qty) = parse_quantity_clause(code, quantities)?;
                let discount_percent = parse_percent_clause(code, percent)?;
                Ok(Voucher::Exclusive {
                    target: (*target).to_string(),
                    min_qty,
                    max_qty,
                    discount_percent,
                })
            }
            // Fused spelling: x<min>y<max>z<percent> in one segment.
            ["EKS", target, fused] => {
                let (min_qty, max_qty, discount_percent) = parse_fused_clause(code, fused)?;
                Ok(Voucher::Exclusive {
                    target: (*target).to_string(),
                    min_qty,
                    max_qty,
                    discount_percent,
                })
            }
            ["REG", target, percent] => {
                let discount_percent = parse_percent_clause(code, percent)?;
                Ok(Voucher::Regular {
                    target: (*target).to_string(),
                    discount_percent,
                })
            }
            ["EKS", ..] => Err(CoreError::malformed(
                code,
                "exclusive codes look like EKS-<name>-x<min>y<max>-z<percent>",
            )),
            ["REG", ..] => Err(CoreError::malformed(
                code,
                "regular codes need exactly 3 segments: REG-<nameOrCategory>-z<percent>",
            )),
            [prefix, ..] => Err(CoreError::malformed(
                code,
                format!("unknown prefix '{prefix}'"),
            )),
            [] => Err(CoreError::malformed(code, "empty code")),
        }
    }

    /// The raw target name/category this voucher addresses.
    pub fn target(&self) -> &str {
        match self {
            Voucher::Exclusive { target, .. } | Voucher::Regular { target, .. } => target,
        }
    }
}

impl FromStr for Voucher {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voucher::parse(s)
    }
}

// =============================================================================
// Clause Parsers
// =============================================================================

/// Parses an `x<min>y<max>` quantity clause.
fn parse_quantity_clause(code: &str, clause: &str) -> CoreResult<(i64, i64)> {
    let rest = clause.strip_prefix('x').ok_or_else(|| {
        CoreError::malformed(code, format!("quantity clause '{clause}' must start with 'x'"))
    })?;

    let (min, max) = rest.split_once('y').ok_or_else(|| {
        CoreError::malformed(code, format!("quantity clause '{clause}' is missing 'y'"))
    })?;

    let min_qty = parse_int(code, min, "minimum quantity")?;
    let max_qty = parse_int(code, max, "maximum quantity")?;
    Ok((min_qty, max_qty))
}

/// Parses a fused `x<min>y<max>z<percent>` clause.
fn parse_fused_clause(code: &str, clause: &str) -> CoreResult<(i64, i64, u32)> {
    let rest = clause.strip_prefix('x').ok_or_else(|| {
        CoreError::malformed(code, format!("quantity clause '{clause}' must start with 'x'"))
    })?;

    let (min, rest) = rest.split_once('y').ok_or_else(|| {
        CoreError::malformed(code, format!("quantity clause '{clause}' is missing 'y'"))
    })?;

    let (max, percent) = rest.split_once('z').ok_or_else(|| {
        CoreError::malformed(code, format!("clause '{clause}' is missing 'z<percent>'"))
    })?;

    let min_qty = parse_int(code, min, "minimum quantity")?;
    let max_qty = parse_int(code, max, "maximum quantity")?;
    let discount_percent = percent.parse::<u32>().map_err(|_| {
        CoreError::malformed(code, format!("discount percent '{percent}' is not an integer"))
    })?;
    Ok((min_qty, max_qty, discount_percent))
}

/// Parses a `z<percent>` discount clause.
fn parse_percent_clause(code: &str, clause: &str) -> CoreResult<u32> {
    let rest = clause.strip_prefix('z').ok_or_else(|| {
        CoreError::malformed(code, format!("discount clause '{clause}' must start with 'z'"))
    })?;

    rest.parse::<u32>().map_err(|_| {
        CoreError::malformed(code, format!("discount percent '{rest}' is not an integer"))
    })
}

fn parse_int(code: &str, field: &str, what: &str) -> CoreResult<i64> {
    field
        .parse::<i64>()
        .map_err(|_| CoreError::malformed(code, format!("{what} '{field}' is not an integer")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exclusive() {
        let v = Voucher::parse("EKS-Cheese-x10y13-z25").unwrap();
        assert_eq!(
            v,
            Voucher::Exclusive {
                target: "Cheese".to_string(),
                min_qty: 10,
                max_qty: 13,
                discount_percent: 25,
            }
        );
    }

    #[test]
    fn test_parse_exclusive_fused_spelling() {
        // Same voucher, clauses fused into one trailing segment
        let dashed = Voucher::parse("EKS-Cheese-x10y13-z25").unwrap();
        let fused = Voucher::parse("EKS-Cheese-x10y13z25").unwrap();
        assert_eq!(dashed, fused);
    }

    #[test]
    fn test_fused_spelling_still_needs_all_clauses() {
        assert!(Voucher::parse("EKS-Cheese-x10y13").is_err());
        assert!(Voucher::parse("EKS-Cheese-x10z25").is_err());
        assert!(Voucher::parse("EKS-Cheese-z25").is_err());
    }

    #[test]
    fn test_parse_regular() {
        let v = Voucher::parse("REG-Dairy-z5").unwrap();
        assert_eq!(
            v,
            Voucher::Regular {
                target: "Dairy".to_string(),
                discount_percent: 5,
            }
        );
    }

    #[test]
    fn test_parse_via_fromstr() {
        let v: Voucher = "REG-Milk-z10".parse().unwrap();
        assert_eq!(v.target(), "Milk");
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        let err = Voucher::parse("XYZ-foo-z10").unwrap_err();
        assert!(matches!(err, CoreError::MalformedVoucher { .. }));
    }

    #[test]
    fn test_wrong_segment_counts_rejected() {
        assert!(Voucher::parse("EKS-OnlyTwoParts").is_err());
        assert!(Voucher::parse("EKS-a-x1y2z3-z4-extra").is_err());
        assert!(Voucher::parse("REG-Item").is_err());
        assert!(Voucher::parse("REG-Item-z5-extra").is_err());
        assert!(Voucher::parse("").is_err());
        assert!(Voucher::parse("JUSTONESEGMENT").is_err());
    }

    #[test]
    fn test_bad_clauses_rejected() {
        // missing literals
        assert!(Voucher::parse("EKS-Item-10y13-z25").is_err());
        assert!(Voucher::parse("EKS-Item-x10:13-z25").is_err());
        assert!(Voucher::parse("REG-Item-5").is_err());
        // non-integer fields
        assert!(Voucher::parse("REG-Item-zNOTANUMBER").is_err());
        assert!(Voucher::parse("EKS-Item-xAyB-z25").is_err());
        assert!(Voucher::parse("EKS-Item-x10y13-z2.5").is_err());
    }

    #[test]
    fn test_case_sensitive_literals() {
        // prefixes and clause letters are exact; the target name is the
        // only case-insensitive part (normalized later, not here)
        assert!(Voucher::parse("eks-Item-x1y2-z3").is_err());
        assert!(Voucher::parse("reg-Item-z3").is_err());
        assert!(Voucher::parse("EKS-Item-X1y2-z3").is_err());
        assert!(Voucher::parse("REG-Item-Z3").is_err());
    }

    #[test]
    fn test_semantic_ranges_not_validated() {
        // percent above 100: accepted
        assert!(Voucher::parse("REG-Item-z150").is_ok());
        // min above max: accepted
        let v = Voucher::parse("EKS-Item-x10y5z20").unwrap();
        assert_eq!(
            v,
            Voucher::Exclusive {
                target: "Item".to_string(),
                min_qty: 10,
                max_qty: 5,
                discount_percent: 20,
            }
        );
    }

    #[test]
    fn test_name_with_dash_cannot_parse() {
        // '-' is the separator, so a dashed name changes the segment
        // count and the code is rejected as a whole
        assert!(Voucher::parse("EKS-Blue-Cheese-x1y2z3").is_err());
    }
}
