//! # Name Normalization
//!
//! Voucher codes carry human-typed target names, and cashiers type
//! `"Blue Cheese"`, `"bluecheese"` and `"BLUE CHEESE"` interchangeably.
//! All matching in this crate therefore happens on a normalized key:
//! whitespace stripped, case folded, otherwise byte-for-byte.
//!
//! This is a pure canonicalization, not a search. There is no edit
//! distance and no partial matching: two names are equal iff their
//! normalized keys are identical.

/// Canonicalizes a name, category or voucher target for matching.
///
/// ## Rules
/// - All Unicode whitespace is removed (not just trimmed)
/// - Case is folded via `char::to_lowercase`
/// - Everything else, including punctuation, is kept as-is
///
/// ## Example
/// ```rust
/// use kurv_core::normalize::normalize;
///
/// assert_eq!(normalize("Blue Cheese"), "bluecheese");
/// assert_eq!(normalize(" blue\tCHEESE "), "bluecheese");
/// assert_ne!(normalize("blue-cheese"), "bluecheese");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("MILK"), normalize("milk"));
        assert_eq!(normalize("MiLk"), "milk");
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(normalize("blue cheese"), "bluecheese");
        assert_eq!(normalize("blue\t \ncheese"), "bluecheese");
        assert_eq!(normalize("  milk  "), "milk");
    }

    #[test]
    fn test_punctuation_is_significant() {
        // Only case and whitespace are folded; punctuation still
        // distinguishes names
        assert_ne!(normalize("blue-cheese"), normalize("blue cheese"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
