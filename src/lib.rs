// GTIN Normalization Engine - Core Library
// Normalizes UPC/EAN/ISBN/ISSN identifiers into canonical 14-digit GTINs
// and validates/generates their check digits

pub mod checksum;    // Check-digit algorithms (GTIN mod-10, ISBN-10, ISSN-8)
pub mod convert;     // Conversion facade: to_canonical_gtin / valid_checksum
pub mod error;       // Classified error values
pub mod rules;       // Type classifier: (label pattern, length) -> converter
pub mod standardize; // Per-family structural transformations

// Re-export commonly used types
pub use convert::{
    is_gtin_compatible, standardize as standardize_identifier, to_canonical_gtin, valid_checksum,
    zero_pad, Normalizer, GTIN_WIDTH,
};
pub use error::GtinError;
pub use rules::{ClassificationRule, Converter, RuleSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_set() {
        assert!(!super::VERSION.is_empty());
    }

    #[test]
    fn test_reexported_surface() {
        assert_eq!(
            super::to_canonical_gtin("EAN", "5012345678900").unwrap(),
            "05012345678900"
        );
        assert!(super::valid_checksum("GTIN", "00123412341230"));
        assert!(super::is_gtin_compatible("ISSN-8"));
    }
}
