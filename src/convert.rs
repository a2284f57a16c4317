// 🎯 Conversion Facade - classify, validate, standardize, zero-pad
// The externally consumed surface: label + digits in, canonical GTIN-14 out

use crate::error::GtinError;
use crate::rules::RuleSet;

/// Canonical GTIN width
pub const GTIN_WIDTH: usize = 14;

// ============================================================================
// NORMALIZER
// ============================================================================

/// Normalizer - the conversion engine over a classification rule table.
///
/// Holds no mutable state; the default table is the built-in one and a
/// custom `RuleSet` can be supplied for deployment-specific label aliases.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: RuleSet,
}

impl Normalizer {
    /// Create a normalizer over the built-in rule table
    pub fn new() -> Self {
        Normalizer {
            rules: RuleSet::builtin(),
        }
    }

    /// Create a normalizer over a custom rule table
    pub fn with_rules(rules: RuleSet) -> Self {
        Normalizer { rules }
    }

    /// The rule table this normalizer classifies against
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Convert any supported identifier to its canonical 14-digit GTIN.
    /// Fails on unrecognized (label, length) pairs and on GTIN-native
    /// identifiers whose embedded check digit is wrong.
    pub fn to_canonical_gtin(&self, id_type: &str, value: &str) -> Result<String, GtinError> {
        Ok(zero_pad(&self.standardize(id_type, value, true)?))
    }

    /// Classify and standardize without the final zero-pad.
    ///
    /// When `validate` is set, identifiers whose native check digit uses
    /// the GTIN scheme are verified before passthrough. Families with a
    /// different native scheme (UPC-E, ISBN-10, ISSN-8) are never verified
    /// here: their embedded check digit is dropped by the standardizer and
    /// a fresh GTIN check digit computed over the rewritten body.
    pub fn standardize(
        &self,
        id_type: &str,
        value: &str,
        validate: bool,
    ) -> Result<String, GtinError> {
        let converter = self.rules.classify(id_type, value.chars().count())?;
        if validate && converter.uses_gtin_checksum() {
            self.fail_on_invalid_checksum(id_type, value)?;
        }
        converter.standardize(value)
    }

    /// Permissive checksum query against the family's NATIVE algorithm.
    /// Never fails: unrecognized labels/lengths, non-digit input and
    /// unrepresentable check digits all answer `false`.
    pub fn valid_checksum(&self, id_type: &str, identifier: &str) -> bool {
        let converter = match self.rules.classify(id_type, identifier.chars().count()) {
            Ok(converter) => converter,
            Err(_) => return false,
        };

        let mut chars = identifier.chars();
        let actual = match chars.next_back() {
            Some(actual) => actual,
            None => return false,
        };

        match converter.check_digit(chars.as_str()) {
            Ok(expected) => actual == expected,
            Err(_) => false,
        }
    }

    /// True when the label names any supported identifier family,
    /// independent of a concrete value
    pub fn is_gtin_compatible(&self, id_type: &str) -> bool {
        self.rules.is_gtin_compatible(id_type)
    }

    fn fail_on_invalid_checksum(&self, id_type: &str, identifier: &str) -> Result<(), GtinError> {
        let converter = self.rules.classify(id_type, identifier.chars().count())?;

        let mut chars = identifier.chars();
        let actual = match chars.next_back() {
            Some(actual) => actual,
            None => return Ok(()),
        };

        let expected = converter.check_digit(chars.as_str())?;
        if actual != expected {
            return Err(GtinError::Checksum {
                id_type: id_type.to_string(),
                identifier: identifier.to_string(),
                expected,
                actual,
            });
        }

        Ok(())
    }
}

// ============================================================================
// MODULE-LEVEL SURFACE
// ============================================================================

/// Convert an identifier to its canonical GTIN using the built-in rules
pub fn to_canonical_gtin(id_type: &str, value: &str) -> Result<String, GtinError> {
    Normalizer::new().to_canonical_gtin(id_type, value)
}

/// Standardize an identifier using the built-in rules
pub fn standardize(id_type: &str, value: &str, validate: bool) -> Result<String, GtinError> {
    Normalizer::new().standardize(id_type, value, validate)
}

/// Check an identifier's native check digit using the built-in rules
pub fn valid_checksum(id_type: &str, identifier: &str) -> bool {
    Normalizer::new().valid_checksum(id_type, identifier)
}

/// Label-family membership test using the built-in rules
pub fn is_gtin_compatible(id_type: &str) -> bool {
    Normalizer::new().is_gtin_compatible(id_type)
}

/// Left-pad a standardized body with '0' to the canonical 14-digit width
pub fn zero_pad(body: &str) -> String {
    format!("{:0>width$}", body, width = GTIN_WIDTH)
}
