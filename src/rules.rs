// 🏷️ Classification Rules - Rules as Data
// Ordered (label pattern, length) -> converter table for identifier families

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::checksum;
use crate::error::GtinError;
use crate::standardize;

// ============================================================================
// CONVERTER BINDING
// ============================================================================

/// Converter - the {standardizer, checksum algorithm} pair a rule binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Converter {
    /// GTIN/EAN/UPC-A passthrough, GS1 mod-10 check digit
    Gtin,
    /// UPC-E template expansion, check digit via expansion
    UpcE,
    /// ISBN-10 "978" rewrite, positional mod-11 check digit
    Isbn10,
    /// ISSN-8 "977" rewrite, reversed mod-11 check digit
    Issn8,
}

impl Converter {
    /// Human-readable family name for error messages and display
    pub fn name(&self) -> &'static str {
        match self {
            Converter::Gtin => "GTIN",
            Converter::UpcE => "UPC-E",
            Converter::Isbn10 => "ISBN-10",
            Converter::Issn8 => "ISSN-8",
        }
    }

    /// Transform a raw value into its checked body (8 to 14 digits)
    pub fn standardize(&self, value: &str) -> Result<String, GtinError> {
        match self {
            Converter::Gtin => standardize::gtin_passthrough(value),
            Converter::UpcE => standardize::upce_to_upca(value),
            Converter::Isbn10 => standardize::isbn10_to_ean(value),
            Converter::Issn8 => standardize::issn8_to_ean(value),
        }
    }

    /// Compute the family's NATIVE check digit over an identifier body
    pub fn check_digit(&self, body: &str) -> Result<char, GtinError> {
        match self {
            Converter::Gtin => checksum::gtin(body),
            Converter::UpcE => checksum::upce(body),
            Converter::Isbn10 => checksum::isbn10(body),
            Converter::Issn8 => checksum::issn8(body),
        }
    }

    /// True when the native check digit uses the GTIN mod-10 scheme.
    /// Only such identifiers can be validated before standardization; the
    /// other families embed a check digit the standardizer drops anyway.
    pub fn uses_gtin_checksum(&self) -> bool {
        matches!(self, Converter::Gtin)
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// ClassificationRule - one (pattern, length) -> converter entry.
///
/// A label matches when it equals one of the aliases, or an alias followed
/// by an optional `-` and the exact variant suffix. Matching is
/// case-insensitive, so "GTIN", "gtin-14" and "GTIN14" are all the same
/// family designator, while "GTIN41" matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Family aliases, e.g. ["GTIN", "EAN"]
    pub aliases: Vec<String>,

    /// Optional digit-count/variant suffix, e.g. "14", "A", "E"
    #[serde(default)]
    pub variant: Option<String>,

    /// Required exact value length
    pub length: usize,

    /// Converter this rule binds to
    pub converter: Converter,
}

impl ClassificationRule {
    pub fn new(aliases: &[&str], variant: Option<&str>, length: usize, converter: Converter) -> Self {
        ClassificationRule {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            variant: variant.map(|v| v.to_string()),
            length,
            converter,
        }
    }

    /// Check whether the label alone matches this rule's family pattern
    pub fn matches_label(&self, id_type: &str) -> bool {
        let label = id_type.to_ascii_uppercase();
        for alias in &self.aliases {
            let alias = alias.to_ascii_uppercase();
            if let Some(rest) = label.strip_prefix(&alias) {
                if rest.is_empty() {
                    return true;
                }
                if let Some(variant) = &self.variant {
                    let rest = rest.strip_prefix('-').unwrap_or(rest);
                    if rest.eq_ignore_ascii_case(variant) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Check label pattern and value length together
    pub fn matches(&self, id_type: &str, length: usize) -> bool {
        self.length == length && self.matches_label(id_type)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// RuleSet - ordered rule table, evaluated first-match-wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    /// The built-in table covering every supported (family, length) pair
    pub fn builtin() -> Self {
        RuleSet {
            rules: vec![
                ClassificationRule::new(&["GTIN", "EAN"], Some("8"), 8, Converter::Gtin),
                ClassificationRule::new(&["GTIN", "EAN"], Some("12"), 12, Converter::Gtin),
                ClassificationRule::new(
                    &["GTIN", "EAN", "ISBN", "ISSN"],
                    Some("13"),
                    13,
                    Converter::Gtin,
                ),
                ClassificationRule::new(&["GTIN", "EAN"], Some("14"), 14, Converter::Gtin),
                ClassificationRule::new(&["UPC"], Some("A"), 12, Converter::Gtin),
                ClassificationRule::new(&["UPC"], Some("E"), 7, Converter::UpcE),
                ClassificationRule::new(&["ISBN"], Some("10"), 10, Converter::Isbn10),
                ClassificationRule::new(&["ISSN"], Some("8"), 8, Converter::Issn8),
            ],
        }
    }

    /// Create a rule set from an explicit list. Rules are evaluated in the
    /// order given; declare more specific entries first.
    pub fn from_rules(rules: Vec<ClassificationRule>) -> Self {
        RuleSet { rules }
    }

    /// Parse a rule set from a JSON array of rules
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<ClassificationRule> =
            serde_json::from_str(json).context("Failed to parse classification rules JSON")?;
        Ok(RuleSet::from_rules(rules))
    }

    /// Load a rule set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read rules file: {:?}", path.as_ref()))?;
        RuleSet::from_json(&content)
    }

    /// Resolve a (label, value length) pair to its converter
    pub fn classify(&self, id_type: &str, length: usize) -> Result<Converter, GtinError> {
        for rule in &self.rules {
            if rule.matches(id_type, length) {
                return Ok(rule.converter);
            }
        }

        Err(GtinError::Classification {
            id_type: id_type.to_string(),
            length,
        })
    }

    /// True when any rule's family pattern matches the label, at any length
    pub fn is_gtin_compatible(&self, id_type: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches_label(id_type))
    }

    /// Number of rules in the table
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
