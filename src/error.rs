// ⚠️ Error Types - Classified failures for the normalization engine
// Every failure is distinguishable; valid_checksum() converts all of them to false

use std::fmt;

/// GtinError - all the ways a conversion can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtinError {
    /// No (pattern, length) rule matched the given label/length
    Classification { id_type: String, length: usize },

    /// The identifier's embedded check digit does not match the expected one
    Checksum {
        id_type: String,
        identifier: String,
        expected: char,
        actual: char,
    },

    /// A standardizer received a value whose length it cannot handle.
    /// Classification already enforces lengths, so hitting this means the
    /// rule table and the standardizer disagree.
    Format {
        family: &'static str,
        length: usize,
        accepted: &'static [usize],
    },

    /// ISBN-10 / ISSN-8 check digit computed to 10, which has no
    /// single-decimal-digit representation
    UnrepresentableCheckDigit { algorithm: &'static str, value: u32 },

    /// The value contains a character outside 0-9
    NonDigit { value: String },
}

impl fmt::Display for GtinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GtinError::Classification { id_type, length } => {
                write!(
                    f,
                    "No gtin converter found for {} with length {}",
                    id_type, length
                )
            }
            GtinError::Checksum {
                id_type,
                identifier,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} {} has invalid checksum {} -- expected {}",
                    id_type, identifier, actual, expected
                )
            }
            GtinError::Format {
                family,
                length,
                accepted,
            } => {
                write!(
                    f,
                    "{} value has length {}, accepted length(s): {:?}",
                    family, length, accepted
                )
            }
            GtinError::UnrepresentableCheckDigit { algorithm, value } => {
                write!(
                    f,
                    "{} check digit {} cannot be represented as a single decimal digit",
                    algorithm, value
                )
            }
            GtinError::NonDigit { value } => {
                write!(f, "value {:?} contains non-digit characters", value)
            }
        }
    }
}

impl std::error::Error for GtinError {}
