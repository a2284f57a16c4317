// ✅ Checksum Algorithms - Three weighted-digit-sum schemes
// Each takes the identifier body (everything except the final check digit)
// and returns the expected check digit as a char

use crate::error::GtinError;
use crate::standardize;

// ============================================================================
// DIGIT PARSING
// ============================================================================

/// Parse a value into its decimal digits, rejecting anything outside 0-9
pub(crate) fn digits(value: &str) -> Result<Vec<u32>, GtinError> {
    value
        .chars()
        .map(|c| {
            c.to_digit(10).ok_or_else(|| GtinError::NonDigit {
                value: value.to_string(),
            })
        })
        .collect()
}

fn to_digit_char(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

// ============================================================================
// GTIN (GS1 MOD-10)
// ============================================================================

/// GTIN check digit: reverse the body, weight 3 at even reversed positions
/// and 1 at odd, then (10 - sum % 10) % 10.
///
/// This is the scheme shared by GTIN-14, EAN-13/8 and UPC-A, and the one
/// appended to every standardized body.
pub fn gtin(body: &str) -> Result<char, GtinError> {
    let digits = digits(body)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, digit)| digit * if idx % 2 == 0 { 3 } else { 1 })
        .sum();
    Ok(to_digit_char((10 - sum % 10) % 10))
}

// ============================================================================
// ISBN-10 (MOD-11, positional weights)
// ============================================================================

/// ISBN-10 check digit: digits in original order, digit at 1-indexed
/// position i weighted by i, result sum % 11.
///
/// A result of 10 (classically printed as "X") has no decimal-digit
/// representation and is surfaced as an error.
pub fn isbn10(body: &str) -> Result<char, GtinError> {
    let digits = digits(body)?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, digit)| digit * (idx as u32 + 1))
        .sum();
    let check = sum % 11;
    if check == 10 {
        return Err(GtinError::UnrepresentableCheckDigit {
            algorithm: "ISBN-10",
            value: check,
        });
    }
    Ok(to_digit_char(check))
}

// ============================================================================
// ISSN-8 (MOD-11, reversed weights)
// ============================================================================

/// ISSN-8 check digit: reverse the body, digit at reversed position i
/// weighted by i + 2, result (11 - sum % 11) % 11.
///
/// As with ISBN-10, a result of 10 cannot be a single decimal digit.
pub fn issn8(body: &str) -> Result<char, GtinError> {
    let digits = digits(body)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, digit)| digit * (idx as u32 + 2))
        .sum();
    let check = (11 - sum % 11) % 11;
    if check == 10 {
        return Err(GtinError::UnrepresentableCheckDigit {
            algorithm: "ISSN-8",
            value: check,
        });
    }
    Ok(to_digit_char(check))
}

// ============================================================================
// UPC-E (via expansion)
// ============================================================================

/// UPC-E check digit. The compressed form cannot be checksummed directly:
/// expand it to UPC-A first (the check-digit slot is filled with a
/// placeholder the templates never read) and take the UPC-A check digit.
pub fn upce(body: &str) -> Result<char, GtinError> {
    let expanded = standardize::upce_to_upca(&format!("{}0", body))?;
    // upce_to_upca always ends with the freshly computed GTIN check digit
    Ok(expanded.chars().last().unwrap_or('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtin_upca_body() {
        assert_eq!(gtin("12341234124").unwrap(), '7');
    }

    #[test]
    fn test_gtin_ean13_body() {
        assert_eq!(gtin("501234567890").unwrap(), '0');
    }

    #[test]
    fn test_gtin_gtin14_body() {
        assert_eq!(gtin("0097720493630").unwrap(), '8');
    }

    #[test]
    fn test_gtin_isbn13_body() {
        // 978-prefixed ISBN body uses the plain GTIN scheme
        assert_eq!(gtin("978030640615").unwrap(), '7');
    }

    #[test]
    fn test_isbn10_reference() {
        assert_eq!(isbn10("030640615").unwrap(), '2');
    }

    #[test]
    fn test_isbn10_unrepresentable() {
        // 6 * 9 = 54, 54 % 11 = 10: no decimal representation
        let err = isbn10("000000006").unwrap_err();
        assert_eq!(
            err,
            GtinError::UnrepresentableCheckDigit {
                algorithm: "ISBN-10",
                value: 10,
            }
        );
    }

    #[test]
    fn test_issn8_reference() {
        assert_eq!(issn8("2049363").unwrap(), '0');
    }

    #[test]
    fn test_issn8_unrepresentable() {
        // reversed leading 6 weighted by 2 -> 12, 12 % 11 = 1, check = 10
        let err = issn8("0000006").unwrap_err();
        assert_eq!(
            err,
            GtinError::UnrepresentableCheckDigit {
                algorithm: "ISSN-8",
                value: 10,
            }
        );
    }

    #[test]
    fn test_upce_reference() {
        assert_eq!(upce("123450").unwrap(), '5');
        assert_eq!(upce("123459").unwrap(), '6');
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            gtin("12a4").unwrap_err(),
            GtinError::NonDigit { .. }
        ));
        assert!(matches!(
            isbn10("O30640615").unwrap_err(),
            GtinError::NonDigit { .. }
        ));
        assert!(matches!(
            issn8("2049-363").unwrap_err(),
            GtinError::NonDigit { .. }
        ));
    }

    #[test]
    fn test_empty_body_sums_to_zero() {
        assert_eq!(gtin("").unwrap(), '0');
    }
}
