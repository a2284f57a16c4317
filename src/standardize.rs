// 🔄 Format Standardizers - Per-family structural transformations
// Each takes a raw identifier and produces a checked body ready for
// zero-padding to the canonical 14-digit width

use crate::checksum;
use crate::error::GtinError;

const GTIN_LENGTHS: &[usize] = &[8, 12, 13, 14];
const UPCE_LENGTH: &[usize] = &[7];
const ISBN10_LENGTH: &[usize] = &[10];
const ISSN8_LENGTH: &[usize] = &[8];

// ============================================================================
// GUARDS
// ============================================================================

/// Reject non-digit values and structurally impossible lengths.
/// Length failures here mean the rule table routed a value to the wrong
/// standardizer, so the error names the family and what it accepts.
fn guard(family: &'static str, value: &str, accepted: &'static [usize]) -> Result<(), GtinError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(GtinError::NonDigit {
            value: value.to_string(),
        });
    }
    if !accepted.contains(&value.len()) {
        return Err(GtinError::Format {
            family,
            length: value.len(),
            accepted,
        });
    }
    Ok(())
}

/// Append the GTIN check digit to an unchecked body
fn with_check_digit(unchecked: &str) -> Result<String, GtinError> {
    let check = checksum::gtin(unchecked)?;
    Ok(format!("{}{}", unchecked, check))
}

// ============================================================================
// GTIN / EAN PASSTHROUGH
// ============================================================================

/// GTIN-8/12/13/14 and EAN values already carry their check digit in the
/// GTIN scheme and pass through unchanged.
pub fn gtin_passthrough(value: &str) -> Result<String, GtinError> {
    guard("GTIN", value, GTIN_LENGTHS)?;
    Ok(value.to_string())
}

// ============================================================================
// UPC-E EXPANSION
// ============================================================================

/// Expand a 7-digit UPC-E to its 12-digit UPC-A form.
///
/// The digit at position 5 selects one of five zero-insertion templates
/// reconstructing the manufacturer/product layout; the compressed form's
/// own trailing check digit (position 6) is discarded and a fresh GTIN
/// check digit is computed over the expanded 11-digit body.
/// Templates per http://www.taltech.com/barcodesoftware/symbologies/upc
pub fn upce_to_upca(value: &str) -> Result<String, GtinError> {
    guard("UPC-E", value, UPCE_LENGTH)?;
    let unchecked = match value.as_bytes()[5] {
        b'0' | b'1' | b'2' => format!("0{}{}0000{}", &value[0..2], &value[5..6], &value[2..5]),
        b'3' => format!("0{}00000{}", &value[0..3], &value[3..5]),
        b'4' => format!("0{}00000{}", &value[0..4], &value[4..5]),
        _ => format!("0{}0000{}", &value[0..5], &value[5..6]),
    };
    with_check_digit(&unchecked)
}

// ============================================================================
// ISBN-10 / ISSN-8
// ============================================================================

/// ISBN-10 to Bookland EAN body: "978" + the first 9 digits (the ISBN's own
/// mod-11 check digit is dropped), then the GTIN check digit.
pub fn isbn10_to_ean(value: &str) -> Result<String, GtinError> {
    guard("ISBN-10", value, ISBN10_LENGTH)?;
    with_check_digit(&format!("978{}", &value[..value.len() - 1]))
}

/// ISSN-8 to serial EAN body: "977" + the first 7 digits (dropping the
/// ISSN's own check digit) + "00" variant/issue placeholder, then the GTIN
/// check digit.
pub fn issn8_to_ean(value: &str) -> Result<String, GtinError> {
    guard("ISSN-8", value, ISSN8_LENGTH)?;
    with_check_digit(&format!("977{}00", &value[..value.len() - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtin_passthrough_unchanged() {
        assert_eq!(
            gtin_passthrough("5012345678900").unwrap(),
            "5012345678900"
        );
        assert_eq!(
            gtin_passthrough("00977204936308").unwrap(),
            "00977204936308"
        );
    }

    #[test]
    fn test_gtin_passthrough_rejects_odd_lengths() {
        let err = gtin_passthrough("123456789").unwrap_err();
        assert_eq!(
            err,
            GtinError::Format {
                family: "GTIN",
                length: 9,
                accepted: &[8, 12, 13, 14],
            }
        );
    }

    #[test]
    fn test_upce_template_0_1_2() {
        // selector digit lands between manufacturer and product digits
        assert_eq!(upce_to_upca("1234505").unwrap(), "012000003455");
        assert_eq!(upce_to_upca("1234514").unwrap(), "012100003454");
        assert_eq!(upce_to_upca("1234523").unwrap(), "012200003453");
    }

    #[test]
    fn test_upce_template_3() {
        assert_eq!(upce_to_upca("1234531").unwrap(), "012300000451");
    }

    #[test]
    fn test_upce_template_4() {
        assert_eq!(upce_to_upca("1234543").unwrap(), "012340000053");
    }

    #[test]
    fn test_upce_template_5_to_9() {
        assert_eq!(upce_to_upca("1234558").unwrap(), "012345000058");
        assert_eq!(upce_to_upca("1234596").unwrap(), "012345000096");
    }

    #[test]
    fn test_upce_wrong_length() {
        let err = upce_to_upca("123450").unwrap_err();
        assert_eq!(
            err,
            GtinError::Format {
                family: "UPC-E",
                length: 6,
                accepted: &[7],
            }
        );
    }

    #[test]
    fn test_isbn10_to_ean() {
        assert_eq!(isbn10_to_ean("0306406152").unwrap(), "9780306406157");
    }

    #[test]
    fn test_isbn10_drops_embedded_check_digit() {
        // same body, different (even invalid) trailing digit: same output
        assert_eq!(
            isbn10_to_ean("0306406150").unwrap(),
            isbn10_to_ean("0306406152").unwrap()
        );
    }

    #[test]
    fn test_issn8_to_ean() {
        assert_eq!(issn8_to_ean("20493630").unwrap(), "9772049363002");
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            upce_to_upca("12345O7").unwrap_err(),
            GtinError::NonDigit { .. }
        ));
        assert!(matches!(
            isbn10_to_ean("0-306-4061").unwrap_err(),
            GtinError::NonDigit { .. }
        ));
    }
}
