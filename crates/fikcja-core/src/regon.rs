//! REGON — Polish business registry number, 9-digit base form and the
//! 14-digit local-unit extension.

use crate::digits;
use crate::error::{Error, Result};

/// Length of the base REGON.
pub const REGON9_LENGTH: usize = 9;

/// Length of the extended REGON.
pub const REGON14_LENGTH: usize = 14;

/// Weights over the first eight digits of a 9-digit REGON.
pub const REGON9_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];

/// Weights over the first thirteen digits of a 14-digit REGON.
pub const REGON14_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

fn mod11_digit(sum: u32) -> u8 {
    let remainder = sum % 11;
    if remainder == 10 {
        0
    } else {
        remainder as u8
    }
}

/// Check digit for a 9-digit REGON: weighted sum mod 11, 10 maps to 0.
pub fn check_digit_9(digits: &[u8; 8]) -> u8 {
    mod11_digit(digits::weighted_sum(digits, &REGON9_WEIGHTS))
}

/// Check digit for a 14-digit REGON over its first thirteen digits.
pub fn check_digit_14(digits: &[u8; 13]) -> u8 {
    mod11_digit(digits::weighted_sum(digits, &REGON14_WEIGHTS))
}

/// Validates a 9-digit REGON.
pub fn validate_regon9(regon: &str) -> Result<()> {
    digits::expect_length(regon, REGON9_LENGTH)?;
    let parsed = digits::parse(regon)?;
    let body: [u8; 8] = parsed[..8].try_into().map_err(|_| Error::InvalidLength {
        expected: REGON9_LENGTH,
        found: parsed.len(),
    })?;
    let expected = check_digit_9(&body);
    let found = parsed[8];
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Validates a 14-digit REGON.
///
/// Only the 14-digit checksum is enforced here; whether the leading nine
/// digits form a valid base REGON is the producer's concern.
pub fn validate_regon14(regon: &str) -> Result<()> {
    digits::expect_length(regon, REGON14_LENGTH)?;
    let parsed = digits::parse(regon)?;
    let body: [u8; 13] = parsed[..13].try_into().map_err(|_| Error::InvalidLength {
        expected: REGON14_LENGTH,
        found: parsed.len(),
    })?;
    let expected = check_digit_14(&body);
    let found = parsed[13];
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }
    Ok(())
}
