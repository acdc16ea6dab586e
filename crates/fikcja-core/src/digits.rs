//! Digit-sequence helpers shared by the number formats.

use crate::error::{Error, Result};

/// Parses a string of ASCII digits into their numeric values.
///
/// Rejects the first non-digit character; lengths are checked by callers
/// since each format has its own fixed length.
pub fn parse(value: &str) -> Result<Vec<u8>> {
    value
        .chars()
        .map(|ch| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(Error::InvalidCharacter(ch))
        })
        .collect()
}

/// Renders digit values back into their string form.
pub fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + *d)).collect()
}

/// Weighted sum of `digits` against `weights`, pairwise.
///
/// The slices must have equal length; every weight table in this crate is a
/// fixed-size array matched to its format.
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

/// Checks that `value` has exactly `expected` characters.
pub fn expect_length(value: &str, expected: usize) -> Result<()> {
    let found = value.chars().count();
    if found != expected {
        return Err(Error::InvalidLength { expected, found });
    }
    Ok(())
}
