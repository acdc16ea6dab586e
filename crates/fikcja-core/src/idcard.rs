//! Polish identity card number: three uppercase letters and six digits,
//! with the check digit embedded at position four.

use crate::digits;
use crate::error::{Error, Result};

/// Total length of an identity card number.
pub const ID_LENGTH: usize = 9;

/// Weights over the nine character values.
pub const ID_WEIGHTS: [u32; 9] = [7, 3, 1, 9, 7, 3, 1, 7, 3];

/// Maps `A..Z` to the values `10..35`; digits map to themselves.
pub fn char_value(ch: char) -> Option<u32> {
    if ch.is_ascii_uppercase() {
        Some(10 + (ch as u32 - 'A' as u32))
    } else {
        ch.to_digit(10)
    }
}

/// Check digit over the nine character values with the check slot zeroed.
///
/// Raw weighted sum mod 10 — unlike PESEL and REGON there is no final
/// subtraction; that asymmetry is part of the official formula.
pub fn check_digit(values: &[u32; 9]) -> u8 {
    let sum: u32 = values
        .iter()
        .zip(&ID_WEIGHTS)
        .map(|(value, weight)| value * weight)
        .sum();
    (sum % 10) as u8
}

/// Validates a nine-character identity card number.
pub fn validate(number: &str) -> Result<()> {
    digits::expect_length(number, ID_LENGTH)?;
    let chars: Vec<char> = number.chars().collect();
    for ch in &chars[..3] {
        if !ch.is_ascii_uppercase() {
            return Err(Error::InvalidCharacter(*ch));
        }
    }
    for ch in &chars[3..] {
        if !ch.is_ascii_digit() {
            return Err(Error::InvalidCharacter(*ch));
        }
    }

    let mut values = [0_u32; 9];
    for (slot, ch) in values.iter_mut().zip(&chars) {
        *slot = char_value(*ch).ok_or(Error::InvalidCharacter(*ch))?;
    }
    let found = values[3] as u8;
    values[3] = 0;
    let expected = check_digit(&values);
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }
    Ok(())
}
