//! NRB — Polish domestic bank account number (26 digits), with the IBAN
//! presentation form prefixed `PL`.
//!
//! The leading two digits are an ISO 7064 mod-97 check over the 24-digit
//! BBAN (8-digit bank+branch code plus 16 customer digits).

use serde::{Deserialize, Serialize};

use crate::digits;
use crate::error::{Error, Result};

/// Total NRB length (check digits + BBAN).
pub const NRB_LENGTH: usize = 26;

/// Length of the bank + branch routing code.
pub const BANK_CODE_LENGTH: usize = 8;

/// Length of the customer account part.
pub const CUSTOMER_LENGTH: usize = 16;

/// Numeric expansion of the `PL` country code (P=25, L=21).
pub const PL_COUNTRY_DIGITS: &str = "2521";

/// Output shape of a generated account number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NrbFormat {
    /// 26 digits with no separators.
    #[default]
    Compact,
    /// Digits grouped 2-4-4-4-4-4-4 with spaces.
    Spaced,
}

/// Remainder of a decimal digit string mod 97, folding in blocks of seven
/// digits with the running remainder carried into the next block.
pub fn mod97(value: &str) -> Result<u32> {
    if value.is_empty() {
        return Err(Error::InvalidLength {
            expected: 1,
            found: 0,
        });
    }
    let mut remainder: u64 = 0;
    for chunk in value.as_bytes().chunks(7) {
        let mut block = remainder;
        for byte in chunk {
            if !byte.is_ascii_digit() {
                return Err(Error::InvalidCharacter(char::from(*byte)));
            }
            block = block * 10 + u64::from(byte - b'0');
        }
        remainder = block % 97;
    }
    Ok(remainder as u32)
}

/// Computes the two leading check digits for a 24-digit BBAN: the country
/// value and `00` are appended, the remainder mod 97 is taken, and the
/// check value is `98 - remainder` zero-padded to two digits.
pub fn check_digits(bban: &str) -> Result<String> {
    digits::expect_length(bban, NRB_LENGTH - 2)?;
    let remainder = mod97(&format!("{bban}{PL_COUNTRY_DIGITS}00"))?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Validates a compact 26-digit NRB against its check digits.
pub fn validate(nrb: &str) -> Result<()> {
    digits::expect_length(nrb, NRB_LENGTH)?;
    let parsed = digits::parse(nrb)?;
    let expected = check_digits(&digits::to_string(&parsed[2..]))?;
    let found = digits::to_string(&parsed[..2]);
    if expected != found {
        return Err(Error::ChecksumMismatch {
            expected: expected.parse().unwrap_or(0),
            found: parsed[0] * 10 + parsed[1],
        });
    }
    Ok(())
}

/// Renders a compact NRB in the requested format, optionally with the `PL`
/// country prefix (IBAN form).
pub fn format(nrb: &str, format: NrbFormat, iban_prefix: bool) -> String {
    let body = match format {
        NrbFormat::Compact => nrb.to_string(),
        NrbFormat::Spaced => {
            let mut grouped = String::with_capacity(NRB_LENGTH + 6);
            for (index, ch) in nrb.chars().enumerate() {
                if index == 2 || (index > 2 && (index - 2) % 4 == 0) {
                    grouped.push(' ');
                }
                grouped.push(ch);
            }
            grouped
        }
    };
    if iban_prefix {
        match format {
            NrbFormat::Compact => format!("PL{body}"),
            NrbFormat::Spaced => format!("PL {body}"),
        }
    } else {
        body
    }
}
