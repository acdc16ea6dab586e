//! PESEL — Polish national identification number.
//!
//! Eleven digits: `yymmdd` birth date with the century folded into the
//! month, a four-digit serial whose last digit encodes sex, and a weighted
//! check digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits;
use crate::error::{Error, Result};

/// Total length of a PESEL.
pub const PESEL_LENGTH: usize = 11;

/// Check digit weights over the first ten digits.
pub const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// First year covered by the PESEL century bands.
pub const MIN_YEAR: i32 = 1800;

/// Last year covered by the PESEL century bands.
pub const MAX_YEAR: i32 = 2299;

/// Index of the serial digit whose parity encodes sex.
pub const SEX_DIGIT_INDEX: usize = 9;

/// Sex as encoded in the PESEL serial: even final serial digit for female,
/// odd for male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Whether `digit` has the parity this sex requires.
    pub fn parity_matches(self, digit: u8) -> bool {
        match self {
            Sex::Female => digit % 2 == 0,
            Sex::Male => digit % 2 == 1,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            other => Err(Error::InvalidSex(other.to_string())),
        }
    }
}

/// Birth data feeding PESEL generation. Constructed fresh per call, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub sex: Sex,
}

impl BirthRecord {
    /// Range-checks the record.
    ///
    /// Day is a bare 1-31 check with no calendar lookup; the format accepts
    /// dates such as February 31.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(Error::UnsupportedYear(self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidMonth(self.month));
        }
        if !(1..=31).contains(&self.day) {
            return Err(Error::InvalidDay(self.day));
        }
        Ok(())
    }

    /// The six leading date digits: `yy`, century-encoded month, `dd`.
    pub fn date_digits(&self) -> Result<[u8; 6]> {
        self.validate()?;
        let yy = self.year.rem_euclid(100) as u8;
        let mm = encoded_month(self.year, self.month)? as u8;
        let dd = self.day as u8;
        Ok([yy / 10, yy % 10, mm / 10, mm % 10, dd / 10, dd % 10])
    }
}

/// Folds the century into the month: +80 for the 1800s, +0 for the 1900s,
/// then +20 per century up to the 2200s.
pub fn encoded_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    let offset = match year {
        1800..=1899 => 80,
        1900..=1999 => 0,
        2000..=2099 => 20,
        2100..=2199 => 40,
        2200..=2299 => 60,
        _ => return Err(Error::UnsupportedYear(year)),
    };
    Ok(month + offset)
}

/// Check digit over the first ten digits: weighted sum mod 10, then
/// `10 - r` unless the remainder is zero.
pub fn check_digit(digits: &[u8; 10]) -> u8 {
    let remainder = digits::weighted_sum(digits, &PESEL_WEIGHTS) % 10;
    if remainder == 0 {
        0
    } else {
        (10 - remainder) as u8
    }
}

/// Validates an 11-digit PESEL against its check digit.
pub fn validate(pesel: &str) -> Result<()> {
    digits::expect_length(pesel, PESEL_LENGTH)?;
    let parsed = digits::parse(pesel)?;
    let body: [u8; 10] = parsed[..10]
        .try_into()
        .map_err(|_| Error::InvalidLength {
            expected: PESEL_LENGTH,
            found: parsed.len(),
        })?;
    let expected = check_digit(&body);
    let found = parsed[10];
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Decodes the sex encoded in the serial parity digit of a valid PESEL.
pub fn sex_of(pesel: &str) -> Result<Sex> {
    validate(pesel)?;
    let parsed = digits::parse(pesel)?;
    if parsed[SEX_DIGIT_INDEX] % 2 == 0 {
        Ok(Sex::Female)
    } else {
        Ok(Sex::Male)
    }
}
