use thiserror::Error;

/// Core error type shared across Fikcja crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The year falls outside the PESEL century bands (1800-2299).
    #[error("unsupported year for PESEL encoding: {0}")]
    UnsupportedYear(i32),
    /// Month outside 1-12.
    #[error("invalid month: {0}")]
    InvalidMonth(u32),
    /// Day outside 1-31.
    #[error("invalid day: {0}")]
    InvalidDay(u32),
    /// Sex value other than `male` or `female`.
    #[error("invalid sex: {0}, use 'male' or 'female'")]
    InvalidSex(String),
    /// The value has the wrong number of characters for its format.
    #[error("invalid length: expected {expected} characters, found {found}")]
    InvalidLength { expected: usize, found: usize },
    /// A character outside the format's alphabet.
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),
    /// The embedded check digit does not match the recomputed one.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// Convenience alias for results returned by Fikcja crates.
pub type Result<T> = std::result::Result<T, Error>;
