use thiserror::Error;

/// Errors emitted by the generators and the bank-code loader.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error(transparent)]
    Number(#[from] fikcja_core::Error),
    /// The bank-code table is empty, either by construction or because the
    /// backing resource failed to load.
    #[error("no bank codes available")]
    NoBankCodes,
    /// No code in the table starts with the requested bank prefix.
    #[error("no bank codes match prefix {0}")]
    PrefixNotFound(String),
    #[error("bank code data error: {0}")]
    BankData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
