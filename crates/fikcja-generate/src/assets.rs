//! Bank routing code table, loaded once from the tab-delimited sort-code
//! registry dump (`plewibnra.txt`).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use fikcja_core::nrb::BANK_CODE_LENGTH;

use crate::errors::GenerationError;

/// Read-only set of known 8-digit bank+branch codes.
#[derive(Debug, Clone, Default)]
pub struct BankCodeTable {
    codes: Vec<String>,
}

impl BankCodeTable {
    /// Builds a table from explicit codes; non 8-digit entries are
    /// rejected. Mostly useful in tests.
    pub fn new<I, S>(codes: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for code in codes {
            let code = code.into();
            if !is_bank_code(&code) {
                return Err(GenerationError::BankData(format!(
                    "not an 8-digit bank code: {code}"
                )));
            }
            set.insert(code);
        }
        Ok(Self {
            codes: set.into_iter().collect(),
        })
    }

    /// Parses the registry dump: records are tab-delimited, and any field
    /// consisting of exactly eight ASCII digits is a bank+branch code.
    /// Duplicates collapse into a set.
    pub fn parse(contents: &str) -> Result<Self, GenerationError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(contents.as_bytes());

        let mut set = BTreeSet::new();
        for record in reader.records() {
            let record = record?;
            for field in record.iter() {
                let field = field.trim();
                if is_bank_code(field) {
                    set.insert(field.to_string());
                }
            }
        }
        Ok(Self {
            codes: set.into_iter().collect(),
        })
    }

    /// Loads and parses the registry dump from disk.
    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GenerationError::BankData(format!(
                "failed to read bank code file {}: {err}",
                path.display()
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// All codes, sorted.
    pub fn all(&self) -> &[String] {
        &self.codes
    }

    /// Codes starting with the given bank prefix.
    pub fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.codes
            .iter()
            .map(String::as_str)
            .filter(move |code| code.starts_with(prefix))
    }
}

fn is_bank_code(field: &str) -> bool {
    field.len() == BANK_CODE_LENGTH && field.bytes().all(|byte| byte.is_ascii_digit())
}

/// Process-wide table parsed from the bundled `assets/plewibnra.txt`.
///
/// A missing or unreadable bundle degrades to an empty table, which NRB
/// generation reports as `NoBankCodes` instead of producing wrong output.
pub fn bank_code_table() -> &'static BankCodeTable {
    static TABLE: OnceLock<BankCodeTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("plewibnra.txt");
        match BankCodeTable::load(&path) {
            Ok(table) => {
                tracing::debug!(codes = table.len(), "loaded bundled bank code table");
                table
            }
            Err(err) => {
                tracing::warn!(error = %err, "bank code table unavailable");
                BankCodeTable::default()
            }
        }
    })
}
