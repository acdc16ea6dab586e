//! NRB / IBAN account number generator.

use rand::{Rng, RngCore};
use serde_json::Value;

use fikcja_core::NrbFormat;
use fikcja_core::nrb::{self, CUSTOMER_LENGTH};

use crate::assets::BankCodeTable;
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, random_digits};
use crate::params::{get_bool, get_str, params_object};

/// Options for account number generation.
#[derive(Debug, Clone, Default)]
pub struct NrbOptions {
    /// Restrict the bank+branch code to ones starting with this 4-digit
    /// bank prefix; `None` draws from the whole table.
    pub bank_prefix: Option<String>,
    pub format: NrbFormat,
    /// Prepend the `PL` country code (IBAN form).
    pub iban: bool,
}

/// Generates a valid account number from a code in the table plus sixteen
/// random customer digits, formatted per the options.
pub fn generate_nrb(
    table: &BankCodeTable,
    options: &NrbOptions,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    if table.is_empty() {
        return Err(GenerationError::NoBankCodes);
    }
    let code = match options.bank_prefix.as_deref() {
        None => {
            let all = table.all();
            all[rng.gen_range(0..all.len())].as_str()
        }
        Some(prefix) => {
            let matching: Vec<&str> = table.matching(prefix).collect();
            if matching.is_empty() {
                return Err(GenerationError::PrefixNotFound(prefix.to_string()));
            }
            matching[rng.gen_range(0..matching.len())]
        }
    };

    let mut bban = String::with_capacity(nrb::NRB_LENGTH - 2);
    bban.push_str(code);
    for digit in random_digits(rng, CUSTOMER_LENGTH) {
        bban.push(char::from(b'0' + digit));
    }

    let check = nrb::check_digits(&bban)?;
    let compact = format!("{check}{bban}");
    Ok(nrb::format(&compact, options.format, options.iban))
}

pub struct NrbGenerator;

impl Generator for NrbGenerator {
    fn id(&self) -> &'static str {
        "pl.nrb"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let map = params_object(params, "pl.nrb")?;

        let bank_prefix = match get_str(map, "bank") {
            None | Some("random") => None,
            Some(prefix) => Some(prefix.to_string()),
        };
        let format = match get_str(map, "format") {
            None | Some("compact") => NrbFormat::Compact,
            Some("spaced") => NrbFormat::Spaced,
            Some(other) => {
                return Err(GenerationError::InvalidParams(format!(
                    "pl.nrb: unknown format {other:?}, use 'compact' or 'spaced'"
                )));
            }
        };
        let options = NrbOptions {
            bank_prefix,
            format,
            iban: get_bool(map, "iban").unwrap_or(false),
        };
        generate_nrb(ctx.bank_codes, &options, rng)
    }
}
