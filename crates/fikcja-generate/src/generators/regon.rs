//! REGON generators, 9- and 14-digit variants.

use rand::RngCore;
use serde_json::Value;

use fikcja_core::digits;
use fikcja_core::regon;

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, random_digits};

/// Generates a valid 9-digit REGON.
pub fn generate_regon9(rng: &mut dyn RngCore) -> String {
    let body = random_digits(rng, 8);
    let base: [u8; 8] = body[..].try_into().unwrap_or([0; 8]);
    let mut out = digits::to_string(&body);
    out.push(char::from(b'0' + regon::check_digit_9(&base)));
    out
}

/// Generates a valid 14-digit REGON by extending a fresh valid REGON-9
/// with four local-unit digits and the 14-digit check digit.
pub fn generate_regon14(rng: &mut dyn RngCore) -> String {
    let mut out = generate_regon9(rng);
    for digit in random_digits(rng, 4) {
        out.push(char::from(b'0' + digit));
    }
    let parsed = digits::parse(&out).unwrap_or_default();
    let base: [u8; 13] = parsed[..].try_into().unwrap_or([0; 13]);
    out.push(char::from(b'0' + regon::check_digit_14(&base)));
    out
}

pub struct Regon9Generator;

impl Generator for Regon9Generator {
    fn id(&self) -> &'static str {
        "pl.regon9"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        _params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        Ok(generate_regon9(rng))
    }
}

pub struct Regon14Generator;

impl Generator for Regon14Generator {
    fn id(&self) -> &'static str {
        "pl.regon14"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        _params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        Ok(generate_regon14(rng))
    }
}
