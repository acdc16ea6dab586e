//! Identity card number generator.

use rand::{Rng, RngCore};
use serde_json::Value;

use fikcja_core::idcard;

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, random_digits};

/// Generates a valid identity card number: three random letters, then the
/// check digit, then five random digits. The first of the six drawn digits
/// is discarded in favor of the check digit.
pub fn generate_id_number(rng: &mut dyn RngCore) -> String {
    let letters: [char; 3] = std::array::from_fn(|_| {
        char::from(b'A' + rng.gen_range(0..26) as u8)
    });
    let digits = random_digits(rng, 6);

    let mut values = [0_u32; 9];
    for (slot, letter) in values[..3].iter_mut().zip(&letters) {
        *slot = idcard::char_value(*letter).unwrap_or(0);
    }
    // values[3] stays zero: the check digit participates as zero.
    for (slot, digit) in values[4..].iter_mut().zip(&digits[1..]) {
        *slot = u32::from(*digit);
    }
    let check = idcard::check_digit(&values);

    let mut out = String::with_capacity(idcard::ID_LENGTH);
    out.extend(letters);
    out.push(char::from(b'0' + check));
    for digit in &digits[1..] {
        out.push(char::from(b'0' + *digit));
    }
    out
}

pub struct IdCardGenerator;

impl Generator for IdCardGenerator {
    fn id(&self) -> &'static str {
        "pl.idcard"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        _params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        Ok(generate_id_number(rng))
    }
}
