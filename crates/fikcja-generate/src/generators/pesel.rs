//! PESEL generator.

use rand::{Rng, RngCore};
use serde_json::Value;

use fikcja_core::digits;
use fikcja_core::pesel::{self, BirthRecord, Sex};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, random_digit};
use crate::params::{get_i64, get_str, params_object};

/// Default year range for randomized birth records.
pub const DEFAULT_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2025;

const FEMALE_SERIAL_DIGITS: [u8; 5] = [0, 2, 4, 6, 8];
const MALE_SERIAL_DIGITS: [u8; 5] = [1, 3, 5, 7, 9];

/// Fills a birth record with random defaults: year 1900-2025, any month,
/// day 1-28 so every month is safe, random sex unless fixed.
pub fn random_birth_record(sex: Option<Sex>, rng: &mut dyn RngCore) -> BirthRecord {
    BirthRecord {
        year: rng.gen_range(DEFAULT_YEAR_RANGE),
        month: rng.gen_range(1..=12),
        day: rng.gen_range(1..=28),
        sex: sex.unwrap_or_else(|| {
            if rng.gen_range(0..2) == 0 {
                Sex::Female
            } else {
                Sex::Male
            }
        }),
    }
}

/// Generates a valid PESEL for the given birth record.
pub fn generate_pesel(
    record: &BirthRecord,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    let date = record.date_digits()?;

    let parity_set = match record.sex {
        Sex::Female => FEMALE_SERIAL_DIGITS,
        Sex::Male => MALE_SERIAL_DIGITS,
    };
    let mut body = [0_u8; 10];
    body[..6].copy_from_slice(&date);
    for slot in body[6..9].iter_mut() {
        *slot = random_digit(rng);
    }
    body[9] = parity_set[rng.gen_range(0..parity_set.len())];

    let check = pesel::check_digit(&body);
    let mut out = digits::to_string(&body);
    out.push(char::from(b'0' + check));
    Ok(out)
}

pub struct PeselGenerator;

impl Generator for PeselGenerator {
    fn id(&self) -> &'static str {
        "pl.pesel"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let map = params_object(params, "pl.pesel")?;

        let sex = match get_str(map, "sex") {
            None | Some("random") => None,
            Some(value) => Some(value.parse::<Sex>()?),
        };
        let mut record = random_birth_record(sex, rng);
        if let Some(year) = get_i64(map, "year") {
            record.year = i32::try_from(year)
                .map_err(|_| GenerationError::InvalidParams("year out of range".to_string()))?;
        }
        if let Some(month) = get_i64(map, "month") {
            record.month = u32::try_from(month)
                .map_err(|_| GenerationError::InvalidParams("month must be 1-12".to_string()))?;
        }
        if let Some(day) = get_i64(map, "day") {
            record.day = u32::try_from(day)
                .map_err(|_| GenerationError::InvalidParams("day must be 1-31".to_string()))?;
        }

        generate_pesel(&record, rng)
    }
}
