//! Generator trait, context, and registry.

pub mod idcard;
pub mod nrb;
pub mod pesel;
pub mod regon;

use std::collections::BTreeMap;

use rand::RngCore;
use serde_json::Value;

use crate::assets::BankCodeTable;
use crate::errors::GenerationError;

/// Context shared with every generator invocation. Holds the immutable
/// configuration injected at registry construction.
pub struct GeneratorContext<'a> {
    pub bank_codes: &'a BankCodeTable,
}

/// A single number generator, addressable by a stable id.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;
}

/// Registry of the built-in generators plus the injected bank-code table.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
    bank_codes: BankCodeTable,
}

impl GeneratorRegistry {
    pub fn new(bank_codes: BankCodeTable) -> Self {
        let mut registry = Self {
            generators: BTreeMap::new(),
            bank_codes,
        };
        registry.register_generator(Box::new(pesel::PeselGenerator));
        registry.register_generator(Box::new(idcard::IdCardGenerator));
        registry.register_generator(Box::new(regon::Regon9Generator));
        registry.register_generator(Box::new(regon::Regon14Generator));
        registry.register_generator(Box::new(nrb::NrbGenerator));
        registry
    }

    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(Box::as_ref)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    pub fn bank_codes(&self) -> &BankCodeTable {
        &self.bank_codes
    }

    /// Dispatches to the generator registered under `id`.
    pub fn generate(
        &self,
        id: &str,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let generator = self
            .generator(id)
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))?;
        let ctx = GeneratorContext {
            bank_codes: &self.bank_codes,
        };
        generator.generate(&ctx, params, rng)
    }
}

pub(crate) fn random_digit(rng: &mut dyn RngCore) -> u8 {
    use rand::Rng;
    rng.gen_range(0..10)
}

pub(crate) fn random_digits(rng: &mut dyn RngCore, len: usize) -> Vec<u8> {
    (0..len).map(|_| random_digit(rng)).collect()
}
