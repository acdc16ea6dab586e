//! Generators for fictitious Polish identification numbers.
//!
//! Each generator is a pure function over its parameters plus an injected
//! random source; the registry dispatches on stable string ids so callers
//! (CLI, server, tests) can drive generation with JSON parameters.

pub mod assets;
pub mod errors;
pub mod generators;
pub mod params;

pub use assets::{BankCodeTable, bank_code_table};
pub use errors::GenerationError;
pub use generators::idcard::generate_id_number;
pub use generators::nrb::{NrbOptions, generate_nrb};
pub use generators::pesel::{generate_pesel, random_birth_record};
pub use generators::regon::{generate_regon9, generate_regon14};
pub use generators::{Generator, GeneratorContext, GeneratorRegistry};
