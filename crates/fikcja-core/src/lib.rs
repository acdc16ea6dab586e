//! Core contracts and checksum arithmetic for Fikcja.
//!
//! This crate defines the number formats (PESEL, identity card, REGON,
//! NRB), their weighted checksum formulas, and the validators shared by the
//! generators, CLI, and server. Everything here is pure: no randomness and
//! no I/O.

pub mod digits;
pub mod error;
pub mod idcard;
pub mod nrb;
pub mod pesel;
pub mod regon;

pub use error::{Error, Result};
pub use nrb::NrbFormat;
pub use pesel::{BirthRecord, Sex};
