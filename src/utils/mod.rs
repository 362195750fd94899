//! Utils Module - Shared Constants
//!
//! Fixed data the rest of the crate reads from one place: storage keys,
//! the mock decision table inputs, and demo addresses.

pub mod constants;

pub use constants::*;
