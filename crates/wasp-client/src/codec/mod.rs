//! Deterministic binary codec for call arguments, token transfers, and view
//! results.
//!
//! The encodings produced here are part of what gets signed: any divergence
//! from the canonical byte layout breaks interoperability with the chain's
//! verifier. All multi-byte integers are little-endian and variable-length
//! fields are always explicitly length-prefixed.

mod arguments;
mod results;
mod transfer;

pub use arguments::Arguments;
pub use results::Results;
pub use transfer::Transfer;
