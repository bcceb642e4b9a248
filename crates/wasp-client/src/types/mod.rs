//! Core types for Wasp chains.
//!
//! Identifiers are base58 text at the API surface and raw fixed-width bytes
//! inside signed payloads; the newtypes here enforce the width at parse time.

mod hname;
mod ids;
mod key;
mod value_type;

pub use hname::Hname;
pub use ids::{Address, AgentId, ChainId, Color, HashValue, RequestId};
pub use key::{KeyPair, PublicKey, Signature};
pub use value_type::ValueType;
