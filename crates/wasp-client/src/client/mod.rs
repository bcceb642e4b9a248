//! Client module for talking to a Wasp chain node.
//!
//! - [`Service`] — the main entry point: one contract on one chain
//! - [`Config`] — node endpoint URLs and the active chain
//! - [`WaspClient`] — low-level HTTP transport to the node's endpoints
//! - [`SignedRequest`] — request assembly, signing, and id derivation
//! - [`ContractFunc`] / [`ContractView`] — per-call fluent builders

mod config;
mod func;
mod nonce;
mod request;
mod service;
mod wasp;

pub use config::Config;
pub use func::{ContractFunc, ContractView};
pub use request::{OnLedgerEssence, SignedRequest};
pub use service::Service;
pub use wasp::WaspClient;
