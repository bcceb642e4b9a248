//! A Rust client for Wasp smart contract chains.
//!
//! **wasp-client** lets an off-chain program invoke functions and read-only
//! views on a smart-contract-bearing ledger chain, and receive the events a
//! contract publishes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wasp_client::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let chain_id: ChainId = "jaPa3QVghcP3rDaGXSjBsHnAyXGFE65ojkFWv5re87LE".parse()?;
//!     let config = Config::new(
//!         "127.0.0.1:9090",
//!         "127.0.0.1:8080",
//!         "127.0.0.1:9090/chain/%chainId/ws",
//!         chain_id,
//!     );
//!
//!     let svc = Service::new(config, Hname::from_name("donatewithfeedback"))
//!         .with_key_pair(KeyPair::random());
//!
//!     // Post a signed request, then wait for the chain to process it
//!     let mut args = Arguments::new();
//!     args.set_string("feedback", "keep it up");
//!     let request_id = svc
//!         .func(Hname::from_name("donate"))
//!         .transfer(Transfer::iotas(100))
//!         .post(args)
//!         .await?;
//!     svc.wait_request(&request_id).await?;
//!
//!     // Unauthenticated view call
//!     let res = svc.call_view("donations", Arguments::new()).await?;
//!     println!("total: {}", res.get_uint64("total")?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design
//!
//! 1. **Deterministic codec**: [`Arguments`] and [`Transfer`] encode to the
//!    exact byte layout the chain's verifier checks — canonical key order,
//!    little-endian integers, explicit length prefixes. The encoding is part
//!    of what gets signed.
//! 2. **Immutable requests**: a [`SignedRequest`] is built, signed, and
//!    identified in one step; per-call overrides live on the consuming
//!    [`ContractFunc`] builder, never on shared state.
//! 3. **Owned event channel**: [`EventChannel`] is a spawned task with a
//!    fixed-delay reconnect loop and explicit teardown that also cancels a
//!    pending reconnect.
//!
//! # Core Types
//!
//! - [`Service`] — one contract on one chain; the main entry point
//! - [`Arguments`], [`Transfer`], [`Results`] — codec containers
//! - [`ChainId`], [`Hname`], [`Color`], [`RequestId`] — chain identifiers,
//!   base58 (hex for hnames) at the surface, fixed-width bytes inside
//!   signed payloads
//! - [`KeyPair`] — Ed25519 signing identity
//! - [`EventHandlers`], [`Event`] — topic dispatch and field decoding

pub mod client;
pub mod codec;
pub mod error;
pub mod events;
pub mod types;

pub use client::{Config, ContractFunc, ContractView, Service, SignedRequest, WaspClient};
pub use codec::{Arguments, Results, Transfer};
pub use error::{ClientError, CodecError, Error, EventError, ParseIdError};
pub use events::{Event, EventChannel, EventHandler, EventHandlers};
pub use types::{
    Address, AgentId, ChainId, Color, HashValue, Hname, KeyPair, PublicKey, RequestId, Signature,
    ValueType,
};
