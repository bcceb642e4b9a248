//! Per-call builders for posting functions and calling views.
//!
//! Each builder is an immutable-by-consumption value: configuring it returns
//! a new builder, and posting consumes it. Nothing on the service is mutated
//! per call.

use crate::codec::{Arguments, Results, Transfer};
use crate::error::Error;
use crate::types::{Hname, KeyPair, RequestId};

use super::service::Service;

/// Builder for one function call on a contract.
///
/// The key pair defaults to the service's; [`ContractFunc::sign`] overrides
/// it for this call only. The transfer defaults to empty.
///
/// # Example
///
/// ```rust,no_run
/// use wasp_client::{Arguments, Hname, Transfer};
///
/// # async fn example(svc: wasp_client::Service) -> Result<(), wasp_client::Error> {
/// let request_id = svc
///     .func(Hname::from_name("donate"))
///     .transfer(Transfer::iotas(100))
///     .post(Arguments::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ContractFunc<'a> {
    svc: &'a Service,
    function: Hname,
    key_pair: Option<&'a KeyPair>,
    transfer: Transfer,
}

impl<'a> ContractFunc<'a> {
    pub(crate) fn new(svc: &'a Service, function: Hname) -> Self {
        Self {
            svc,
            function,
            key_pair: None,
            transfer: Transfer::new(),
        }
    }

    /// Sign this call with a specific key pair instead of the service's.
    pub fn sign(mut self, key_pair: &'a KeyPair) -> Self {
        self.key_pair = Some(key_pair);
        self
    }

    /// Tokens to move along with the request. They are presumed available in
    /// the signing account on the chain.
    pub fn transfer(mut self, transfer: Transfer) -> Self {
        self.transfer = transfer;
        self
    }

    /// Sign and submit as an off-ledger request. The returned request id can
    /// be passed to [`Service::wait_request`] to await completion.
    pub async fn post(self, args: Arguments) -> Result<RequestId, Error> {
        let key_pair = self
            .key_pair
            .or_else(|| self.svc.key_pair())
            .ok_or(Error::NoKeyPair)?;
        self.svc
            .post_request(self.function, args, &self.transfer, key_pair)
            .await
    }

    /// Sign and submit as an on-ledger request via the ledger node.
    pub async fn post_on_ledger(self, args: Arguments) -> Result<RequestId, Error> {
        let key_pair = self
            .key_pair
            .or_else(|| self.svc.key_pair())
            .ok_or(Error::NoKeyPair)?;
        self.svc
            .post_onledger_request(self.function, args, key_pair)
            .await
    }
}

/// Builder for one view call on a contract.
pub struct ContractView<'a> {
    svc: &'a Service,
    entry_point: String,
}

impl<'a> ContractView<'a> {
    pub(crate) fn new(svc: &'a Service, entry_point: &str) -> Self {
        Self {
            svc,
            entry_point: entry_point.to_string(),
        }
    }

    /// Perform the view call.
    pub async fn call(self, args: Arguments) -> Result<Results, Error> {
        self.svc.call_view(&self.entry_point, args).await
    }
}
