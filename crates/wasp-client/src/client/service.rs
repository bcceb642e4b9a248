//! The smart contract service: orchestrates request building, submission,
//! view calls, and the event channel for one contract on one chain.

use std::sync::Arc;

use tracing::debug;

use crate::codec::{Arguments, Results, Transfer};
use crate::error::Error;
use crate::events::{EventChannel, EventHandlers};
use crate::types::{ChainId, Hname, KeyPair, RequestId};

use super::config::Config;
use super::func::{ContractFunc, ContractView};
use super::nonce::NonceSource;
use super::request::SignedRequest;
use super::wasp::WaspClient;

/// Client-side handle to one smart contract.
///
/// A service is bound to a chain (via [`Config`]) and a contract hname. It
/// posts signed requests, performs unauthenticated view calls, and owns the
/// event channel when one is started.
///
/// # Example
///
/// ```rust,no_run
/// use wasp_client::{Arguments, Config, Hname, KeyPair, Service};
///
/// # async fn example(config: Config) -> Result<(), wasp_client::Error> {
/// let service = Service::new(config, Hname::from_name("donatewithfeedback"))
///     .with_key_pair(KeyPair::random());
///
/// let mut args = Arguments::new();
/// args.set_string("feedback", "well done");
/// let request_id = service.func(Hname::from_name("donate")).post(args).await?;
/// service.wait_request(&request_id).await?;
/// # Ok(())
/// # }
/// ```
pub struct Service {
    client: Arc<WaspClient>,
    config: Config,
    contract: Hname,
    key_pair: Option<KeyPair>,
    nonce: NonceSource,
    events: Option<EventChannel>,
}

impl Service {
    /// Create a service for a contract on the configured chain.
    pub fn new(config: Config, contract: Hname) -> Self {
        let client = Arc::new(WaspClient::new(config.wasp_api(), config.ledger_api()));
        Self {
            client,
            config,
            contract,
            key_pair: None,
            nonce: NonceSource::new(),
            events: None,
        }
    }

    /// Set the default key pair used when a function builder does not
    /// override it.
    pub fn with_key_pair(mut self, key_pair: KeyPair) -> Self {
        self.key_pair = Some(key_pair);
        self
    }

    /// The contract this service talks to.
    pub fn contract(&self) -> Hname {
        self.contract
    }

    /// The chain this service is bound to.
    pub fn chain_id(&self) -> &ChainId {
        self.config.chain_id()
    }

    pub(crate) fn key_pair(&self) -> Option<&KeyPair> {
        self.key_pair.as_ref()
    }

    /// Call a view entry point. Views are unauthenticated reads of chain
    /// state; no signature is attached.
    pub async fn call_view(&self, entry_point: &str, args: Arguments) -> Result<Results, Error> {
        let encoded = args.encode()?;
        let results = self
            .client
            .call_view(self.config.chain_id(), self.contract, entry_point, &encoded)
            .await?;
        Ok(results)
    }

    /// Sign and submit an off-ledger request. Returns the request id as soon
    /// as the node accepts the submission; use [`Service::wait_request`] to
    /// learn whether it executed.
    pub async fn post_request(
        &self,
        function: Hname,
        args: Arguments,
        transfer: &Transfer,
        key_pair: &KeyPair,
    ) -> Result<RequestId, Error> {
        let nonce = self.nonce.next();
        let request = SignedRequest::off_ledger(
            self.config.chain_id(),
            self.contract,
            function,
            &args,
            transfer,
            key_pair,
            nonce,
        )?;
        debug!(contract = %self.contract, %function, nonce, id = %request.id(), "posting request");
        self.client
            .post_offledger_request(self.config.chain_id(), request.bytes())
            .await?;
        Ok(request.id())
    }

    /// Sign and submit an on-ledger request via the ledger node.
    pub async fn post_onledger_request(
        &self,
        function: Hname,
        args: Arguments,
        key_pair: &KeyPair,
    ) -> Result<RequestId, Error> {
        let request = SignedRequest::on_ledger(self.contract, function, &args)?.sign(key_pair);
        debug!(contract = %self.contract, %function, id = %request.id(), "posting on-ledger request");
        self.client.post_onledger_request(request.bytes()).await?;
        Ok(request.id())
    }

    /// Block until the chain reports the request as processed.
    pub async fn wait_request(&self, request_id: &RequestId) -> Result<(), Error> {
        self.client
            .wait_request(self.config.chain_id(), request_id)
            .await?;
        Ok(())
    }

    /// Builder for posting one function call.
    pub fn func(&self, function: Hname) -> ContractFunc<'_> {
        ContractFunc::new(self, function)
    }

    /// Builder for one view call.
    pub fn view(&self, entry_point: &str) -> ContractView<'_> {
        ContractView::new(self, entry_point)
    }

    /// Start the event channel for this contract, replacing any running one.
    /// A replaced channel is told to shut down but not awaited.
    pub fn start_events(&mut self, handlers: EventHandlers) {
        self.events = Some(EventChannel::open(
            self.config.events_url(),
            *self.config.chain_id(),
            self.contract,
            handlers,
        ));
    }

    /// Stop the event channel, cancelling any pending reconnection.
    pub async fn stop_events(&mut self) {
        if let Some(channel) = self.events.take() {
            channel.close().await;
        }
    }
}
