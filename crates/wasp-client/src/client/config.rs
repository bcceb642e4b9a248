//! Node endpoint configuration.

use crate::types::ChainId;

/// Placeholder in the events URL template, replaced with the chain id.
const CHAIN_ID_PLACEHOLDER: &str = "%chainId";

/// Node endpoint URLs and the active chain, immutable after construction.
///
/// # Example
///
/// ```rust
/// use wasp_client::{ChainId, Config};
///
/// # fn example(chain_id: ChainId) {
/// let config = Config::new(
///     "127.0.0.1:9090",
///     "127.0.0.1:8080",
///     "127.0.0.1:9090/chain/%chainId/ws",
///     chain_id,
/// );
/// assert!(config.wasp_api().starts_with("http://"));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    wasp_api: String,
    ledger_api: String,
    events_url: String,
    chain_id: ChainId,
}

impl Config {
    /// Create a configuration, supplying `http://` and `ws://` scheme
    /// prefixes where missing.
    pub fn new(
        wasp_api: impl Into<String>,
        ledger_api: impl Into<String>,
        events_url: impl Into<String>,
        chain_id: ChainId,
    ) -> Self {
        Self {
            wasp_api: with_scheme(wasp_api.into(), "http://", &["http://", "https://"]),
            ledger_api: with_scheme(ledger_api.into(), "http://", &["http://", "https://"]),
            events_url: with_scheme(events_url.into(), "ws://", &["ws://", "wss://"]),
            chain_id,
        }
    }

    /// Base URL of the chain node's HTTP API.
    pub fn wasp_api(&self) -> &str {
        &self.wasp_api
    }

    /// Base URL of the ledger node's HTTP API.
    pub fn ledger_api(&self) -> &str {
        &self.ledger_api
    }

    /// The active chain.
    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    /// The WebSocket URL for this chain's event stream, with the chain id
    /// substituted into the template.
    pub fn events_url(&self) -> String {
        self.events_url
            .replace(CHAIN_ID_PLACEHOLDER, &self.chain_id.to_string())
    }
}

fn with_scheme(url: String, default: &str, accepted: &[&str]) -> String {
    if accepted.iter().any(|scheme| url.starts_with(scheme)) {
        url
    } else {
        format!("{}{}", default, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_id() -> ChainId {
        ChainId::from_bytes([1; 33])
    }

    #[test]
    fn test_scheme_added_when_missing() {
        let config = Config::new("localhost:9090", "localhost:8080", "localhost:9090/ws", chain_id());
        assert_eq!(config.wasp_api(), "http://localhost:9090");
        assert_eq!(config.ledger_api(), "http://localhost:8080");
        assert!(config.events_url().starts_with("ws://"));
    }

    #[test]
    fn test_scheme_kept_when_present() {
        let config = Config::new(
            "https://node.example.com",
            "http://ledger.example.com",
            "wss://node.example.com/chain/%chainId/ws",
            chain_id(),
        );
        assert_eq!(config.wasp_api(), "https://node.example.com");
        assert_eq!(config.ledger_api(), "http://ledger.example.com");
        assert!(config.events_url().starts_with("wss://"));
    }

    #[test]
    fn test_events_url_substitutes_chain_id() {
        let config = Config::new(
            "localhost:9090",
            "localhost:8080",
            "ws://localhost:9090/chain/%chainId/ws",
            chain_id(),
        );
        let expected = format!("ws://localhost:9090/chain/{}/ws", chain_id());
        assert_eq!(config.events_url(), expected);
    }
}
