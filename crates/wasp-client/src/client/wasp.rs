//! Low-level HTTP client for the chain node's view, submission, and
//! completion-wait endpoints.
//!
//! Stateless request/response transport. Binary payloads cross the HTTP
//! boundary base64-encoded inside JSON bodies.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::Results;
use crate::error::ClientError;
use crate::types::{ChainId, Hname, RequestId};

#[derive(Serialize)]
struct ViewCallBody {
    #[serde(rename = "Request")]
    request: String,
}

#[derive(Deserialize)]
struct ViewCallResponse {
    #[serde(rename = "Items", default)]
    items: Vec<ViewCallItem>,
}

#[derive(Deserialize)]
struct ViewCallItem {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct OffLedgerBody {
    #[serde(rename = "Request")]
    request: String,
}

#[derive(Serialize)]
struct SendTransactionBody {
    txn_bytes: String,
}

#[derive(Deserialize)]
struct SendTransactionResponse {
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for a chain node and its ledger node.
pub struct WaspClient {
    wasp_api: String,
    ledger_api: String,
    client: reqwest::Client,
}

impl WaspClient {
    /// Create a client for the given base URLs (scheme included).
    pub fn new(wasp_api: impl Into<String>, ledger_api: impl Into<String>) -> Self {
        Self {
            wasp_api: wasp_api.into(),
            ledger_api: ledger_api.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Call a view entry point and decode the returned key/value items.
    pub async fn call_view(
        &self,
        chain_id: &ChainId,
        contract: Hname,
        entry_point: &str,
        args: &[u8],
    ) -> Result<Results, ClientError> {
        let url = format!(
            "{}/chain/{}/contract/{}/callview/{}",
            self.wasp_api, chain_id, contract, entry_point
        );
        debug!(%url, "view call");
        let body = ViewCallBody {
            request: STANDARD.encode(args),
        };
        let text = self.post_json(&url, &body).await?;

        let mut results = Results::new();
        if text.is_empty() {
            return Ok(results);
        }
        let response: ViewCallResponse = serde_json::from_str(&text)?;
        for item in response.items {
            let key = STANDARD
                .decode(&item.key)
                .map_err(|e| ClientError::InvalidResponse(format!("bad item key: {}", e)))?;
            let value = STANDARD
                .decode(&item.value)
                .map_err(|e| ClientError::InvalidResponse(format!("bad item value: {}", e)))?;
            results.insert(String::from_utf8_lossy(&key).into_owned(), value);
        }
        Ok(results)
    }

    /// Submit an off-ledger request directly to node storage.
    pub async fn post_offledger_request(
        &self,
        chain_id: &ChainId,
        request: &[u8],
    ) -> Result<(), ClientError> {
        let url = format!("{}/request/{}", self.wasp_api, chain_id);
        debug!(%url, len = request.len(), "off-ledger submit");
        let body = OffLedgerBody {
            request: STANDARD.encode(request),
        };
        self.post_json(&url, &body).await?;
        Ok(())
    }

    /// Submit an on-ledger request as a ledger transaction. Returns the
    /// transaction id when the ledger node reports one.
    pub async fn post_onledger_request(
        &self,
        request: &[u8],
    ) -> Result<Option<String>, ClientError> {
        let url = format!("{}/ledgerstate/transactions", self.ledger_api);
        debug!(%url, len = request.len(), "on-ledger submit");
        let body = SendTransactionBody {
            txn_bytes: STANDARD.encode(request),
        };
        let text = self.post_json(&url, &body).await?;
        if text.is_empty() {
            return Ok(None);
        }
        let response: SendTransactionResponse = serde_json::from_str(&text)?;
        if let Some(error) = response.error {
            return Err(ClientError::InvalidResponse(error));
        }
        Ok(response.transaction_id)
    }

    /// Block until the chain reports the request as processed. No built-in
    /// timeout: callers supply their own cancellation when they need one.
    pub async fn wait_request(
        &self,
        chain_id: &ChainId,
        request_id: &RequestId,
    ) -> Result<(), ClientError> {
        let url = format!(
            "{}/chain/{}/request/{}/wait",
            self.wasp_api, chain_id, request_id
        );
        debug!(%url, "wait for completion");
        let response = self.client.get(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<String, ClientError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
