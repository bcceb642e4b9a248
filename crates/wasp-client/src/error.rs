//! Error types for wasp-client.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by most operations
//!   - [`ParseIdError`] — Invalid base58 text or wrong decoded length for a
//!     fixed-size identifier
//!   - [`CodecError`] — Argument/result container violations
//!   - [`ClientError`] — Node transport failures (HTTP, status, body)
//!   - [`EventError`] — Event token stream violations
//!
//! # Example
//!
//! ```rust,no_run
//! use wasp_client::{ClientError, Error};
//!
//! # async fn example(svc: wasp_client::Service) -> Result<(), Error> {
//! match svc.call_view("getInfo", Default::default()).await {
//!     Ok(res) => println!("counter: {}", res.get_int64("counter")?),
//!     Err(Error::Client(ClientError::Status { status, body })) => {
//!         eprintln!("node rejected the view call: {} {}", status, body);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error parsing a fixed-size identifier from its base58 text form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid hname: '{0}' is not a hex-encoded u32")]
    InvalidHname(String),
}

/// Error in the argument/result codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Missing mandatory argument '{0}'")]
    MissingMandatory(String),

    #[error("Invalid size for key '{key}': expected {expected} bytes, got {actual}")]
    InvalidSize {
        key: String,
        expected: usize,
        actual: usize,
    },

    #[error("Argument key '{0}' is too long to encode")]
    KeyTooLong(String),

    #[error("Value for argument '{0}' is too large to encode")]
    ValueTooLarge(String),

    #[error("Too many arguments to encode")]
    TooManyArguments,

    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}

/// Error talking to the node.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Error decoding an event token stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Event token stream exhausted")]
    Exhausted,

    #[error("Invalid {expected} token: '{token}'")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}

/// Main error type for wasp-client operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("No key pair configured. Call .with_key_pair() on Service or .sign() on the function builder.")]
    NoKeyPair,

    // ─── Parsing ───
    #[error(transparent)]
    ParseId(#[from] ParseIdError),

    // ─── Codec ───
    #[error(transparent)]
    Codec(#[from] CodecError),

    // ─── Transport ───
    #[error(transparent)]
    Client(#[from] ClientError),

    // ─── Events ───
    #[error(transparent)]
    Event(#[from] EventError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_error_display() {
        assert_eq!(
            ParseIdError::InvalidBase58("bad chars".to_string()).to_string(),
            "Invalid base58 encoding: bad chars"
        );
        assert_eq!(
            ParseIdError::InvalidLength {
                kind: "color",
                expected: 32,
                actual: 16
            }
            .to_string(),
            "Invalid color length: expected 32 bytes, got 16"
        );
        assert_eq!(
            ParseIdError::InvalidHname("zz".to_string()).to_string(),
            "Invalid hname: 'zz' is not a hex-encoded u32"
        );
    }

    #[test]
    fn test_codec_error_display() {
        assert_eq!(
            CodecError::MissingMandatory("owner".to_string()).to_string(),
            "Missing mandatory argument 'owner'"
        );
        assert_eq!(
            CodecError::InvalidSize {
                key: "hash".to_string(),
                expected: 32,
                actual: 31
            }
            .to_string(),
            "Invalid size for key 'hash': expected 32 bytes, got 31"
        );
    }

    #[test]
    fn test_client_error_display() {
        assert_eq!(
            ClientError::Status {
                status: 404,
                body: "not found".to_string()
            }
            .to_string(),
            "Node returned HTTP 404: not found"
        );
        assert_eq!(
            ClientError::InvalidResponse("missing Items".to_string()).to_string(),
            "Invalid response: missing Items"
        );
    }

    #[test]
    fn test_event_error_display() {
        assert_eq!(
            EventError::Exhausted.to_string(),
            "Event token stream exhausted"
        );
        assert_eq!(
            EventError::InvalidToken {
                expected: "u64",
                token: "abc".to_string()
            }
            .to_string(),
            "Invalid u64 token: 'abc'"
        );
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = ParseIdError::InvalidBase58("x".to_string()).into();
        assert!(matches!(err, Error::ParseId(_)));

        let err: Error = CodecError::MissingMandatory("k".to_string()).into();
        assert!(matches!(err, Error::Codec(_)));

        let err: Error = EventError::Exhausted.into();
        assert!(matches!(err, Error::Event(_)));
    }
}
