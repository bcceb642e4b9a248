//! Schema-driven decoding of a single event frame.

use crate::error::{EventError, ParseIdError};
use crate::types::{Address, AgentId, ChainId, Color, HashValue, Hname, RequestId};

/// One published chain event: an ordered token sequence with a read cursor.
///
/// The first token is always the emission timestamp and is consumed at
/// construction. Each `next_*` accessor consumes exactly one token; callers
/// invoke them in the order the contract declares its event fields. Token
/// exhaustion and malformed tokens are reported as [`EventError`] rather
/// than silently desynchronizing the cursor, and [`Event::remaining`] lets a
/// decoder check the token count against its schema length up front.
///
/// # Example
///
/// ```rust
/// use wasp_client::Event;
///
/// # fn example() -> Result<(), wasp_client::EventError> {
/// let tokens = vec!["1693526400".to_string(), "donate".to_string(), "100".to_string()];
/// let mut event = Event::new(tokens)?;
/// let name = event.next_string()?;
/// let amount = event.next_uint64()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    tokens: Vec<String>,
    index: usize,
    timestamp: u64,
}

impl Event {
    /// Decode the leading timestamp and position the cursor on the first
    /// field token.
    pub fn new(tokens: Vec<String>) -> Result<Self, EventError> {
        let mut event = Self {
            tokens,
            index: 0,
            timestamp: 0,
        };
        event.timestamp = event.next_uint64()?;
        Ok(event)
    }

    /// The emission timestamp carried in the first token.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Number of field tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.index
    }

    fn next(&mut self) -> Result<&str, EventError> {
        let token = self.tokens.get(self.index).ok_or(EventError::Exhausted)?;
        self.index += 1;
        Ok(token)
    }

    fn next_parsed<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, EventError> {
        let token = self.next()?;
        token.parse().map_err(|_| EventError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }

    pub fn next_address(&mut self) -> Result<Address, EventError> {
        self.next_parsed("address")
    }

    pub fn next_agent_id(&mut self) -> Result<AgentId, EventError> {
        self.next_parsed("agent id")
    }

    /// Any token other than `"0"` reads as true.
    pub fn next_bool(&mut self) -> Result<bool, EventError> {
        Ok(self.next()? != "0")
    }

    /// Base58-decoded opaque bytes.
    pub fn next_bytes(&mut self) -> Result<Vec<u8>, EventError> {
        let token = self.next()?;
        bs58::decode(token)
            .into_vec()
            .map_err(|e| EventError::ParseId(ParseIdError::InvalidBase58(e.to_string())))
    }

    pub fn next_chain_id(&mut self) -> Result<ChainId, EventError> {
        self.next_parsed("chain id")
    }

    pub fn next_color(&mut self) -> Result<Color, EventError> {
        self.next_parsed("color")
    }

    pub fn next_hash(&mut self) -> Result<HashValue, EventError> {
        self.next_parsed("hash")
    }

    pub fn next_hname(&mut self) -> Result<Hname, EventError> {
        Ok(Hname(self.next_parsed("hname")?))
    }

    pub fn next_int8(&mut self) -> Result<i8, EventError> {
        self.next_parsed("i8")
    }

    pub fn next_int16(&mut self) -> Result<i16, EventError> {
        self.next_parsed("i16")
    }

    pub fn next_int32(&mut self) -> Result<i32, EventError> {
        self.next_parsed("i32")
    }

    pub fn next_int64(&mut self) -> Result<i64, EventError> {
        self.next_parsed("i64")
    }

    pub fn next_request_id(&mut self) -> Result<RequestId, EventError> {
        self.next_parsed("request id")
    }

    pub fn next_string(&mut self) -> Result<String, EventError> {
        Ok(self.next()?.to_string())
    }

    pub fn next_uint8(&mut self) -> Result<u8, EventError> {
        self.next_parsed("u8")
    }

    pub fn next_uint16(&mut self) -> Result<u16, EventError> {
        self.next_parsed("u16")
    }

    pub fn next_uint32(&mut self) -> Result<u32, EventError> {
        self.next_parsed("u32")
    }

    pub fn next_uint64(&mut self) -> Result<u64, EventError> {
        self.next_parsed("u64")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_timestamp_consumed_on_construction() {
        let event = Event::new(tokens(&["1693526400", "rest"])).unwrap();
        assert_eq!(event.timestamp(), 1693526400);
        assert_eq!(event.remaining(), 1);
    }

    #[test]
    fn test_empty_frame_rejected() {
        assert_eq!(Event::new(Vec::new()), Err(EventError::Exhausted));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        assert!(matches!(
            Event::new(tokens(&["soon", "x"])),
            Err(EventError::InvalidToken { expected: "u64", .. })
        ));
    }

    #[test]
    fn test_fields_consumed_in_order() {
        let mut event =
            Event::new(tokens(&["100", "donate", "42", "-7", "1"])).unwrap();
        assert_eq!(event.next_string().unwrap(), "donate");
        assert_eq!(event.next_uint64().unwrap(), 42);
        assert_eq!(event.next_int32().unwrap(), -7);
        assert!(event.next_bool().unwrap());
        assert_eq!(event.remaining(), 0);
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        let mut event = Event::new(tokens(&["100", "only"])).unwrap();
        event.next_string().unwrap();
        assert_eq!(event.next_string(), Err(EventError::Exhausted));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let mut event = Event::new(tokens(&["100", "notanumber"])).unwrap();
        assert_eq!(
            event.next_uint64(),
            Err(EventError::InvalidToken {
                expected: "u64",
                token: "notanumber".to_string()
            })
        );
    }

    #[test]
    fn test_bool_token() {
        let mut event = Event::new(tokens(&["100", "0", "1", "true"])).unwrap();
        assert!(!event.next_bool().unwrap());
        assert!(event.next_bool().unwrap());
        assert!(event.next_bool().unwrap());
    }

    #[test]
    fn test_bytes_base58_decoded() {
        let encoded = bs58::encode(&[1u8, 2, 3]).into_string();
        let mut event = Event::new(tokens(&["100", &encoded])).unwrap();
        assert_eq!(event.next_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_identifier_tokens() {
        let color = Color::from_bytes([9; 32]);
        let color_text = color.to_string();
        let mut event = Event::new(tokens(&["100", &color_text])).unwrap();
        assert_eq!(event.next_color().unwrap(), color);
    }
}
