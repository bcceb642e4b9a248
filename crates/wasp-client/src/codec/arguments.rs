//! Call argument container and its deterministic encoding.

use std::collections::HashMap;

use crate::error::CodecError;
use crate::types::{Address, AgentId, ChainId, Color, HashValue, Hname, RequestId};

/// Gathers all arguments for a smart contract function call and encodes them
/// into a deterministic byte array.
///
/// Insertion order never matters: the canonical order is imposed at encode
/// time, so two argument sets with the same key/value pairs always encode to
/// byte-identical output. The encoded bytes are part of the signed request
/// essence.
///
/// # Example
///
/// ```rust
/// use wasp_client::Arguments;
///
/// # fn main() -> Result<(), wasp_client::CodecError> {
/// let mut args = Arguments::new();
/// args.set_string("name", "donate");
/// args.set_uint64("amount", 100);
/// let encoded = args.encode()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Arguments {
    args: HashMap<String, Vec<u8>>,
}

impl Arguments {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, key: &str, val: Vec<u8>) {
        self.args.insert(key.to_string(), val);
    }

    /// Compose the conventional `key.index` form for array-like arguments.
    pub fn indexed_key(key: &str, index: u32) -> String {
        format!("{}.{}", key, index)
    }

    /// Error unless `key` has been set.
    pub fn mandatory(&self, key: &str) -> Result<(), CodecError> {
        if self.args.contains_key(key) {
            Ok(())
        } else {
            Err(CodecError::MissingMandatory(key.to_string()))
        }
    }

    pub fn set_address(&mut self, key: &str, val: &Address) {
        self.set(key, val.to_vec());
    }

    pub fn set_agent_id(&mut self, key: &str, val: &AgentId) {
        self.set(key, val.to_vec());
    }

    pub fn set_bool(&mut self, key: &str, val: bool) {
        self.set(key, vec![val as u8]);
    }

    pub fn set_bytes(&mut self, key: &str, val: &[u8]) {
        self.set(key, val.to_vec());
    }

    pub fn set_chain_id(&mut self, key: &str, val: &ChainId) {
        self.set(key, val.to_vec());
    }

    pub fn set_color(&mut self, key: &str, val: &Color) {
        self.set(key, val.to_vec());
    }

    pub fn set_hash(&mut self, key: &str, val: &HashValue) {
        self.set(key, val.to_vec());
    }

    pub fn set_hname(&mut self, key: &str, val: Hname) {
        self.set_uint32(key, val.0);
    }

    pub fn set_int8(&mut self, key: &str, val: i8) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_int16(&mut self, key: &str, val: i16) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_int32(&mut self, key: &str, val: i32) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_int64(&mut self, key: &str, val: i64) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_request_id(&mut self, key: &str, val: &RequestId) {
        self.set(key, val.to_vec());
    }

    pub fn set_string(&mut self, key: &str, val: &str) {
        self.set(key, val.as_bytes().to_vec());
    }

    pub fn set_uint8(&mut self, key: &str, val: u8) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_uint16(&mut self, key: &str, val: u16) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_uint32(&mut self, key: &str, val: u32) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    pub fn set_uint64(&mut self, key: &str, val: u64) {
        self.set(key, val.to_le_bytes().to_vec());
    }

    /// Encode the argument set.
    ///
    /// Sorts all keys in ascending ordinal order (this data will be part of
    /// the signed payload, so the order needs to be 100% deterministic), then
    /// emits the 4-byte argument count. Next for each argument emits the
    /// 2-byte key length, the key prepended with the minus sign, the 4-byte
    /// value length, and then the value bytes. All lengths little-endian.
    ///
    /// Errors when a key or value does not fit its length field.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut keys: Vec<&String> = self.args.keys().collect();
        keys.sort();

        let count = u32::try_from(keys.len()).map_err(|_| CodecError::TooManyArguments)?;
        let mut buf = Vec::new();
        buf.extend_from_slice(&count.to_le_bytes());
        for key in keys {
            let key_bytes = format!("-{}", key).into_bytes();
            let key_len =
                u16::try_from(key_bytes.len()).map_err(|_| CodecError::KeyTooLong(key.clone()))?;
            buf.extend_from_slice(&key_len.to_le_bytes());
            buf.extend_from_slice(&key_bytes);
            let val = &self.args[key];
            let val_len =
                u32::try_from(val.len()).map_err(|_| CodecError::ValueTooLarge(key.clone()))?;
            buf.extend_from_slice(&val_len.to_le_bytes());
            buf.extend_from_slice(val);
        }
        Ok(buf)
    }
}
