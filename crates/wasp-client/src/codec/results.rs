//! View call result container.

use std::collections::HashMap;

use crate::error::CodecError;
use crate::types::{
    Address, AgentId, ChainId, Color, HashValue, Hname, RequestId, ValueType,
};

/// The key/value pairs returned by a view call, read-only after construction.
///
/// Typed getters validate the byte width of fixed-size types. An absent key
/// is not an error: it reads as the type's zero value, a zero-filled buffer
/// of exactly the declared width.
#[derive(Clone, Debug, Default)]
pub struct Results {
    res: HashMap<String, Vec<u8>>,
}

impl Results {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: String, value: Vec<u8>) {
        self.res.insert(key, value);
    }

    /// Whether the node returned a value for this key.
    pub fn exists(&self, key: &str) -> bool {
        self.res.contains_key(key)
    }

    /// Raw bytes for a key, width-checked against the type's declared size.
    /// Absent keys yield the all-zero value of that size.
    fn get(&self, key: &str, ty: ValueType) -> Result<Vec<u8>, CodecError> {
        let size = ty.size();
        match self.res.get(key) {
            Some(bytes) => {
                if size != 0 && bytes.len() != size {
                    return Err(CodecError::InvalidSize {
                        key: key.to_string(),
                        expected: size,
                        actual: bytes.len(),
                    });
                }
                Ok(bytes.clone())
            }
            None => Ok(vec![0; size]),
        }
    }

    pub fn get_address(&self, key: &str) -> Result<Address, CodecError> {
        let bytes = self.get(key, ValueType::Address)?;
        Ok(Address::try_from(bytes.as_slice())?)
    }

    pub fn get_agent_id(&self, key: &str) -> Result<AgentId, CodecError> {
        let bytes = self.get(key, ValueType::AgentId)?;
        Ok(AgentId::try_from(bytes.as_slice())?)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, CodecError> {
        Ok(self.get(key, ValueType::Bool)?[0] != 0)
    }

    pub fn get_bytes(&self, key: &str) -> Vec<u8> {
        self.res.get(key).cloned().unwrap_or_default()
    }

    pub fn get_chain_id(&self, key: &str) -> Result<ChainId, CodecError> {
        let bytes = self.get(key, ValueType::ChainId)?;
        Ok(ChainId::try_from(bytes.as_slice())?)
    }

    pub fn get_color(&self, key: &str) -> Result<Color, CodecError> {
        let bytes = self.get(key, ValueType::Color)?;
        Ok(Color::try_from(bytes.as_slice())?)
    }

    pub fn get_hash(&self, key: &str) -> Result<HashValue, CodecError> {
        let bytes = self.get(key, ValueType::Hash)?;
        Ok(HashValue::try_from(bytes.as_slice())?)
    }

    pub fn get_hname(&self, key: &str) -> Result<Hname, CodecError> {
        Ok(Hname(self.get_uint32_raw(key, ValueType::Hname)?))
    }

    pub fn get_int8(&self, key: &str) -> Result<i8, CodecError> {
        let bytes = self.get(key, ValueType::Int8)?;
        Ok(i8::from_le_bytes([bytes[0]]))
    }

    pub fn get_int16(&self, key: &str) -> Result<i16, CodecError> {
        let bytes = self.get(key, ValueType::Int16)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn get_int32(&self, key: &str) -> Result<i32, CodecError> {
        let bytes = self.get(key, ValueType::Int32)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn get_int64(&self, key: &str) -> Result<i64, CodecError> {
        let bytes = self.get(key, ValueType::Int64)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes);
        Ok(i64::from_le_bytes(arr))
    }

    pub fn get_request_id(&self, key: &str) -> Result<RequestId, CodecError> {
        let bytes = self.get(key, ValueType::RequestId)?;
        Ok(RequestId::try_from(bytes.as_slice())?)
    }

    pub fn get_string(&self, key: &str) -> String {
        String::from_utf8_lossy(&self.get_bytes(key)).into_owned()
    }

    pub fn get_uint8(&self, key: &str) -> Result<u8, CodecError> {
        Ok(self.get(key, ValueType::Uint8)?[0])
    }

    pub fn get_uint16(&self, key: &str) -> Result<u16, CodecError> {
        let bytes = self.get(key, ValueType::Uint16)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn get_uint32(&self, key: &str) -> Result<u32, CodecError> {
        self.get_uint32_raw(key, ValueType::Uint32)
    }

    pub fn get_uint64(&self, key: &str) -> Result<u64, CodecError> {
        let bytes = self.get(key, ValueType::Uint64)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes);
        Ok(u64::from_le_bytes(arr))
    }

    fn get_uint32_raw(&self, key: &str, ty: ValueType) -> Result<u32, CodecError> {
        let bytes = self.get(key, ty)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl FromIterator<(String, Vec<u8>)> for Results {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self {
            res: iter.into_iter().collect(),
        }
    }
}
