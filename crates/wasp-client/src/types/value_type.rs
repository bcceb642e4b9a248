//! Value type table for the deterministic codec.

/// The value types a smart contract argument or result can carry.
///
/// Fixed-size types declare their exact byte width; [`ValueType::Bytes`] and
/// [`ValueType::String`] are variable-length and declare a width of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Address,
    AgentId,
    Bool,
    Bytes,
    ChainId,
    Color,
    Hash,
    Hname,
    Int8,
    Int16,
    Int32,
    Int64,
    RequestId,
    String,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl ValueType {
    /// The declared byte width of this type. Zero means variable-length.
    pub const fn size(&self) -> usize {
        match self {
            ValueType::Address => 33,
            ValueType::AgentId => 37,
            ValueType::Bool => 1,
            ValueType::Bytes => 0,
            ValueType::ChainId => 33,
            ValueType::Color => 32,
            ValueType::Hash => 32,
            ValueType::Hname => 4,
            ValueType::Int8 => 1,
            ValueType::Int16 => 2,
            ValueType::Int32 => 4,
            ValueType::Int64 => 8,
            ValueType::RequestId => 34,
            ValueType::String => 0,
            ValueType::Uint8 => 1,
            ValueType::Uint16 => 2,
            ValueType::Uint32 => 4,
            ValueType::Uint64 => 8,
        }
    }
}
