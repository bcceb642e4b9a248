//! Fixed-size chain identifier types.
//!
//! Identifiers travel as base58 text at the API surface and as raw
//! fixed-width bytes inside signed payloads. Each newtype validates the
//! decoded length when parsed, so a constructed value is always well-sized.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseIdError;

macro_rules! fixed_id {
    ($(#[$doc:meta])* $name:ident, $kind:literal, $size:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $size]);

        impl $name {
            /// The declared byte width of this identifier.
            pub const SIZE: usize = $size;

            /// Create from raw bytes.
            pub const fn from_bytes(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Convert to a Vec<u8>.
            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = bs58::decode(s)
                    .into_vec()
                    .map_err(|e| ParseIdError::InvalidBase58(e.to_string()))?;
                Self::try_from(bytes.as_slice())
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = ParseIdError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                if bytes.len() != $size {
                    return Err(ParseIdError::InvalidLength {
                        kind: $kind,
                        expected: $size,
                        actual: bytes.len(),
                    });
                }
                let mut arr = [0u8; $size];
                arr.copy_from_slice(bytes);
                Ok(Self(arr))
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", bs58::encode(&self.0).into_string())
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let s: String = serde::Deserialize::deserialize(d)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_id!(
    /// A 33-byte ledger address.
    Address, "address", 33
);

fixed_id!(
    /// A 37-byte agent identifier (address or contract identity).
    AgentId, "agent id", 37
);

fixed_id!(
    /// The 33-byte identifier of a chain.
    ChainId, "chain id", 33
);

fixed_id!(
    /// A 32-byte token color. [`Color::IOTA`] is the base token.
    Color, "color", 32
);

fixed_id!(
    /// A 32-byte hash value.
    HashValue, "hash", 32
);

fixed_id!(
    /// The 34-byte identifier of a submitted request: the hash of the signed
    /// request bytes plus a reserved 2-byte index suffix.
    RequestId, "request id", 34
);

impl Color {
    /// The base token color (all zero bytes).
    pub const IOTA: Self = Self([0; 32]);
}
