//! Contract and function name hashes.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::error::ParseIdError;

/// A 4-byte identifier derived from hashing a contract or function name.
///
/// Hnames are rendered as hex in node URLs and event frames, and as 4
/// little-endian bytes inside signed payloads.
///
/// # Example
///
/// ```rust
/// use wasp_client::Hname;
///
/// let hname = Hname::from_name("increment");
/// assert_eq!(hname, Hname::from_name("increment"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hname(pub u32);

impl Hname {
    /// Derive the hname for a contract or function name.
    ///
    /// Takes the first nonzero little-endian u32 chunk of the BLAKE2b-256
    /// hash of the name; an all-zero hash maps to 1 so that no name produces
    /// the reserved zero hname.
    pub fn from_name(name: &str) -> Self {
        let hash = Blake2b::<U32>::digest(name.as_bytes());
        for chunk in hash.chunks_exact(4) {
            let hn = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if hn != 0 {
                return Self(hn);
            }
        }
        Self(1)
    }

    /// The 4 little-endian bytes used inside signed payloads.
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<u32> for Hname {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for Hname {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u32::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ParseIdError::InvalidHname(s.to_string()))
    }
}

impl Display for Hname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl Debug for Hname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hname({:08x})", self.0)
    }
}
