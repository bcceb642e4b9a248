//! Token transfer container and its deterministic encoding.

use std::collections::HashMap;

use crate::types::Color;

/// The tokens to move along with a request, keyed by color.
///
/// A zero amount is semantically the same as an absent entry and is never
/// emitted. A transfer may be configured once and reused across calls.
///
/// # Example
///
/// ```rust
/// use wasp_client::Transfer;
///
/// let xfer = Transfer::iotas(100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transfer {
    xfer: HashMap<Color, u64>,
}

impl Transfer {
    /// Create an empty transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transfer of base tokens.
    pub fn iotas(amount: u64) -> Self {
        Self::tokens(Color::IOTA, amount)
    }

    /// A transfer of a single token color.
    pub fn tokens(color: Color, amount: u64) -> Self {
        let mut transfer = Self::new();
        transfer.set(color, amount);
        transfer
    }

    /// Set the amount for a color, replacing any previous amount.
    pub fn set(&mut self, color: Color, amount: u64) {
        self.xfer.insert(color, amount);
    }

    /// Encode the transfer.
    ///
    /// Sorts all nonzero entries in ascending color order (this data will be
    /// part of the signed payload, so the order needs to be 100%
    /// deterministic), then emits the 4-byte entry count. Next for each color
    /// emits the 32-byte color value and the 8-byte little-endian amount.
    pub fn encode(&self) -> Vec<u8> {
        let mut entries: Vec<(&Color, &u64)> =
            self.xfer.iter().filter(|(_, amount)| **amount != 0).collect();
        entries.sort_by_key(|(color, _)| *color);

        let mut buf = Vec::with_capacity(4 + entries.len() * 40);
        buf.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        for (color, amount) in entries {
            buf.extend_from_slice(color.as_bytes());
            buf.extend_from_slice(&amount.to_le_bytes());
        }
        buf
    }
}
