//! Chain event reception and decoding.
//!
//! A contract publishes events as text frames over a long-lived WebSocket
//! connection. [`EventChannel`] owns that connection, validates inbound
//! frames, and dispatches them by topic; [`Event`] walks one frame's fields
//! in the contract's declared order.

mod channel;
mod decoder;

pub use channel::{EventChannel, EventHandler, EventHandlers};
pub use decoder::Event;
