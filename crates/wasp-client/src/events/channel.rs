//! Persistent event channel over WebSocket.
//!
//! One channel is bound to one chain and one contract. Subscription is
//! implicit in the connection's existence: no handshake is sent. Frames that
//! fail validation are dropped without surfacing an error (the channel must
//! stay alive across unrelated noise) but are logged at debug level, as are
//! frames for topics with no registered handler.

use std::collections::HashMap;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tracing::{debug, info, warn};

use crate::events::Event;
use crate::types::{ChainId, Hname};

/// Protocol tag leading every event frame.
const FRAME_TAG: &str = "vmmsg";

/// Fixed delay between reconnection attempts. No backoff growth.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// A callback invoked with each decoded event for its topic.
pub type EventHandler = Box<dyn Fn(Event) + Send + Sync>;

/// Topic-to-handler dispatch table, resolved at registration time.
///
/// # Example
///
/// ```rust
/// use wasp_client::EventHandlers;
///
/// let handlers = EventHandlers::new().on("mycontract.donated", |mut event| {
///     if let Ok(amount) = event.next_uint64() {
///         println!("donated: {}", amount);
///     }
/// });
/// ```
#[derive(Default)]
pub struct EventHandlers {
    handlers: HashMap<String, EventHandler>,
}

impl EventHandlers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a topic, replacing any previous handler.
    pub fn on(
        mut self,
        topic: impl Into<String>,
        handler: impl Fn(Event) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(topic.into(), Box::new(handler));
        self
    }

    fn get(&self, topic: &str) -> Option<&EventHandler> {
        self.handlers.get(topic)
    }
}

/// A live event channel: an owned connection task with explicit teardown.
///
/// The task reconnects indefinitely after a fixed delay; [`EventChannel::close`]
/// cancels the live connection and any pending reconnection.
pub struct EventChannel {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl EventChannel {
    /// Spawn the connection task for the given WebSocket URL.
    pub fn open(
        url: String,
        chain_id: ChainId,
        contract: Hname,
        handlers: EventHandlers,
    ) -> Self {
        let (shutdown, signal) = watch::channel(false);
        let task = tokio::spawn(run(url, chain_id, contract, handlers, signal));
        Self {
            shutdown,
            task: Some(task),
        }
    }

    /// Tear down the channel: close the live connection and cancel any
    /// pending reconnection, then wait for the task to finish.
    pub async fn close(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for EventChannel {
    fn drop(&mut self) {
        // Dropping without close() still stops the task; it just does not
        // wait for it.
        let _ = self.shutdown.send(true);
    }
}

async fn run(
    url: String,
    chain_id: ChainId,
    contract: Hname,
    handlers: EventHandlers,
    mut shutdown: watch::Receiver<bool>,
) {
    let chain_text = chain_id.to_string();
    loop {
        tokio::select! {
            _ = shutdown.changed() => return,
            connected = connect_async(url.as_str()) => match connected {
                Ok((mut ws, _)) => {
                    info!(%url, "event channel connected");
                    loop {
                        tokio::select! {
                            _ = shutdown.changed() => return,
                            msg = ws.next() => match msg {
                                Some(Ok(msg)) if msg.is_text() => {
                                    if let Ok(text) = msg.into_text() {
                                        handle_frame(&text, &chain_text, contract, &handlers);
                                    }
                                }
                                Some(Ok(_)) => {}
                                Some(Err(e)) => {
                                    warn!(error = %e, "event channel read failed");
                                    break;
                                }
                                None => {
                                    warn!("event channel closed by peer");
                                    break;
                                }
                            }
                        }
                    }
                }
                Err(e) => warn!(%url, error = %e, "event channel connect failed"),
            }
        }

        tokio::select! {
            _ = shutdown.changed() => return,
            _ = tokio::time::sleep(RECONNECT_DELAY) => {}
        }
    }
}

/// Validate and dispatch one inbound frame.
///
/// Expected form: `vmmsg <chainID> <hname> <topic>|<field>|...` with exactly
/// 4 space-separated top-level tokens.
fn handle_frame(frame: &str, chain_id: &str, contract: Hname, handlers: &EventHandlers) {
    let parts: Vec<&str> = frame.split(' ').collect();
    if parts.len() != 4 || parts[0] != FRAME_TAG {
        debug!(frame, "dropping malformed event frame");
        return;
    }
    if parts[1] != chain_id {
        debug!(frame, "dropping event frame for other chain");
        return;
    }
    if parts[2].parse::<Hname>() != Ok(contract) {
        debug!(frame, "dropping event frame for other contract");
        return;
    }

    let mut payload = parts[3].split('|');
    let topic = payload.next().unwrap_or_default();
    let Some(handler) = handlers.get(topic) else {
        debug!(topic, "no handler registered for topic");
        return;
    };

    let fields: Vec<String> = payload.map(str::to_string).collect();
    match Event::new(fields) {
        Ok(event) => handler(event),
        Err(e) => debug!(topic, error = %e, "dropping undecodable event frame"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn chain_id() -> ChainId {
        ChainId::from_bytes([8; 33])
    }

    fn capture() -> (EventHandlers, Arc<Mutex<Vec<u64>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handlers = EventHandlers::new().on("test.counted", move |mut event| {
            let value = event.next_uint64().unwrap_or(u64::MAX);
            sink.lock().unwrap().push(value);
        });
        (handlers, seen)
    }

    fn valid_frame(value: u64) -> String {
        format!("vmmsg {} {} test.counted|100|{}", chain_id(), Hname(0xcafe), value)
    }

    #[test]
    fn test_valid_frame_dispatched() {
        let (handlers, seen) = capture();
        handle_frame(&valid_frame(5), &chain_id().to_string(), Hname(0xcafe), &handlers);
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_short_frame_ignored() {
        let (handlers, seen) = capture();
        handle_frame("vmmsg too short", &chain_id().to_string(), Hname(0xcafe), &handlers);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_tag_ignored() {
        let (handlers, seen) = capture();
        let frame = valid_frame(5).replace("vmmsg", "noise");
        handle_frame(&frame, &chain_id().to_string(), Hname(0xcafe), &handlers);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_chain_ignored() {
        let (handlers, seen) = capture();
        let other = ChainId::from_bytes([9; 33]);
        handle_frame(&valid_frame(5), &other.to_string(), Hname(0xcafe), &handlers);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_contract_ignored() {
        let (handlers, seen) = capture();
        handle_frame(&valid_frame(5), &chain_id().to_string(), Hname(0xbeef), &handlers);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_topic_ignored() {
        let (handlers, seen) = capture();
        let frame = valid_frame(5).replace("test.counted", "test.other");
        handle_frame(&frame, &chain_id().to_string(), Hname(0xcafe), &handlers);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_bad_frame_does_not_affect_later_frames() {
        let (handlers, seen) = capture();
        let chain = chain_id().to_string();
        handle_frame("garbage", &chain, Hname(0xcafe), &handlers);
        handle_frame(&valid_frame(1), &chain, Hname(0xcafe), &handlers);
        handle_frame("vmmsg x", &chain, Hname(0xcafe), &handlers);
        handle_frame(&valid_frame(2), &chain, Hname(0xcafe), &handlers);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_close_cancels_pending_reconnect() {
        init_tracing();
        // Nothing listens here: the task fails to connect and sits in its
        // reconnect delay. close() must still return promptly.
        let channel = EventChannel::open(
            "ws://127.0.0.1:9".to_string(),
            chain_id(),
            Hname(0xcafe),
            EventHandlers::new(),
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
        tokio::time::timeout(Duration::from_millis(500), channel.close())
            .await
            .expect("close did not cancel the reconnect loop");
    }

    #[tokio::test]
    async fn test_reconnects_after_forced_disconnect() {
        init_tracing();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let channel = EventChannel::open(
            format!("ws://{}", addr),
            chain_id(),
            Hname(0xcafe),
            EventHandlers::new(),
        );

        let (stream, _) = listener.accept().await.unwrap();
        let ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        drop(ws);
        let dropped_at = std::time::Instant::now();

        // a second connection attempt must arrive, and not before the delay
        let second = tokio::time::timeout(Duration::from_secs(5), listener.accept())
            .await
            .expect("no reconnection attempt after disconnect");
        assert!(second.is_ok());
        assert!(dropped_at.elapsed() >= RECONNECT_DELAY - Duration::from_millis(100));

        channel.close().await;
    }
}
