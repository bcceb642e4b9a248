//! Nonce source for request uniqueness.
//!
//! Nonces exist to make otherwise-identical requests unique, not to order
//! them across processes. A plain wall-clock read would let two concurrent
//! posts collide, so the counter is seeded from the clock once and then
//! incremented atomically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A monotonically increasing nonce counter, unique within one service.
pub(crate) struct NonceSource {
    next: AtomicU64,
}

impl NonceSource {
    /// Create a counter seeded from the current time in microseconds.
    pub(crate) fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(1);
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// Claim the next nonce.
    pub(crate) fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_nonces_strictly_increase() {
        let source = NonceSource::new();
        let a = source.next();
        let b = source.next();
        let c = source.next();
        assert_eq!(b, a + 1);
        assert_eq!(c, b + 1);
    }

    #[test]
    fn test_concurrent_nonces_unique() {
        let source = Arc::new(NonceSource::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let source = Arc::clone(&source);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| source.next()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(seen.insert(nonce), "duplicate nonce {}", nonce);
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
