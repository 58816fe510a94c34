//! Item change sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::ItemChangeEvent;

/// Trait for receiving item change events.
///
/// Services emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to emit must not affect the mutation (best-effort)
pub trait ItemChangeSink: Send + Sync {
    /// Emit a single change event.
    fn emit(&self, event: ItemChangeEvent);

    /// Emit multiple change events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<ItemChangeEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need the feed.
#[derive(Clone, Default)]
pub struct NoOpItemChangeSink;

impl ItemChangeSink for NoOpItemChangeSink {
    fn emit(&self, _event: ItemChangeEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockItemChangeSink {
    events: Arc<Mutex<Vec<ItemChangeEvent>>>,
}

impl MockItemChangeSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ItemChangeEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ItemChangeSink for MockItemChangeSink {
    fn emit(&self, event: ItemChangeEvent) {
        self.events.lock().unwrap().push(event);
    }
}
