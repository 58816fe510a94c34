//! In-process fan-out of item change events, keyed by list identity.

use dashmap::DashMap;
use tokio::sync::broadcast;

use super::change_event::ItemChangeEvent;
use super::sink::ItemChangeSink;

/// Buffered events per list channel before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 256;

/// Fans item change events out to every open view of the affected list.
///
/// Each list gets its own broadcast channel, created on first subscription.
/// Dropping an [`ItemChangeSubscription`] releases the standing
/// subscription; a channel with no remaining subscribers is pruned on the
/// next emit for that list.
#[derive(Default)]
pub struct ListChangeBroker {
    channels: DashMap<String, broadcast::Sender<ItemChangeEvent>>,
}

impl ListChangeBroker {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Opens a standing subscription to one list's change feed.
    pub fn subscribe(&self, list_id: &str) -> ItemChangeSubscription {
        let rx = self
            .channels
            .entry(list_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe();
        ItemChangeSubscription {
            list_id: list_id.to_string(),
            rx,
        }
    }

    /// Number of live subscriptions for a list.
    pub fn subscriber_count(&self, list_id: &str) -> usize {
        self.channels
            .get(list_id)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }
}

impl ItemChangeSink for ListChangeBroker {
    fn emit(&self, event: ItemChangeEvent) {
        let list_id = event.list_id().to_string();
        // send() only fails when every receiver is gone; the guard ref must
        // be dropped before remove_if or the shard lock deadlocks.
        let stale = match self.channels.get(&list_id) {
            Some(tx) => tx.send(event).is_err(),
            None => false,
        };
        if stale {
            self.channels
                .remove_if(&list_id, |_, tx| tx.receiver_count() == 0);
        }
    }
}

/// A live subscription to one list's change feed.
///
/// Dropping the subscription releases it.
pub struct ItemChangeSubscription {
    list_id: String,
    rx: broadcast::Receiver<ItemChangeEvent>,
}

impl ItemChangeSubscription {
    /// The list this subscription is scoped to.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Waits for the next event. Returns `None` once the feed is closed.
    ///
    /// A lagged subscriber skips to the oldest retained event; the merge is
    /// idempotent and the store remains the source of truth, so skipping is
    /// safe.
    pub async fn recv(&mut self) -> Option<ItemChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next already-delivered event without waiting, or `None`
    /// if the feed is drained (or closed).
    pub fn try_recv(&mut self) -> Option<ItemChangeEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ListItem;

    fn item(id: &str, list_id: &str) -> ListItem {
        ListItem {
            id: id.to_string(),
            list_id: list_id.to_string(),
            name: "Babero".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fan_out_to_all_subscribers() {
        let broker = ListChangeBroker::new();
        let mut first = broker.subscribe("l1");
        let mut second = broker.subscribe("l1");

        broker.emit(ItemChangeEvent::inserted(item("i1", "l1")));

        assert_eq!(first.recv().await.unwrap().item_id(), "i1");
        assert_eq!(second.recv().await.unwrap().item_id(), "i1");
    }

    #[tokio::test]
    async fn test_events_scoped_by_list() {
        let broker = ListChangeBroker::new();
        let mut viewer = broker.subscribe("l1");

        broker.emit(ItemChangeEvent::inserted(item("other", "l2")));
        broker.emit(ItemChangeEvent::inserted(item("mine", "l1")));

        assert_eq!(viewer.recv().await.unwrap().item_id(), "mine");
        assert!(viewer.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_dropping_subscription_releases_it() {
        let broker = ListChangeBroker::new();
        let subscription = broker.subscribe("l1");
        assert_eq!(broker.subscriber_count("l1"), 1);

        drop(subscription);
        assert_eq!(broker.subscriber_count("l1"), 0);

        // Emitting after release prunes the dead channel and must not panic.
        broker.emit(ItemChangeEvent::inserted(item("i1", "l1")));
        assert_eq!(broker.subscriber_count("l1"), 0);
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_noop() {
        let broker = ListChangeBroker::new();
        broker.emit(ItemChangeEvent::inserted(item("i1", "l1")));
    }
}
