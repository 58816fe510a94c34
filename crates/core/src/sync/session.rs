//! An open viewing session over one shared list.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::broker::{ItemChangeSubscription, ListChangeBroker};
use super::collection::ItemCollection;
use crate::errors::Result;
use crate::items::{ItemServiceTrait, ListItem, NewListItem, PurchaserInfo};

/// One viewer's live session on a list: a feed-maintained item collection
/// plus the standing subscription that keeps it consistent.
///
/// Mutations go to the store and come back through the change feed - local
/// state is never updated ahead of the store. The single exception is
/// [`delete_item`](Self::delete_item), which removes the item optimistically
/// and restores the previous collection if the store call fails.
///
/// Closing (or dropping) the session releases the subscription.
pub struct ListViewSession {
    items: ItemCollection,
    subscription: ItemChangeSubscription,
    item_service: Arc<dyn ItemServiceTrait>,
}

impl ListViewSession {
    /// Opens a list: subscribes to its change feed, then fetches the current
    /// item collection in creation order. Subscribing first means a mutation
    /// committed between fetch and subscribe is not lost.
    pub fn open(
        list_id: &str,
        item_service: Arc<dyn ItemServiceTrait>,
        broker: &ListChangeBroker,
    ) -> Result<Self> {
        let subscription = broker.subscribe(list_id);
        let items = item_service.get_items(list_id)?;
        debug!("Opened list {} with {} items", list_id, items.len());
        Ok(Self {
            items: ItemCollection::new(list_id, items),
            subscription,
            item_service,
        })
    }

    pub fn list_id(&self) -> &str {
        self.items.list_id()
    }

    pub fn items(&self) -> &[ListItem] {
        self.items.items()
    }

    pub fn pending_total(&self) -> Decimal {
        self.items.pending_total()
    }

    pub fn purchased_total(&self) -> Decimal {
        self.items.purchased_total()
    }

    /// Merges every change event the feed has delivered so far.
    pub fn pump(&mut self) {
        while let Some(event) = self.subscription.try_recv() {
            self.items.apply(event);
        }
    }

    /// Waits for the next feed event and merges it. Returns false once the
    /// feed is closed.
    pub async fn pump_one(&mut self) -> bool {
        match self.subscription.recv().await {
            Some(event) => {
                self.items.apply(event);
                true
            }
            None => false,
        }
    }

    /// Adds an item; the local collection picks it up from the feed.
    pub async fn add_item(&self, new_item: NewListItem) -> Result<ListItem> {
        self.item_service.add_item(new_item).await
    }

    /// Sets or clears the purchase claim; local state follows the feed.
    pub async fn set_purchased(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem> {
        self.item_service
            .set_purchased(item_id, value, purchaser_info)
            .await
    }

    /// Sets or clears the reservation claim; local state follows the feed.
    pub async fn set_reserved(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem> {
        self.item_service
            .set_reserved(item_id, value, purchaser_info)
            .await
    }

    /// Advances an item's color status; local state follows the feed.
    pub async fn cycle_color_status(&self, item_id: &str) -> Result<ListItem> {
        self.item_service.cycle_color_status(item_id).await
    }

    /// Applies the same purchase transition to a batch; all-or-nothing at
    /// the store, so local state either sees every update or none.
    pub async fn bulk_set_purchased(
        &self,
        item_ids: &[String],
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<Vec<ListItem>> {
        self.item_service
            .bulk_set_purchased(item_ids, value, purchaser_info)
            .await
    }

    /// Deletes an item optimistically: the local collection drops it before
    /// the store call and is restored in full if the call fails.
    pub async fn delete_item(&mut self, item_id: &str) -> Result<()> {
        let previous = self.items.items().to_vec();
        self.items.remove(item_id);

        match self.item_service.delete_item(item_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.items.replace_all(previous);
                Err(err)
            }
        }
    }

    /// Ends the session, releasing the feed subscription.
    pub fn close(self) {
        debug!("Closed list {}", self.items.list_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::items::{ColorStatus, ListItemUpdate};
    use crate::sync::{ItemChangeEvent, ItemChangeSink};
    use crate::Error;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    // Mock service that mutates an in-memory store and, on success,
    // announces the change through the broker like the real service does.
    struct MockItemService {
        items: Mutex<Vec<ListItem>>,
        broker: Arc<ListChangeBroker>,
        fail_writes: AtomicBool,
    }

    impl MockItemService {
        fn new(items: Vec<ListItem>, broker: Arc<ListChangeBroker>) -> Self {
            Self {
                items: Mutex::new(items),
                broker,
                fail_writes: AtomicBool::new(false),
            }
        }

        fn check_write(&self) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                Err(Error::Repository("store unavailable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ItemServiceTrait for MockItemService {
        fn get_item(&self, _item_id: &str) -> Result<ListItem> {
            unimplemented!()
        }

        fn get_items(&self, list_id: &str) -> Result<Vec<ListItem>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|item| item.list_id == list_id)
                .cloned()
                .collect())
        }

        async fn add_item(&self, new_item: crate::items::NewListItem) -> Result<ListItem> {
            self.check_write()?;
            let item = ListItem {
                id: format!("i{}", self.items.lock().unwrap().len() + 1),
                list_id: new_item.list_id,
                name: new_item.name,
                price: new_item.price,
                ..Default::default()
            };
            self.items.lock().unwrap().push(item.clone());
            self.broker.emit(ItemChangeEvent::inserted(item.clone()));
            Ok(item)
        }

        async fn update_item(
            &self,
            _item_id: &str,
            _update: ListItemUpdate,
        ) -> Result<ListItem> {
            unimplemented!()
        }

        async fn set_purchased(
            &self,
            item_id: &str,
            value: bool,
            _purchaser_info: Option<PurchaserInfo>,
        ) -> Result<ListItem> {
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(|| Error::Unexpected("Item not found".to_string()))?;
            item.is_purchased = value;
            item.is_reserved = false;
            let item = item.clone();
            drop(items);
            self.broker.emit(ItemChangeEvent::updated(item.clone()));
            Ok(item)
        }

        async fn set_reserved(
            &self,
            _item_id: &str,
            _value: bool,
            _purchaser_info: Option<PurchaserInfo>,
        ) -> Result<ListItem> {
            unimplemented!()
        }

        async fn cycle_color_status(&self, _item_id: &str) -> Result<ListItem> {
            unimplemented!()
        }

        async fn bulk_set_purchased(
            &self,
            _item_ids: &[String],
            _value: bool,
            _purchaser_info: Option<PurchaserInfo>,
        ) -> Result<Vec<ListItem>> {
            unimplemented!()
        }

        async fn delete_item(&self, item_id: &str) -> Result<()> {
            self.check_write()?;
            let list_id = {
                let mut items = self.items.lock().unwrap();
                let list_id = items
                    .iter()
                    .find(|item| item.id == item_id)
                    .map(|item| item.list_id.clone())
                    .ok_or_else(|| Error::Unexpected("Item not found".to_string()))?;
                items.retain(|item| item.id != item_id);
                list_id
            };
            self.broker
                .emit(ItemChangeEvent::deleted(list_id, item_id.to_string()));
            Ok(())
        }
    }

    fn item(id: &str) -> ListItem {
        ListItem {
            id: id.to_string(),
            list_id: "l1".to_string(),
            name: "Cuna".to_string(),
            price: dec!(25.00),
            color_status: ColorStatus::None,
            ..Default::default()
        }
    }

    fn open_session(
        items: Vec<ListItem>,
    ) -> (ListViewSession, Arc<MockItemService>, Arc<ListChangeBroker>) {
        let broker = Arc::new(ListChangeBroker::new());
        let service = Arc::new(MockItemService::new(items, broker.clone()));
        let session = ListViewSession::open("l1", service.clone(), &broker).unwrap();
        (session, service, broker)
    }

    #[tokio::test]
    async fn test_mutations_reach_local_state_only_through_the_feed() {
        let (mut session, _service, _broker) = open_session(vec![item("i1")]);

        session
            .set_purchased("i1", true, None)
            .await
            .unwrap();
        // Not yet merged: the store succeeded but the feed hasn't been pumped.
        assert!(!session.items()[0].is_purchased);

        session.pump();
        assert!(session.items()[0].is_purchased);
    }

    #[tokio::test]
    async fn test_delete_is_optimistic_and_rolls_back_on_failure() {
        let (mut session, service, _broker) = open_session(vec![item("i1"), item("i2")]);

        service.fail_writes.store(true, Ordering::SeqCst);
        assert!(session.delete_item("i1").await.is_err());
        // The optimistic removal was rolled back in full.
        let ids: Vec<&str> = session.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i1", "i2"]);

        service.fail_writes.store(false, Ordering::SeqCst);
        session.delete_item("i1").await.unwrap();
        let ids: Vec<&str> = session.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i2"]);

        // The feed's own deletion event is a no-op on the already-updated view.
        session.pump();
        assert_eq!(session.items().len(), 1);
    }

    #[tokio::test]
    async fn test_close_releases_the_subscription() {
        let (session, _service, broker) = open_session(vec![]);
        assert_eq!(broker.subscriber_count("l1"), 1);
        session.close();
        assert_eq!(broker.subscriber_count("l1"), 0);
    }

    #[tokio::test]
    async fn test_concurrent_viewers_converge() {
        let broker = Arc::new(ListChangeBroker::new());
        let service = Arc::new(MockItemService::new(vec![item("i1")], broker.clone()));
        let mut owner = ListViewSession::open("l1", service.clone(), &broker).unwrap();
        let mut visitor = ListViewSession::open("l1", service.clone(), &broker).unwrap();

        visitor.set_purchased("i1", true, None).await.unwrap();

        owner.pump();
        visitor.pump();
        assert!(owner.items()[0].is_purchased);
        assert!(visitor.items()[0].is_purchased);
    }
}
