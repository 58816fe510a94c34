#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::items::items_model::*;
    use crate::items::items_reconciler::ClaimStatus;
    use crate::items::{ItemRepositoryTrait, ItemService, ItemServiceTrait};
    use crate::sync::{ItemChangeEvent, MockItemChangeSink};
    use crate::Error;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock ItemRepository ---
    #[derive(Default)]
    struct MockItemRepository {
        items: Mutex<Vec<ListItem>>,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl MockItemRepository {
        fn with_items(items: Vec<ListItem>) -> Self {
            Self {
                items: Mutex::new(items),
                ..Default::default()
            }
        }

        fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        fn check_write(&self) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                Err(Error::Repository("store unavailable".to_string()))
            } else {
                Ok(())
            }
        }

        fn snapshot(&self) -> Vec<ListItem> {
            self.items.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ItemRepositoryTrait for MockItemRepository {
        fn get_by_id(&self, item_id: &str) -> Result<ListItem> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|item| item.id == item_id)
                .cloned()
                .ok_or_else(|| Error::Unexpected("Item not found".to_string()))
        }

        fn list_by_list_id(&self, list_id: &str) -> Result<Vec<ListItem>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|item| item.list_id == list_id)
                .cloned()
                .collect())
        }

        async fn create(&self, new_item: NewListItem) -> Result<ListItem> {
            self.check_write()?;
            let item = ListItem {
                id: format!("i{}", self.items.lock().unwrap().len() + 1),
                list_id: new_item.list_id,
                name: new_item.name,
                price: new_item.price,
                brand: new_item.brand,
                model: new_item.model,
                ..Default::default()
            };
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn update(&self, item_id: &str, update: ListItemUpdate) -> Result<ListItem> {
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(|| Error::Unexpected("Item not found".to_string()))?;
            item.name = update.name;
            item.price = update.price;
            item.brand = update.brand;
            item.model = update.model;
            item.purchaser_name = update.purchaser_name;
            item.purchaser_phone = update.purchaser_phone;
            item.purchase_date = update.purchase_date;
            item.is_picked_up = update.is_picked_up;
            item.is_reserved = update.is_reserved;
            item.is_paid = update.is_paid;
            item.amount_paid = update.amount_paid;
            Ok(item.clone())
        }

        async fn apply_claim(&self, item_id: &str, claim: ClaimStatus) -> Result<ListItem> {
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(|| Error::Unexpected("Item not found".to_string()))?;
            item.set_claim(claim);
            Ok(item.clone())
        }

        async fn apply_claim_bulk(
            &self,
            item_ids: &[String],
            claim: ClaimStatus,
        ) -> Result<Vec<ListItem>> {
            // Single request: a failure mutates nothing.
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let mut updated = Vec::new();
            for item in items.iter_mut().filter(|item| item_ids.contains(&item.id)) {
                item.set_claim(claim.clone());
                updated.push(item.clone());
            }
            Ok(updated)
        }

        async fn set_color_status(
            &self,
            item_id: &str,
            color_status: ColorStatus,
        ) -> Result<ListItem> {
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(|| Error::Unexpected("Item not found".to_string()))?;
            item.color_status = color_status;
            Ok(item.clone())
        }

        async fn delete(&self, item_id: &str) -> Result<usize> {
            self.check_write()?;
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|item| item.id != item_id);
            Ok(before - items.len())
        }
    }

    fn item(id: &str) -> ListItem {
        ListItem {
            id: id.to_string(),
            list_id: "l1".to_string(),
            name: "Cuna".to_string(),
            price: dec!(25.00),
            ..Default::default()
        }
    }

    fn purchaser() -> PurchaserInfo {
        PurchaserInfo {
            purchaser_name: "Ana".to_string(),
            purchaser_phone: "600111222".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            is_picked_up: false,
            is_paid: false,
            amount_paid: None,
        }
    }

    fn service(
        repo: Arc<MockItemRepository>,
        sink: Arc<MockItemChangeSink>,
    ) -> ItemService {
        ItemService::new(repo, sink)
    }

    #[tokio::test]
    async fn test_set_purchased_scenario() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());

        let updated = service
            .set_purchased("i1", true, Some(purchaser()))
            .await
            .unwrap();

        assert!(updated.is_purchased);
        assert!(!updated.is_reserved);
        assert_eq!(updated.purchaser_name.as_deref(), Some("Ana"));
        assert!(!updated.is_paid);
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_set_purchased_requires_info_before_any_write() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());

        assert!(service.set_purchased("i1", true, None).await.is_err());
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_unpurchase_clears_dependent_fields() {
        let mut purchased = item("i1");
        purchased.is_purchased = true;
        purchased.purchaser_name = Some("Ana".to_string());
        purchased.purchaser_phone = Some("600111222".to_string());
        purchased.is_paid = true;
        purchased.amount_paid = Some(dec!(25.00));

        let repo = Arc::new(MockItemRepository::with_items(vec![purchased]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo, sink);

        let updated = service.set_purchased("i1", false, None).await.unwrap();
        assert!(!updated.is_purchased);
        assert_eq!(updated.purchaser_name, None);
        assert_eq!(updated.purchaser_phone, None);
        assert_eq!(updated.purchase_date, None);
        assert!(!updated.is_picked_up);
        assert!(!updated.is_paid);
        assert_eq!(updated.amount_paid, None);
    }

    #[tokio::test]
    async fn test_reserve_then_purchase_stays_exclusive() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo, sink);

        let reserved = service
            .set_reserved("i1", true, Some(purchaser()))
            .await
            .unwrap();
        assert!(reserved.is_reserved && !reserved.is_purchased);

        let purchased = service
            .set_purchased("i1", true, Some(purchaser()))
            .await
            .unwrap();
        assert!(purchased.is_purchased && !purchased.is_reserved);
    }

    #[tokio::test]
    async fn test_bulk_purchase_all_or_nothing() {
        let repo = Arc::new(MockItemRepository::with_items(vec![
            item("i1"),
            item("i2"),
            item("i3"),
        ]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());
        let ids = vec!["i1".to_string(), "i2".to_string()];

        repo.set_fail_writes(true);
        let before = repo.snapshot();
        assert!(service
            .bulk_set_purchased(&ids, true, Some(purchaser()))
            .await
            .is_err());
        // Nothing changed and nothing was announced.
        assert_eq!(repo.snapshot(), before);
        assert!(sink.is_empty());

        repo.set_fail_writes(false);
        let updated = service
            .bulk_set_purchased(&ids, true, Some(purchaser()))
            .await
            .unwrap();
        assert_eq!(updated.len(), 2);
        assert!(updated.iter().all(|item| item.is_purchased));
        assert_eq!(sink.len(), 2);
        // The unselected item is untouched.
        assert!(!repo.get_by_id("i3").unwrap().is_purchased);
    }

    #[tokio::test]
    async fn test_bulk_purchase_rejects_empty_selection() {
        let repo = Arc::new(MockItemRepository::default());
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink);

        assert!(service
            .bulk_set_purchased(&[], true, Some(purchaser()))
            .await
            .is_err());
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cycle_color_status_closes_after_four() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink);

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(service.cycle_color_status("i1").await.unwrap().color_status);
        }
        assert_eq!(
            seen,
            vec![
                ColorStatus::Yellow,
                ColorStatus::Green,
                ColorStatus::Red,
                ColorStatus::None,
            ]
        );
    }

    #[tokio::test]
    async fn test_add_item_validates_before_writing() {
        let repo = Arc::new(MockItemRepository::default());
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());

        let invalid = NewListItem {
            list_id: "l1".to_string(),
            name: " ".to_string(),
            price: dec!(5),
            brand: None,
            model: None,
        };
        assert!(service.add_item(invalid).await.is_err());
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);

        let valid = NewListItem {
            list_id: "l1".to_string(),
            name: "Chupete".to_string(),
            price: dec!(3.50),
            brand: None,
            model: None,
        };
        let created = service.add_item(valid).await.unwrap();
        assert_eq!(created.name, "Chupete");
        assert!(matches!(
            sink.events()[0],
            ItemChangeEvent::Inserted { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_cannot_reserve_a_purchased_item() {
        let mut purchased = item("i1");
        purchased.is_purchased = true;
        let repo = Arc::new(MockItemRepository::with_items(vec![purchased]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo, sink);

        let update = ListItemUpdate {
            name: "Cuna".to_string(),
            price: dec!(25.00),
            is_reserved: true,
            ..Default::default()
        };
        assert!(service.update_item("i1", update).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_emits_deletion_for_the_right_list() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());

        service.delete_item("i1").await.unwrap();
        assert!(repo.snapshot().is_empty());
        match &sink.events()[0] {
            ItemChangeEvent::Deleted { list_id, item_id } => {
                assert_eq!(list_id, "l1");
                assert_eq!(item_id, "i1");
            }
            other => panic!("Expected Deleted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_toggle_emits_nothing() {
        let repo = Arc::new(MockItemRepository::with_items(vec![item("i1")]));
        let sink = Arc::new(MockItemChangeSink::new());
        let service = service(repo.clone(), sink.clone());

        repo.set_fail_writes(true);
        assert!(service
            .set_purchased("i1", true, Some(purchaser()))
            .await
            .is_err());
        assert!(sink.is_empty());
    }
}
