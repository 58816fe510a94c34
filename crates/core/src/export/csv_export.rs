//! CSV backup of an owner's lists.
//!
//! One row per item across every list the owner has, in a fixed column
//! order. The export is returned as a string; callers decide where the file
//! goes.

use chrono::NaiveDate;

use crate::context::UserContext;
use crate::errors::Result;
use crate::items::{ItemServiceTrait, ListItem};
use crate::lists::{ListServiceTrait, ShoppingList};
use crate::Error;

/// Fixed backup column order.
pub const BACKUP_CSV_HEADERS: [&str; 16] = [
    "List",
    "Product",
    "Price",
    "Brand",
    "Model",
    "Status",
    "Purchaser",
    "Purchaser Phone",
    "Purchase Date",
    "Picked Up",
    "Paid",
    "Amount Paid",
    "Reserved",
    "Green Checked",
    "Color Status",
    "Created At",
];

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Renders the backup CSV for the given lists and items.
///
/// Items whose list is not in `lists` are still exported, under the list
/// name "Unknown".
pub fn export_items_csv(lists: &[ShoppingList], items: &[ListItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(BACKUP_CSV_HEADERS)
        .map_err(|e| Error::Unexpected(e.to_string()))?;

    for item in items {
        let list_name = lists
            .iter()
            .find(|list| list.id == item.list_id)
            .and_then(|list| list.name.as_deref())
            .unwrap_or("Unknown");

        let record: [String; 16] = [
            list_name.to_string(),
            item.name.clone(),
            item.price.to_string(),
            item.brand.clone().unwrap_or_default(),
            item.model.clone().unwrap_or_default(),
            if item.is_purchased { "Purchased" } else { "Pending" }.to_string(),
            item.purchaser_name.clone().unwrap_or_default(),
            item.purchaser_phone.clone().unwrap_or_default(),
            item.purchase_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            yes_no(item.is_picked_up).to_string(),
            yes_no(item.is_paid).to_string(),
            item.amount_paid
                .map(|amount| amount.to_string())
                .unwrap_or_else(|| "0".to_string()),
            yes_no(item.is_reserved).to_string(),
            yes_no(item.is_green_checked).to_string(),
            item.color_status.label().to_string(),
            item.created_at.to_string(),
        ];
        writer
            .write_record(&record)
            .map_err(|e| Error::Unexpected(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Unexpected(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Unexpected(e.to_string()))
}

/// Gathers everything the owner has and renders the backup CSV.
pub fn export_owner_backup(
    ctx: &UserContext,
    list_service: &dyn ListServiceTrait,
    item_service: &dyn ItemServiceTrait,
) -> Result<String> {
    let lists = list_service.get_lists(ctx)?;
    let mut items = Vec::new();
    for list in &lists {
        items.extend(item_service.get_items(&list.id)?);
    }
    export_items_csv(&lists, &items)
}

/// Default name for a downloaded backup.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("canastilla_backup_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ColorStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn list(id: &str, name: &str) -> ShoppingList {
        ShoppingList {
            id: id.to_string(),
            name: Some(name.to_string()),
            baby_name: Some(name.to_string()),
            share_code: "ABC123".to_string(),
            owner_id: "u1".to_string(),
            ..Default::default()
        }
    }

    fn purchased_item() -> ListItem {
        ListItem {
            id: "i1".to_string(),
            list_id: "l1".to_string(),
            name: "Cuna".to_string(),
            price: dec!(25.00),
            brand: Some("Chicco".to_string()),
            is_purchased: true,
            purchaser_name: Some("Ana".to_string()),
            purchaser_phone: Some("600111222".to_string()),
            amount_paid: Some(dec!(10.00)),
            color_status: ColorStatus::Yellow,
            ..Default::default()
        }
    }

    #[test]
    fn test_header_row_order_is_fixed() {
        let csv = export_items_csv(&[], &[]).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "List,Product,Price,Brand,Model,Status,Purchaser,Purchaser Phone,\
             Purchase Date,Picked Up,Paid,Amount Paid,Reserved,Green Checked,\
             Color Status,Created At"
        );
    }

    #[test]
    fn test_one_row_per_item() {
        let lists = vec![list("l1", "Vega")];
        let items = vec![purchased_item(), ListItem {
            id: "i2".to_string(),
            list_id: "l1".to_string(),
            name: "Babero".to_string(),
            price: dec!(4.50),
            ..Default::default()
        }];

        let csv = export_items_csv(&lists, &items).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_purchased_row_fields() {
        let csv = export_items_csv(&[list("l1", "Vega")], &[purchased_item()]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("Vega,Cuna,25.00,Chicco,"));
        assert!(row.contains("Purchased"));
        assert!(row.contains("Ana"));
        assert!(row.contains("600111222"));
        assert!(row.contains("10.00"));
        assert!(row.contains("Yellow"));
    }

    #[test]
    fn test_unknown_list_and_empty_amount() {
        let item = ListItem {
            id: "i9".to_string(),
            list_id: "orphan".to_string(),
            name: "Sonajero".to_string(),
            price: dec!(3),
            ..Default::default()
        };
        let csv = export_items_csv(&[], &[item]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("Unknown,Sonajero,3,"));
        assert!(row.contains(",0,"));
        assert!(row.contains("White"));
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(backup_file_name(date), "canastilla_backup_2025-03-14.csv");
    }
}
