//! Item claim reconciliation.
//!
//! An item's claim is the bundle of interdependent status fields: the two
//! mutually exclusive claim flags (`is_purchased`, `is_reserved`), the
//! purchaser contact fields, and the pickup/payment flags. The functions in
//! this module compute the full consistent field set for a requested
//! transition; callers persist the result as a single write.
//!
//! Un-purchasing clears every purchaser-dependent field. Un-reserving clears
//! purchaser identity, date, and pickup but leaves `is_paid`/`amount_paid`
//! as they were - the asymmetry is intentional and pinned by tests.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::items_model::{ListItem, PurchaserInfo};
use crate::{errors::ValidationError, Error, Result};

/// The complete persisted field set of an item's claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatus {
    pub is_purchased: bool,
    pub is_reserved: bool,
    pub purchaser_name: Option<String>,
    pub purchaser_phone: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    pub is_picked_up: bool,
    pub is_paid: bool,
    pub amount_paid: Option<Decimal>,
}

impl ListItem {
    /// The item's current claim fields.
    pub fn claim(&self) -> ClaimStatus {
        ClaimStatus {
            is_purchased: self.is_purchased,
            is_reserved: self.is_reserved,
            purchaser_name: self.purchaser_name.clone(),
            purchaser_phone: self.purchaser_phone.clone(),
            purchase_date: self.purchase_date,
            is_picked_up: self.is_picked_up,
            is_paid: self.is_paid,
            amount_paid: self.amount_paid,
        }
    }

    /// Overwrites the item's claim fields with `claim`.
    pub fn set_claim(&mut self, claim: ClaimStatus) {
        self.is_purchased = claim.is_purchased;
        self.is_reserved = claim.is_reserved;
        self.purchaser_name = claim.purchaser_name;
        self.purchaser_phone = claim.purchaser_phone;
        self.purchase_date = claim.purchase_date;
        self.is_picked_up = claim.is_picked_up;
        self.is_paid = claim.is_paid;
        self.amount_paid = claim.amount_paid;
    }
}

/// Computes the claim persisted when an item's purchase flag changes.
///
/// Purchasing requires purchaser info (the name and phone may be empty) and
/// forces the reservation off. Un-purchasing ignores any info and clears
/// every purchaser-dependent field.
pub fn purchase_status(value: bool, info: Option<&PurchaserInfo>) -> Result<ClaimStatus> {
    if !value {
        return Ok(ClaimStatus::default());
    }

    let info = info.ok_or_else(|| {
        Error::Validation(ValidationError::MissingField("purchaserInfo".to_string()))
    })?;

    Ok(ClaimStatus {
        is_purchased: true,
        is_reserved: false,
        purchaser_name: Some(info.purchaser_name.clone()),
        purchaser_phone: Some(info.purchaser_phone.clone()),
        purchase_date: Some(info.purchase_date),
        is_picked_up: info.is_picked_up,
        is_paid: info.is_paid,
        amount_paid: info.amount_paid,
    })
}

/// Computes the claim persisted when an item's reservation flag changes.
///
/// Reserving forces the purchase flag off; purchaser info is optional and,
/// when given, only contributes identity, date, and pickup. Un-reserving
/// clears identity, date, and pickup but leaves the payment fields alone.
pub fn reserve_status(
    current: &ClaimStatus,
    value: bool,
    info: Option<&PurchaserInfo>,
) -> ClaimStatus {
    if value {
        let mut next = ClaimStatus {
            is_purchased: false,
            is_reserved: true,
            ..current.clone()
        };
        if let Some(info) = info {
            next.purchaser_name = Some(info.purchaser_name.clone());
            next.purchaser_phone = Some(info.purchaser_phone.clone());
            next.purchase_date = Some(info.purchase_date);
            next.is_picked_up = info.is_picked_up;
        }
        next
    } else {
        ClaimStatus {
            is_reserved: false,
            purchaser_name: None,
            purchaser_phone: None,
            purchase_date: None,
            is_picked_up: false,
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn purchase_info() -> PurchaserInfo {
        PurchaserInfo {
            purchaser_name: "Ana".to_string(),
            purchaser_phone: "600111222".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            is_picked_up: false,
            is_paid: false,
            amount_paid: None,
        }
    }

    #[test]
    fn test_purchase_requires_info() {
        let err = purchase_status(true, None);
        assert!(matches!(
            err,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_purchase_sets_full_field_set() {
        let claim = purchase_status(true, Some(&purchase_info())).unwrap();
        assert!(claim.is_purchased);
        assert!(!claim.is_reserved);
        assert_eq!(claim.purchaser_name.as_deref(), Some("Ana"));
        assert_eq!(claim.purchaser_phone.as_deref(), Some("600111222"));
        assert!(claim.purchase_date.is_some());
        assert!(!claim.is_paid);
        assert!(!claim.is_picked_up);
        assert_eq!(claim.amount_paid, None);
    }

    #[test]
    fn test_purchase_with_empty_contact_is_valid() {
        let info = PurchaserInfo {
            purchaser_name: String::new(),
            purchaser_phone: String::new(),
            ..purchase_info()
        };
        let claim = purchase_status(true, Some(&info)).unwrap();
        assert!(claim.is_purchased);
        assert_eq!(claim.purchaser_name.as_deref(), Some(""));
    }

    #[test]
    fn test_unpurchase_clears_everything() {
        let claim = purchase_status(false, Some(&purchase_info())).unwrap();
        assert_eq!(claim, ClaimStatus::default());
        assert_eq!(claim.purchaser_name, None);
        assert_eq!(claim.purchaser_phone, None);
        assert_eq!(claim.purchase_date, None);
        assert!(!claim.is_picked_up);
        assert!(!claim.is_paid);
        assert_eq!(claim.amount_paid, None);
    }

    #[test]
    fn test_reserve_forces_purchase_off() {
        let current = purchase_status(true, Some(&purchase_info())).unwrap();
        let claim = reserve_status(&current, true, None);
        assert!(claim.is_reserved);
        assert!(!claim.is_purchased);
    }

    #[test]
    fn test_unreserve_keeps_payment_fields() {
        let mut current = reserve_status(&ClaimStatus::default(), true, Some(&purchase_info()));
        current.is_paid = true;
        current.amount_paid = Some(dec!(12.00));

        let claim = reserve_status(&current, false, None);
        assert!(!claim.is_reserved);
        assert_eq!(claim.purchaser_name, None);
        assert_eq!(claim.purchaser_phone, None);
        assert_eq!(claim.purchase_date, None);
        assert!(!claim.is_picked_up);
        // The payment fields survive an un-reserve (unlike an un-purchase).
        assert!(claim.is_paid);
        assert_eq!(claim.amount_paid, Some(dec!(12.00)));
    }

    #[test]
    fn test_reserve_without_info_keeps_existing_contact() {
        let current = ClaimStatus {
            purchaser_name: Some("Luis".to_string()),
            ..ClaimStatus::default()
        };
        let claim = reserve_status(&current, true, None);
        assert_eq!(claim.purchaser_name.as_deref(), Some("Luis"));
    }

    #[test]
    fn test_spec_scenario_ana() {
        // item {price 25.00, is_purchased: false} -> setPurchased(true, Ana)
        let claim = purchase_status(true, Some(&purchase_info())).unwrap();
        assert!(claim.is_purchased);
        assert!(!claim.is_reserved);
        assert_eq!(claim.purchaser_name.as_deref(), Some("Ana"));
        assert!(!claim.is_paid);
    }

    // Reconciler operations, applied in any order, never leave an item both
    // purchased and reserved.
    proptest! {
        #[test]
        fn claim_flags_stay_mutually_exclusive(ops in proptest::collection::vec(0u8..4, 0..32)) {
            let mut claim = ClaimStatus::default();
            let info = purchase_info();
            for op in ops {
                claim = match op {
                    0 => purchase_status(true, Some(&info)).unwrap(),
                    1 => purchase_status(false, None).unwrap(),
                    2 => reserve_status(&claim, true, Some(&info)),
                    _ => reserve_status(&claim, false, None),
                };
                prop_assert!(!(claim.is_purchased && claim.is_reserved));
            }
        }
    }
}
