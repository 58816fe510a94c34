use diesel::prelude::*;

use canastilla_core::sharing::{PublicList, PublicListItem, SharingRepositoryTrait};
use canastilla_core::Result;

use super::model::{PublicListItemRow, PublicListRow};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{list_items, shopping_lists};

/// Read-only repository backing the public share-code path.
pub struct SharingRepository {
    pool: DbPool,
}

impl SharingRepository {
    /// Creates a new SharingRepository instance
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SharingRepositoryTrait for SharingRepository {
    fn get_list_by_code(&self, code: &str) -> Result<Option<PublicList>> {
        let mut conn = get_connection(&self.pool)?;
        let row = shopping_lists::table
            .filter(shopping_lists::share_code.eq(code))
            .select(PublicListRow::as_select())
            .first::<PublicListRow>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(PublicList::from))
    }

    fn get_list_items_by_code(&self, code: &str) -> Result<Vec<PublicListItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = list_items::table
            .inner_join(shopping_lists::table)
            .filter(shopping_lists::share_code.eq(code))
            .select(PublicListItemRow::as_select())
            .order(list_items::created_at.asc())
            .load::<PublicListItemRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(PublicListItem::from).collect())
    }
}
