use async_trait::async_trait;
use diesel::prelude::*;

use canastilla_core::lists::{
    generate_share_code, ListRepositoryTrait, NewShoppingList, ShoppingList, ShoppingListUpdate,
};
use canastilla_core::Result;

use super::model::ShoppingListDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::shopping_lists;
use crate::schema::shopping_lists::dsl::*;

/// Creating a list retries code generation this many times before giving up
/// on a share-code collision.
const SHARE_CODE_ATTEMPTS: usize = 5;

/// Repository for managing shopping list data in the database
pub struct ListRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ListRepository {
    /// Creates a new ListRepository instance
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ListRepositoryTrait for ListRepository {
    fn get_by_id(&self, list_id: &str) -> Result<ShoppingList> {
        let mut conn = get_connection(&self.pool)?;
        let list = shopping_lists
            .select(ShoppingListDB::as_select())
            .find(list_id)
            .first::<ShoppingListDB>(&mut conn)
            .into_core()?;
        Ok(list.into())
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<ShoppingList>> {
        let mut conn = get_connection(&self.pool)?;
        let results = shopping_lists
            .filter(owner_id.eq(owner))
            .select(ShoppingListDB::as_select())
            .order(created_at.desc())
            .load::<ShoppingListDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(ShoppingList::from).collect())
    }

    async fn create(&self, owner: &str, new_list: NewShoppingList) -> Result<ShoppingList> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();
                let mut list_db = ShoppingListDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: Some(new_list.baby_name.clone()),
                    baby_name: Some(new_list.baby_name),
                    father_name: new_list.father_name,
                    mother_name: new_list.mother_name,
                    phone: new_list.phone,
                    share_code: generate_share_code(),
                    owner_id: owner,
                    is_archived: false,
                    created_at: now,
                    updated_at: now,
                };

                // The unique index on share_code is the uniqueness contract;
                // a collision just means we roll a new code.
                for attempt in 0.. {
                    match diesel::insert_into(shopping_lists::table)
                        .values(&list_db)
                        .execute(conn)
                    {
                        Ok(_) => return Ok(list_db.into()),
                        Err(diesel::result::Error::DatabaseError(
                            diesel::result::DatabaseErrorKind::UniqueViolation,
                            _,
                        )) if attempt + 1 < SHARE_CODE_ATTEMPTS => {
                            list_db.share_code = generate_share_code();
                        }
                        Err(e) => return Err(StorageError::from(e).into()),
                    }
                }
                unreachable!("share code retry loop always returns")
            })
            .await
    }

    async fn update(&self, list_id: &str, update: ShoppingListUpdate) -> Result<ShoppingList> {
        let list_id = list_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(shopping_lists.find(&list_id))
                    .set((
                        name.eq(Some(update.baby_name.clone())),
                        baby_name.eq(Some(update.baby_name)),
                        father_name.eq(update.father_name),
                        mother_name.eq(update.mother_name),
                        phone.eq(update.phone),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let result = shopping_lists
                    .select(ShoppingListDB::as_select())
                    .find(&list_id)
                    .first::<ShoppingListDB>(conn)
                    .into_core()?;
                Ok(result.into())
            })
            .await
    }

    async fn rename(&self, list_id: &str, new_name: &str) -> Result<ShoppingList> {
        let list_id = list_id.to_string();
        let new_name = new_name.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(shopping_lists.find(&list_id))
                    .set((
                        name.eq(Some(new_name.clone())),
                        baby_name.eq(Some(new_name)),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let result = shopping_lists
                    .select(ShoppingListDB::as_select())
                    .find(&list_id)
                    .first::<ShoppingListDB>(conn)
                    .into_core()?;
                Ok(result.into())
            })
            .await
    }

    async fn set_archived(&self, list_id: &str, archived: bool) -> Result<ShoppingList> {
        let list_id = list_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(shopping_lists.find(&list_id))
                    .set((
                        is_archived.eq(archived),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let result = shopping_lists
                    .select(ShoppingListDB::as_select())
                    .find(&list_id)
                    .first::<ShoppingListDB>(conn)
                    .into_core()?;
                Ok(result.into())
            })
            .await
    }

    async fn delete(&self, list_id: &str) -> Result<usize> {
        let list_id = list_id.to_string();
        self.writer
            .exec(move |conn| {
                // Items go with the list via ON DELETE CASCADE.
                diesel::delete(shopping_lists.find(&list_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
