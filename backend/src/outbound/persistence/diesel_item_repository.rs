//! PostgreSQL-backed item repository using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityRepository, PersistenceError};
use crate::domain::{Item, ItemDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the item repository port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<Item> for DieselItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .select(ItemRow::as_select())
            .order_by(items::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ItemRow::into_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRow> = items::table
            .find(id)
            .select(ItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(ItemRow::into_domain))
    }

    async fn insert(&self, draft: &ItemDraft) -> Result<Item, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ItemRow = diesel::insert_into(items::table)
            .values(&NewItemRow::from_draft(draft))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into_domain())
    }

    async fn save(&self, entity: &Item) -> Result<Item, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = ItemChangeset {
            title: &entity.title,
            content: &entity.content,
        };
        let row: ItemRow = diesel::update(items::table.find(entity.id))
            .set(&changeset)
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(items::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
