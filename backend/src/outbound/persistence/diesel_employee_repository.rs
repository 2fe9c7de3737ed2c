//! PostgreSQL-backed employee repository using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityRepository, PersistenceError};
use crate::domain::{Employee, EmployeeDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<Employee> for DieselEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .order_by(employees::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(EmployeeRow::into_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id)
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(EmployeeRow::into_domain))
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(&NewEmployeeRow::from_draft(draft))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into_domain())
    }

    async fn save(&self, entity: &Employee) -> Result<Employee, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = EmployeeChangeset {
            first_name: &entity.first_name,
            last_name: &entity.last_name,
            email_id: &entity.email_id,
        };
        let row: EmployeeRow = diesel::update(employees::table.find(entity.id))
            .set(&changeset)
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
