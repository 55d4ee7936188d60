//! Data access for the `employees` table.
//!
//! An [`EmployeeStore`] is built for every request from the shared pool and
//! dropped when the request finishes. Every mutation is committed before the
//! call returns.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use entity::employees;
use platform_db::{DbPool, DbResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::model::{Employee, NewEmployee};

/// Result of a blind write against a single row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No row matched the record's ID at write time.
    Conflict,
}

#[derive(Clone, Debug)]
pub struct EmployeeStore {
    pool: DbPool,
}

impl EmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Employee>> {
        let rows = employees::Entity::find().all(&self.pool).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    pub async fn find(&self, id: i32) -> DbResult<Option<Employee>> {
        let row = employees::Entity::find_by_id(id).one(&self.pool).await?;
        Ok(row.map(Employee::from))
    }

    pub async fn add(&self, employee: NewEmployee) -> DbResult<Employee> {
        let model = employees::ActiveModel {
            id: NotSet,
            full_name: Set(employee.full_name),
            role: Set(employee.role),
            email: Set(employee.email),
        }
        .insert(&self.pool)
        .await?;
        debug!(id = model.id, "employee inserted");
        Ok(model.into())
    }

    /// Replace every attribute of the row keyed by `employee.id` without
    /// reading it first.
    pub async fn update(&self, employee: &Employee) -> DbResult<SaveOutcome> {
        let changes = employees::ActiveModel {
            id: NotSet,
            full_name: Set(employee.full_name.clone()),
            role: Set(employee.role.clone()),
            email: Set(employee.email.clone()),
        };
        let result = employees::Entity::update_many()
            .set(changes)
            .filter(employees::Column::Id.eq(employee.id))
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Ok(SaveOutcome::Conflict);
        }
        Ok(SaveOutcome::Saved)
    }

    /// Delete the row keyed by `employee.id`. A row that is already gone is a
    /// [`SaveOutcome::Conflict`].
    pub async fn remove(&self, employee: &Employee) -> DbResult<SaveOutcome> {
        let result = employees::Entity::delete_by_id(employee.id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Ok(SaveOutcome::Conflict);
        }
        debug!(id = employee.id, "employee removed");
        Ok(SaveOutcome::Saved)
    }

    pub async fn exists(&self, id: i32) -> DbResult<bool> {
        let count = employees::Entity::find()
            .filter(employees::Column::Id.eq(id))
            .count(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Whether the table holds at least one row.
    pub async fn has_any(&self) -> DbResult<bool> {
        let count = employees::Entity::find().count(&self.pool).await?;
        Ok(count > 0)
    }
}

impl<S> FromRequestParts<S> for EmployeeStore
where
    DbPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(DbPool::from_ref(state)))
    }
}
