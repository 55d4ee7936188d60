use axum::{
    Json, Router,
    extract::{FromRef, Path},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use platform_api::{ApiError, ApiResult};
use platform_db::DbPool;
use tracing::{info, warn};

use crate::{
    model::Employee,
    store::{EmployeeStore, SaveOutcome},
};

pub const COLLECTION_PATH: &str = "/api/employees";

const ID_MISMATCH: &str = "The provided ID does not match the employee's ID.";

fn item_path() -> String {
    format!("{COLLECTION_PATH}/{{id}}")
}

/// Employee routes, mountable on any router whose state can hand out a pool.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    DbPool: FromRef<S>,
{
    Router::new()
        .route(COLLECTION_PATH, get(list_employees).post(create_employee))
        .route(
            &item_path(),
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

async fn list_employees(store: EmployeeStore) -> ApiResult<Response> {
    let employees = store.list_all().await?;
    if employees.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(employees).into_response())
}

async fn get_employee(store: EmployeeStore, Path(id): Path<i32>) -> ApiResult<Json<Employee>> {
    store
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("employee {id} not found")))
}

async fn create_employee(
    store: EmployeeStore,
    Json(employee): Json<Employee>,
) -> ApiResult<impl IntoResponse> {
    let created = store.add(employee.into()).await?;
    info!(id = created.id, "employee created");
    // Points at the collection endpoint, keyed by the new ID.
    let location = format!("{COLLECTION_PATH}?id={}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn update_employee(
    store: EmployeeStore,
    Path(id): Path<i32>,
    Json(employee): Json<Employee>,
) -> ApiResult<StatusCode> {
    if employee.id != id {
        return Err(ApiError::bad_request(ID_MISMATCH));
    }

    match store.update(&employee).await? {
        SaveOutcome::Saved => Ok(StatusCode::NO_CONTENT),
        SaveOutcome::Conflict => {
            if !store.exists(id).await? {
                warn!(id, "employee vanished before update");
                return Err(ApiError::not_found("Employee not found."));
            }
            // Only a deleted row is explained; anything else escalates.
            Err(ApiError::internal(anyhow::anyhow!(
                "unresolved write conflict updating employee {id}"
            )))
        }
    }
}

async fn delete_employee(store: EmployeeStore, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    if !store.has_any().await? {
        return Err(ApiError::not_found("no employees stored"));
    }
    let Some(employee) = store.find(id).await? else {
        return Err(ApiError::not_found(format!("employee {id} not found")));
    };
    if store.remove(&employee).await? == SaveOutcome::Conflict {
        return Err(ApiError::internal(anyhow::anyhow!(
            "employee {id} vanished before delete"
        )));
    }
    info!(id, "employee deleted");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_extends_the_collection() {
        assert_eq!(item_path(), "/api/employees/{id}");
    }
}
