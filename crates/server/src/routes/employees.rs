use axum::{
    extract::{Path, State},
    Json,
};
use service::employee::{AddEmployeeDto, Employee, UpdateEmployeeDto};
use service::errors::ServiceError;
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::metrics;
use crate::state::ServerState;

/// Convert a service result and count it under `op`.
fn finish(op: &str, res: Result<Employee, ServiceError>) -> Result<Json<Employee>, ApiError> {
    match res {
        Ok(e) => {
            metrics::record(op, "ok");
            Ok(Json(e))
        }
        Err(e) => {
            let err = ApiError::from(e);
            metrics::record(op, err.outcome());
            Err(err)
        }
    }
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = [crate::openapi::EmployeeDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_employees(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, ApiError> {
    match state.employees.list_employees().await {
        Ok(list) => {
            info!(count = list.len(), "list employees");
            metrics::record("list", "ok");
            Ok(Json(list))
        }
        Err(e) => {
            let err = ApiError::from(e);
            metrics::record("list", err.outcome());
            Err(err)
        }
    }
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn get_employee(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiError> {
    finish("get", state.employees.get_employee(id).await)
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Created, with generated id", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation Error (only when input validation is enabled)")
    )
)]
pub async fn add_employee(
    State(state): State<ServerState>,
    Json(input): Json<AddEmployeeDto>,
) -> Result<Json<Employee>, ApiError> {
    finish("add", state.employees.add_employee(input).await)
}

#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation Error (only when input validation is enabled)"),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn update_employee(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateEmployeeDto>,
) -> Result<Json<Employee>, ApiError> {
    finish("update", state.employees.update_employee(id, input).await)
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deleted; body is the record as it was", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn delete_employee(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiError> {
    finish("delete", state.employees.delete_employee(id).await)
}
