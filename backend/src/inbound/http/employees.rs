//! Employee REST handlers.
//!
//! ```text
//! GET    /employees
//! GET    /employees/{id}
//! POST   /employees      {"firstName":"Ada","lastName":"Lovelace","emailId":"ada@example.com"}
//! PUT    /employees/{id}
//! DELETE /employees/{id} -> {"deleted":true}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDraft, FieldViolations};
use crate::inbound::http::ApiResult;
use crate::inbound::http::crud::{self, DeletionAck};
use crate::inbound::http::state::HttpState;

/// Employee request body for create and update.
///
/// Fields are optional at the wire level so a rejected payload can report
/// every missing field; validation happens in [`EmployeeDraft`].
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    /// Ignored: identifiers are assigned by the store.
    pub id: Option<i32>,
    /// Given name; required, non-blank.
    pub first_name: Option<String>,
    /// Family name; required, non-blank.
    pub last_name: Option<String>,
    /// Contact email address; required, non-blank.
    pub email_id: Option<String>,
}

impl TryFrom<EmployeePayload> for EmployeeDraft {
    type Error = FieldViolations;

    fn try_from(value: EmployeePayload) -> Result<Self, Self::Error> {
        Self::new(value.first_name, value.last_name, value.email_id)
    }
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    Ok(web::Json(crud::list_all(state.employees.as_ref()).await?))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Store-assigned employee id")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 404, description = "No employee with this id", body = crate::domain::Error)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Employee>> {
    let id = path.into_inner();
    Ok(web::Json(crud::fetch(state.employees.as_ref(), id).await?))
}

/// Create an employee; the store assigns the id.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Stored employee including its id", body = Employee),
        (status = 400, description = "Validation failure listing violated fields", body = crate::domain::Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeePayload>,
) -> ApiResult<web::Json<Employee>> {
    let draft =
        EmployeeDraft::try_from(payload.into_inner()).map_err(crud::map_field_violations)?;
    Ok(web::Json(
        crud::create(state.employees.as_ref(), draft).await?,
    ))
}

/// Overwrite the mutable fields of an existing employee. The id never
/// changes; validation runs before the lookup, so a bad payload yields 400
/// even for an absent id.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Store-assigned employee id")),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Validation failure listing violated fields", body = crate::domain::Error),
        (status = 404, description = "No employee with this id", body = crate::domain::Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<EmployeePayload>,
) -> ApiResult<web::Json<Employee>> {
    let draft =
        EmployeeDraft::try_from(payload.into_inner()).map_err(crud::map_field_violations)?;
    let id = path.into_inner();
    Ok(web::Json(
        crud::update(state.employees.as_ref(), id, draft).await?,
    ))
}

/// Delete an employee permanently.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Store-assigned employee id")),
    responses(
        (status = 200, description = "Deletion acknowledgement", body = DeletionAck),
        (status = 404, description = "No employee with this id", body = crate::domain::Error)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletionAck>> {
    let id = path.into_inner();
    Ok(web::Json(crud::remove(state.employees.as_ref(), id).await?))
}
