//! Local-item REST handlers over the shared in-memory sequence.
//!
//! These routes address elements by 1-based position, not by the stored
//! `id` field, and they preserve two quirks of the deployed contract:
//! PUT appends a fresh element instead of replacing one, and DELETE always
//! removes the head of the sequence whatever id the path carries.

use actix_web::{delete, get, post, put, web};
use serde_json::json;

use crate::domain::{Error, LocalItem, PositionOutOfRange};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn map_position_error(error: PositionOutOfRange) -> Error {
    Error::not_found(error.to_string()).with_details(json!({
        "position": error.position,
        "length": error.length,
    }))
}

/// List the local items in insertion order.
#[utoipa::path(
    get,
    path = "/local-items",
    responses((status = 200, description = "All local items", body = [LocalItem])),
    tags = ["local-items"],
    operation_id = "listLocalItems"
)]
#[get("/local-items")]
pub async fn list_local_items(state: web::Data<HttpState>) -> web::Json<Vec<LocalItem>> {
    web::Json(state.local_items.list())
}

/// Fetch the local item at 1-based position `id`. The path segment is a
/// position, not the stored `id` field.
#[utoipa::path(
    get,
    path = "/local-items/{id}",
    params(("id" = i32, Path, description = "1-based position in the sequence")),
    responses(
        (status = 200, description = "Local item at this position", body = LocalItem),
        (status = 404, description = "Position out of range", body = crate::domain::Error)
    ),
    tags = ["local-items"],
    operation_id = "getLocalItem"
)]
#[get("/local-items/{id}")]
pub async fn get_local_item(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<LocalItem>> {
    let position = path.into_inner();
    state
        .local_items
        .at_position(position)
        .map(web::Json)
        .map_err(map_position_error)
}

/// Append a local item. Always succeeds; the client-supplied id is stored
/// verbatim, collisions included.
#[utoipa::path(
    post,
    path = "/local-items",
    request_body = LocalItem,
    responses((status = 200, description = "Appended local item", body = LocalItem)),
    tags = ["local-items"],
    operation_id = "createLocalItem"
)]
#[post("/local-items")]
pub async fn create_local_item(
    state: web::Data<HttpState>,
    payload: web::Json<LocalItem>,
) -> web::Json<LocalItem> {
    web::Json(state.local_items.append(payload.into_inner()))
}

/// "Update" a local item. The deployed contract appends a fresh element
/// and never replaces one in place; the path id plays no part. The
/// sequence grows by one on every call.
#[utoipa::path(
    put,
    path = "/local-items/{id}",
    params(("id" = i32, Path, description = "Unused; kept for route compatibility")),
    request_body = LocalItem,
    responses((status = 200, description = "Appended local item", body = LocalItem)),
    tags = ["local-items"],
    operation_id = "updateLocalItem"
)]
#[put("/local-items/{id}")]
pub async fn update_local_item(
    state: web::Data<HttpState>,
    _requested_id: web::Path<i32>,
    payload: web::Json<LocalItem>,
) -> web::Json<LocalItem> {
    web::Json(state.local_items.append(payload.into_inner()))
}

/// Delete a local item. The deployed contract removes the head of the
/// sequence regardless of the requested id and returns what remains.
#[utoipa::path(
    delete,
    path = "/local-items/{id}",
    params(("id" = i32, Path, description = "Unused; the head is always removed")),
    responses(
        (status = 200, description = "Remaining local items", body = [LocalItem]),
        (status = 404, description = "The sequence is empty", body = crate::domain::Error)
    ),
    tags = ["local-items"],
    operation_id = "deleteLocalItem"
)]
#[delete("/local-items/{id}")]
pub async fn delete_local_item(
    state: web::Data<HttpState>,
    _requested_id: web::Path<i32>,
) -> ApiResult<web::Json<Vec<LocalItem>>> {
    state
        .local_items
        .remove_front()
        .map(web::Json)
        .map_err(map_position_error)
}
