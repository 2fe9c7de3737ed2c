//! Item REST handlers. Same verb-to-port translation as the employee
//! resource, delegated to the generic CRUD core.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{FieldViolations, Item, ItemDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::crud::{self, DeletionAck};
use crate::inbound::http::state::HttpState;

/// Item request body for create and update.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    /// Ignored: identifiers are assigned by the store.
    pub id: Option<i32>,
    /// Short label; required, non-blank.
    pub title: Option<String>,
    /// Free-form body; required, non-blank.
    pub content: Option<String>,
}

impl TryFrom<ItemPayload> for ItemDraft {
    type Error = FieldViolations;

    fn try_from(value: ItemPayload) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content)
    }
}

/// List every item.
#[utoipa::path(
    get,
    path = "/items",
    responses((status = 200, description = "All items", body = [Item])),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Item>>> {
    Ok(web::Json(crud::list_all(state.items.as_ref()).await?))
}

/// Fetch one item by id.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Store-assigned item id")),
    responses(
        (status = 200, description = "Item", body = Item),
        (status = 404, description = "No item with this id", body = crate::domain::Error)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Item>> {
    let id = path.into_inner();
    Ok(web::Json(crud::fetch(state.items.as_ref(), id).await?))
}

/// Create an item; the store assigns the id.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Stored item including its id", body = Item),
        (status = 400, description = "Validation failure listing violated fields", body = crate::domain::Error)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<web::Json<Item>> {
    let draft = ItemDraft::try_from(payload.into_inner()).map_err(crud::map_field_violations)?;
    Ok(web::Json(crud::create(state.items.as_ref(), draft).await?))
}

/// Overwrite title and content of an existing item; the id never changes.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Store-assigned item id")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Validation failure listing violated fields", body = crate::domain::Error),
        (status = 404, description = "No item with this id", body = crate::domain::Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<web::Json<Item>> {
    let draft = ItemDraft::try_from(payload.into_inner()).map_err(crud::map_field_violations)?;
    let id = path.into_inner();
    Ok(web::Json(crud::update(state.items.as_ref(), id, draft).await?))
}

/// Delete an item permanently.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Store-assigned item id")),
    responses(
        (status = 200, description = "Deletion acknowledgement", body = DeletionAck),
        (status = 404, description = "No item with this id", body = crate::domain::Error)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletionAck>> {
    let id = path.into_inner();
    Ok(web::Json(crud::remove(state.items.as_ref(), id).await?))
}
