//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API,
//! registering every HTTP path from the inbound layer together with the
//! request and response schemas.

use utoipa::OpenApi;

use crate::domain::{Employee, Error, ErrorCode, Item, LocalItem};
use crate::inbound::http::crud::DeletionAck;
use crate::inbound::http::employees::EmployeePayload;
use crate::inbound::http::items::ItemPayload;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee and item CRUD API",
        description = "CRUD over persisted employees and items plus an ephemeral local-item list."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::local_items::list_local_items,
        crate::inbound::http::local_items::get_local_item,
        crate::inbound::http::local_items::create_local_item,
        crate::inbound::http::local_items::update_local_item,
        crate::inbound::http::local_items::delete_local_item,
    ),
    components(schemas(
        Employee,
        EmployeePayload,
        Item,
        ItemPayload,
        LocalItem,
        DeletionAck,
        Error,
        ErrorCode
    )),
    tags(
        (name = "employees", description = "CRUD over persisted employees"),
        (name = "items", description = "CRUD over persisted items"),
        (name = "local-items", description = "Ephemeral in-memory scratch list"),
        (name = "health", description = "Reachability and health probes")
    )
)]
pub struct ApiDoc;
