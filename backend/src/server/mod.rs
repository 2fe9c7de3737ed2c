//! Server construction and wiring of ports to adapters.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use crate::inbound::http::employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
use crate::inbound::http::health::{HealthState, live, ping, ready};
use crate::inbound::http::items::{create_item, delete_item, get_item, list_items, update_item};
use crate::inbound::http::local_items::{
    create_local_item, delete_local_item, get_local_item, list_local_items, update_local_item,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::MemoryEntityRepository;
use crate::outbound::persistence::{DieselEmployeeRepository, DieselItemRepository};

/// Build the HTTP port bundle from configuration.
///
/// Uses the database-backed adapters when a pool is configured and falls
/// back to in-memory repositories otherwise.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselEmployeeRepository::new(pool.clone())),
            Arc::new(DieselItemRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database pool configured; using in-memory repositories");
            HttpState::new(
                Arc::new(MemoryEntityRepository::<crate::domain::Employee>::new()),
                Arc::new(MemoryEntityRepository::<crate::domain::Item>::new()),
            )
        }
    }
}

/// Assemble the application with every route and middleware attached.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ping)
        .service(ready)
        .service(live)
        .service(list_employees)
        .service(get_employee)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee)
        .service(list_items)
        .service(get_item)
        .service(create_item)
        .service(update_item)
        .service(delete_item)
        .service(list_local_items)
        .service(get_local_item)
        .service(create_local_item)
        .service(update_local_item)
        .service(delete_local_item)
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn built_app_serves_every_resource_family() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("valid address"));
        let health_state = web::Data::new(HealthState::new());
        let http_state = web::Data::new(build_http_state(&config));
        let app = actix_test::init_service(build_app(health_state, http_state)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/ping").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/employees")
                .set_json(json!({"firstName": "A", "lastName": "B", "emailId": "a@b.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("trace-id"));

        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/items").to_request(),
        )
        .await;
        assert_eq!(listed, json!([]));

        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/local-items")
                .to_request(),
        )
        .await;
        assert_eq!(listed, json!([]));
    }
}
