//! End-to-end scenarios over the fully wired application.
//!
//! The app is assembled exactly as in production, with the in-memory
//! repositories standing in for the database-backed adapters.

use actix_web::web;
use actix_web::{http::StatusCode, test as actix_test};
use serde_json::{Value, json};

use backend::inbound::http::health::HealthState;
use backend::server::{ServerConfig, build_app, build_http_state};

fn wired_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = ServerConfig::new("127.0.0.1:0".parse().expect("valid address"));
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(build_http_state(&config));
    build_app(health_state, http_state)
}

#[actix_web::test]
async fn employee_lifecycle_round_trips() {
    let app = actix_test::init_service(wired_app()).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({"firstName": "A", "lastName": "B", "emailId": "a@b.com"}))
            .to_request(),
    )
    .await;
    let id = created["id"].as_i64().expect("generated id");

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/employees/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched["firstName"], "A");
    assert_eq!(fetched["lastName"], "B");
    assert_eq!(fetched["emailId"], "a@b.com");

    let ack: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/employees/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(ack, json!({"deleted": true}));

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/employees/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn local_item_is_stored_at_position_one_regardless_of_its_id() {
    let app = actix_test::init_service(wired_app()).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/local-items")
            .set_json(json!({"id": 5, "title": "t", "content": "c"}))
            .to_request(),
    )
    .await;
    assert_eq!(created["id"], 5);

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/local-items/1")
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn entity_and_local_item_families_are_independent() {
    let app = actix_test::init_service(wired_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/items")
            .set_json(json!({"title": "t", "content": "c"}))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());

    let local: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/local-items").to_request(),
    )
    .await;
    assert_eq!(local, json!([]));
}

#[actix_web::test]
async fn error_responses_carry_the_envelope_and_a_trace_id() {
    let app = actix_test::init_service(wired_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/employees/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get("trace-id")
        .expect("trace id header")
        .to_str()
        .expect("ascii header")
        .to_owned();

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "employee not found for id 1");
    assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
}

#[actix_web::test]
async fn ping_answers_ok() {
    let app = actix_test::init_service(wired_app()).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/ping").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert_eq!(body.as_ref(), b"ok");
}
