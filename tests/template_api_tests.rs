use std::sync::Arc;

use actix_web::{test, web, App};
use pdf_template_server::storage::FileStorage;
use pdf_template_server::template::handlers;
use pdf_template_server::template::models::Template;
use pdf_template_server::{AppState, ErrorResponse};
use serde_json::json;

async fn test_state(dir: &tempfile::TempDir) -> web::Data<AppState> {
    let storage = Arc::new(FileStorage::new(dir.path()));
    web::Data::new(AppState::new(storage).await)
}

#[actix_web::test]
async fn test_save_template_returns_created() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(handlers::config),
    )
    .await;

    let payload = json!({
        "name": "Invoice",
        "Header": [
            { "key": "Invoice Number", "mapping_field": "billDetail.invoice_number",
              "default_value": "INV-0000", "alignment": "Left" }
        ],
        "Body": [],
        "Footer": []
    });

    let req = test::TestRequest::post()
        .uri("/templates")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let stored: Template = test::read_body_json(resp).await;
    assert_eq!(stored.name, "Invoice");
    assert_eq!(stored.sections.header.len(), 1);
}

#[actix_web::test]
async fn test_save_template_with_blank_name_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/templates")
        .set_json(json!({ "name": "", "Header": [], "Body": [], "Footer": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "BadRequest");
    assert!(body.message.contains("name"));
}

#[actix_web::test]
async fn test_saving_same_name_twice_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(handlers::config),
    )
    .await;

    for body_fields in [0, 2] {
        let fields: Vec<serde_json::Value> = (0..body_fields)
            .map(|i| json!({ "key": format!("Field {}", i), "default_value": "x" }))
            .collect();
        let req = test::TestRequest::post()
            .uri("/templates")
            .set_json(json!({ "name": "Invoice", "Body": fields }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get().uri("/templates").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let all: Vec<Template> = test::read_body_json(resp).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].sections.body.len(), 2);
}

#[actix_web::test]
async fn test_list_templates_initially_empty() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/templates").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let all: Vec<Template> = test::read_body_json(resp).await;
    assert!(all.is_empty());
}
