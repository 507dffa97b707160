mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use lottery_backend::database::DEFAULT_SYSTEM_CONFIG_ID;

macro_rules! init_app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(App::new().configure(move |cfg| state.configure(cfg))).await
    }};
}

#[actix_web::test]
async fn spring_draw_yields_record_for_config() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/configs")
        .set_json(json!({
            "title": "Spring Draw",
            "prizes": [
                {"code": "P1", "name": "Gift Card", "probability": 0.2},
                {"code": "P2", "name": "Mug", "probability": 0.8}
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["data"].get("isSystem").is_none());
    let config_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/configs/{config_id}/draw"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let record = &body["data"];
    assert_eq!(record["configId"], config_id.as_str());
    let code = record["prize"]["code"].as_str().unwrap();
    assert!(code == "P1" || code == "P2");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/records?config_id={config_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["id"], record["id"]);
}

#[actix_web::test]
async fn duplicate_prize_codes_are_rejected() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/configs")
        .set_json(json!({
            "title": "Broken",
            "prizes": [
                {"code": "P1", "name": "A", "probability": 1.0},
                {"code": "P1", "name": "B", "probability": 1.0}
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn system_config_cannot_be_deleted() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/configs/{DEFAULT_SYSTEM_CONFIG_ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/v1/configs")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["id"], DEFAULT_SYSTEM_CONFIG_ID);
    assert_eq!(body["data"][0]["isSystem"], true);
}

#[actix_web::test]
async fn display_prizes_sorted_by_probability() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/configs/{DEFAULT_SYSTEM_CONFIG_ID}/prizes?order=probability"
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let prizes = body["data"].as_array().unwrap();
    assert_eq!(prizes[0]["code"], "P4");
    assert_eq!(prizes[0]["originalIndex"], 3);
}

#[actix_web::test]
async fn feedback_ids_are_sequential() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    for (expected_id, content) in [(1, "Love it"), (2, "More prizes please")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/feedback")
            .set_json(json!({ "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], expected_id);
    }

    let req = test::TestRequest::delete()
        .uri("/api/v1/feedback/99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn export_without_directory_capability_is_unavailable() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/export")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CAPABILITY_UNAVAILABLE");
}

#[actix_web::test]
async fn export_and_import_through_local_directory() {
    let root = tempfile::tempdir().unwrap();
    let state = common::test_state(Some(root.path())).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/configs/{DEFAULT_SYSTEM_CONFIG_ID}/draw"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/export")
        .set_json(json!({ "startIn": "downloads", "fileName": "history.json" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["records"], 1);
    assert!(root.path().join("Downloads").join("history.json").is_file());

    let target = common::test_state(Some(root.path())).await;
    let target_app = init_app!(target);
    let req = test::TestRequest::get()
        .uri("/api/v1/import/files?startIn=downloads")
        .to_request();
    let body: Value = test::call_and_read_body_json(&target_app, req).await;
    assert_eq!(body["data"]["files"], json!(["history.json"]));

    let req = test::TestRequest::post()
        .uri("/api/v1/import")
        .set_json(json!({ "startIn": "downloads", "fileName": "history.json" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&target_app, req).await;
    assert_eq!(body["data"]["recordsAdded"], 1);
    assert_eq!(body["data"]["configsSkipped"], 1);

    let req = test::TestRequest::get().uri("/api/v1/records").to_request();
    let body: Value = test::call_and_read_body_json(&target_app, req).await;
    assert_eq!(body["data"]["total"], 1);
}

#[actix_web::test]
async fn malformed_import_file_is_a_client_error() {
    let root = tempfile::tempdir().unwrap();
    let documents = root.path().join("Documents");
    std::fs::create_dir_all(&documents).unwrap();
    std::fs::write(documents.join("broken.json"), "{not json").unwrap();

    let state = common::test_state(Some(root.path())).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/import")
        .set_json(json!({ "fileName": "broken.json" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("broken.json")
    );
}

#[actix_web::test]
async fn draw_succeeds_with_very_large_weights() {
    let state = common::test_state(None).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/configs")
        .set_json(json!({
            "title": "Huge",
            "prizes": [
                {"code": "A", "name": "Alpha", "probability": f64::MAX},
                {"code": "B", "name": "Beta", "probability": f64::MAX}
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let config_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/configs/{config_id}/draw"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
