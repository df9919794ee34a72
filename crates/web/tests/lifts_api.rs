//! End-to-end tests for the lift endpoints, driven through the full router.

mod common;

use axum::http::{Method, StatusCode};
use common::{ADMIN_ID, OWNER_ID, STRANGER_ID, body_json, build_test_app, send, token_for};
use serde_json::json;

fn new_lift(carservice_id: i32, owner_id: i32) -> serde_json::Value {
    json!({
        "carservice_id": carservice_id,
        "owner_id": owner_id,
        "name": "Bay 1",
        "description": "Two-post lift"
    })
}

#[tokio::test]
async fn list_for_empty_carservice_returns_empty_array() {
    let (app, _) = build_test_app();
    let token = token_for(OWNER_ID, false);

    let response = send(&app, Method::GET, "/api/lifts/42", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let (app, _) = build_test_app();

    let response = send(&app, Method::GET, "/api/lifts/1", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["detail"],
        "Could not validate credentials"
    );

    let response = send(
        &app,
        Method::POST,
        "/api/lifts",
        Some("not-a-jwt"),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_list_includes_new_lift() {
    let (app, _) = build_test_app();
    let token = token_for(OWNER_ID, false);

    let response = send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&token),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["carservice_id"], 1);
    assert_eq!(created["owner_id"], OWNER_ID);
    assert_eq!(created["name"], "Bay 1");
    assert_eq!(created["description"], "Two-post lift");

    let response = send(&app, Method::GET, "/api/lifts/1", Some(&token), None).await;
    assert_eq!(body_json(response).await, json!([created]));

    let response = send(&app, Method::GET, "/api/lifts/2", Some(&token), None).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_with_invalid_fields_is_rejected() {
    let (app, store) = build_test_app();
    let token = token_for(OWNER_ID, false);

    let response = send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&token),
        Some(json!({ "carservice_id": 1, "owner_id": OWNER_ID, "name": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Validation failed");

    let response = send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&token),
        Some(json!({ "name": "Bay 1" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_accepts_trailing_slash() {
    let (app, store) = build_test_app();
    let token = token_for(OWNER_ID, false);

    let response = send(
        &app,
        Method::POST,
        "/api/lifts/",
        Some(&token),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn non_numeric_id_is_rejected_with_detail() {
    let (app, _) = build_test_app();
    let token = token_for(ADMIN_ID, true);

    for method in [Method::GET, Method::DELETE] {
        let response = send(&app, method, "/api/lifts/abc", Some(&token), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }
}

#[tokio::test]
async fn update_by_superuser_overwrites_provided_fields() {
    let (app, _) = build_test_app();
    let owner = token_for(OWNER_ID, false);
    let admin = token_for(ADMIN_ID, true);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(
        &app,
        Method::PUT,
        "/api/lifts/1",
        Some(&admin),
        Some(json!({ "name": "Bay 9", "carservice_id": 2 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Bay 9");
    assert_eq!(updated["carservice_id"], 2);
    assert_eq!(updated["owner_id"], OWNER_ID);
    assert_eq!(updated["description"], "Two-post lift");

    let response = send(&app, Method::GET, "/api/lifts/2", Some(&owner), None).await;
    assert_eq!(body_json(response).await, json!([updated]));

    let response = send(&app, Method::GET, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn update_with_null_description_clears_it() {
    let (app, _) = build_test_app();
    let owner = token_for(OWNER_ID, false);
    let admin = token_for(ADMIN_ID, true);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(
        &app,
        Method::PUT,
        "/api/lifts/1",
        Some(&admin),
        Some(json!({ "description": null })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], serde_json::Value::Null);
    assert_eq!(updated["name"], "Bay 1");

    let response = send(&app, Method::GET, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(body_json(response).await, json!([updated]));
}

#[tokio::test]
async fn update_by_regular_user_is_forbidden() {
    let (app, store) = build_test_app();
    let owner = token_for(OWNER_ID, false);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(
        &app,
        Method::PUT,
        "/api/lifts/1",
        Some(&owner),
        Some(json!({ "name": "Mine now" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["detail"],
        "The user doesn't have enough privileges"
    );

    let lift = storage::store::LiftStore::find_by_id(store.as_ref(), 1)
        .await
        .unwrap();
    assert_eq!(lift.name, "Bay 1");
}

#[tokio::test]
async fn update_of_unknown_lift_is_not_found() {
    let (app, _) = build_test_app();
    let admin = token_for(ADMIN_ID, true);

    let response = send(
        &app,
        Method::PUT,
        "/api/lifts/99",
        Some(&admin),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Booking not found");
}

#[tokio::test]
async fn delete_of_unknown_lift_is_not_found() {
    let (app, store) = build_test_app();
    let owner = token_for(OWNER_ID, false);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(&app, Method::DELETE, "/api/lifts/99", Some(&owner), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Booking not found");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn delete_by_stranger_is_forbidden() {
    let (app, store) = build_test_app();
    let owner = token_for(OWNER_ID, false);
    let stranger = token_for(STRANGER_ID, false);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(&app, Method::DELETE, "/api/lifts/1", Some(&stranger), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["detail"], "Not enough permissions");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn delete_by_superuser_removes_any_lift() {
    let (app, store) = build_test_app();
    let owner = token_for(OWNER_ID, false);
    let admin = token_for(ADMIN_ID, true);

    send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;

    let response = send(&app, Method::DELETE, "/api/lifts/1", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn owner_lifecycle_create_list_delete() {
    let (app, _) = build_test_app();
    let owner = token_for(OWNER_ID, false);

    let response = send(
        &app,
        Method::POST,
        "/api/lifts",
        Some(&owner),
        Some(new_lift(1, OWNER_ID)),
    )
    .await;
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);

    let response = send(&app, Method::GET, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(body_json(response).await, json!([created]));

    let response = send(&app, Method::DELETE, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Lift removed" })
    );

    let response = send(&app, Method::GET, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(body_json(response).await, json!([]));

    let response = send(&app, Method::DELETE, "/api/lifts/1", Some(&owner), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
