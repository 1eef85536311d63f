//! HTTP-level integration tests for adoption requests: creation rules,
//! visibility, and the approve/reject status transition.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, patch_json_auth, post_json_auth, put_json_auth};
use pawhome_core::roles::{ROLE_ADMIN, ROLE_USER};
use pawhome_core::types::DbId;
use sqlx::PgPool;

fn application_body(dog_id: DbId) -> serde_json::Value {
    serde_json::json!({
        "dog_id": dog_id,
        "message": "We would love to adopt him",
        "full_name": "Jane Applicant",
        "email": "jane@test.com",
        "phone": "555-0100",
        "address": "12 Kennel Lane",
        "occupation": "Veterinarian",
        "household_members": 3,
        "has_other_pets": true,
        "pet_experience": "Grew up with dogs",
    })
}

/// Filing an application for an available dog returns 201 with status PENDING.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let token = common::token_for(&user);
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &token,
        application_body(dog.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["dog_id"], dog.id);
    assert_eq!(json["user_id"], user.id);
    assert_eq!(json["full_name"], "Jane Applicant");
}

/// An unavailable dog cannot be applied for.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_unavailable_dog(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let token = common::token_for(&user);
    let dog = common::create_dog(&pool, "Bella", "Labrador", false).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &token,
        application_body(dog.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An unknown dog id is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_unknown_dog(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let token = common::token_for(&user);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &token,
        application_body(9999),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Missing applicant details fail validation with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_missing_details(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let token = common::token_for(&user);
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;
    let app = common::build_test_app(pool);

    let mut body = application_body(dog.id);
    body["full_name"] = serde_json::Value::String(String::new());
    let response = post_json_auth(app, "/api/v1/adoption-requests", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Approving a request flips the dog's `available` flag to false.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_flips_dog_availability(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let admin = common::create_user(&pool, "admin", ROLE_ADMIN).await;
    let user_token = common::token_for(&user);
    let admin_token = common::token_for(&admin);
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &user_token,
        application_body(dog.id),
    )
    .await;
    let created = body_json(response).await;
    let request_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/adoption-requests/{request_id}/status"),
        &admin_token,
        serde_json::json!({ "status": "APPROVED" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "APPROVED");
    assert_eq!(json["dog_name"], "Max");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/dogs/{}", dog.id)).await;
    let dog_json = body_json(response).await;
    assert_eq!(
        dog_json["available"], false,
        "approval must take the dog off the market"
    );
}

/// Rejecting a request leaves the dog available.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reject_keeps_dog_available(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let admin = common::create_user(&pool, "admin", ROLE_ADMIN).await;
    let user_token = common::token_for(&user);
    let admin_token = common::token_for(&admin);
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &user_token,
        application_body(dog.id),
    )
    .await;
    let created = body_json(response).await;
    let request_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/adoption-requests/{request_id}"),
        &admin_token,
        serde_json::json!({ "status": "REJECTED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/dogs/{}", dog.id)).await;
    let dog_json = body_json(response).await;
    assert_eq!(dog_json["available"], true);
}

/// Status updates are admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_update_requires_admin(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let token = common::token_for(&user);
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &token,
        application_body(dog.id),
    )
    .await;
    let created = body_json(response).await;
    let request_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/adoption-requests/{request_id}"),
        &token,
        serde_json::json!({ "status": "APPROVED" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// `my-requests` lists only the caller's applications; the admin listing
/// sees everything with dog and applicant summaries.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_visibility(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", ROLE_USER).await;
    let bob = common::create_user(&pool, "bob", ROLE_USER).await;
    let admin = common::create_user(&pool, "admin", ROLE_ADMIN).await;
    let dog_a = common::create_dog(&pool, "Max", "Golden Retriever", true).await;
    let dog_b = common::create_dog(&pool, "Bella", "Labrador", true).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &common::token_for(&alice),
        application_body(dog_a.id),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &common::token_for(&bob),
        application_body(dog_b.id),
    )
    .await;

    // Alice sees only her own.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        "/api/v1/adoption-requests/my-requests",
        &common::token_for(&alice),
    )
    .await;
    let json = body_json(response).await;
    let requests = json.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["username"], "alice");
    assert_eq!(requests[0]["dog_name"], "Max");

    // The admin listing sees both.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/adoption-requests",
        &common::token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

/// A user cannot fetch another user's application by id; an admin can.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_by_id_authorization(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", ROLE_USER).await;
    let bob = common::create_user(&pool, "bob", ROLE_USER).await;
    let admin = common::create_user(&pool, "admin", ROLE_ADMIN).await;
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &common::token_for(&alice),
        application_body(dog.id),
    )
    .await;
    let created = body_json(response).await;
    let request_id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/adoption-requests/{request_id}");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &uri, &common::token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &uri, &common::token_for(&bob)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Deleting an application is admin-only and returns 204.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_request(pool: PgPool) {
    let user = common::create_user(&pool, "applicant", ROLE_USER).await;
    let admin = common::create_user(&pool, "admin", ROLE_ADMIN).await;
    let dog = common::create_dog(&pool, "Max", "Golden Retriever", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/adoption-requests",
        &common::token_for(&user),
        application_body(dog.id),
    )
    .await;
    let created = body_json(response).await;
    let request_id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/adoption-requests/{request_id}");

    let app = common::build_test_app(pool.clone());
    let response = common::delete_auth(app, &uri, &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
