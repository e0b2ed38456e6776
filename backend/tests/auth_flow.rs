//! End-to-end account flows over the in-memory store.

mod support;

use actix_web::http::{Method, StatusCode};
use serde_json::json;

use support::{app, json as request, send};

#[actix_web::test]
async fn signup_then_login_returns_the_same_identity() {
    let app = app().await;

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/signup",
            &json!({"email": "ada@example.com", "password": "pw", "name": "Ada"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "User created successfully");
    assert_eq!(created["name"], "Ada");
    let user_id = created["userId"].as_str().expect("user id").to_owned();
    assert_eq!(user_id.len(), 24);

    let (status, identity) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            &json!({"email": "ada@example.com", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        identity,
        json!({"userId": user_id, "name": "Ada", "email": "ada@example.com"})
    );
}

#[actix_web::test]
async fn duplicate_signup_is_rejected() {
    let app = app().await;
    let body = json!({"email": "ada@example.com", "password": "pw"});

    let (first, _) = send(&app, request(Method::POST, "/api/auth/signup", &body)).await;
    let (second, error) = send(&app, request(Method::POST, "/api/auth/signup", &body)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "User already exists");
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let app = app().await;
    send(
        &app,
        request(
            Method::POST,
            "/api/auth/signup",
            &json!({"email": "ada@example.com", "password": "pw"}),
        ),
    )
    .await;

    let (unknown_status, unknown) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            &json!({"email": "nobody@example.com", "password": "pw"}),
        ),
    )
    .await;
    let (wrong_status, wrong) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            &json!({"email": "ada@example.com", "password": "nope"}),
        ),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown["message"], "Invalid email or password");
    assert_eq!(unknown["message"], wrong["message"]);
    assert_eq!(unknown["code"], wrong["code"]);
}

#[actix_web::test]
async fn signup_without_name_uses_the_email() {
    let app = app().await;

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/signup",
            &json!({"email": "grace@example.com", "password": "pw"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "grace@example.com");
}
