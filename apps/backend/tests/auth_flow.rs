mod common;
mod support;

use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use backend_test_support::unique_helpers::unique_username;
use serde_json::{json, Value};
use servicebook::auth::password::hash_password;
use servicebook::{verify_token, AuthClaims};
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn register_returns_username_and_stores_digest() -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": "alice", "password": "pw1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "username": "alice" }));

    let raw = std::fs::read_to_string(ts.dir.path().join("users.json"))?;
    let stored: Value = serde_json::from_str(&raw)?;
    assert_eq!(
        stored,
        json!([{ "username": "alice", "passwordHash": hash_password("pw1") }])
    );

    Ok(())
}

#[actix_web::test]
async fn duplicate_username_is_a_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;
    let username = unique_username("dup");

    support::auth::register(&app, &username, "pw1").await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": username, "password": "other" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "USERNAME_TAKEN", StatusCode::CONFLICT, Some(&username)).await;

    // The original password still works.
    support::auth::login(&app, &username, "pw1").await;
    Ok(())
}

#[actix_web::test]
async fn login_issues_token_naming_the_user() -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;

    support::auth::register(&app, "alice", "pw1").await;
    let token = support::auth::login(&app, "alice", "pw1").await;

    assert_eq!(token.split('.').count(), 3);
    let claims = verify_token(&token, SystemTime::now(), &ts.security)?;
    let auth = AuthClaims::from_claims(&claims).expect("username claim present");
    assert_eq!(auth.username, "alice");
    assert!(auth.exp > auth.iat);
    Ok(())
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_look_the_same() -> Result<(), Box<dyn std::error::Error>>
{
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;
    support::auth::register(&app, "alice", "pw1").await;

    let wrong = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": "alice", "password": "pw2" }))
        .to_request();
    let wrong = assert_problem_details(
        test::call_service(&app, wrong).await,
        "INVALID_CREDENTIALS",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    let unknown = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": "bob", "password": "pw1" }))
        .to_request();
    let unknown = assert_problem_details(
        test::call_service(&app, unknown).await,
        "INVALID_CREDENTIALS",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    assert_eq!(wrong.detail, unknown.detail);
    Ok(())
}

#[actix_web::test]
async fn missing_fields_are_validation_errors() -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;

    for body in [json!({ "username": "alice" }), json!({ "password": "pw" })] {
        let req = test::TestRequest::post().uri("/register").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, None).await;
    }

    assert!(!ts.dir.path().join("users.json").exists());
    Ok(())
}

#[actix_web::test]
async fn blank_login_fields_are_plain_credential_failures(
) -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;
    support::auth::register(&app, "alice", "pw1").await;

    for body in [
        json!({ "username": "", "password": "pw1" }),
        json!({ "username": "alice", "password": "" }),
        json!({ "username": "alice" }),
        json!({}),
    ] {
        let req = test::TestRequest::post().uri("/login").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            "INVALID_CREDENTIALS",
            StatusCode::UNAUTHORIZED,
            Some("Invalid username or password"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let ts = build_test_state()?;
    let app = create_test_app(ts.state.clone()).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("Invalid JSON"))
        .await;
    Ok(())
}
