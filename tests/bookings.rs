mod common;

use cityease::models::{Booking, BookingStatus};
use cityease::services::jwt::Claims;
use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
use serde_json::json;
use sqlx::PgPool;

use common::{
    TEST_JWT_SECRET, error_message, get_token, post_booking, register_user, sample_booking,
    spawn_app,
};

async fn list(client: &reqwest::Client, address: &str, token: &str) -> Vec<Booking> {
    let response = client
        .get(format!("{address}/api/bookings"))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("Failed to parse bookings")
}

#[sqlx::test]
async fn test_register_login_book_and_list(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let registered = register_user(&client, &address, "flow@example.com", "flow-pass").await;

    let response = client
        .post(format!("{address}/api/auth/login"))
        .json(&json!({ "email": "flow@example.com", "password": "flow-pass" }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let login: serde_json::Value = response.json().await.expect("Failed to parse login");
    let token = login["token"].as_str().expect("token").to_string();

    let response = post_booking(&client, &address, &token, &sample_booking()).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let created: Booking = response.json().await.expect("Failed to parse booking");

    assert_eq!(created.user_id, registered.user.id);
    assert_eq!(created.service, "Cleaning");
    assert_eq!(created.sub_service, "Deep Cleaning");
    assert_eq!(created.professional, "Priya");
    assert_eq!(created.address, "12 MG Road, Bengaluru");
    assert_eq!(created.datetime, "2026-11-02 10:00");
    assert_eq!(created.notes, "Ring the bell twice");
    assert_eq!(created.status, BookingStatus::Pending);

    let bookings = list(&client, &address, &token).await;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, created.id);
    assert_eq!(bookings[0].status, BookingStatus::Pending);
}

#[sqlx::test]
async fn test_booking_wire_format(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_token(&client, &address, "wire@example.com").await;

    let response = post_booking(
        &client,
        &address,
        &token,
        &json!({ "service": "Plumbing", "address": "1 Lake View", "datetime": "tomorrow" }),
    )
    .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["sub_service"], "");
    assert_eq!(body["professional"], "");
    assert_eq!(body["notes"], "");
    assert!(body["user_id"].is_string());
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_create_booking_missing_fields(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_token(&client, &address, "missing@example.com").await;

    for field in ["service", "address", "datetime"] {
        let mut body = sample_booking();
        body.as_object_mut().unwrap().remove(field);

        let response = post_booking(&client, &address, &token, &body).await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::BAD_REQUEST,
            "Failed for missing {field}",
        );
        assert_eq!(error_message(response).await, "Missing required fields");
    }

    let mut body = sample_booking();
    body["address"] = json!("");
    let response = post_booking(&client, &address, &token, &body).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    assert!(list(&client, &address, &token).await.is_empty());
}

#[sqlx::test]
async fn test_bookings_are_scoped_to_owner(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token_a = get_token(&client, &address, "alice@example.com").await;
    let token_b = get_token(&client, &address, "bob@example.com").await;

    let response = post_booking(&client, &address, &token_a, &sample_booking()).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let created: Booking = response.json().await.expect("Failed to parse booking");

    let bookings_b = list(&client, &address, &token_b).await;
    assert!(bookings_b.iter().all(|b| b.id != created.id));
    assert!(bookings_b.is_empty());

    let bookings_a = list(&client, &address, &token_a).await;
    assert_eq!(bookings_a.len(), 1);
}

#[sqlx::test]
async fn test_list_bookings_newest_first(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_token(&client, &address, "order@example.com").await;

    for service in ["Cleaning", "Plumbing", "Gardening"] {
        let mut body = sample_booking();
        body["service"] = json!(service);
        let response = post_booking(&client, &address, &token, &body).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    let bookings = list(&client, &address, &token).await;
    let services: Vec<&str> = bookings.iter().map(|b| b.service.as_str()).collect();
    assert_eq!(services, vec!["Gardening", "Plumbing", "Cleaning"]);
}

#[sqlx::test]
async fn test_protected_routes_require_token(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/bookings"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(response).await, "Missing token");

    let response = client
        .post(format!("{address}/api/bookings"))
        .json(&sample_booking())
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);

    let response = client
        .get(format!("{address}/api/bookings"))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_protected_routes_reject_invalid_token(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/bookings"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(response).await, "Invalid token");

    // Signed with a different secret
    let now = get_current_timestamp();
    let forged = encode(
        &Header::default(),
        &Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "forged@example.com".to_string(),
            exp: now + 3600,
            iat: now,
        },
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = client
        .get(format!("{address}/api/bookings"))
        .bearer_auth(forged)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_protected_routes_reject_expired_token(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let registered = register_user(&client, &address, "expired@example.com", "pw-expired").await;

    let now = get_current_timestamp();
    let expired = encode(
        &Header::default(),
        &Claims {
            sub: registered.user.id.to_string(),
            email: registered.user.email.clone(),
            exp: now - 3600,
            iat: now - 7200,
        },
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = client
        .get(format!("{address}/api/bookings"))
        .bearer_auth(expired)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[sqlx::test]
async fn test_protected_routes_reject_recently_expired_token(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let registered = register_user(&client, &address, "late@example.com", "pw-late").await;

    let now = get_current_timestamp();
    let expired = encode(
        &Header::default(),
        &Claims {
            sub: registered.user.id.to_string(),
            email: registered.user.email.clone(),
            exp: now - 5,
            iat: now - 3600,
        },
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = client
        .get(format!("{address}/api/bookings"))
        .bearer_auth(expired)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[test]
fn test_booking_status_display_matches_wire_name() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        let wire = serde_json::to_value(status).unwrap();
        assert_eq!(wire, status.to_string());
    }
}
