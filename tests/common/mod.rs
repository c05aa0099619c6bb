#![allow(dead_code)]

use std::sync::{Arc, Once};

use cityease::models::Catalog;
use cityease::services::auth::AuthResponse;
use cityease::services::payment::StubPayment;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::PgPool;
use tokio::net::TcpListener;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("cityease=debug")
            .with_test_writer()
            .init();
    });
}

pub fn test_catalog() -> Catalog {
    Catalog::load(
        "tests/data/services.test.json",
        "tests/data/professionals.test.json",
    )
    .expect("Failed to load test catalog")
}

/// Spawns the application and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(test_db_pool: PgPool) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = cityease::app_with_services(
            test_db_pool,
            &SecretString::from(TEST_JWT_SECRET),
            test_catalog(),
            Arc::new(StubPayment),
        );
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/api/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Registers a user and returns the parsed response.
pub async fn register_user(
    client: &reqwest::Client,
    address: &str,
    email: &str,
    password: &str,
) -> AuthResponse {
    let response = client
        .post(format!("{address}/api/auth/register"))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": password,
            "phone": "5550100"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    response.json().await.expect("Failed to parse response")
}

/// Helper function to register a user and return its token
pub async fn get_token(client: &reqwest::Client, address: &str, email: &str) -> String {
    register_user(client, address, email, "correct-horse-battery")
        .await
        .token
}

pub fn sample_booking() -> Value {
    json!({
        "service": "Cleaning",
        "subService": "Deep Cleaning",
        "professional": "Priya",
        "address": "12 MG Road, Bengaluru",
        "datetime": "2026-11-02 10:00",
        "notes": "Ring the bell twice"
    })
}

/// Creates a booking with `body` and returns the response.
pub async fn post_booking(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    body: &Value,
) -> reqwest::Response {
    client
        .post(format!("{address}/api/bookings"))
        .bearer_auth(token)
        .json(body)
        .send()
        .await
        .expect("Failed to execute request")
}

/// Reads the `error` field from a JSON error response.
pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Failed to parse error body");
    body["error"]
        .as_str()
        .expect("Error body should contain `error`")
        .to_string()
}
