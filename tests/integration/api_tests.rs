//! API integration tests
//!
//! These run against a live server on a fresh (empty) store:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api/v1";

async fn create_book(client: &Client, title: &str, copies: i64) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Test Author",
            "isbn": "978-0-00-000000-0",
            "copies": copies
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["book"]["id"].as_i64().expect("No book ID")
}

async fn register_borrower(client: &Client, name: &str, email: &str) -> i64 {
    let response = client
        .post(format!("{}/borrowers", BASE_URL))
        .json(&json!({ "name": name, "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["borrower"]["id"].as_i64().expect("No borrower ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"].is_array());
    assert!(body["total"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_book() {
    let client = Client::new();
    let book_id = create_book(&client, "Delete Me", 1).await;

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_book_requires_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "No Author" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_borrower_email() {
    let client = Client::new();
    register_borrower(&client, "Carol", "carol@example.org").await;

    let response = client
        .post(format!("{}/borrowers", BASE_URL))
        .json(&json!({ "name": "Carol Again", "email": "carol@example.org" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_flow() {
    let client = Client::new();
    let book_id = create_book(&client, "Borrow Flow", 2).await;
    let borrower_id = register_borrower(&client, "Dave", "dave@example.org").await;

    // Borrow
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "bookId": book_id,
            "borrowerId": borrower_id,
            "daysToReturn": 7
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let record = &body["borrowRecord"];
    let loan_id = record["id"].as_i64().expect("No loan ID");
    assert_eq!(record["returned"], false);
    assert_eq!(record["bookTitle"], "Borrow Flow");

    // Book availability dropped
    let body: Value = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["book"]["availableCopies"], 1);

    // Return
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["borrowRecord"]["returned"], true);

    // A second return must fail
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_overdue_listing() {
    let client = Client::new();
    let book_id = create_book(&client, "Late Book", 1).await;
    let borrower_id = register_borrower(&client, "Eve", "eve@example.org").await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "bookId": book_id,
            "borrowerId": borrower_id,
            "daysToReturn": -1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = client
        .get(format!("{}/loans/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["total"].as_i64().unwrap_or(0) >= 1);
    assert!(body["overdueBooks"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"]["total"].is_number());
    assert!(body["borrowers"]["total"].is_number());
    assert!(body["loans"]["active"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_categories() {
    let client = Client::new();

    let response = client
        .get(format!("{}/categories", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["categories"].is_array());
}
