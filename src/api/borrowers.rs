//! Borrower (registry) endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::borrower::{Borrower, RegisterBorrower},
};

/// Borrower list response
#[derive(Serialize, ToSchema)]
pub struct BorrowerListResponse {
    /// Borrowers in registration order
    pub borrowers: Vec<Borrower>,
    pub total: i64,
}

/// Registration response
#[derive(Serialize, ToSchema)]
pub struct BorrowerResponse {
    /// Status message
    pub message: String,
    pub borrower: Borrower,
}

/// List all registered borrowers
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "List of borrowers", body = BorrowerListResponse)
    )
)]
pub async fn list_borrowers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BorrowerListResponse>> {
    let (borrowers, total) = state.services.borrowers.list_borrowers().await?;
    Ok(Json(BorrowerListResponse { borrowers, total }))
}

/// Register a new borrower
#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = RegisterBorrower,
    responses(
        (status = 201, description = "Borrower registered", body = BorrowerResponse),
        (status = 400, description = "Missing name or email"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_borrower(
    State(state): State<crate::AppState>,
    Json(payload): Json<RegisterBorrower>,
) -> AppResult<(StatusCode, Json<BorrowerResponse>)> {
    payload.validate()?;

    let borrower = state.services.borrowers.register(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(BorrowerResponse {
            message: "Borrower registered successfully".to_string(),
            borrower,
        }),
    ))
}
