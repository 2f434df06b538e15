//! Loan (borrow/return) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{BorrowRecord, CreateLoan},
};

/// Borrow/return response with the affected record
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowResponse {
    /// Status message
    pub message: String,
    pub borrow_record: BorrowRecord,
}

/// Active loans response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLoansResponse {
    pub borrowed_books: Vec<BorrowRecord>,
    pub total: i64,
}

/// Overdue loans response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverdueLoansResponse {
    pub overdue_books: Vec<BorrowRecord>,
    pub total: i64,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Book borrowed", body = BorrowResponse),
        (status = 400, description = "Missing book or borrower ID"),
        (status = 404, description = "Book or borrower not found"),
        (status = 409, description = "No copies available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    let record = state.services.loans.borrow(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse {
            message: "Book borrowed successfully".to_string(),
            borrow_record: record,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = BorrowResponse),
        (status = 404, description = "No active borrow record with this ID")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowResponse>> {
    let record = state.services.loans.return_loan(id).await?;
    Ok(Json(BorrowResponse {
        message: "Book returned successfully".to_string(),
        borrow_record: record,
    }))
}

/// List all active loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Active loans", body = ActiveLoansResponse)
    )
)]
pub async fn list_active(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ActiveLoansResponse>> {
    let (borrowed_books, total) = state.services.loans.list_active().await?;
    Ok(Json(ActiveLoansResponse {
        borrowed_books,
        total,
    }))
}

/// List overdue loans
#[utoipa::path(
    get,
    path = "/loans/overdue",
    tag = "loans",
    responses(
        (status = 200, description = "Overdue loans", body = OverdueLoansResponse)
    )
)]
pub async fn list_overdue(
    State(state): State<crate::AppState>,
) -> AppResult<Json<OverdueLoansResponse>> {
    let (overdue_books, total) = state.services.loans.list_overdue().await?;
    Ok(Json(OverdueLoansResponse {
        overdue_books,
        total,
    }))
}
