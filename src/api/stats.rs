//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Library-wide statistics
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub books: BookStats,
    pub borrowers: BorrowerStats,
    pub loans: LoanStats,
}

/// Catalog totals
#[derive(Serialize, ToSchema)]
pub struct BookStats {
    /// Number of catalog entries
    pub total: i64,
    /// Total physical copies owned
    pub copies: i64,
    /// Copies currently available
    pub available: i64,
}

/// Registry totals
#[derive(Serialize, ToSchema)]
pub struct BorrowerStats {
    pub total: i64,
}

/// Ledger totals
#[derive(Serialize, ToSchema)]
pub struct LoanStats {
    pub active: i64,
    pub overdue: i64,
}

/// Get library statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
