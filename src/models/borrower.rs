//! Borrower (registered member) model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registered borrower.
///
/// `active_loans` is maintained by the loan ledger and always equals the
/// number of unreturned loan records referencing this borrower.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub id: i32,
    pub name: String,
    /// Unique across all borrowers (exact match, case-sensitive)
    pub email: String,
    pub phone: String,
    pub registration_date: DateTime<Utc>,
    pub active_loans: i32,
}

/// Register borrower request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBorrower {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}
