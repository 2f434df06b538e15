//! Loan management service

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::loan::{BorrowRecord, CreateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow a book: decrements the book's available copies, increments the
    /// borrower's active-loan count, and opens a borrow record, all as one
    /// atomic unit.
    pub async fn borrow(&self, request: &CreateLoan) -> AppResult<BorrowRecord> {
        let (book_id, borrower_id) = match (request.book_id, request.borrower_id) {
            (Some(book_id), Some(borrower_id)) => (book_id, borrower_id),
            _ => {
                return Err(AppError::Validation(
                    "Book ID and Borrower ID are required".to_string(),
                ))
            }
        };
        let days = request
            .days_to_return
            .unwrap_or(self.config.default_period_days);

        let record = self.repository.loans.create(book_id, borrower_id, days).await?;
        tracing::info!(
            "Ledger: loan {} opened, book {} to borrower {}, due {}",
            record.id,
            book_id,
            borrower_id,
            record.due_date
        );
        Ok(record)
    }

    /// Return a borrowed book by its borrow record ID
    pub async fn return_loan(&self, borrow_id: i32) -> AppResult<BorrowRecord> {
        let record = self.repository.loans.return_loan(borrow_id).await?;
        tracing::info!("Ledger: loan {} closed", record.id);
        Ok(record)
    }

    /// All active loans
    pub async fn list_active(&self) -> AppResult<(Vec<BorrowRecord>, i64)> {
        self.repository.loans.list_active().await
    }

    /// Active loans past their due date
    pub async fn list_overdue(&self) -> AppResult<(Vec<BorrowRecord>, i64)> {
        self.repository.loans.list_overdue().await
    }
}
