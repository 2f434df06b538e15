//! Loans repository: the borrow/return ledger.
//!
//! Borrow and return each touch three collections (books, borrowers, loan
//! records) and must apply all of their writes or none. Every method here
//! takes the store guard once and validates before the first write.

use chrono::{Duration, Utc};

use crate::{
    error::{AppError, AppResult},
    models::loan::BorrowRecord,
};

use super::store::SharedState;

#[derive(Clone)]
pub struct LoansRepository {
    state: SharedState,
}

impl LoansRepository {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Get a borrow record by ID
    pub async fn get(&self, id: i32) -> AppResult<BorrowRecord> {
        let state = self.state.read().await;
        state
            .loans
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Borrow record with id {} not found", id)))
    }

    /// Create a new loan: one copy out, one active loan up, one record.
    pub async fn create(
        &self,
        book_id: i32,
        borrower_id: i32,
        days_to_return: i64,
    ) -> AppResult<BorrowRecord> {
        let mut state = self.state.write().await;

        let book_index = state
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
        let borrower_index = state
            .borrowers
            .iter()
            .position(|b| b.id == borrower_id)
            .ok_or_else(|| AppError::NotFound("Borrower not found".to_string()))?;

        if state.books[book_index].available_copies <= 0 {
            return Err(AppError::Conflict(
                "No copies available for borrowing".to_string(),
            ));
        }

        let now = Utc::now();
        let record = BorrowRecord {
            id: state.next_loan_id,
            book_id,
            borrower_id,
            // snapshots: kept as-is even if the book or borrower changes later
            book_title: state.books[book_index].title.clone(),
            borrower_name: state.borrowers[borrower_index].name.clone(),
            borrow_date: now,
            due_date: now + Duration::days(days_to_return),
            returned: false,
            return_date: None,
        };

        state.next_loan_id += 1;
        state.books[book_index].available_copies -= 1;
        state.borrowers[borrower_index].active_loans += 1;
        state.loans.push(record.clone());

        Ok(record)
    }

    /// Close an active loan. An already-returned record is not found here:
    /// the transition is terminal and not idempotent.
    pub async fn return_loan(&self, borrow_id: i32) -> AppResult<BorrowRecord> {
        let mut state = self.state.write().await;

        let loan_index = state
            .loans
            .iter()
            .position(|l| l.id == borrow_id && !l.returned)
            .ok_or_else(|| AppError::NotFound("Active borrow record not found".to_string()))?;

        state.loans[loan_index].returned = true;
        state.loans[loan_index].return_date = Some(Utc::now());

        let book_id = state.loans[loan_index].book_id;
        let borrower_id = state.loans[loan_index].borrower_id;

        // The delete rule blocks removing a book with outstanding loans, so
        // the referenced entities normally still exist. If one is gone, its
        // counter update is skipped and the record transition stands.
        if let Some(book) = state.books.iter_mut().find(|b| b.id == book_id) {
            book.available_copies += 1;
        }
        if let Some(borrower) = state.borrowers.iter_mut().find(|b| b.id == borrower_id) {
            borrower.active_loans = (borrower.active_loans - 1).max(0);
        }

        Ok(state.loans[loan_index].clone())
    }

    /// All active (unreturned) loans
    pub async fn list_active(&self) -> AppResult<(Vec<BorrowRecord>, i64)> {
        let state = self.state.read().await;
        let records: Vec<BorrowRecord> = state
            .loans
            .iter()
            .filter(|l| !l.returned)
            .cloned()
            .collect();
        let total = records.len() as i64;
        Ok((records, total))
    }

    /// Active loans whose due date has passed at query time
    pub async fn list_overdue(&self) -> AppResult<(Vec<BorrowRecord>, i64)> {
        let now = Utc::now();
        let state = self.state.read().await;
        let records: Vec<BorrowRecord> = state
            .loans
            .iter()
            .filter(|l| !l.returned && l.due_date < now)
            .cloned()
            .collect();
        let total = records.len() as i64;
        Ok((records, total))
    }

}
