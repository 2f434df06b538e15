//! Shared in-memory store backing all repositories.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Book, Borrower, BorrowRecord};

/// All library state, behind a single lock.
///
/// Cross-collection operations (borrow, return) mutate books, borrowers,
/// and loan records as one unit; holding one write guard for the whole
/// operation makes partial application impossible. A failed operation
/// releases the guard without writing anything.
#[derive(Debug)]
pub struct LibraryState {
    pub books: Vec<Book>,
    pub borrowers: Vec<Borrower>,
    pub loans: Vec<BorrowRecord>,
    pub next_book_id: i32,
    pub next_borrower_id: i32,
    pub next_loan_id: i32,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            borrowers: Vec::new(),
            loans: Vec::new(),
            next_book_id: 1,
            next_borrower_id: 1,
            next_loan_id: 1,
        }
    }
}

/// Handle to the process-wide library state
pub type SharedState = Arc<RwLock<LibraryState>>;

/// Create a fresh, empty store
pub fn new_shared_state() -> SharedState {
    Arc::new(RwLock::new(LibraryState::default()))
}
