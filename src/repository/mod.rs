//! Repository layer over the in-memory store

pub mod books;
pub mod borrowers;
pub mod loans;
mod store;

pub use store::{new_shared_state, LibraryState, SharedState};

/// Main repository struct holding the shared in-memory store
#[derive(Clone)]
pub struct Repository {
    pub state: SharedState,
    pub books: books::BooksRepository,
    pub borrowers: borrowers::BorrowersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with a fresh, empty store
    pub fn new() -> Self {
        let state = store::new_shared_state();
        Self {
            books: books::BooksRepository::new(state.clone()),
            borrowers: borrowers::BorrowersRepository::new(state.clone()),
            loans: loans::LoansRepository::new(state.clone()),
            state,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
