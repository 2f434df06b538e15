//! Books repository: catalog CRUD, search, and category listing.

use chrono::Utc;
use indexmap::IndexSet;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookListQuery, BookSearchQuery, CreateBook, UpdateBook},
};

use super::store::SharedState;

#[derive(Clone)]
pub struct BooksRepository {
    state: SharedState,
}

impl BooksRepository {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// List books matching the given filters, in insertion order
    pub async fn list(&self, query: &BookListQuery) -> AppResult<(Vec<Book>, i64)> {
        let state = self.state.read().await;
        let books: Vec<Book> = state
            .books
            .iter()
            .filter(|book| matches_list(book, query))
            .cloned()
            .collect();
        let total = books.len() as i64;
        Ok((books, total))
    }

    /// Get a book by ID
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        let state = self.state.read().await;
        state
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Add a new book. All copies start available.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let title = book.title.as_deref().filter(|s| !s.is_empty());
        let author = book.author.as_deref().filter(|s| !s.is_empty());
        let isbn = book.isbn.as_deref().filter(|s| !s.is_empty());
        let copies = book.copies.filter(|&c| c != 0);

        let (title, author, isbn, copies) = match (title, author, isbn, copies) {
            (Some(t), Some(a), Some(i), Some(c)) => (t, a, i, c),
            _ => {
                return Err(AppError::Validation(
                    "Title, author, ISBN, and copies are required".to_string(),
                ))
            }
        };
        if copies < 0 {
            return Err(AppError::Validation(
                "Copies must be a positive integer".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let id = state.next_book_id;
        state.next_book_id += 1;

        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
            available_copies: copies,
            category: book
                .category
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "General".to_string()),
            description: book.description.clone().unwrap_or_default(),
            date_added: Utc::now(),
        };
        state.books.push(book.clone());

        Ok(book)
    }

    /// Apply a partial update to a book.
    ///
    /// When `copies` changes, `available_copies` is recomputed so that
    /// outstanding loans keep their effect: the borrowed count is carried
    /// over and the result clamps at zero if the new total falls below it.
    pub async fn update(&self, id: i32, patch: &UpdateBook) -> AppResult<Book> {
        let mut state = self.state.write().await;
        let book = state
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        if let Some(title) = patch.title.as_deref().filter(|s| !s.is_empty()) {
            book.title = title.to_string();
        }
        if let Some(author) = patch.author.as_deref().filter(|s| !s.is_empty()) {
            book.author = author.to_string();
        }
        if let Some(isbn) = patch.isbn.as_deref().filter(|s| !s.is_empty()) {
            book.isbn = isbn.to_string();
        }
        if let Some(copies) = patch.copies {
            let borrowed = book.copies - book.available_copies;
            book.copies = copies;
            book.available_copies = (copies - borrowed).max(0);
        }
        if let Some(category) = patch.category.as_deref().filter(|s| !s.is_empty()) {
            book.category = category.to_string();
        }
        if let Some(ref description) = patch.description {
            book.description = description.clone();
        }

        Ok(book.clone())
    }

    /// Remove a book. Refused while any copy is on loan.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut state = self.state.write().await;
        let index = state
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let book = &state.books[index];
        if book.available_copies < book.copies {
            return Err(AppError::Conflict(
                "Cannot delete book with borrowed copies".to_string(),
            ));
        }

        state.books.remove(index);
        Ok(())
    }

    /// Advanced search: like `list`, but `q` also matches descriptions and
    /// `author` is a separate substring filter
    pub async fn search(&self, query: &BookSearchQuery) -> AppResult<(Vec<Book>, i64)> {
        let state = self.state.read().await;
        let results: Vec<Book> = state
            .books
            .iter()
            .filter(|book| matches_search(book, query))
            .cloned()
            .collect();
        let total = results.len() as i64;
        Ok((results, total))
    }

    /// Distinct category values across all books, in first-seen order
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let state = self.state.read().await;
        let categories: IndexSet<&str> =
            state.books.iter().map(|b| b.category.as_str()).collect();
        Ok(categories.into_iter().map(str::to_string).collect())
    }
}

fn matches_list(book: &Book, query: &BookListQuery) -> bool {
    if let Some(ref q) = query.q {
        let term = q.to_lowercase();
        let hit = book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term)
            || book.isbn.contains(&term);
        if !hit {
            return false;
        }
    }
    if let Some(ref category) = query.category {
        if book.category.to_lowercase() != category.to_lowercase() {
            return false;
        }
    }
    if let Some(available) = query.available {
        if available != (book.available_copies > 0) {
            return false;
        }
    }
    true
}

fn matches_search(book: &Book, query: &BookSearchQuery) -> bool {
    if let Some(ref q) = query.q {
        let term = q.to_lowercase();
        let hit = book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term)
            || book.isbn.contains(&term)
            || book.description.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }
    if let Some(ref category) = query.category {
        if book.category.to_lowercase() != category.to_lowercase() {
            return false;
        }
    }
    if let Some(ref author) = query.author {
        if !book.author.to_lowercase().contains(&author.to_lowercase()) {
            return false;
        }
    }
    if let Some(available) = query.available {
        if available != (book.available_copies > 0) {
            return false;
        }
    }
    true
}
