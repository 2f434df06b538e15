//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, BookListQuery, BookSearchQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with optional filters
    pub async fn list_books(&self, query: &BookListQuery) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.list(query).await
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Add a new book to the catalog
    pub async fn create_book(&self, book: &CreateBook) -> AppResult<Book> {
        let created = self.repository.books.create(book).await?;
        tracing::info!("Catalog: added book id={} \"{}\"", created.id, created.title);
        Ok(created)
    }

    /// Apply a partial update to an existing book
    pub async fn update_book(&self, id: i32, patch: &UpdateBook) -> AppResult<Book> {
        self.repository.books.update(id, patch).await
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Catalog: deleted book id={}", id);
        Ok(())
    }

    /// Advanced search across title, author, ISBN, and description
    pub async fn search_books(&self, query: &BookSearchQuery) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.search(query).await
    }

    /// Distinct categories in first-seen order
    pub async fn list_categories(&self) -> AppResult<Vec<String>> {
        self.repository.books.categories().await
    }
}
