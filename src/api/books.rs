//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookListQuery, BookSearchQuery, CreateBook, UpdateBook},
};

/// Book list response
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    /// Matching books in insertion order
    pub books: Vec<Book>,
    /// Number of matches
    pub total: i64,
}

/// Single book response
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub book: Book,
}

/// Mutation response carrying the affected book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    /// Status message
    pub message: String,
    pub book: Book,
}

/// Plain status message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Advanced search response
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<Book>,
    pub total: i64,
}

/// Category list response
#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Distinct categories in first-seen order
    pub categories: Vec<String>,
}

/// List books with optional search and filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookListQuery),
    responses(
        (status = 200, description = "List of matching books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookListQuery>,
) -> AppResult<Json<BookListResponse>> {
    let (books, total) = state.services.catalog.list_books(&query).await?;
    Ok(Json(BookListResponse { books, total }))
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(BookDetailResponse { book }))
}

/// Add a new book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = BookResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    payload.validate()?;

    let book = state.services.catalog.create_book(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book added successfully".to_string(),
            book,
        }),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.update_book(id, &payload).await?;
    Ok(Json(BookResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book has borrowed copies")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

/// Advanced search across title, author, ISBN, and description
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookSearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let (results, total) = state.services.catalog.search_books(&query).await?;
    Ok(Json(SearchResponse { results, total }))
}

/// List all distinct book categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "books",
    responses(
        (status = 200, description = "Distinct categories", body = CategoriesResponse)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.services.catalog.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}
