//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowers, health, loans, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Athenaeum API",
        version = "0.1.0",
        description = "Library Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::search_books,
        books::list_categories,
        // Borrowers
        borrowers::list_borrowers,
        borrowers::register_borrower,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::list_active,
        loans::list_overdue,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::BookListResponse,
            books::BookDetailResponse,
            books::BookResponse,
            books::MessageResponse,
            books::SearchResponse,
            books::CategoriesResponse,
            // Borrowers
            crate::models::borrower::Borrower,
            crate::models::borrower::RegisterBorrower,
            borrowers::BorrowerListResponse,
            borrowers::BorrowerResponse,
            // Loans
            crate::models::loan::BorrowRecord,
            crate::models::loan::CreateLoan,
            loans::BorrowResponse,
            loans::ActiveLoansResponse,
            loans::OverdueLoansResponse,
            // Stats
            stats::StatsResponse,
            stats::BookStats,
            stats::BorrowerStats,
            stats::LoanStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management and search"),
        (name = "borrowers", description = "Borrower registry"),
        (name = "loans", description = "Borrow and return operations"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
