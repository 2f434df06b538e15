//! Statistics service

use chrono::Utc;

use crate::{
    api::stats::{BookStats, BorrowerStats, LoanStats, StatsResponse},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Point-in-time totals across the three collections, read under a
    /// single guard so the counts are mutually consistent.
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let state = self.repository.state.read().await;
        let now = Utc::now();

        let copies: i64 = state.books.iter().map(|b| b.copies as i64).sum();
        let available: i64 = state.books.iter().map(|b| b.available_copies as i64).sum();
        let active = state.loans.iter().filter(|l| !l.returned).count() as i64;
        let overdue = state
            .loans
            .iter()
            .filter(|l| !l.returned && l.due_date < now)
            .count() as i64;

        Ok(StatsResponse {
            books: BookStats {
                total: state.books.len() as i64,
                copies,
                available,
            },
            borrowers: BorrowerStats {
                total: state.borrowers.len() as i64,
            },
            loans: LoanStats { active, overdue },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::LoansConfig,
        models::{book::CreateBook, borrower::RegisterBorrower, loan::CreateLoan},
        services::Services,
    };

    #[tokio::test]
    async fn stats_reflect_collections() {
        let services = Services::new(Repository::new(), LoansConfig::default());

        let book = services
            .catalog
            .create_book(&CreateBook {
                title: Some("Dune".to_string()),
                author: Some("Herbert".to_string()),
                isbn: Some("123".to_string()),
                copies: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        let borrower = services
            .borrowers
            .register(&RegisterBorrower {
                name: Some("Alice".to_string()),
                email: Some("a@x.com".to_string()),
                phone: None,
            })
            .await
            .unwrap();
        services
            .loans
            .borrow(&CreateLoan {
                book_id: Some(book.id),
                borrower_id: Some(borrower.id),
                days_to_return: Some(-1),
            })
            .await
            .unwrap();

        let stats = services.stats.get_stats().await.unwrap();
        assert_eq!(stats.books.total, 1);
        assert_eq!(stats.books.copies, 2);
        assert_eq!(stats.books.available, 1);
        assert_eq!(stats.borrowers.total, 1);
        assert_eq!(stats.loans.active, 1);
        assert_eq!(stats.loans.overdue, 1);
    }
}
