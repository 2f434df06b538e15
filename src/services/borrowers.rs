//! Borrower registry service

use crate::{
    error::AppResult,
    models::borrower::{Borrower, RegisterBorrower},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowersService {
    repository: Repository,
}

impl BorrowersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all borrowers in registration order
    pub async fn list_borrowers(&self) -> AppResult<(Vec<Borrower>, i64)> {
        self.repository.borrowers.list().await
    }

    /// Register a new borrower
    pub async fn register(&self, request: &RegisterBorrower) -> AppResult<Borrower> {
        let borrower = self.repository.borrowers.register(request).await?;
        tracing::info!("Registry: registered borrower id={}", borrower.id);
        Ok(borrower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> BorrowersService {
        BorrowersService::new(Repository::new())
    }

    #[tokio::test]
    async fn registering_twice_with_same_email_conflicts() {
        let borrowers = service();
        let request = RegisterBorrower {
            name: Some("Alice".to_string()),
            email: Some("a@x.com".to_string()),
            phone: None,
        };

        borrowers.register(&request).await.unwrap();
        assert!(matches!(
            borrowers.register(&request).await,
            Err(AppError::Conflict(_))
        ));

        let (_, total) = borrowers.list_borrowers().await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn listing_preserves_registration_order() {
        let borrowers = service();
        for (name, email) in [("Alice", "a@x.com"), ("Bob", "b@x.com")] {
            borrowers
                .register(&RegisterBorrower {
                    name: Some(name.to_string()),
                    email: Some(email.to_string()),
                    phone: None,
                })
                .await
                .unwrap();
        }

        let (list, total) = borrowers.list_borrowers().await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(list[0].name, "Alice");
        assert_eq!(list[1].name, "Bob");
        assert_eq!(list[1].id, 2);
    }
}
