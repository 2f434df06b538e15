//! Borrowers repository: registration and listing.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, RegisterBorrower},
};

use super::store::SharedState;

#[derive(Clone)]
pub struct BorrowersRepository {
    state: SharedState,
}

impl BorrowersRepository {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// List all borrowers in registration order
    pub async fn list(&self) -> AppResult<(Vec<Borrower>, i64)> {
        let state = self.state.read().await;
        let borrowers = state.borrowers.clone();
        let total = borrowers.len() as i64;
        Ok((borrowers, total))
    }

    /// Get a borrower by ID
    pub async fn get(&self, id: i32) -> AppResult<Borrower> {
        let state = self.state.read().await;
        state
            .borrowers
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Borrower with id {} not found", id)))
    }

    /// Register a new borrower. Email must be unique (exact match).
    pub async fn register(&self, request: &RegisterBorrower) -> AppResult<Borrower> {
        let name = request.name.as_deref().filter(|s| !s.is_empty());
        let email = request.email.as_deref().filter(|s| !s.is_empty());
        let (name, email) = match (name, email) {
            (Some(n), Some(e)) => (n, e),
            _ => {
                return Err(AppError::Validation(
                    "Name and email are required".to_string(),
                ))
            }
        };

        let mut state = self.state.write().await;
        if state.borrowers.iter().any(|b| b.email == email) {
            return Err(AppError::Conflict(
                "Borrower with this email already exists".to_string(),
            ));
        }

        let id = state.next_borrower_id;
        state.next_borrower_id += 1;

        let borrower = Borrower {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: request.phone.clone().unwrap_or_default(),
            registration_date: Utc::now(),
            active_loans: 0,
        };
        state.borrowers.push(borrower.clone());

        Ok(borrower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::new_shared_state;

    fn repo() -> BorrowersRepository {
        BorrowersRepository::new(new_shared_state())
    }

    fn alice() -> RegisterBorrower {
        RegisterBorrower {
            name: Some("Alice".to_string()),
            email: Some("a@x.com".to_string()),
            phone: None,
        }
    }

    #[tokio::test]
    async fn register_assigns_id_and_defaults() {
        let repo = repo();
        let borrower = repo.register(&alice()).await.unwrap();

        assert_eq!(borrower.id, 1);
        assert_eq!(borrower.phone, "");
        assert_eq!(borrower.active_loans, 0);
    }

    #[tokio::test]
    async fn register_requires_name_and_email() {
        let repo = repo();
        let mut request = alice();
        request.email = Some(String::new());

        assert!(matches!(
            repo.register(&request).await,
            Err(AppError::Validation(_))
        ));
        let (_, total) = repo.list().await.unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = repo();
        repo.register(&alice()).await.unwrap();

        let duplicate = RegisterBorrower {
            name: Some("Alice Clone".to_string()),
            ..alice()
        };
        assert!(matches!(
            repo.register(&duplicate).await,
            Err(AppError::Conflict(_))
        ));

        let (_, total) = repo.list().await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn email_uniqueness_is_case_sensitive() {
        let repo = repo();
        repo.register(&alice()).await.unwrap();

        let other_case = RegisterBorrower {
            email: Some("A@X.COM".to_string()),
            ..alice()
        };
        repo.register(&other_case).await.unwrap();

        let (_, total) = repo.list().await.unwrap();
        assert_eq!(total, 2);
    }
}
