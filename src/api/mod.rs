//! API handlers for Athenaeum REST endpoints

pub mod books;
pub mod borrowers;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod stats;
