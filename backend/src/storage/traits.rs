//! # Storage Traits
//!
//! Storage abstraction trait that lets the domain layer work against the
//! persistence seam without knowing the backing implementation.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Debt, DebtStatus};

/// Interface for debt persistence operations.
///
/// Mutating operations that target a single row report whether a row
/// matched, so callers can distinguish "missing id" from success.
#[async_trait]
pub trait DebtStorage: Send + Sync {
    /// Insert a new debt row and return it with its assigned id
    async fn store_debt(
        &self,
        name: &str,
        amount: f64,
        date: &str,
        status: DebtStatus,
    ) -> Result<Debt>;

    /// Retrieve a specific debt by id
    async fn get_debt(&self, id: i64) -> Result<Option<Debt>>;

    /// List every debt, ordered by id ascending.
    /// Returns an empty vec, never an error, for an empty table.
    async fn list_debts(&self) -> Result<Vec<Debt>>;

    /// Overwrite all mutable fields of the row matching `id`.
    /// Returns false if no row matched.
    async fn update_debt(
        &self,
        id: i64,
        name: &str,
        amount: f64,
        date: &str,
        status: DebtStatus,
    ) -> Result<bool>;

    /// Delete the row matching `id`.
    /// Returns false if no row matched.
    async fn delete_debt(&self, id: i64) -> Result<bool>;

    /// Write a new status for the row matching `id`.
    /// Returns false if no row matched.
    async fn set_status(&self, id: i64, status: DebtStatus) -> Result<bool>;
}
