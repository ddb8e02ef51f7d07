//! Debt service domain logic for the debt tracker.

use shared::{CreateDebtRequest, Debt, DebtStatus, UpdateDebtRequest};
use tracing::info;

use crate::storage::DebtStorage;

/// Errors surfaced by the debt service.
///
/// Invalid input and missing rows are reported explicitly rather than
/// swallowed, so callers can tell "nothing happened because the input was
/// bad" apart from success.
#[derive(Debug, thiserror::Error)]
pub enum DebtError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No debt found with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct DebtService<S: DebtStorage> {
    repository: S,
}

impl<S: DebtStorage> DebtService<S> {
    pub fn new(repository: S) -> Self {
        Self { repository }
    }

    /// Create a new debt entry. Status defaults to Pending when the request
    /// leaves it unset. Returns the stored row with its fresh id.
    pub async fn create_debt(&self, request: CreateDebtRequest) -> Result<Debt, DebtError> {
        validate_fields(&request.name, request.amount, &request.date)?;

        let status = request.status.unwrap_or(DebtStatus::Pending);
        let debt = self
            .repository
            .store_debt(request.name.trim(), request.amount, request.date.trim(), status)
            .await?;

        info!("Created debt {} for {}", debt.id, debt.name);
        Ok(debt)
    }

    /// List every debt entry. An empty table yields an empty vec.
    pub async fn list_debts(&self) -> Result<Vec<Debt>, DebtError> {
        let debts = self.repository.list_debts().await?;
        Ok(debts)
    }

    /// Overwrite all mutable fields of the debt matching `id`.
    /// Idempotent for identical arguments.
    pub async fn update_debt(
        &self,
        id: i64,
        request: UpdateDebtRequest,
    ) -> Result<Debt, DebtError> {
        validate_fields(&request.name, request.amount, &request.date)?;

        let matched = self
            .repository
            .update_debt(
                id,
                request.name.trim(),
                request.amount,
                request.date.trim(),
                request.status,
            )
            .await?;
        if !matched {
            return Err(DebtError::NotFound(id));
        }

        info!("Updated debt {}", id);
        self.read_back(id).await
    }

    /// Delete the debt matching `id`.
    pub async fn delete_debt(&self, id: i64) -> Result<(), DebtError> {
        let matched = self.repository.delete_debt(id).await?;
        if !matched {
            return Err(DebtError::NotFound(id));
        }

        info!("Deleted debt {}", id);
        Ok(())
    }

    /// Flip the status of the debt matching `id` and return the updated row.
    ///
    /// The stored status is the source of truth: it is read back before the
    /// flip, so a stale caller view can never write the wrong value.
    pub async fn toggle_status(&self, id: i64) -> Result<Debt, DebtError> {
        let debt = self
            .repository
            .get_debt(id)
            .await?
            .ok_or(DebtError::NotFound(id))?;

        let new_status = debt.status.toggled();
        let matched = self.repository.set_status(id, new_status).await?;
        if !matched {
            // Row vanished between the read and the write
            return Err(DebtError::NotFound(id));
        }

        info!("Toggled debt {} to {}", id, new_status);
        Ok(Debt {
            status: new_status,
            ..debt
        })
    }

    async fn read_back(&self, id: i64) -> Result<Debt, DebtError> {
        self.repository
            .get_debt(id)
            .await?
            .ok_or(DebtError::NotFound(id))
    }
}

/// Presence checks only: name and date non-empty, amount a finite number.
/// The date string is never parsed structurally.
fn validate_fields(name: &str, amount: f64, date: &str) -> Result<(), DebtError> {
    if name.trim().is_empty() {
        return Err(DebtError::InvalidInput("name must not be empty".to_string()));
    }
    if !amount.is_finite() {
        return Err(DebtError::InvalidInput(format!(
            "amount must be a finite number, got {}",
            amount
        )));
    }
    if date.trim().is_empty() {
        return Err(DebtError::InvalidInput("date must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, DebtRepository};

    async fn create_test_service() -> DebtService<DebtRepository> {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        DebtService::new(DebtRepository::new(db))
    }

    fn create_request(name: &str, amount: f64, date: &str) -> CreateDebtRequest {
        CreateDebtRequest {
            name: name.to_string(),
            amount,
            date: date.to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let service = create_test_service().await;

        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.amount, 500.5);
        assert_eq!(created.date, "01/15/2025");
        assert_eq!(created.status, DebtStatus::Pending);

        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts, vec![created]);
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let service = create_test_service().await;

        let request = CreateDebtRequest {
            status: Some(DebtStatus::Paid),
            ..create_request("Ben", 120.0, "02/01/2025")
        };
        let created = service.create_debt(request).await.unwrap();
        assert_eq!(created.status, DebtStatus::Paid);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields() {
        let service = create_test_service().await;

        for request in [
            create_request("", 500.5, "01/15/2025"),
            create_request("   ", 500.5, "01/15/2025"),
            create_request("Ana", 500.5, ""),
            create_request("Ana", f64::NAN, "01/15/2025"),
        ] {
            let err = service.create_debt(request).await.unwrap_err();
            assert!(matches!(err, DebtError::InvalidInput(_)), "got {:?}", err);
        }

        // Nothing was stored
        assert!(service.list_debts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let service = create_test_service().await;
        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        let request = UpdateDebtRequest {
            name: "Ana Maria".to_string(),
            amount: 750.0,
            date: "02/01/2025".to_string(),
            status: DebtStatus::Paid,
        };

        let once = service.update_debt(created.id, request.clone()).await.unwrap();
        let twice = service.update_debt(created.id, request).await.unwrap();
        assert_eq!(once, twice);

        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts, vec![twice]);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input_without_mutating() {
        let service = create_test_service().await;
        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        let request = UpdateDebtRequest {
            name: "".to_string(),
            amount: 750.0,
            date: "02/01/2025".to_string(),
            status: DebtStatus::Paid,
        };
        let err = service.update_debt(created.id, request).await.unwrap_err();
        assert!(matches!(err, DebtError::InvalidInput(_)));

        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts, vec![created]);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let service = create_test_service().await;

        let request = UpdateDebtRequest {
            name: "Nobody".to_string(),
            amount: 1.0,
            date: "01/01/2025".to_string(),
            status: DebtStatus::Pending,
        };
        let err = service.update_debt(999, request).await.unwrap_err();
        assert!(matches!(err, DebtError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_toggle_reads_authoritative_status() {
        let service = create_test_service().await;
        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        let toggled = service.toggle_status(created.id).await.unwrap();
        assert_eq!(toggled.status, DebtStatus::Paid);

        // A second toggle flips back from the stored value, not from
        // anything the caller supplies
        let toggled_again = service.toggle_status(created.id).await.unwrap();
        assert_eq!(toggled_again.status, DebtStatus::Pending);

        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts[0].status, DebtStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_preserves_other_fields() {
        let service = create_test_service().await;
        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        let toggled = service.toggle_status(created.id).await.unwrap();
        assert_eq!(toggled.id, created.id);
        assert_eq!(toggled.name, created.name);
        assert_eq!(toggled.amount, created.amount);
        assert_eq!(toggled.date, created.date);
    }

    #[tokio::test]
    async fn test_delete_finality() {
        let service = create_test_service().await;
        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        service.delete_debt(created.id).await.unwrap();
        assert!(service.list_debts().await.unwrap().is_empty());

        // Subsequent operations on the deleted id report NotFound
        let err = service.delete_debt(created.id).await.unwrap_err();
        assert!(matches!(err, DebtError::NotFound(_)));
        let err = service.toggle_status(created.id).await.unwrap_err();
        assert!(matches!(err, DebtError::NotFound(_)));

        let request = UpdateDebtRequest {
            name: "Ana".to_string(),
            amount: 500.5,
            date: "01/15/2025".to_string(),
            status: DebtStatus::Paid,
        };
        let err = service.update_debt(created.id, request).await.unwrap_err();
        assert!(matches!(err, DebtError::NotFound(_)));
        assert!(service.list_debts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_spec_scenario() {
        let service = create_test_service().await;

        let created = service
            .create_debt(create_request("Ana", 500.5, "01/15/2025"))
            .await
            .unwrap();

        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].name, "Ana");
        assert_eq!(debts[0].amount, 500.5);
        assert_eq!(debts[0].date, "01/15/2025");
        assert_eq!(debts[0].status, DebtStatus::Pending);

        service.toggle_status(created.id).await.unwrap();
        let debts = service.list_debts().await.unwrap();
        assert_eq!(debts[0].status, DebtStatus::Paid);

        service.delete_debt(created.id).await.unwrap();
        assert!(service.list_debts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_trims_whitespace() {
        let service = create_test_service().await;

        let created = service
            .create_debt(create_request("  Ana  ", 500.5, " 01/15/2025 "))
            .await
            .unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.date, "01/15/2025");
    }
}
