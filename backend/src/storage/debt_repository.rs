use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::Row;

use shared::{Debt, DebtStatus};

use crate::storage::connection::DbConnection;
use crate::storage::traits::DebtStorage;

/// SQLite repository for debt operations
#[derive(Clone)]
pub struct DebtRepository {
    db: DbConnection,
}

impl DebtRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_debt(row: &sqlx::sqlite::SqliteRow) -> Result<Debt> {
        let status: String = row.get("status");
        let status = status
            .parse::<DebtStatus>()
            .map_err(|e| anyhow!("Corrupt status column: {}", e))?;

        Ok(Debt {
            id: row.get("id"),
            name: row.get("name"),
            amount: row.get("amount"),
            date: row.get("date"),
            status,
        })
    }
}

#[async_trait]
impl DebtStorage for DebtRepository {
    /// Insert a debt row and read back the stored values
    async fn store_debt(
        &self,
        name: &str,
        amount: f64,
        date: &str,
        status: DebtStatus,
    ) -> Result<Debt> {
        let result = sqlx::query(
            r#"
            INSERT INTO debts (name, amount, date, status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(amount)
        .bind(date)
        .bind(status.as_str())
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_rowid();
        self.get_debt(id)
            .await?
            .ok_or_else(|| anyhow!("Inserted debt {} not found on read-back", id))
    }

    /// Get a debt by id
    async fn get_debt(&self, id: i64) -> Result<Option<Debt>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, amount, date, status
            FROM debts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_debt(&r)?)),
            None => Ok(None),
        }
    }

    /// List all debts ordered by id
    async fn list_debts(&self) -> Result<Vec<Debt>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, amount, date, status
            FROM debts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_debt).collect()
    }

    /// Overwrite all mutable fields of a debt
    async fn update_debt(
        &self,
        id: i64,
        name: &str,
        amount: f64,
        date: &str,
        status: DebtStatus,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE debts
            SET name = ?, amount = ?, date = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(amount)
        .bind(date)
        .bind(status.as_str())
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a debt by id
    async fn delete_debt(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM debts WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Write a new status for a debt
    async fn set_status(&self, id: i64, status: DebtStatus) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE debts
            SET status = ?
            WHERE id = ?
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
