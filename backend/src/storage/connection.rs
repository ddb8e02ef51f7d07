use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:debtkeeper.db";

/// DbConnection manages the SQLite pool and schema setup.
///
/// Constructed once at startup and injected into the domain layer; there is
/// no module-level connection state.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema.
    ///
    /// Idempotent: safe to run against a database where the table already
    /// exists.
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS debts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Pending'
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        // Running schema setup again against the same pool must not fail
        DbConnection::setup_schema(db.pool())
            .await
            .expect("Second schema setup should succeed");

        // Table exists and is queryable
        let rows = sqlx::query("SELECT id, name, amount, date, status FROM debts")
            .fetch_all(db.pool())
            .await
            .expect("debts table should exist");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_status_defaults_to_pending_in_schema() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        // Insert without a status and rely on the column default
        sqlx::query("INSERT INTO debts (name, amount, date) VALUES (?, ?, ?)")
            .bind("Ana")
            .bind(500.5)
            .bind("01/15/2025")
            .execute(db.pool())
            .await
            .expect("Insert should succeed");

        let row: (String,) = sqlx::query_as("SELECT status FROM debts LIMIT 1")
            .fetch_one(db.pool())
            .await
            .expect("Row should exist");
        assert_eq!(row.0, "Pending");
    }
}
