//! # Bookdesk Store
//!
//! SQLite-backed persistence for the Bookdesk desk agent: the book catalog,
//! customers, orders and order items, plus the atomic order-creation
//! transaction and the inventory operations built on top of it.
//!
//! Every logical operation runs within one database transaction boundary,
//! acquired at the start of the operation and committed or rolled back before
//! it returns. Concurrency control is SQLite's own single-writer isolation;
//! there are no application-level locks and no automatic retries.
//!
//! The store is an explicit dependency: construct a [`BookStore`] from a pool
//! and pass it to whatever needs it. Tests use [`BookStore::in_memory`].

pub mod error;

mod book;
mod inventory;
mod order;

pub use error::StoreError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Stock level below which a book counts as "low stock"
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const SEED_SQL: &str = include_str!("seed.sql");

/// Handle to the book/order database
#[derive(Clone)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    /// Wraps an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `url`, e.g.
    /// `sqlite://db/library.db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Opens a fresh in-memory database with the schema applied.
    ///
    /// The pool is capped at a single connection: each SQLite connection gets
    /// its own private `:memory:` database, so a larger pool would scatter
    /// rows across invisible databases.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the database cannot be opened.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded schema (idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a schema statement fails.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("schema applied");
        Ok(())
    }

    /// Inserts the demo catalog and customers (idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a seed statement fails.
    pub async fn seed_demo(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SEED_SQL).execute(&self.pool).await?;
        tracing::info!("demo data seeded");
        Ok(())
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
