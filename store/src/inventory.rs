//! Inventory operations: restock and price update.
//!
//! Each runs inside its own transaction. The stock increment is a single
//! atomic UPDATE, so concurrent restocks serialize on the row and no
//! increment is lost; the re-read that produces the returned book observes
//! the same transaction's state, never another writer's.

use crate::book::BookRow;
use crate::{BookStore, StoreError};
use bookdesk_core::{Book, DomainError, Money};
use sqlx::SqliteConnection;

impl BookStore {
    /// Adds `qty` copies of a book to inventory and returns the refreshed
    /// book.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] when `qty` is not positive
    /// - [`DomainError::BookNotFound`] when the ISBN is unknown
    /// - [`StoreError::Database`] on infrastructure failure
    #[tracing::instrument(skip(self))]
    pub async fn restock(&self, isbn: &str, qty: i64) -> Result<Book, StoreError> {
        if qty <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "restock quantity must be positive, got {qty}"
            ))
            .into());
        }
        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query("UPDATE books SET stock = stock + ?1 WHERE isbn = ?2")
            .bind(qty)
            .bind(isbn)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::book_not_found(isbn).into());
        }
        let book = fetch_book(&mut tx, isbn).await?;
        tx.commit().await?;
        Ok(book)
    }

    /// Replaces a book's price and returns the refreshed book.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] when `price` is negative
    /// - [`DomainError::BookNotFound`] when the ISBN is unknown
    /// - [`StoreError::Database`] on infrastructure failure
    #[tracing::instrument(skip(self, price), fields(price = %price))]
    pub async fn update_price(&self, isbn: &str, price: Money) -> Result<Book, StoreError> {
        if price.is_negative() {
            return Err(DomainError::InvalidInput(format!(
                "price must be non-negative, got {price}"
            ))
            .into());
        }
        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query("UPDATE books SET price = ?1 WHERE isbn = ?2")
            .bind(price.cents())
            .bind(isbn)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::book_not_found(isbn).into());
        }
        let book = fetch_book(&mut tx, isbn).await?;
        tx.commit().await?;
        Ok(book)
    }
}

// The row was just updated inside this transaction, so it must exist.
async fn fetch_book(conn: &mut SqliteConnection, isbn: &str) -> Result<Book, StoreError> {
    let row: BookRow =
        sqlx::query_as("SELECT isbn, title, author, price, stock FROM books WHERE isbn = ?1")
            .bind(isbn)
            .fetch_one(&mut *conn)
            .await?;
    Ok(row.into())
}
