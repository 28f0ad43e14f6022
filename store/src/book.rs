//! Book catalog queries and low-level mutations.

use crate::{BookStore, StoreError};
use bookdesk_core::{Book, Money, SearchField};

/// Database row for a book
#[derive(sqlx::FromRow)]
pub(crate) struct BookRow {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: i64,
    pub stock: i64,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            isbn: row.isbn,
            title: row.title,
            author: row.author,
            price: Money::from_cents(row.price),
            stock: row.stock,
        }
    }
}

impl BookStore {
    /// Case-insensitive substring search on title or author.
    ///
    /// Returns an empty vec (not an error) when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    pub async fn find_books(
        &self,
        query: &str,
        field: SearchField,
    ) -> Result<Vec<Book>, StoreError> {
        // Column names cannot be bound, so each field gets its own statement.
        let sql = match field {
            SearchField::Title => {
                "SELECT isbn, title, author, price, stock FROM books \
                 WHERE title LIKE '%' || ?1 || '%'"
            }
            SearchField::Author => {
                "SELECT isbn, title, author, price, stock FROM books \
                 WHERE author LIKE '%' || ?1 || '%'"
            }
        };
        let rows: Vec<BookRow> = sqlx::query_as(sql)
            .bind(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Looks up a single book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    pub async fn get_book(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        let row: Option<BookRow> =
            sqlx::query_as("SELECT isbn, title, author, price, stock FROM books WHERE isbn = ?1")
                .bind(isbn)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Book::from))
    }

    /// Replaces a book's stock count. Returns false when the ISBN is unknown.
    ///
    /// Does not itself enforce non-negativity; callers validate before
    /// calling (the schema CHECK is the last line of defense).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the update fails.
    pub async fn set_stock(&self, isbn: &str, new_stock: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE books SET stock = ?1 WHERE isbn = ?2")
            .bind(new_stock)
            .bind(isbn)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replaces a book's price. Returns false when the ISBN is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the update fails.
    pub async fn set_price(&self, isbn: &str, new_price: Money) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE books SET price = ?1 WHERE isbn = ?2")
            .bind(new_price.cents())
            .bind(isbn)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Books with stock below `threshold`, ascending by stock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    pub async fn low_stock(&self, threshold: i64) -> Result<Vec<Book>, StoreError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT isbn, title, author, price, stock FROM books \
             WHERE stock < ?1 ORDER BY stock ASC",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}
