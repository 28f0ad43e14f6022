//! Order creation and lookup.
//!
//! `create_order` is the one multi-step write in the system. Validation and
//! mutation run against the same transaction snapshot; any failure rolls the
//! whole thing back, so no partial order is ever observable.

use crate::book::BookRow;
use crate::{BookStore, StoreError};
use bookdesk_core::{
    Book, DomainError, Money, NewOrderItem, OrderDetail, OrderLine, OrderReceipt, StockUpdate,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    customer_name: String,
    status: String,
    total_amount: i64,
    created_at: NaiveDateTime,
}

#[derive(sqlx::FromRow)]
struct LineRow {
    isbn: String,
    title: String,
    quantity: i64,
    unit_price: i64,
}

impl From<LineRow> for OrderLine {
    fn from(row: LineRow) -> Self {
        Self {
            isbn: row.isbn,
            title: row.title,
            quantity: row.quantity,
            unit_price: Money::from_cents(row.unit_price),
        }
    }
}

impl BookStore {
    /// Creates an order atomically: validates the customer, every book and
    /// every stock level, inserts the order and its items with unit prices
    /// snapshotted at this moment, and decrements stock — all under a single
    /// commit/rollback boundary.
    ///
    /// Returns the new order's id; callers wanting display data re-fetch it
    /// via [`BookStore::order_status`].
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] for an empty item list, a non-positive
    ///   quantity, or a duplicated ISBN
    /// - [`DomainError::CustomerNotFound`] / [`DomainError::BookNotFound`]
    ///   when a reference is missing
    /// - [`DomainError::InsufficientStock`] when any requested quantity
    ///   exceeds the book's current stock
    /// - [`StoreError::Database`] on infrastructure failure
    ///
    /// All of these leave the database untouched.
    #[tracing::instrument(skip(self, items), fields(n_items = items.len()))]
    pub async fn create_order(
        &self,
        customer_id: i64,
        items: &[NewOrderItem],
    ) -> Result<i64, StoreError> {
        if items.is_empty() {
            return Err(DomainError::InvalidInput(
                "order must contain at least one item".to_string(),
            )
            .into());
        }
        let mut seen = HashSet::new();
        for item in items {
            if item.qty <= 0 {
                return Err(DomainError::InvalidInput(format!(
                    "quantity for {} must be positive, got {}",
                    item.isbn, item.qty
                ))
                .into());
            }
            if !seen.insert(item.isbn.as_str()) {
                return Err(DomainError::InvalidInput(format!(
                    "duplicate ISBN {} in order items",
                    item.isbn
                ))
                .into());
            }
        }

        // Dropping the transaction on any early return rolls everything back.
        let mut tx = self.pool.begin().await?;

        let customer: Option<(String,)> =
            sqlx::query_as("SELECT name FROM customers WHERE id = ?1")
                .bind(customer_id)
                .fetch_optional(&mut *tx)
                .await?;
        if customer.is_none() {
            return Err(DomainError::CustomerNotFound(customer_id).into());
        }

        let mut total = Money::ZERO;
        let mut priced = Vec::with_capacity(items.len());
        for item in items {
            let row: Option<BookRow> = sqlx::query_as(
                "SELECT isbn, title, author, price, stock FROM books WHERE isbn = ?1",
            )
            .bind(&item.isbn)
            .fetch_optional(&mut *tx)
            .await?;
            let Some(book) = row.map(Book::from) else {
                return Err(DomainError::book_not_found(&item.isbn).into());
            };
            if book.stock < item.qty {
                return Err(DomainError::InsufficientStock {
                    isbn: book.isbn,
                    available: book.stock,
                    requested: item.qty,
                }
                .into());
            }
            total = total + book.price * item.qty;
            priced.push((item.isbn.clone(), item.qty, book.price));
        }

        let order_id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (customer_id, total_amount, status) \
             VALUES (?1, ?2, 'completed') RETURNING id",
        )
        .bind(customer_id)
        .bind(total.cents())
        .fetch_one(&mut *tx)
        .await?;

        for (isbn, qty, price) in &priced {
            sqlx::query(
                "INSERT INTO order_items (order_id, isbn, quantity, unit_price) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(order_id)
            .bind(isbn)
            .bind(qty)
            .bind(price.cents())
            .execute(&mut *tx)
            .await?;

            // The guard re-checks stock at write time; with SQLite's single
            // writer it cannot fire after validation, but it keeps the
            // invariant local to the statement.
            let updated = sqlx::query(
                "UPDATE books SET stock = stock - ?1 WHERE isbn = ?2 AND stock >= ?1",
            )
            .bind(qty)
            .bind(isbn)
            .execute(&mut *tx)
            .await?;
            if updated.rows_affected() == 0 {
                let available: i64 = sqlx::query_scalar("SELECT stock FROM books WHERE isbn = ?1")
                    .bind(isbn)
                    .fetch_one(&mut *tx)
                    .await?;
                return Err(DomainError::InsufficientStock {
                    isbn: isbn.clone(),
                    available,
                    requested: *qty,
                }
                .into());
            }
        }

        tx.commit().await?;
        tracing::info!(order_id, total = %total, "order created");
        Ok(order_id)
    }

    /// Assembles the display payload for a just-created order by re-reading
    /// what the transaction wrote: the customer's name, the recorded total,
    /// and the post-order stock of every ordered book.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the order cannot be re-read. The
    /// order was committed a moment ago, so a missing row here is an
    /// infrastructure problem, not a domain one.
    pub async fn order_receipt(
        &self,
        order_id: i64,
        items: &[NewOrderItem],
    ) -> Result<OrderReceipt, StoreError> {
        let detail = self
            .order_status(order_id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        let mut stock_updates = Vec::with_capacity(items.len());
        for item in items {
            if let Some(book) = self.get_book(&item.isbn).await? {
                stock_updates.push(StockUpdate {
                    title: book.title,
                    new_stock: book.stock,
                });
            }
        }

        Ok(OrderReceipt {
            order_id,
            customer: detail.customer_name,
            total_amount: detail.total_amount,
            stock_updates,
        })
    }

    /// Full detail for an order: header joined with the customer's name, and
    /// every line joined with its book title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a query fails.
    pub async fn order_status(&self, order_id: i64) -> Result<Option<OrderDetail>, StoreError> {
        let header: Option<OrderRow> = sqlx::query_as(
            "SELECT o.id, o.customer_id, c.name AS customer_name, o.status, \
                    o.total_amount, o.created_at \
             FROM orders o \
             JOIN customers c ON o.customer_id = c.id \
             WHERE o.id = ?1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(header) = header else {
            return Ok(None);
        };

        let lines: Vec<LineRow> = sqlx::query_as(
            "SELECT oi.isbn, b.title, oi.quantity, oi.unit_price \
             FROM order_items oi \
             JOIN books b ON oi.isbn = b.isbn \
             WHERE oi.order_id = ?1",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(OrderDetail {
            order_id: header.id,
            customer_id: header.customer_id,
            customer_name: header.customer_name,
            status: header.status,
            total_amount: Money::from_cents(header.total_amount),
            created_at: header.created_at,
            items: lines.into_iter().map(OrderLine::from).collect(),
        }))
    }
}
