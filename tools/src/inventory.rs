//! Inventory tools: restock, price update, low-stock summary.

use crate::args::{normalize, store_error_result};
use bookdesk_core::tool::BoxToolFuture;
use bookdesk_core::{Money, Tool, ToolExecutorFn};
use bookdesk_store::{BookStore, DEFAULT_LOW_STOCK_THRESHOLD};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Input contract for `restock_book`
#[derive(Debug, Deserialize)]
pub struct RestockArgs {
    /// Book to restock
    pub isbn: String,
    /// Copies to add (must be positive)
    pub qty: i64,
}

/// Input contract for `update_price`
#[derive(Debug, Deserialize)]
pub struct UpdatePriceArgs {
    /// Book to reprice
    pub isbn: String,
    /// New price in dollars (must be non-negative)
    pub price: Money,
}

/// Input contract for `inventory_summary` (no fields)
#[derive(Debug, Default, Deserialize)]
pub struct InventorySummaryArgs {}

/// Create the `restock_book` tool.
///
/// Returns JSON:
/// ```json
/// {"title": "Clean Code", "new_stock": 15, "message": "Restocked 5 copies of Clean Code"}
/// ```
#[must_use]
pub fn restock_book_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "restock_book".to_string(),
        description: "Add more copies of a book to inventory".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "isbn": {"type": "string", "description": "ISBN of the book"},
                "qty": {"type": "integer", "minimum": 1, "description": "Copies to add"}
            },
            "required": ["isbn", "qty"]
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            let args: RestockArgs = normalize(&input)?;
            match store.restock(&args.isbn, args.qty).await {
                Ok(book) => Ok(json!({
                    "title": book.title,
                    "new_stock": book.stock,
                    "message": format!("Restocked {} copies of {}", args.qty, book.title),
                })
                .to_string()),
                Err(err) => store_error_result(err),
            }
        })
    });

    (tool, executor)
}

/// Create the `update_price` tool.
///
/// Returns JSON:
/// ```json
/// {"title": "Clean Code", "new_price": 24.99, "message": "Updated price of Clean Code to $24.99"}
/// ```
#[must_use]
pub fn update_price_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "update_price".to_string(),
        description: "Update the price of a book".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "isbn": {"type": "string", "description": "ISBN of the book"},
                "price": {"type": "number", "minimum": 0, "description": "New price in dollars"}
            },
            "required": ["isbn", "price"]
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            let args: UpdatePriceArgs = normalize(&input)?;
            match store.update_price(&args.isbn, args.price).await {
                Ok(book) => Ok(json!({
                    "title": book.title,
                    "new_price": book.price,
                    "message": format!("Updated price of {} to {}", book.title, book.price),
                })
                .to_string()),
                Err(err) => store_error_result(err),
            }
        })
    });

    (tool, executor)
}

/// Create the `inventory_summary` tool.
///
/// Returns JSON:
/// ```json
/// {"low_stock_books": [...], "count": 2}
/// ```
#[must_use]
pub fn inventory_summary_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "inventory_summary".to_string(),
        description: "Get books that are running low on stock".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            // No required fields; still reject garbage input early.
            let _args: InventorySummaryArgs = normalize(&input)?;
            match store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD).await {
                Ok(books) => Ok(json!({
                    "count": books.len(),
                    "low_stock_books": books,
                })
                .to_string()),
                Err(err) => store_error_result(err),
            }
        })
    });

    (tool, executor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const CLEAN_CODE: &str = "978-0132350884";

    async fn seeded_store() -> BookStore {
        let store = BookStore::in_memory().await.expect("store");
        store.seed_demo().await.expect("seed");
        store
    }

    #[tokio::test]
    async fn test_restock_success() {
        let store = seeded_store().await;
        let (_, executor) = restock_book_tool(store.clone());

        let result = executor(json!({"isbn": CLEAN_CODE, "qty": 5}).to_string())
            .await
            .expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["new_stock"], 15);
        assert_eq!(value["message"], "Restocked 5 copies of Clean Code");

        let book = store.get_book(CLEAN_CODE).await.expect("query").expect("book");
        assert_eq!(book.stock, 15);
    }

    #[tokio::test]
    async fn test_restock_unknown_isbn_is_structured_error() {
        let (_, executor) = restock_book_tool(seeded_store().await);
        let result = executor(json!({"isbn": "ISBN-404", "qty": 5}).to_string())
            .await
            .expect("structured result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["error"], "book with ISBN ISBN-404 not found");
    }

    #[tokio::test]
    async fn test_update_price_success_and_message() {
        let (_, executor) = update_price_tool(seeded_store().await);
        let result = executor(json!({"isbn": CLEAN_CODE, "price": 24.99}).to_string())
            .await
            .expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["new_price"], 24.99);
        assert_eq!(value["message"], "Updated price of Clean Code to $24.99");
    }

    #[tokio::test]
    async fn test_update_price_negative_is_structured_error() {
        let (_, executor) = update_price_tool(seeded_store().await);
        let result = executor(json!({"isbn": CLEAN_CODE, "price": -1.0}).to_string())
            .await
            .expect("structured result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert!(
            value["error"]
                .as_str()
                .expect("error message")
                .contains("non-negative")
        );
    }

    #[tokio::test]
    async fn test_inventory_summary_counts_low_stock() {
        let store = seeded_store().await;
        let (_, executor) = inventory_summary_tool(store);

        // Seed has two books under the threshold (stock 3 and 2).
        let result = executor("{}".to_string()).await.expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["count"], 2);
        assert_eq!(value["low_stock_books"][0]["stock"], 2);
    }
}
