//! Order tools: creation and status lookup.

use crate::args::{normalize, store_error_result};
use bookdesk_core::tool::BoxToolFuture;
use bookdesk_core::{DomainError, NewOrderItem, Tool, ToolError, ToolExecutorFn};
use bookdesk_store::{BookStore, StoreError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Input contract for `create_order`
#[derive(Debug, Deserialize)]
pub struct CreateOrderArgs {
    /// Ordering customer
    pub customer_id: i64,
    /// Requested line items
    pub items: Vec<NewOrderItem>,
}

/// Input contract for `order_status`
#[derive(Debug, Deserialize)]
pub struct OrderStatusArgs {
    /// Order to look up
    pub order_id: i64,
}

/// Create the `create_order` tool.
///
/// On success returns the new order's id, the customer's name, the recorded
/// total, and the post-order stock of every ordered book:
/// ```json
/// {"order_id": 1, "customer": "Alice Johnson", "total_amount": 89.97,
///  "stock_updates": [{"title": "Clean Code", "new_stock": 7}]}
/// ```
#[must_use]
pub fn create_order_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "create_order".to_string(),
        description: "Create a new book order for a customer".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "customer_id": {
                    "type": "integer",
                    "description": "Id of an existing customer"
                },
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "isbn": {"type": "string"},
                            "qty": {"type": "integer", "minimum": 1}
                        },
                        "required": ["isbn", "qty"]
                    },
                    "description": "Books and quantities to order"
                }
            },
            "required": ["customer_id", "items"]
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            let args: CreateOrderArgs = normalize(&input)?;
            match store.create_order(args.customer_id, &args.items).await {
                Ok(order_id) => match store.order_receipt(order_id, &args.items).await {
                    Ok(receipt) => serde_json::to_string(&receipt)
                        .map_err(|e| ToolError::new(format!("failed to serialize receipt: {e}"))),
                    Err(err) => store_error_result(err),
                },
                Err(err) => store_error_result(err),
            }
        })
    });

    (tool, executor)
}

/// Create the `order_status` tool.
///
/// Returns the full order detail, or `{"error": …}` for an unknown id.
#[must_use]
pub fn order_status_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "order_status".to_string(),
        description: "Check the status and contents of an order".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "order_id": {
                    "type": "integer",
                    "description": "Id of the order to look up"
                }
            },
            "required": ["order_id"]
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            let args: OrderStatusArgs = normalize(&input)?;
            match store.order_status(args.order_id).await {
                Ok(Some(detail)) => serde_json::to_string(&detail)
                    .map_err(|e| ToolError::new(format!("failed to serialize order: {e}"))),
                Ok(None) => store_error_result(StoreError::Domain(DomainError::OrderNotFound(
                    args.order_id,
                ))),
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
    async fn test_create_order_success_payload() {
        let store = seeded_store().await;
        let (_, executor) = create_order_tool(store.clone());

        let input = json!({
            "customer_id": 1,
            "items": [{"isbn": CLEAN_CODE, "qty": 3}]
        });
        let result = executor(input.to_string()).await.expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");

        assert_eq!(value["customer"], "Alice Johnson");
        assert_eq!(value["total_amount"], 89.97);
        assert_eq!(value["stock_updates"][0]["title"], "Clean Code");
        assert_eq!(value["stock_updates"][0]["new_stock"], 7);

        // The mutation is observable by a subsequent read.
        let book = store.get_book(CLEAN_CODE).await.expect("query").expect("book");
        assert_eq!(book.stock, 7);
    }

    #[tokio::test]
    async fn test_create_order_insufficient_stock_is_structured_error() {
        let store = seeded_store().await;
        store.set_stock(CLEAN_CODE, 2).await.expect("update");
        let (_, executor) = create_order_tool(store.clone());

        let input = json!({
            "customer_id": 1,
            "items": [{"isbn": CLEAN_CODE, "qty": 3}]
        });
        let result = executor(input.to_string()).await.expect("structured result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert!(
            value["error"]
                .as_str()
                .expect("error message")
                .contains("not enough stock")
        );

        let book = store.get_book(CLEAN_CODE).await.expect("query").expect("book");
        assert_eq!(book.stock, 2);
    }

    #[tokio::test]
    async fn test_create_order_wrapped_args() {
        let (_, executor) = create_order_tool(seeded_store().await);
        let wrapped = json!({
            "customer_id": {
                "customer_id": 2,
                "items": [{"isbn": CLEAN_CODE, "qty": 1}]
            }
        });
        let result = executor(wrapped.to_string()).await.expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["customer"], "Bob Smith");
    }

    #[tokio::test]
    async fn test_order_status_round_trip() {
        let store = seeded_store().await;
        let order_id = store
            .create_order(
                1,
                &[NewOrderItem {
                    isbn: CLEAN_CODE.to_string(),
                    qty: 2,
                }],
            )
            .await
            .expect("order");

        let (_, executor) = order_status_tool(store);
        let result = executor(json!({"order_id": order_id}).to_string())
            .await
            .expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["order_id"], order_id);
        assert_eq!(value["status"], "completed");
        assert_eq!(value["items"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_order_status_unknown_id() {
        let (_, executor) = order_status_tool(seeded_store().await);
        let result = executor(json!({"order_id": 999}).to_string())
            .await
            .expect("structured result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["error"], "order 999 not found");
    }
}
