//! Catalog search tool.

use crate::args::{normalize, store_error_result};
use bookdesk_core::tool::BoxToolFuture;
use bookdesk_core::{SearchField, Tool, ToolExecutorFn};
use bookdesk_store::BookStore;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Input contract for `find_books`
#[derive(Debug, Deserialize)]
pub struct FindBooksArgs {
    /// Search query (substring)
    pub q: String,
    /// Field to match against (defaults to title)
    #[serde(default)]
    pub by: SearchField,
}

/// Create the `find_books` tool.
///
/// Returns JSON:
/// ```json
/// {"books": [{"isbn": "…", "title": "…", "author": "…", "price": 29.99, "stock": 10}]}
/// ```
#[must_use]
pub fn find_books_tool(store: BookStore) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "find_books".to_string(),
        description: "Search for books by title or author".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "q": {
                    "type": "string",
                    "description": "Search query, matched as a case-insensitive substring"
                },
                "by": {
                    "type": "string",
                    "enum": ["title", "author"],
                    "description": "Field to search (default: title)"
                }
            },
            "required": ["q"]
        }),
    };

    let executor: ToolExecutorFn = Arc::new(move |input: String| -> BoxToolFuture {
        let store = store.clone();
        Box::pin(async move {
            let args: FindBooksArgs = normalize(&input)?;
            match store.find_books(&args.q, args.by).await {
                Ok(books) => Ok(json!({ "books": books }).to_string()),
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

    async fn seeded_store() -> BookStore {
        let store = BookStore::in_memory().await.expect("store");
        store.seed_demo().await.expect("seed");
        store
    }

    #[tokio::test]
    async fn test_find_books_flat_args() {
        let (_, executor) = find_books_tool(seeded_store().await);
        let result = executor(json!({"q": "clean"}).to_string())
            .await
            .expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["books"][0]["title"], "Clean Code");
        assert_eq!(value["books"][0]["price"], 29.99);
    }

    #[tokio::test]
    async fn test_find_books_by_author_wrapped_args() {
        let (_, executor) = find_books_tool(seeded_store().await);
        let wrapped = json!({"q": {"q": "fowler", "by": "author"}});
        let result = executor(wrapped.to_string()).await.expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["books"][0]["title"], "Refactoring");
    }

    #[tokio::test]
    async fn test_find_books_no_match_is_empty_list() {
        let (_, executor) = find_books_tool(seeded_store().await);
        let result = executor(json!({"q": "zzz"}).to_string())
            .await
            .expect("tool result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["books"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_find_books_missing_query_is_tool_error() {
        let (_, executor) = find_books_tool(seeded_store().await);
        let err = executor(json!({"by": "title"}).to_string())
            .await
            .expect_err("must fail");
        assert!(err.message.contains("malformed arguments"));
    }
}
