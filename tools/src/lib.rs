//! # Bookdesk Tools
//!
//! The tool dispatch adapter: exposes the store's operations to a
//! conversational tool-calling layer as six named tools, each with a JSON
//! Schema and an executor closure over a shared [`BookStore`].
//!
//! ## Contract
//!
//! - Arguments may arrive flat (`{"isbn": …, "qty": …}`) or wrapped inside a
//!   single field the way schema-validated caller objects serialize
//!   (`{"isbn": {"isbn": …, "qty": …}}`). One normalization step per
//!   operation accepts both; see [`args`].
//! - Domain failures (not found, invalid input, insufficient stock) come back
//!   as an `Ok` result carrying `{"error": message}` — tool-calling protocols
//!   expect string/struct results, not faults.
//! - Malformed arguments and infrastructure failures come back as
//!   [`ToolError`](bookdesk_core::ToolError); infrastructure detail is logged,
//!   never sent to the caller.
//!
//! ## Modules
//!
//! - `catalog`: `find_books`
//! - `orders`: `create_order`, `order_status`
//! - `inventory`: `restock_book`, `update_price`, `inventory_summary`
//! - `registry`: [`ToolRegistry`] for execution by name
//! - `args`: argument normalization shared by every tool

pub mod args;
pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod registry;

pub use registry::ToolRegistry;

use bookdesk_store::BookStore;

/// Builds a registry holding all six desk tools bound to `store`.
#[must_use]
pub fn desk_registry(store: &BookStore) -> ToolRegistry {
    let registry = ToolRegistry::new();
    let (tool, executor) = catalog::find_books_tool(store.clone());
    registry.register(tool, executor);
    let (tool, executor) = orders::create_order_tool(store.clone());
    registry.register(tool, executor);
    let (tool, executor) = orders::order_status_tool(store.clone());
    registry.register(tool, executor);
    let (tool, executor) = inventory::restock_book_tool(store.clone());
    registry.register(tool, executor);
    let (tool, executor) = inventory::update_price_tool(store.clone());
    registry.register(tool, executor);
    let (tool, executor) = inventory::inventory_summary_tool(store.clone());
    registry.register(tool, executor);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn desk_registry_holds_all_six_tools() {
        let store = BookStore::in_memory().await.expect("store");
        let registry = desk_registry(&store);
        assert_eq!(
            registry.list_tools(),
            vec![
                "create_order",
                "find_books",
                "inventory_summary",
                "order_status",
                "restock_book",
                "update_price",
            ]
        );
    }
}
