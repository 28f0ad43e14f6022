//! Application state for Axum handlers.

use bookdesk_store::BookStore;
use bookdesk_tools::{desk_registry, ToolRegistry};

/// Application state shared across all HTTP handlers.
///
/// The store is the single injected dependency; the tool registry is built
/// from it at construction time so both surfaces dispatch into the same
/// store.
#[derive(Clone)]
pub struct AppState {
    /// Book/order store
    pub store: BookStore,
    /// Registry with the six desk tools bound to `store`
    pub registry: ToolRegistry,
}

impl AppState {
    /// Create application state around a store.
    #[must_use]
    pub fn new(store: BookStore) -> Self {
        let registry = desk_registry(&store);
        Self { store, registry }
    }
}
