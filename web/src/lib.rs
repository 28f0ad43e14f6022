//! # Bookdesk Web
//!
//! Axum HTTP surface for the Bookdesk desk agent.
//!
//! Each route is a thin shell over the store and the tool dispatch adapter:
//!
//! 1. **Extract** the request body into the operation's input contract (the
//!    same serde contracts the tool adapter uses)
//! 2. **Execute** against the injected [`bookdesk_store::BookStore`]
//! 3. **Map** domain failures to 4xx and infrastructure failures to a
//!    generic 5xx via [`AppError`]
//!
//! The `/tools` and `/tools/invoke` routes additionally expose the tool
//! registry itself, so a conversational layer can fetch tool schemas and
//! dispatch calls without knowing the individual endpoints.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Builds the application router with all routes and middleware.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/tools", get(handlers::list_tools))
        .route("/tools/invoke", post(handlers::invoke_tool))
        .route("/tools/find_books", post(handlers::find_books))
        .route("/tools/create_order", post(handlers::create_order))
        .route("/tools/restock_book", post(handlers::restock_book))
        .route("/tools/update_price", post(handlers::update_price))
        .route("/tools/order_status/:order_id", get(handlers::order_status))
        .route("/tools/inventory_summary", get(handlers::inventory_summary))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
