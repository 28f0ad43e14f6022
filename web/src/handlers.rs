//! HTTP handlers for the desk-agent operations.
//!
//! Request bodies deserialize into the same input contracts the tool
//! dispatch adapter uses, so both surfaces accept identical shapes.

use crate::{AppError, AppState, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookdesk_core::{Book, Money, OrderDetail, OrderReceipt, Tool};
use bookdesk_store::DEFAULT_LOW_STOCK_THRESHOLD;
use bookdesk_tools::catalog::FindBooksArgs;
use bookdesk_tools::inventory::{RestockArgs, UpdatePriceArgs};
use bookdesk_tools::orders::CreateOrderArgs;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Response for `find_books`
#[derive(Debug, Serialize)]
pub struct FindBooksResponse {
    /// Matching books (possibly empty)
    pub books: Vec<Book>,
}

/// `POST /tools/find_books`
pub async fn find_books(
    State(state): State<AppState>,
    Json(req): Json<FindBooksArgs>,
) -> WebResult<Json<FindBooksResponse>> {
    let books = state.store.find_books(&req.q, req.by).await?;
    Ok(Json(FindBooksResponse { books }))
}

/// `POST /tools/create_order`
#[tracing::instrument(skip(state, req), fields(customer_id = req.customer_id))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderArgs>,
) -> WebResult<Json<OrderReceipt>> {
    let order_id = state.store.create_order(req.customer_id, &req.items).await?;
    let receipt = state.store.order_receipt(order_id, &req.items).await?;
    Ok(Json(receipt))
}

/// Response for `restock_book`
#[derive(Debug, Serialize)]
pub struct RestockResponse {
    /// Book title
    pub title: String,
    /// Stock after restocking
    pub new_stock: i64,
    /// Human-readable confirmation
    pub message: String,
}

/// `POST /tools/restock_book`
pub async fn restock_book(
    State(state): State<AppState>,
    Json(req): Json<RestockArgs>,
) -> WebResult<Json<RestockResponse>> {
    let book = state.store.restock(&req.isbn, req.qty).await?;
    Ok(Json(RestockResponse {
        message: format!("Restocked {} copies of {}", req.qty, book.title),
        new_stock: book.stock,
        title: book.title,
    }))
}

/// Response for `update_price`
#[derive(Debug, Serialize)]
pub struct UpdatePriceResponse {
    /// Book title
    pub title: String,
    /// Price after the update
    pub new_price: Money,
    /// Human-readable confirmation
    pub message: String,
}

/// `POST /tools/update_price`
pub async fn update_price(
    State(state): State<AppState>,
    Json(req): Json<UpdatePriceArgs>,
) -> WebResult<Json<UpdatePriceResponse>> {
    let book = state.store.update_price(&req.isbn, req.price).await?;
    Ok(Json(UpdatePriceResponse {
        message: format!("Updated price of {} to {}", book.title, book.price),
        new_price: book.price,
        title: book.title,
    }))
}

/// `GET /tools/order_status/{order_id}`
pub async fn order_status(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> WebResult<Json<OrderDetail>> {
    let detail = state
        .store
        .order_status(order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("order {order_id} not found")))?;
    Ok(Json(detail))
}

/// Response for `inventory_summary`
#[derive(Debug, Serialize)]
pub struct InventorySummaryResponse {
    /// Books under the low-stock threshold, ascending by stock
    pub low_stock_books: Vec<Book>,
    /// Number of books listed
    pub count: usize,
}

/// `GET /tools/inventory_summary`
pub async fn inventory_summary(
    State(state): State<AppState>,
) -> WebResult<Json<InventorySummaryResponse>> {
    let low_stock_books = state.store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD).await?;
    Ok(Json(InventorySummaryResponse {
        count: low_stock_books.len(),
        low_stock_books,
    }))
}

/// `GET /tools` — tool definitions for the conversational layer
#[allow(clippy::unused_async)]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(state.registry.get_tools())
}

/// Request for generic tool invocation
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// Registered tool name
    pub name: String,
    /// Tool input object (flat or wrapped shape)
    #[serde(default = "empty_object")]
    pub input: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// `POST /tools/invoke` — dispatch a call through the tool registry, exactly
/// as the conversational layer does.
pub async fn invoke_tool(
    State(state): State<AppState>,
    Json(req): Json<InvokeRequest>,
) -> WebResult<Json<Value>> {
    match state.registry.execute(&req.name, req.input.to_string()).await {
        Ok(result) => {
            let value = serde_json::from_str(&result)
                .map_err(|e| AppError::internal(format!("tool returned invalid JSON: {e}")))?;
            Ok(Json(value))
        }
        Err(err) => Err(AppError::bad_request(err.message)),
    }
}
