//! Order types.
//!
//! Orders are created once, atomically, with their line items and are
//! immutable afterwards. The recorded unit prices are snapshots taken at
//! order time; later price changes never rewrite an existing order.

use crate::money::Money;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A requested line item for a new order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// ISBN of the book being ordered
    pub isbn: String,
    /// Copies requested (must be positive)
    pub qty: i64,
}

/// A line of an existing order, joined with the book title for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// ISBN of the ordered book
    pub isbn: String,
    /// Book title at lookup time
    pub title: String,
    /// Copies ordered
    pub quantity: i64,
    /// Unit price captured when the order was created
    pub unit_price: Money,
}

/// Post-order stock level of one ordered book
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    /// Book title
    pub title: String,
    /// Stock after the order
    pub new_stock: i64,
}

/// Display payload for a just-created order: who ordered, what it cost, and
/// where stock landed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Newly created order id
    pub order_id: i64,
    /// Customer name
    pub customer: String,
    /// Recorded order total
    pub total_amount: Money,
    /// Stock after the order, per ordered book
    pub stock_updates: Vec<StockUpdate>,
}

/// Full detail of an order, including the customer's name and all lines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Order id
    pub order_id: i64,
    /// Owning customer's id
    pub customer_id: i64,
    /// Owning customer's name
    pub customer_name: String,
    /// Order status (fixed to `"completed"` at creation)
    pub status: String,
    /// Total amount captured when the order was created
    pub total_amount: Money,
    /// Creation timestamp assigned by the store
    pub created_at: NaiveDateTime,
    /// Order lines
    pub items: Vec<OrderLine>,
}
