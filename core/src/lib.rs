//! # Bookdesk Core
//!
//! Domain types and tool abstractions for the Bookdesk desk-agent backend.
//!
//! This crate is the dependency-free heart of the system:
//!
//! - **Entities**: [`book::Book`], [`order::OrderDetail`] and friends
//! - **Money**: exact cents-backed arithmetic for prices and totals
//! - **Errors**: the [`error::DomainError`] taxonomy shared by every layer
//! - **Tools**: the [`tool::Tool`] definition and executor types used by the
//!   dispatch adapter to expose operations to a conversational tool-calling
//!   layer
//!
//! Persistence lives in `bookdesk-store`, dispatch in `bookdesk-tools`, and
//! HTTP in `bookdesk-web`; none of that leaks in here.

pub mod book;
pub mod error;
pub mod money;
pub mod order;
pub mod tool;

pub use book::{Book, SearchField};
pub use error::DomainError;
pub use money::Money;
pub use order::{NewOrderItem, OrderDetail, OrderLine, OrderReceipt, StockUpdate};
pub use tool::{Tool, ToolError, ToolExecutorFn, ToolResult};
