//! Tool types for the conversational tool-calling layer.
//!
//! A [`Tool`] is a name, a human-readable description, and a JSON Schema for
//! its input — the shape tool-calling LLM APIs expect. Executors receive the
//! raw JSON input string and return a JSON string result or a [`ToolError`];
//! tool-calling protocols expect string/struct results, not faults, so
//! executors must never panic or leak a raw error trace.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Definition of a tool exposed to the agent layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique within a registry)
    pub name: String,
    /// What the tool does, for the model
    pub description: String,
    /// JSON Schema describing the expected input object
    pub input_schema: serde_json::Value,
}

/// Result from tool execution: a JSON string on success
pub type ToolResult = Result<String, ToolError>;

/// Tool execution error surfaced to the caller as a structured result
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error message
    pub message: String,
}

impl ToolError {
    /// Creates a new tool error from any displayable message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Boxed future returned by tool executors
pub type BoxToolFuture = Pin<Box<dyn Future<Output = ToolResult> + Send>>;

/// Shared executor closure: raw JSON input string in, [`ToolResult`] out
pub type ToolExecutorFn = Arc<dyn Fn(String) -> BoxToolFuture + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let error = ToolError::new("Tool failed");
        assert_eq!(error.to_string(), "Tool failed");
    }

    #[test]
    fn test_tool_serializes_schema() {
        let tool = Tool {
            name: "find_books".to_string(),
            description: "Search for books".to_string(),
            input_schema: serde_json::json!({"type": "object"}),
        };
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["name"], "find_books");
        assert_eq!(json["input_schema"]["type"], "object");
    }
}
