//! Tool registry for dispatch by name.
//!
//! The registry stores tool definitions and their executors, allowing the
//! conversational layer to list tool schemas and execute tools by name.

use bookdesk_core::{Tool, ToolError, ToolExecutorFn, ToolResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe tool registry
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, (Tool, ToolExecutorFn)>>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a tool with its executor.
    ///
    /// If a tool with the same name already exists it is replaced and this
    /// method returns `true`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[allow(clippy::expect_used)]
    pub fn register(&self, tool: Tool, executor: ToolExecutorFn) -> bool {
        let mut tools = self
            .tools
            .write()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.insert(tool.name.clone(), (tool, executor)).is_some()
    }

    /// Execute a tool by name with a raw JSON input string.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is not registered or its executor
    /// fails.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[allow(clippy::expect_used)]
    pub async fn execute(&self, name: &str, input: String) -> ToolResult {
        // Clone the executor out so the lock is not held across the await.
        let executor = {
            let tools = self
                .tools
                .read()
                .expect("Tool registry lock poisoned - indicates a panic in another thread");
            tools.get(name).map(|(_, executor)| executor.clone())
        };

        match executor {
            Some(executor) => executor(input).await,
            None => Err(ToolError::new(format!("Tool not found: {name}"))),
        }
    }

    /// All registered tool names, sorted alphabetically
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn list_tools(&self) -> Vec<String> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// All registered tool definitions sorted by name (for the agent layer to
    /// forward to an LLM API)
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get_tools(&self) -> Vec<Tool> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut tool_list: Vec<Tool> = tools.values().map(|(tool, _)| tool.clone()).collect();
        tool_list.sort_by(|a, b| a.name.cmp(&b.name));
        tool_list
    }

    /// Number of registered tools
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn count(&self) -> usize {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdesk_core::tool::BoxToolFuture;

    fn echo_tool(name: &str) -> (Tool, ToolExecutorFn) {
        let tool = Tool {
            name: name.to_string(),
            description: "echoes its input".to_string(),
            input_schema: serde_json::json!({"type": "object"}),
        };
        let executor: ToolExecutorFn =
            Arc::new(move |input: String| -> BoxToolFuture { Box::pin(async move { Ok(input) }) });
        (tool, executor)
    }

    #[test]
    fn test_registry_register_and_replace() {
        let registry = ToolRegistry::new();
        let (tool, executor) = echo_tool("echo");
        assert!(!registry.register(tool, executor));
        assert_eq!(registry.count(), 1);

        let (tool, executor) = echo_tool("echo");
        assert!(registry.register(tool, executor));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_registry_lists_sorted() {
        let registry = ToolRegistry::new();
        let (tool, executor) = echo_tool("b_tool");
        registry.register(tool, executor);
        let (tool, executor) = echo_tool("a_tool");
        registry.register(tool, executor);

        assert_eq!(registry.list_tools(), vec!["a_tool", "b_tool"]);
        assert_eq!(registry.get_tools()[0].name, "a_tool");
    }

    #[tokio::test]
    async fn test_registry_execute() {
        let registry = ToolRegistry::new();
        let (tool, executor) = echo_tool("echo");
        registry.register(tool, executor);

        let result = registry
            .execute("echo", "{\"hello\":1}".to_string())
            .await
            .expect("should succeed");
        assert_eq!(result, "{\"hello\":1}");
    }

    #[tokio::test]
    async fn test_registry_execute_not_found() {
        let registry = ToolRegistry::new();
        let err = registry
            .execute("nonexistent", "{}".to_string())
            .await
            .expect_err("should fail");
        assert!(err.message.contains("Tool not found"));
    }
}
