//! StateGraph builder API
//!
//! [`StateGraph`] is the entry point for assembling a pipeline: register
//! named nodes, connect them with direct edges, set the entry, then
//! [`compile`](StateGraph::compile) into an executable
//! [`CompiledGraph`].
//!
//! ```rust
//! use graph_core::{StateGraph, END};
//! use serde_json::{json, Value};
//!
//! # async fn run() -> graph_core::Result<()> {
//! let mut graph: StateGraph<Value> = StateGraph::new();
//!
//! graph.add_node("shout", |state: Value| async move {
//!     let topic = state["topic"].as_str().unwrap_or_default().to_uppercase();
//!     Ok(json!({"shouted": topic}))
//! });
//! graph.set_entry("shout");
//! graph.add_edge("shout", END);
//!
//! let compiled = graph.compile()?;
//! let result = compiled.invoke(json!({"topic": "cats"})).await?;
//! assert_eq!(result["shouted"], "CATS");
//! # Ok(())
//! # }
//! ```

use crate::compiled::CompiledGraph;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeExecutor, NodeFuture, NodeId, NodeSpec, END};
use crate::state::GraphState;
use std::future::Future;
use std::sync::Arc;

/// Builder for a linear state graph
pub struct StateGraph<S: GraphState> {
    graph: Graph<S>,
}

impl<S: GraphState> StateGraph<S> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Register a node from an async function.
    ///
    /// The function receives a clone of the current state and returns the
    /// partial update to merge. Registering the same name twice replaces the
    /// earlier node.
    pub fn add_node<F, Fut>(&mut self, id: impl Into<NodeId>, executor: F) -> &mut Self
    where
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<S::Update>> + Send + 'static,
    {
        let executor: NodeExecutor<S> = Arc::new(move |state: S| -> NodeFuture<S::Update> {
            Box::pin(executor(state))
        });
        self.add_node_with_executor(id, executor)
    }

    /// Register a node from an already boxed executor.
    pub fn add_node_with_executor(
        &mut self,
        id: impl Into<NodeId>,
        executor: NodeExecutor<S>,
    ) -> &mut Self {
        let id = id.into();
        let spec = NodeSpec {
            name: id.clone(),
            executor,
        };
        self.graph.add_node(id, spec);
        self
    }

    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> &mut Self {
        self.graph.add_edge(from.into(), to.into());
        self
    }

    pub fn set_entry(&mut self, node: impl Into<NodeId>) -> &mut Self {
        self.graph.set_entry(node.into());
        self
    }

    /// Mark `node` as the last node in the chain.
    pub fn add_finish(&mut self, node: impl Into<NodeId>) -> &mut Self {
        self.graph.add_edge(node.into(), END.to_string());
        self
    }

    /// Validate the chain and produce an executable graph.
    pub fn compile(self) -> Result<CompiledGraph<S>> {
        let order = self.graph.validate().map_err(GraphError::Validation)?;
        tracing::debug!(steps = ?order, "Compiled state graph");
        Ok(CompiledGraph::new(self.graph, order))
    }
}

impl<S: GraphState> Default for StateGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_compile_chain() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("a", |_state: Value| async move { Ok(json!({})) })
            .add_node("b", |_state: Value| async move { Ok(json!({})) })
            .set_entry("a")
            .add_edge("a", "b")
            .add_finish("b");

        let compiled = graph.compile().unwrap();
        assert_eq!(compiled.steps(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_compile_without_entry_fails() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("a", |_state: Value| async move { Ok(json!({})) })
            .add_finish("a");

        let err = graph.compile().unwrap_err();
        assert!(matches!(err, GraphError::Validation(msg) if msg.contains("entry")));
    }

    #[test]
    fn test_compile_unknown_edge_target_fails() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("a", |_state: Value| async move { Ok(json!({})) })
            .set_entry("a")
            .add_edge("a", "missing");

        assert!(matches!(graph.compile(), Err(GraphError::Validation(_))));
    }
}
