//! Compiled graph execution
//!
//! A [`CompiledGraph`] is an immutable, validated chain. `invoke` walks the
//! nodes in their declared order, hands each one a snapshot of the running
//! state and merges the returned update before moving on. Nodes run strictly
//! one after another; the next node never starts until the previous one's
//! future has completed.
//!
//! Failure semantics: the first node error aborts the run. The error is
//! wrapped with the node name and returned; the partially merged state is
//! discarded.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use crate::state::GraphState;
use crate::visualization::{visualize, VisualizationOptions};
use std::time::Instant;

/// An executable, validated chain of nodes
pub struct CompiledGraph<S: GraphState> {
    pub(crate) graph: Graph<S>,
    pub(crate) order: Vec<NodeId>,
}

impl<S: GraphState> Clone for CompiledGraph<S> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            order: self.order.clone(),
        }
    }
}

impl<S: GraphState> std::fmt::Debug for CompiledGraph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledGraph")
            .field("order", &self.order)
            .finish()
    }
}

impl<S: GraphState> CompiledGraph<S> {
    pub(crate) fn new(graph: Graph<S>, order: Vec<NodeId>) -> Self {
        Self { graph, order }
    }

    /// Node names in execution order
    pub fn steps(&self) -> &[NodeId] {
        &self.order
    }

    /// Render the chain; see [`crate::visualization`]
    pub fn visualize(&self, options: &VisualizationOptions) -> String {
        visualize(&self.order, options)
    }

    /// Render the chain as a Mermaid flowchart
    pub fn to_mermaid(&self) -> String {
        self.visualize(&VisualizationOptions::mermaid())
    }

    /// Run every node in order and return the final state.
    #[tracing::instrument(skip(self, input), fields(node_count = self.order.len()))]
    pub async fn invoke(&self, input: S) -> Result<S> {
        input.validate()?;

        tracing::info!("Starting graph execution");
        let started = Instant::now();
        let mut state = input;

        for name in &self.order {
            let spec = self.graph.nodes.get(name).ok_or_else(|| {
                GraphError::Validation(format!("Node {} missing from compiled graph", name))
            })?;

            let node_started = Instant::now();
            let update = (spec.executor)(state.clone()).await.map_err(|e| {
                tracing::warn!(node = %name, error = %e, "Node execution failed");
                GraphError::node_execution(name.clone(), e)
            })?;
            state.apply(update);

            tracing::debug!(
                node = %name,
                elapsed_ms = node_started.elapsed().as_millis() as u64,
                "Node completed"
            );
        }

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Graph execution completed successfully"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::StateGraph;
    use crate::error::GraphError;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_invoke_merges_in_order() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("first", |_state: Value| async move {
                Ok(json!({"trail": "first", "a": 1}))
            })
            .add_node("second", |state: Value| async move {
                let trail = format!("{}>second", state["trail"].as_str().unwrap_or_default());
                Ok(json!({"trail": trail}))
            })
            .set_entry("first")
            .add_edge("first", "second")
            .add_finish("second");

        let compiled = graph.compile().unwrap();
        let result = compiled.invoke(json!({"topic": "cats"})).await.unwrap();

        assert_eq!(result, json!({"topic": "cats", "trail": "first>second", "a": 1}));
    }

    #[tokio::test]
    async fn test_invoke_stops_at_first_failure() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = later_calls.clone();

        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("broken", |_state: Value| async move {
                Err::<Value, _>(GraphError::Model("connection refused".to_string()))
            })
            .add_node("after", move |_state: Value| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(json!({}))
                }
            })
            .set_entry("broken")
            .add_edge("broken", "after")
            .add_finish("after");

        let compiled = graph.compile().unwrap();
        let err = compiled.invoke(json!({"topic": "x"})).await.unwrap_err();

        assert_eq!(err.node(), Some("broken"));
        assert!(err.is_model_failure());
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invoke_rejects_invalid_input() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("only", |_state: Value| async move { Ok(json!({})) })
            .set_entry("only")
            .add_finish("only");

        let compiled = graph.compile().unwrap();
        let err = compiled.invoke(json!([1, 2, 3])).await.unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)));
    }

    #[test]
    fn test_to_mermaid_uses_steps() {
        let mut graph: StateGraph<Value> = StateGraph::new();
        graph
            .add_node("tell_joke", |_state: Value| async move { Ok(json!({})) })
            .set_entry("tell_joke")
            .add_finish("tell_joke");

        let mermaid = graph.compile().unwrap().to_mermaid();
        assert!(mermaid.contains("START --> tell_joke"));
        assert!(mermaid.contains("tell_joke --> END"));
    }
}
