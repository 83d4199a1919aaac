//! # graph-core
//!
//! A small LangGraph-style execution engine for linear LLM pipelines.
//!
//! A pipeline is a fixed chain of named nodes. Each node receives a snapshot
//! of a typed state record, may call a language model, and returns a partial
//! update that the engine merges back into the record before the next node
//! runs.
//!
//! ```text
//! {topic} ──► node A ──► node B ──► ... ──► END ──► final state
//!              │          │
//!              └─ update ─┴─ merged into the running state
//! ```
//!
//! ## Building Blocks
//!
//! - [`StateGraph`] - builder: add nodes, connect edges, set entry, compile
//! - [`CompiledGraph`] - validated chain with `invoke()`
//! - [`GraphState`] - merge contract between a state record and its updates
//! - [`MemoryStore`] - shared append-only text memory with exact-match dedup
//! - [`llm::ChatModel`] - the trait nodes use to call a model
//! - [`GraphError`] - error type; see [`error`] for propagation rules
//!
//! ## Example
//!
//! ```rust
//! use graph_core::{StateGraph, END};
//! use serde_json::{json, Value};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> graph_core::Result<()> {
//! let mut graph: StateGraph<Value> = StateGraph::new();
//! graph
//!     .add_node("greet", |state: Value| async move {
//!         let name = state["name"].as_str().unwrap_or("world").to_string();
//!         Ok(json!({"greeting": format!("hello {}", name)}))
//!     })
//!     .set_entry("greet")
//!     .add_edge("greet", END);
//!
//! let result = graph.compile()?.invoke(json!({"name": "rust"})).await?;
//! assert_eq!(result["greeting"], "hello rust");
//! assert_eq!(result["name"], "rust");
//! # Ok(())
//! # }
//! ```
//!
//! Branching is deliberately absent from the topology. A node that needs to
//! behave conditionally inspects the state itself and decides what to return.

pub mod builder;
pub mod compiled;
pub mod error;
pub mod graph;
pub mod llm;
pub mod messages;
pub mod state;
pub mod store;
pub mod visualization;

// Re-export main types
pub use builder::StateGraph;
pub use compiled::CompiledGraph;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, NodeExecutor, NodeFuture, NodeId, NodeSpec, END, START};
pub use messages::{Message, MessageRole};
pub use state::GraphState;
pub use store::{MemoryStore, RecordOutcome};
pub use visualization::{visualize, VisualizationFormat, VisualizationOptions};
