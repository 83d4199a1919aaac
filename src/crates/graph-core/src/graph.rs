//! Graph structure: nodes, direct edges and chain validation
//!
//! A [`Graph`] is the mutable description assembled by
//! [`StateGraph`](crate::builder::StateGraph). Topology is static and linear:
//! every node has exactly one outgoing [`Edge`], the chain starts at the
//! entry node and terminates at [`END`]. Conditional behaviour belongs inside
//! nodes, never in the edges.
//!
//! [`Graph::validate`] checks those rules and resolves the execution order
//! that [`CompiledGraph`](crate::compiled::CompiledGraph) walks.

use crate::error::Result as GraphResult;
use crate::state::GraphState;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Node identifier
pub type NodeId = String;

/// Virtual entry marker
pub const START: &str = "__start__";

/// Terminal marker; an edge to `END` finishes the chain
pub const END: &str = "__end__";

/// Future returned by a node executor
pub type NodeFuture<U> = Pin<Box<dyn Future<Output = GraphResult<U>> + Send>>;

/// Async node function: receives a snapshot of the current state and returns a partial update
pub type NodeExecutor<S> =
    Arc<dyn Fn(S) -> NodeFuture<<S as GraphState>::Update> + Send + Sync>;

/// Outgoing edge of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    /// Unconditional transition to the named node (or [`END`])
    Direct(NodeId),
}

impl Edge {
    /// Target node of this edge
    pub fn target(&self) -> &str {
        match self {
            Edge::Direct(to) => to,
        }
    }
}

/// A named node and its executor
pub struct NodeSpec<S: GraphState> {
    /// Node name
    pub name: String,

    /// Async function executed for this node
    pub executor: NodeExecutor<S>,
}

impl<S: GraphState> Clone for NodeSpec<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<S: GraphState> Debug for NodeSpec<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeSpec")
            .field("name", &self.name)
            .field("executor", &"<function>")
            .finish()
    }
}

/// Graph description prior to compilation
pub struct Graph<S: GraphState> {
    /// Registered nodes by name
    pub nodes: HashMap<NodeId, NodeSpec<S>>,

    /// Outgoing edges by source node
    pub edges: HashMap<NodeId, Vec<Edge>>,

    /// First node to run; [`START`] until an entry is set
    pub entry: NodeId,
}

impl<S: GraphState> Clone for Graph<S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            entry: self.entry.clone(),
        }
    }
}

impl<S: GraphState> Debug for Graph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("entry", &self.entry)
            .finish()
    }
}

impl<S: GraphState> Graph<S> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            entry: START.to_string(),
        }
    }

    pub fn add_node(&mut self, id: NodeId, spec: NodeSpec<S>) {
        self.nodes.insert(id, spec);
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.entry(from).or_default().push(Edge::Direct(to));
    }

    pub fn set_entry(&mut self, node: NodeId) {
        self.entry = node;
    }

    /// Validate the chain and return node names in execution order.
    pub fn validate(&self) -> Result<Vec<NodeId>, String> {
        if self.nodes.is_empty() {
            return Err("Graph has no nodes".to_string());
        }

        for name in self.nodes.keys() {
            if name.is_empty() {
                return Err("Node names must not be empty".to_string());
            }
            if name == START || name == END {
                return Err(format!("Node name {} is reserved", name));
            }
        }

        if self.entry == START {
            return Err("No entry point set".to_string());
        }
        if !self.nodes.contains_key(&self.entry) {
            return Err(format!("Entry point {} does not exist", self.entry));
        }

        for (from, edges) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(format!("Edge source {} does not exist", from));
            }
            if edges.len() > 1 {
                return Err(format!(
                    "Node {} has {} outgoing edges; only one is allowed",
                    from,
                    edges.len()
                ));
            }
            for edge in edges {
                let to = edge.target();
                if !self.nodes.contains_key(to) && to != END {
                    return Err(format!("Edge target {} does not exist", to));
                }
            }
        }

        let mut order = Vec::with_capacity(self.nodes.len());
        let mut visited = HashSet::new();
        let mut current = self.entry.clone();

        while current != END {
            if !visited.insert(current.clone()) {
                return Err(format!("Cycle detected at node {}", current));
            }
            let next = self
                .edges
                .get(&current)
                .and_then(|edges| edges.first())
                .map(|edge| edge.target().to_string())
                .ok_or_else(|| format!("Node {} has no outgoing edge", current))?;
            order.push(current);
            current = next;
        }

        if order.len() != self.nodes.len() {
            let mut unreachable: Vec<&str> = self
                .nodes
                .keys()
                .filter(|name| !visited.contains(*name))
                .map(String::as_str)
                .collect();
            unreachable.sort_unstable();
            return Err(format!(
                "Nodes not reachable from entry: {}",
                unreachable.join(", ")
            ));
        }

        Ok(order)
    }
}

impl<S: GraphState> Default for Graph<S> {
    fn default() -> Self {
        Self::new()
    }
}
