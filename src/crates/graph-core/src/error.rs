//! Error types and error handling for graph operations
//!
//! All fallible operations in this crate return [`Result`], an alias over
//! [`GraphError`]. Errors implement `std::error::Error` via `thiserror`.
//!
//! # Error Hierarchy
//!
//! ```text
//! GraphError
//! ├── Validation         - Graph structure or input state errors
//! ├── NodeExecution      - A node failed; wraps the underlying error
//! ├── Model              - Chat model call failed (network, auth, rate limit)
//! └── Serialization      - JSON errors
//! ```
//!
//! # Matching Specific Errors
//!
//! ```rust
//! use graph_core::error::GraphError;
//!
//! fn handle_error(err: &GraphError) -> String {
//!     if err.is_model_failure() {
//!         return format!("model unavailable: {}", err.root_cause());
//!     }
//!     match err {
//!         GraphError::Validation(msg) => format!("invalid: {}", msg),
//!         GraphError::NodeExecution { node, .. } => format!("node '{}' failed", node),
//!         _ => format!("error: {}", err),
//!     }
//! }
//! ```
//!
//! # Propagation
//!
//! The engine never swallows node failures. When a node returns an error the
//! run stops, no partial state is returned, and the error is wrapped in
//! [`GraphError::NodeExecution`] carrying the node name. The original error is
//! kept as the `source` so callers can still ask whether the root cause was a
//! model failure.

use thiserror::Error;

/// Convenience result type using [`GraphError`]
///
/// # Examples
///
/// ```rust
/// use graph_core::error::{Result, GraphError};
///
/// fn validate_input(data: &str) -> Result<()> {
///     if data.is_empty() {
///         return Err(GraphError::Validation("Input cannot be empty".to_string()));
///     }
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph structure or input validation failed
    ///
    /// Returned by `compile()` when the chain is malformed, and by `invoke()`
    /// when the input state is rejected before any node runs.
    ///
    /// ```rust
    /// use graph_core::error::GraphError;
    ///
    /// let err = GraphError::Validation("Entry point 'start' does not exist".to_string());
    /// assert!(err.to_string().contains("start"));
    /// ```
    #[error("Graph validation failed: {0}")]
    Validation(String),

    /// A node failed during execution
    ///
    /// ```rust
    /// use graph_core::error::GraphError;
    ///
    /// let err = GraphError::node_execution("critic", GraphError::Model("timeout".into()));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Node 'critic' execution failed: Model call failed: timeout"
    /// );
    /// ```
    #[error("Node '{node}' execution failed: {source}")]
    NodeExecution {
        /// Name of the node that failed
        node: String,
        /// Underlying error returned by the node
        #[source]
        source: Box<GraphError>,
    },

    /// The chat model call failed
    ///
    /// Covers transport errors, authentication failures, rate limiting and
    /// malformed provider responses. Providers convert their own error types
    /// into this variant.
    #[error("Model call failed: {0}")]
    Model(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    /// Wrap an error with the name of the node it came from
    pub fn node_execution(node: impl Into<String>, source: GraphError) -> Self {
        Self::NodeExecution {
            node: node.into(),
            source: Box::new(source),
        }
    }

    /// Name of the failing node, if this error carries node context
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::NodeExecution { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Innermost error, looking through any node wrappers
    pub fn root_cause(&self) -> &GraphError {
        let mut current = self;
        while let Self::NodeExecution { source, .. } = current {
            current = source;
        }
        current
    }

    /// Whether the root cause is a failed chat model call
    pub fn is_model_failure(&self) -> bool {
        matches!(self.root_cause(), Self::Model(_))
    }
}
