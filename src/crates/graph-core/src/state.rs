//! State records threaded through a graph
//!
//! A graph runs over one state value. Every node receives the current state
//! and returns a partial *update*; the engine folds that update into the
//! running state with [`GraphState::apply`]. The merge rule is the same for
//! every implementation in this workspace: fields present in the update
//! overwrite, everything else persists unchanged. Nothing is ever removed.
//!
//! Typed records implement the trait with an update struct whose fields are
//! all `Option`. An untyped implementation for [`serde_json::Value`] is
//! provided for ad-hoc graphs and tests; it performs a shallow object merge.
//!
//! ```rust
//! use graph_core::state::GraphState;
//! use serde_json::json;
//!
//! let mut state = json!({"topic": "cats", "joke": "old"});
//! state.apply(json!({"joke": "new"}));
//! assert_eq!(state, json!({"topic": "cats", "joke": "new"}));
//! ```

use crate::error::{GraphError, Result};
use serde_json::Value;

/// A state record that can absorb partial updates from nodes
pub trait GraphState: Clone + Send + Sync + 'static {
    /// Partial state returned by a single node
    type Update: Send + 'static;

    /// Merge a node's update into this state.
    ///
    /// Keys present in `update` overwrite; all others are left as they are.
    fn apply(&mut self, update: Self::Update);

    /// Check the state before the first node runs.
    ///
    /// The default accepts everything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl GraphState for Value {
    type Update = Value;

    fn apply(&mut self, update: Value) {
        match update {
            Value::Object(incoming) if self.is_object() => {
                if let Some(current) = self.as_object_mut() {
                    for (key, value) in incoming {
                        current.insert(key, value);
                    }
                }
            }
            // Non-object updates replace the whole value
            other => *self = other,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.is_object() {
            Ok(())
        } else {
            Err(GraphError::Validation(
                "graph input must be a JSON object".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_merge_overwrites_and_keeps() {
        let mut state = json!({"topic": "cats", "joke": "a"});
        state.apply(json!({"critique": "meh"}));
        state.apply(json!({"joke": "b"}));

        assert_eq!(state, json!({"topic": "cats", "joke": "b", "critique": "meh"}));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut state = json!({"topic": "dogs"});
        state.apply(json!({}));
        assert_eq!(state, json!({"topic": "dogs"}));
    }

    #[test]
    fn test_validate_requires_object() {
        assert!(json!({"topic": "x"}).validate().is_ok());
        assert!(json!("topic").validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_merge_never_drops_keys(
            base in proptest::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8),
            update in proptest::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8),
        ) {
            let mut state = json!(base);
            state.apply(json!(update));

            let merged = state.as_object().unwrap();
            for (key, value) in &base {
                prop_assert!(merged.contains_key(key));
                if !update.contains_key(key) {
                    prop_assert_eq!(&merged[key], &json!(value));
                }
            }
            for (key, value) in &update {
                prop_assert_eq!(&merged[key], &json!(value));
            }
        }
    }
}
