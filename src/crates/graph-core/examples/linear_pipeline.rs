//! Linear pipeline example
//!
//! Two nodes over a JSON state, with a shared memory store that survives
//! across invocations of the same compiled graph.
//!
//! ```bash
//! cargo run -p graph-core --example linear_pipeline
//! ```

use graph_core::{MemoryStore, RecordOutcome, StateGraph, END};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear Pipeline Example ===\n");

    let memory = MemoryStore::new();
    let mut graph: StateGraph<Value> = StateGraph::new();

    graph.add_node("step1", |state: Value| async move {
        let value = state["value"].as_i64().unwrap_or(0);
        Ok(json!({"value": value + 10, "step1_executed": true}))
    });

    let step_memory = memory.clone();
    graph.add_node("step2", move |state: Value| {
        let memory = step_memory.clone();
        async move {
            let value = state["value"].as_i64().unwrap_or(0) * 2;
            let outcome = memory.record(value.to_string());
            Ok(json!({
                "value": value,
                "repeat": outcome == RecordOutcome::Duplicate,
                "history": memory.snapshot(),
            }))
        }
    });

    graph.set_entry("step1");
    graph.add_edge("step1", "step2");
    graph.add_edge("step2", END);

    let compiled = graph.compile()?;
    println!("{}", compiled.to_mermaid());

    for input in [json!({"value": 5}), json!({"value": 5}), json!({"value": 7})] {
        println!("Initial state: {}", input);
        let result = compiled.invoke(input).await?;
        println!("Final state:   {}\n", result);
    }

    println!("Memory holds {} distinct results", memory.len());
    Ok(())
}
