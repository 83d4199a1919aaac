//! Human-readable rendering of pipeline results

use joke_agents::{JokeState, PipelineVariant};
use std::fmt::Write;

pub const SEPARATOR: &str = "------------------------------------------------------------";

pub fn banner(variant: PipelineVariant) -> String {
    let title = match variant {
        PipelineVariant::Simple => "😂 Welcome to the LangGraph Joke Bot!",
        PipelineVariant::Reviewed => "😂 Welcome to the Multi-Agent LangGraph Joke Bot!",
        PipelineVariant::Memory => {
            "😂 Welcome to the Multi-Agent LangGraph Joke Bot (with Memory + HumorScore)!"
        }
    };
    format!("{}\nType a topic for a joke or 'exit' to quit.\n", title)
}

pub const GOODBYE: &str = "👋 Goodbye! Keep laughing!";

/// Every populated field of `state`, memory numbered from 1
pub fn render_state(state: &JokeState) -> String {
    let mut out = String::new();

    if let Some(joke) = &state.joke {
        let _ = write!(out, "\n🧠 Original Joke:\n {}\n", joke);
    }
    if let Some(score) = state.humor_score {
        let _ = write!(out, "\n😂 Humor Score: {}\n", score);
    }
    if let Some(critique) = &state.critique {
        let _ = write!(out, "\n🤔 Critic's Review:\n {}\n", critique);
    }
    if let Some(rewritten) = &state.rewritten {
        let _ = write!(out, "\n😇 Family-Friendly Version:\n {}\n", rewritten);
    }
    if let Some(memory) = &state.memory {
        out.push_str("\n🧩 Joke Memory (so far):\n");
        for (i, joke) in memory.iter().enumerate() {
            let _ = writeln!(out, "   {}. {}", i + 1, joke);
        }
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}
