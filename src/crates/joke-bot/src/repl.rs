//! Interactive topic loop

use crate::output::{banner, render_state, GOODBYE};
use anyhow::Result;
use joke_agents::JokePipeline;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// `exit` or `quit`, in any case
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// Read topics from `input` until an exit command or end of input.
///
/// Blank lines are ignored. A failed run is reported and the loop goes on;
/// only I/O errors end it early.
pub async fn run_interactive<R, W>(pipeline: &JokePipeline, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", banner(pipeline.variant()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter a topic: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE)?;
            break;
        };

        let topic = line.trim();
        if topic.is_empty() {
            continue;
        }
        if is_exit_command(topic) {
            writeln!(out, "{}", GOODBYE)?;
            break;
        }

        match pipeline.run(topic).await {
            Ok(state) => write!(out, "{}", render_state(&state))?,
            Err(e) => {
                tracing::error!(topic, error = %e, "Pipeline run failed");
                writeln!(out, "Error: {}\n", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        for input in ["exit", "quit", "EXIT", "Quit", "  exit  "] {
            assert!(is_exit_command(input), "{input:?} should exit");
        }
        for input in ["", "cats", "exiting", "q", "exit now"] {
            assert!(!is_exit_command(input), "{input:?} should not exit");
        }
    }
}
