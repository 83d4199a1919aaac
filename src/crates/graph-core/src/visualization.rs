//! Graph visualization
//!
//! Renders a compiled chain as Mermaid (for docs and GitHub markdown) or
//! plain ASCII (for terminals). Rendering walks the resolved step order, so
//! the output always matches what [`CompiledGraph::invoke`] executes.
//!
//! ```text
//! graph TD
//!     START((START))
//!     END((END))
//!     tell_joke["tell_joke"]
//!     START --> tell_joke
//!     tell_joke --> END
//! ```
//!
//! [`CompiledGraph::invoke`]: crate::compiled::CompiledGraph::invoke

use crate::graph::{END, START};

/// Output format for [`visualize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationFormat {
    /// Mermaid flowchart
    #[default]
    Mermaid,
    /// Simple ASCII art
    Ascii,
}

/// Visualization options
#[derive(Debug, Clone, Default)]
pub struct VisualizationOptions {
    /// Output format
    pub format: VisualizationFormat,
    /// Graph title/label
    pub title: Option<String>,
}

impl VisualizationOptions {
    /// Create with Mermaid format
    pub fn mermaid() -> Self {
        Self {
            format: VisualizationFormat::Mermaid,
            ..Default::default()
        }
    }

    /// Create with ASCII format
    pub fn ascii() -> Self {
        Self {
            format: VisualizationFormat::Ascii,
            ..Default::default()
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Render an ordered chain of node names
pub fn visualize(steps: &[String], options: &VisualizationOptions) -> String {
    match options.format {
        VisualizationFormat::Mermaid => visualize_mermaid(steps, options),
        VisualizationFormat::Ascii => visualize_ascii(steps, options),
    }
}

fn visualize_mermaid(steps: &[String], options: &VisualizationOptions) -> String {
    let mut output = String::new();

    if let Some(title) = &options.title {
        output.push_str("---\n");
        output.push_str(&format!("title: {}\n", escape_mermaid(title)));
        output.push_str("---\n");
    }
    output.push_str("graph TD\n");

    output.push_str(&format!("    {}((START))\n", sanitize_id(START)));
    output.push_str(&format!(
        "    style {} fill:#90EE90,stroke:#228B22,stroke-width:3px\n",
        sanitize_id(START)
    ));
    output.push_str(&format!("    {}((END))\n", sanitize_id(END)));
    output.push_str(&format!(
        "    style {} fill:#FFB6C1,stroke:#DC143C,stroke-width:3px\n",
        sanitize_id(END)
    ));

    for step in steps {
        output.push_str(&format!(
            "    {}[\"{}\"]\n",
            sanitize_id(step),
            escape_mermaid(step)
        ));
    }

    let end = END.to_string();
    let mut previous = START.to_string();
    for step in steps.iter().chain(std::iter::once(&end)) {
        output.push_str(&format!(
            "    {} --> {}\n",
            sanitize_id(&previous),
            sanitize_id(step)
        ));
        previous = step.clone();
    }

    output
}

fn visualize_ascii(steps: &[String], options: &VisualizationOptions) -> String {
    let mut output = String::new();

    let title = options.title.as_deref().unwrap_or("Graph Structure");
    output.push_str(title);
    output.push('\n');
    output.push_str(&"=".repeat(title.chars().count()));
    output.push_str("\n\n");

    output.push_str("START\n");
    for step in steps {
        output.push_str("  |\n");
        output.push_str(&format!("[{}]\n", step));
    }
    output.push_str("  |\nEND\n");
    output
}

/// Escape special characters for Mermaid format
fn escape_mermaid(s: &str) -> String {
    s.replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Sanitize node IDs for Mermaid (must be alphanumeric + underscore).
///
/// Markers are upper-cased: a lowercase `end` id breaks Mermaid flowcharts.
fn sanitize_id(s: &str) -> String {
    match s {
        START => "START".to_string(),
        END => "END".to_string(),
        _ => s.replace(['-', '.', ' '], "_"),
    }
}
