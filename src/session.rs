use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;

/// A session graph as exported for the multi-agent server. Only the agent
/// table is interpreted.
#[derive(Debug, Deserialize)]
pub struct Session {
    #[serde(rename = "agentGraph")]
    pub agent_graph: AgentGraph,
}

#[derive(Debug, Deserialize)]
pub struct AgentGraph {
    pub agents: Map<String, Value>,
}

impl Session {
    pub fn agent_names(&self) -> Vec<&str> {
        self.agent_graph.agents.keys().map(String::as_str).collect()
    }
}

pub struct Prompt {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn example_prompts() -> [Prompt; 2] {
    [
        Prompt {
            title: "AI-assisted bug triage",
            description: "Use multi-agent workflows to cluster and prioritize GitHub issues.",
        },
        Prompt {
            title: "Open innovation idea board",
            description: "Collect ideas from GitHub discussions and Firecrawl web research.",
        },
    ]
}

pub fn load_session(path: &Path) -> Result<Session> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let session: Session = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session graph {}", path.display()))?;
    Ok(session)
}

pub fn run_demo(path: &Path, out: &mut impl Write) -> Result<()> {
    let session = load_session(path)?;
    tracing::debug!(agents = session.agent_graph.agents.len(), "session loaded");

    writeln!(
        out,
        "Loaded session graph with agents: {}",
        session.agent_names().join(", ")
    )?;
    writeln!(out, "Example community prompts:")?;
    for prompt in example_prompts() {
        writeln!(out, "- {}: {}", prompt.title, prompt.description)?;
    }
    Ok(())
}
