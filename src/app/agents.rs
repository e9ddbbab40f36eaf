//! Agent presets and the in-memory agent registry.
//!
//! Agents are defined by a YAML sequence the user can view, edit, upload,
//! download or have the AI repair. The registry rebuilds its collection in
//! full whenever the source text changes; a parse failure keeps the
//! previously parsed collection and raises an error flag instead of clearing
//! state.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A named preset pairing a model id with a system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub model: String,
    #[serde(rename = "systemPrompt")]
    pub system_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The agent collection every fresh session starts with.
pub const DEFAULT_AGENTS_YAML: &str = r#"- id: "writer"
  name: "Creative Writer"
  description: "Helps with creative writing tasks."
  model: "gemini-3-flash-preview"
  systemPrompt: "You are an expert creative writer. Your tone is imaginative and engaging."
- id: "coder"
  name: "Code Expert"
  description: "Assists with programming and debugging."
  model: "gemini-3-pro-preview"
  systemPrompt: "You are a senior software engineer. Provide clean, efficient, and well-commented code."
- id: "analyst"
  name: "Data Analyst"
  description: "Analyzes data and provides insights."
  model: "gemini-3-flash-preview"
  systemPrompt: "You are a data analyst. Be precise, objective, and use bullet points for clarity."
"#;

/// Parse agent YAML into an ordered collection. Anything that is not a
/// sequence of agent records (including an empty document) is an error; an
/// explicit empty sequence (`[]`) is a valid collection with no agents.
pub fn parse_agents(text: &str) -> Result<Vec<Agent>, String> {
    serde_yaml::from_str::<Vec<Agent>>(text).map_err(|e| e.to_string())
}

/// Serialize a collection back to YAML. Round-trips losslessly through
/// [`parse_agents`]: same ids, same fields, same order.
pub fn serialize_agents(agents: &[Agent]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(agents)
}

/// The user-editable agent collection shared by Agent Studio and Doc
/// Intelligence.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
    selected_id: Option<String>,
    source_text: String,
    parse_error: Option<String>,
}

impl AgentRegistry {
    /// Registry seeded with the default agent collection.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.set_source(DEFAULT_AGENTS_YAML.to_string());
        registry
    }

    /// Replace the source text and rebuild the collection from it.
    ///
    /// On success the previous collection is fully replaced and, if nothing
    /// was selected (or the selection vanished), the first agent becomes the
    /// default. On failure the previous collection and selection are kept
    /// untouched and only the error flag changes.
    pub fn set_source(&mut self, text: String) {
        self.source_text = text;
        match parse_agents(&self.source_text) {
            Ok(agents) => {
                info!("Parsed {} agents from configuration text", agents.len());
                self.agents = agents;
                self.parse_error = None;
                let selection_valid = self
                    .selected_id
                    .as_ref()
                    .is_some_and(|id| self.agents.iter().any(|a| &a.id == id));
                if !selection_valid {
                    self.selected_id = self.agents.first().map(|a| a.id.clone());
                }
            }
            Err(e) => {
                warn!("Agent configuration failed to parse, keeping previous collection: {}", e);
                self.parse_error = Some(e);
            }
        }
    }

    /// The editable YAML text, verbatim, including text that failed to
    /// parse.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Select an agent by id; ignored if the id is not in the collection.
    pub fn select(&mut self, id: &str) {
        if self.agents.iter().any(|a| a.id == id) {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn selected(&self) -> Option<&Agent> {
        let id = self.selected_id.as_deref()?;
        self.agents.iter().find(|a| a.id == id)
    }

    /// Serialize the live collection for export.
    pub fn export_yaml(&self) -> Result<String, serde_yaml::Error> {
        serialize_agents(&self.agents)
    }
}
