//! Capability card types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version advertised when an agent does not set one
pub const DEFAULT_AGENT_VERSION: &str = "1.0.0";

/// Capability card served at `GET /`
///
/// Built once when the agent starts and never mutated afterwards; task
/// processing only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Address at which the agent's task endpoint is reachable
    pub url: String,

    /// Free-form version string
    pub version: String,

    /// Feature flags
    pub capabilities: AgentCapabilities,

    /// Content types accepted by default
    pub default_input_modes: Vec<String>,

    /// Content types produced by default
    pub default_output_modes: Vec<String>,

    /// Advertised skills, in order
    #[serde(default)]
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Create a new agent card with text-only modes and every capability off
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            version: DEFAULT_AGENT_VERSION.to_string(),
            capabilities: AgentCapabilities::default(),
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            skills: Vec::new(),
        }
    }

    /// Add a skill
    pub fn with_skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Replace the skill list
    pub fn with_skills(mut self, skills: Vec<AgentSkill>) -> Self {
        self.skills = skills;
        self
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Agent capability flags
///
/// The three named flags are always present on the wire. Any other flag a
/// remote card advertises lands in `other`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    #[serde(default)]
    pub streaming: bool,

    #[serde(default)]
    pub push_notifications: bool,

    #[serde(default)]
    pub state_transition_history: bool,

    #[serde(flatten)]
    pub other: BTreeMap<String, bool>,
}

/// A skill descriptor on the capability card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default)]
    pub input_modes: Vec<String>,

    #[serde(default)]
    pub output_modes: Vec<String>,

    /// Opaque passthrough for descriptor fields outside the core model
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl AgentSkill {
    /// Create a text-in/text-out skill
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            examples: Vec::new(),
            input_modes: vec!["text".to_string()],
            output_modes: vec!["text".to_string()],
            extensions: Map::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}
