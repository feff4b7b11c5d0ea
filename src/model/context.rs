use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Complexity, Domain};

/// Structured view of the mission, created once per planning run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectContext {
    pub name: String,
    pub domain: Domain,
    pub complexity: Complexity,
    /// Always positive; extraction defaults to 8 when the mission is silent.
    pub timeline_weeks: u32,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub milestones_text: Vec<String>,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self {
            name: String::from("Untitled Project"),
            domain: Domain::General,
            complexity: Complexity::Medium,
            timeline_weeks: 8,
            features: Vec::new(),
            milestones_text: Vec::new(),
        }
    }
}

/// Team and technology signals extracted alongside the project context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResourceContext {
    /// None means "derive team size from requirement scores" downstream.
    pub team_size: Option<u32>,

    #[serde(default)]
    pub roles_needed: Vec<String>,

    #[serde(default)]
    pub technology_stack: Vec<String>,

    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Budget,
    Timeline,
    Technology,
    Restriction,
    Limitation,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Timeline => write!(f, "timeline"),
            Self::Technology => write!(f, "technology"),
            Self::Restriction => write!(f, "restriction"),
            Self::Limitation => write!(f, "limitation"),
        }
    }
}
