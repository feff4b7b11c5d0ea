use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A delivery milestone with a free-form duration (e.g. "2 weeks").
/// Duration strings are interpreted by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub duration: String,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Milestone {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }
}
