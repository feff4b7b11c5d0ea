use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{PlanError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub extraction: ExtractionConfig,
    pub generation: GenerationConfig,
    pub composer: ComposerConfig,
    pub assignment: AssignmentConfig,
    pub schedule: ScheduleConfig,
    pub textgen: TextGenConfig,
}

impl PlannerConfig {
    pub async fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("planwright.toml");
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, dir: &Path) -> Result<()> {
        self.validate()?;
        let config_path = dir.join("planwright.toml");
        let content = toml::to_string_pretty(self).map_err(|e| PlanError::Config(e.to_string()))?;
        fs::write(&config_path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency and safety.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.extraction.default_timeline_weeks == 0 {
            errors.push("extraction.default_timeline_weeks must be greater than 0");
        }

        if self.generation.timeout_secs == 0 {
            errors.push("generation.timeout_secs must be greater than 0");
        }

        if self.assignment.weekly_capacity_hours <= 0.0 {
            errors.push("assignment.weekly_capacity_hours must be positive");
        }
        if !(0.0..=1.0).contains(&self.assignment.workload_penalty_weight) {
            errors.push("assignment.workload_penalty_weight must be between 0.0 and 1.0");
        }

        if self.schedule.daily_work_hours == 0 {
            errors.push("schedule.daily_work_hours must be greater than 0");
        }
        if !(0.0 < self.schedule.velocity_factor && self.schedule.velocity_factor <= 1.0) {
            errors.push("schedule.velocity_factor must be in (0.0, 1.0]");
        }
        if self.schedule.monthly_working_days == 0 {
            errors.push("schedule.monthly_working_days must be greater than 0");
        }

        if self.textgen.max_output_tokens == 0 {
            errors.push("textgen.max_output_tokens must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.textgen.temperature) {
            errors.push("textgen.temperature must be between 0.0 and 2.0");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PlanError::Config(errors.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Timeline weeks assumed when the mission carries no duration phrase.
    pub default_timeline_weeks: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_timeline_weeks: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Timeout for one text-generation call. No retries: expiry means the
    /// deterministic template fallback takes over.
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// RNG seed for name selection and skill jitter. Fixed by default so two
    /// runs over the same mission produce the same roster.
    pub seed: u64,
    /// Secondary skills drawn from the taxonomy per member.
    pub secondary_skill_count: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            secondary_skill_count: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Weekly capacity used to normalize the workload penalty and to compute
    /// utilization percentages.
    pub weekly_capacity_hours: f64,
    /// Weight of the normalized workload penalty subtracted from skill score.
    pub workload_penalty_weight: f64,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            weekly_capacity_hours: 40.0,
            workload_penalty_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStrategy {
    /// Each task starts half its predecessor's duration after the
    /// predecessor's start, emulating parallel work. Dependencies are carried
    /// as metadata only.
    #[default]
    Overlap,
    /// Topological ordering: a task starts the business day after its latest
    /// dependency ends.
    DependencyAware,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub daily_work_hours: u32,
    /// Share of the working day that is productive; accounts for meetings
    /// and interruptions.
    pub velocity_factor: f64,
    /// Working days per month used for utilization roll-ups.
    pub monthly_working_days: u32,
    pub strategy: ScheduleStrategy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_work_hours: 8,
            velocity_factor: 0.8,
            monthly_working_days: 30,
            strategy: ScheduleStrategy::Overlap,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextGenConfig {
    pub model: String,
    /// Inline key. Prefer `api_key_env` so keys stay out of config files.
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            model: String::from("gemini-2.0-flash-exp"),
            api_key: None,
            api_key_env: String::from("GOOGLE_AI_API_KEY"),
            max_output_tokens: 8000,
            temperature: 0.7,
        }
    }
}

impl TextGenConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }
}
