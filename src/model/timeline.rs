use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A dated entry on the project timeline, for either a milestone or a task.
///
/// Invariant: `end_date >= start_date`, and neither date falls on a weekend
/// when produced by business-day arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    pub kind: EntryKind,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Milestone,
    Task,
}

/// Per-member roll-up of scheduled work.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MemberSchedule {
    pub name: String,
    pub role: String,
    pub total_tasks: usize,
    pub total_workload_days: u32,
    pub task_ids: Vec<String>,
    /// Percentage of a 30-working-day month, capped at 100.
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSummary {
    pub project_end: NaiveDate,
    /// Calendar days between project start and end.
    pub total_duration_days: i64,
    pub total_milestones: usize,
    pub total_tasks: usize,
    pub team_size: usize,
    pub estimated_effort_hours: f64,
}

/// The scheduled plan: dated milestones and tasks plus per-member roll-ups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Timeline {
    pub project_start: NaiveDate,
    pub milestones: Vec<TimelineEntry>,
    pub tasks: Vec<TimelineEntry>,
    pub team_assignments: Vec<MemberSchedule>,
    pub summary: ProjectSummary,
}
