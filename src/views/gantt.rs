use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{EntryKind, Priority, Timeline};

pub const MILESTONE_COLOR: &str = "#FF6B6B";
pub const NEUTRAL_COLOR: &str = "#3498DB";

/// One bar on a Gantt chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GanttItem {
    pub id: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: String,
    pub kind: EntryKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn priority_color(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::Urgent) => "#EE5253",
        Some(Priority::High) => "#FF4757",
        Some(Priority::Medium) => "#FFA502",
        Some(Priority::Low) => "#2ED573",
        None => NEUTRAL_COLOR,
    }
}

/// Milestones first, then tasks, preserving schedule order.
pub fn project_gantt(timeline: &Timeline) -> Vec<GanttItem> {
    timeline
        .milestones
        .iter()
        .chain(&timeline.tasks)
        .map(|entry| {
            let color = match entry.kind {
                EntryKind::Milestone => MILESTONE_COLOR,
                EntryKind::Task => priority_color(entry.priority),
            };
            GanttItem {
                id: entry.id.clone(),
                label: entry.title.clone(),
                start_date: entry.start_date,
                end_date: entry.end_date,
                color: color.to_string(),
                kind: entry.kind,
                assigned_to: entry.assigned_to.clone(),
                dependencies: entry.dependencies.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::model::{Milestone, Task};
    use crate::schedule::TimelineScheduler;

    #[test]
    fn test_colors_by_kind_and_priority() {
        let milestones = vec![Milestone::new("Phase 1", "", "1 week")];
        let tasks = vec![
            Task::new("Critical", "").with_priority(Priority::Urgent),
            Task::new("Routine", "").with_priority(Priority::Low),
        ];
        let timeline = TimelineScheduler::new(ScheduleConfig::default()).schedule(
            &milestones,
            &tasks,
            &[],
            NaiveDate::from_ymd_opt(2026, 8, 31),
            None,
        );

        let items = project_gantt(&timeline);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].color, MILESTONE_COLOR);
        assert_eq!(items[1].color, "#EE5253");
        assert_eq!(items[2].color, "#2ED573");
    }
}
