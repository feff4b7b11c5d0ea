use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Timeline;

/// A calendar event projected from the timeline. Milestones become all-day
/// markers on their end date; tasks become due-date events with the assignee
/// as attendee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub all_day: bool,

    #[serde(default)]
    pub attendees: Vec<String>,
}

pub fn project_calendar(timeline: &Timeline) -> Vec<CalendarEvent> {
    let milestones = timeline.milestones.iter().map(|entry| CalendarEvent {
        id: format!("{}-event", entry.id),
        title: format!("Milestone: {}", entry.title),
        start_date: entry.end_date,
        end_date: entry.end_date,
        all_day: true,
        attendees: Vec::new(),
    });

    let tasks = timeline.tasks.iter().map(|entry| CalendarEvent {
        id: format!("{}-event", entry.id),
        title: format!("Task Due: {}", entry.title),
        start_date: entry.end_date,
        end_date: entry.end_date,
        all_day: false,
        attendees: entry.assigned_to.iter().cloned().collect(),
    });

    milestones.chain(tasks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::model::{Milestone, Task, TeamMember};
    use crate::schedule::TimelineScheduler;

    #[test]
    fn test_events_from_timeline() {
        let milestones = vec![Milestone::new("Launch", "", "1 week")];
        let tasks = vec![Task::new("Ship It", "").with_hours(8.0)];
        let team = vec![TeamMember::new("Avery Chen", "Backend Developer")];
        let timeline = TimelineScheduler::new(ScheduleConfig::default()).schedule(
            &milestones,
            &tasks,
            &team,
            NaiveDate::from_ymd_opt(2026, 8, 31),
            None,
        );

        let events = project_calendar(&timeline);
        assert_eq!(events.len(), 2);

        let milestone_event = &events[0];
        assert_eq!(milestone_event.title, "Milestone: Launch");
        assert!(milestone_event.all_day);
        assert_eq!(milestone_event.start_date, milestone_event.end_date);
        assert_eq!(milestone_event.start_date, timeline.milestones[0].end_date);

        let task_event = &events[1];
        assert_eq!(task_event.title, "Task Due: Ship It");
        assert!(!task_event.all_day);
        assert_eq!(task_event.attendees, vec!["Avery Chen"]);
    }
}
