//! Timeline scheduling: turn milestones, tasks, and a roster into dated
//! entries with business-day arithmetic.

mod business;
mod duration;

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use crate::assign::AssignmentReport;
use crate::config::{ScheduleConfig, ScheduleStrategy};
use crate::model::{
    EntryKind, MemberSchedule, Milestone, ProjectSummary, Task, TeamMember, Timeline,
    TimelineEntry,
};

pub use business::{add_business_days, business_span_end, is_business_day, next_business_day};
pub use duration::{parse_duration_weeks, parse_effort_hours};

pub struct TimelineScheduler {
    config: ScheduleConfig,
}

impl TimelineScheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Produce the dated timeline.
    ///
    /// `start_date` defaults to tomorrow; weekends roll forward to Monday.
    /// When an `AssignmentReport` is given its decisions are reused as-is,
    /// unassigned tasks included; otherwise tasks go to whoever has the
    /// fewest scheduled days so far.
    pub fn schedule(
        &self,
        milestones: &[Milestone],
        tasks: &[Task],
        team: &[TeamMember],
        start_date: Option<NaiveDate>,
        assignments: Option<&AssignmentReport>,
    ) -> Timeline {
        let project_start = next_business_day(
            start_date.unwrap_or_else(|| Local::now().date_naive() + Duration::days(1)),
        );

        let milestone_entries = self.schedule_milestones(milestones, project_start);
        let task_entries = match self.config.strategy {
            ScheduleStrategy::Overlap => self.schedule_overlap(tasks, project_start),
            ScheduleStrategy::DependencyAware => {
                self.schedule_dependency_aware(tasks, project_start)
            }
        };
        let task_entries = self.assign_entries(task_entries, team, assignments);

        let team_assignments = self.member_schedules(&task_entries, team);
        let summary = self.summarize(
            project_start,
            &milestone_entries,
            &task_entries,
            team.len(),
            tasks,
        );

        debug!(
            milestones = milestone_entries.len(),
            tasks = task_entries.len(),
            project_end = %summary.project_end,
            "Timeline scheduled"
        );

        Timeline {
            project_start,
            milestones: milestone_entries,
            tasks: task_entries,
            team_assignments,
            summary,
        }
    }

    /// Milestones run sequentially; each starts the calendar day after the
    /// previous one ends, rolled to the next business day.
    fn schedule_milestones(
        &self,
        milestones: &[Milestone],
        project_start: NaiveDate,
    ) -> Vec<TimelineEntry> {
        let mut entries = Vec::with_capacity(milestones.len());
        let mut cursor = project_start;

        for (i, milestone) in milestones.iter().enumerate() {
            let weeks = parse_duration_weeks(&milestone.duration);
            let duration_days = weeks * 5;
            let start = next_business_day(cursor);
            let end = business_span_end(start, duration_days);

            entries.push(TimelineEntry {
                id: format!("milestone-{}", i + 1),
                title: milestone.title.clone(),
                description: milestone.description.clone(),
                start_date: start,
                end_date: end,
                duration_days,
                assigned_to: None,
                priority: None,
                dependencies: milestone.dependencies.clone(),
                kind: EntryKind::Milestone,
                status: String::from("planned"),
            });

            cursor = end + Duration::days(1);
        }

        entries
    }

    fn task_duration_days(&self, task: &Task) -> u32 {
        let work_days = task.estimated_hours / self.config.daily_work_hours as f64;
        ((work_days / self.config.velocity_factor) as u32).max(1)
    }

    /// Default strategy: each task starts half its predecessor's duration
    /// after the predecessor's start. Dependencies ride along as metadata.
    fn schedule_overlap(&self, tasks: &[Task], project_start: NaiveDate) -> Vec<TimelineEntry> {
        let mut entries = Vec::with_capacity(tasks.len());
        let mut cursor = project_start;

        for (i, task) in tasks.iter().enumerate() {
            let duration_days = self.task_duration_days(task);
            let start = next_business_day(cursor);
            let end = business_span_end(start, duration_days);

            entries.push(self.task_entry(task, i, start, end, duration_days));

            let offset = (duration_days / 2).max(1);
            cursor = add_business_days(start, offset);
        }

        entries
    }

    /// Topological order over title dependencies; a task starts the business
    /// day after its latest dependency ends. Cycles fall back to input order.
    fn schedule_dependency_aware(
        &self,
        tasks: &[Task],
        project_start: NaiveDate,
    ) -> Vec<TimelineEntry> {
        let order = topological_order(tasks);
        let mut end_by_title: HashMap<&str, NaiveDate> = HashMap::new();
        let mut scheduled: Vec<(usize, TimelineEntry)> = Vec::with_capacity(tasks.len());

        for &idx in &order {
            let task = &tasks[idx];
            let duration_days = self.task_duration_days(task);

            let after_deps = task
                .dependencies
                .iter()
                .filter_map(|dep| end_by_title.get(dep.as_str()))
                .max()
                .map(|end| add_business_days(*end, 1));
            let start = next_business_day(after_deps.unwrap_or(project_start));
            let end = business_span_end(start, duration_days);

            end_by_title.insert(task.title.as_str(), end);
            scheduled.push((idx, self.task_entry(task, idx, start, end, duration_days)));
        }

        // Emit in input order so callers see a stable task list.
        scheduled.sort_by_key(|(idx, _)| *idx);
        scheduled.into_iter().map(|(_, entry)| entry).collect()
    }

    fn task_entry(
        &self,
        task: &Task,
        index: usize,
        start: NaiveDate,
        end: NaiveDate,
        duration_days: u32,
    ) -> TimelineEntry {
        TimelineEntry {
            id: format!("task-{}", index + 1),
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: start,
            end_date: end,
            duration_days,
            assigned_to: None,
            priority: Some(task.priority),
            dependencies: task.dependencies.clone(),
            kind: EntryKind::Task,
            status: String::from("planned"),
        }
    }

    fn assign_entries(
        &self,
        mut entries: Vec<TimelineEntry>,
        team: &[TeamMember],
        assignments: Option<&AssignmentReport>,
    ) -> Vec<TimelineEntry> {
        let mut scheduled_days: HashMap<&str, u32> =
            team.iter().map(|m| (m.name.as_str(), 0)).collect();

        for entry in entries.iter_mut() {
            // A supplied report is authoritative, including the tasks it
            // left unassigned. The workload fallback is for report-less runs.
            let assignee = match assignments {
                Some(report) => report.assignee_for(&entry.title).map(str::to_string),
                None => team
                    .iter()
                    .min_by_key(|m| scheduled_days.get(m.name.as_str()).copied().unwrap_or(0))
                    .map(|m| m.name.clone()),
            };

            if let Some(name) = &assignee {
                if let Some(days) = scheduled_days.get_mut(name.as_str()) {
                    *days += entry.duration_days;
                }
            }
            entry.assigned_to = assignee;
        }

        entries
    }

    fn member_schedules(&self, entries: &[TimelineEntry], team: &[TeamMember]) -> Vec<MemberSchedule> {
        team.iter()
            .map(|member| {
                let mine: Vec<&TimelineEntry> = entries
                    .iter()
                    .filter(|e| e.assigned_to.as_deref() == Some(member.name.as_str()))
                    .collect();
                let total_workload_days: u32 = mine.iter().map(|e| e.duration_days).sum();

                MemberSchedule {
                    name: member.name.clone(),
                    role: member.role.clone(),
                    total_tasks: mine.len(),
                    total_workload_days,
                    task_ids: mine.iter().map(|e| e.id.clone()).collect(),
                    utilization: (total_workload_days as f64
                        / self.config.monthly_working_days as f64
                        * 100.0)
                        .min(100.0),
                }
            })
            .collect()
    }

    fn summarize(
        &self,
        project_start: NaiveDate,
        milestones: &[TimelineEntry],
        tasks: &[TimelineEntry],
        team_size: usize,
        source_tasks: &[Task],
    ) -> ProjectSummary {
        let last_milestone_end = milestones.iter().map(|e| e.end_date).max();
        let last_task_end = tasks.iter().map(|e| e.end_date).max();
        let project_end = last_milestone_end
            .into_iter()
            .chain(last_task_end)
            .max()
            .unwrap_or(project_start);

        ProjectSummary {
            project_end,
            total_duration_days: (project_end - project_start).num_days(),
            total_milestones: milestones.len(),
            total_tasks: tasks.len(),
            team_size,
            estimated_effort_hours: source_tasks.iter().map(|t| t.estimated_hours).sum(),
        }
    }
}

/// Kahn's algorithm over title dependencies. Unknown dependency titles are
/// ignored; a cycle falls back to plain input order.
fn topological_order(tasks: &[Task]) -> Vec<usize> {
    let index_by_title: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.title.as_str(), i))
        .collect();

    let mut in_degree = vec![0usize; tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];

    for (i, task) in tasks.iter().enumerate() {
        for dep in &task.dependencies {
            if let Some(&dep_idx) = index_by_title.get(dep.as_str()) {
                in_degree[i] += 1;
                dependents[dep_idx].push(i);
            }
        }
    }

    let mut queue: Vec<usize> = (0..tasks.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(&next) = queue.iter().min() {
        queue.retain(|&i| i != next);
        order.push(next);
        for &dependent in &dependents[next] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push(dependent);
            }
        }
    }

    if order.len() == tasks.len() {
        order
    } else {
        (0..tasks.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
    }

    fn task(title: &str, hours: f64) -> Task {
        Task::new(title, "").with_hours(hours)
    }

    fn scheduler() -> TimelineScheduler {
        TimelineScheduler::new(ScheduleConfig::default())
    }

    #[test]
    fn test_milestones_sequential_non_overlapping() {
        let milestones = vec![
            Milestone::new("Phase 1", "", "2 weeks"),
            Milestone::new("Phase 2", "", "1 week"),
        ];
        let timeline = scheduler().schedule(&milestones, &[], &[], Some(monday()), None);

        let first = &timeline.milestones[0];
        let second = &timeline.milestones[1];
        assert_eq!(first.start_date, monday());
        assert_eq!(first.duration_days, 10);
        assert_eq!(first.end_date, NaiveDate::from_ymd_opt(2026, 9, 11).unwrap());
        assert!(second.start_date > first.end_date);
        assert_eq!(second.duration_days, 5);
    }

    #[test]
    fn test_task_duration_velocity() {
        // 8h task: 1 work day / 0.8 = 1.25 -> floors to 1.
        // 16h task: 2 / 0.8 = 2.5 -> 2 days.
        let tasks = vec![task("Short", 8.0), task("Longer", 16.0)];
        let timeline = scheduler().schedule(&[], &tasks, &[], Some(monday()), None);
        assert_eq!(timeline.tasks[0].duration_days, 1);
        assert_eq!(timeline.tasks[1].duration_days, 2);
    }

    #[test]
    fn test_no_weekend_dates() {
        let milestones = vec![Milestone::new("M", "", "3 weeks")];
        let tasks: Vec<Task> = (0..6).map(|i| task(&format!("T{}", i), 24.0)).collect();
        let timeline = scheduler().schedule(&milestones, &tasks, &[], Some(monday()), None);

        for entry in timeline.milestones.iter().chain(&timeline.tasks) {
            assert!(is_business_day(entry.start_date), "{} starts on weekend", entry.title);
            assert!(is_business_day(entry.end_date), "{} ends on weekend", entry.title);
            assert!(entry.end_date >= entry.start_date);
        }
    }

    #[test]
    fn test_overlap_offsets_starts() {
        // 32h -> 5 days duration, offset max(1, 5/2) = 2 business days.
        let tasks = vec![task("A", 32.0), task("B", 32.0)];
        let timeline = scheduler().schedule(&[], &tasks, &[], Some(monday()), None);

        let a = &timeline.tasks[0];
        let b = &timeline.tasks[1];
        assert_eq!(a.start_date, monday());
        assert_eq!(b.start_date, add_business_days(monday(), 2));
        assert!(b.start_date <= a.end_date);
    }

    #[test]
    fn test_dependency_aware_respects_deps() {
        let config = ScheduleConfig {
            strategy: ScheduleStrategy::DependencyAware,
            ..ScheduleConfig::default()
        };
        let tasks = vec![
            task("Foundation", 32.0),
            Task::new("Walls", "").with_hours(16.0).with_dependencies(["Foundation"]),
            Task::new("Roof", "").with_hours(16.0).with_dependencies(["Walls"]),
        ];
        let timeline =
            TimelineScheduler::new(config).schedule(&[], &tasks, &[], Some(monday()), None);

        let by_title = |t: &str| {
            timeline
                .tasks
                .iter()
                .find(|e| e.title == t)
                .cloned()
                .unwrap()
        };
        assert!(by_title("Walls").start_date > by_title("Foundation").end_date);
        assert!(by_title("Roof").start_date > by_title("Walls").end_date);
    }

    #[test]
    fn test_dependency_cycle_falls_back() {
        let config = ScheduleConfig {
            strategy: ScheduleStrategy::DependencyAware,
            ..ScheduleConfig::default()
        };
        let tasks = vec![
            Task::new("A", "").with_dependencies(["B"]),
            Task::new("B", "").with_dependencies(["A"]),
        ];
        let timeline =
            TimelineScheduler::new(config).schedule(&[], &tasks, &[], Some(monday()), None);
        assert_eq!(timeline.tasks.len(), 2);
    }

    #[test]
    fn test_fallback_assignment_balances_days() {
        let team = vec![
            TeamMember::new("One", "Backend Developer"),
            TeamMember::new("Two", "Backend Developer"),
        ];
        let tasks = vec![task("A", 32.0), task("B", 8.0), task("C", 8.0)];
        let timeline = scheduler().schedule(&[], &tasks, &team, Some(monday()), None);

        assert_eq!(timeline.tasks[0].assigned_to.as_deref(), Some("One"));
        assert_eq!(timeline.tasks[1].assigned_to.as_deref(), Some("Two"));
        let assigned: Vec<_> = timeline
            .team_assignments
            .iter()
            .map(|m| m.total_tasks)
            .collect();
        assert_eq!(assigned.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_assignment_report_reused() {
        use crate::assign::TaskAssigner;
        use crate::config::AssignmentConfig;

        let team = vec![
            TeamMember::new("Generalist", "Backend Developer").with_skill("python", 7),
        ];
        let tasks = vec![Task::new("Build API", "")
            .with_hours(16.0)
            .with_priority(Priority::High)
            .with_skills(["python"])];
        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);

        let timeline = scheduler().schedule(&[], &tasks, &team, Some(monday()), Some(&report));
        assert_eq!(timeline.tasks[0].assigned_to.as_deref(), Some("Generalist"));
        assert_eq!(timeline.tasks[0].priority, Some(Priority::High));
    }

    #[test]
    fn test_report_unassigned_stays_unassigned() {
        use crate::assign::TaskAssigner;
        use crate::config::AssignmentConfig;

        let team = vec![
            TeamMember::new("Dev", "Backend Developer").with_skill("python", 7),
        ];
        let tasks = vec![Task::new("Design Pass", "").with_skills(["figma"])];
        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.assignee_for("Design Pass"), None);

        let timeline = scheduler().schedule(&[], &tasks, &team, Some(monday()), Some(&report));
        assert_eq!(timeline.tasks[0].assigned_to, None);
    }

    #[test]
    fn test_summary_spans_milestones_and_tasks() {
        let milestones = vec![Milestone::new("M", "", "4 weeks")];
        let tasks = vec![task("T", 8.0)];
        let timeline = scheduler().schedule(&milestones, &tasks, &[], Some(monday()), None);

        assert_eq!(timeline.summary.total_milestones, 1);
        assert_eq!(timeline.summary.total_tasks, 1);
        assert_eq!(timeline.summary.project_end, timeline.milestones[0].end_date);
        assert_eq!(timeline.summary.estimated_effort_hours, 8.0);
    }
}
