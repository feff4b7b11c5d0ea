//! Task assignment: greedy skill matching with an explicit workload ledger.

mod ledger;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AssignmentConfig;
use crate::model::{Task, TeamMember};

pub use ledger::WorkloadLedger;

pub const NO_SUITABLE_MEMBER: &str = "No suitable team member";

/// One assignment decision. `assigned_to = None` carries the reason instead.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskAssignment {
    pub task_title: String,
    pub estimated_hours: f64,
    pub assigned_to: Option<String>,
    pub skill_score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Per-member aggregation over one assignment run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MemberLoad {
    pub name: String,
    pub role: String,
    pub assigned_tasks: Vec<String>,
    pub total_hours: f64,
    /// Percent of weekly capacity, capped at 100.
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AssignmentReport {
    pub assignments: Vec<TaskAssignment>,
    pub member_loads: Vec<MemberLoad>,
    pub recommendations: Vec<String>,
}

impl AssignmentReport {
    pub fn assignee_for(&self, task_title: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.task_title == task_title)
            .and_then(|a| a.assigned_to.as_deref())
    }

    pub fn unassigned_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.assigned_to.is_none())
            .count()
    }
}

pub struct TaskAssigner {
    config: AssignmentConfig,
}

impl TaskAssigner {
    pub fn new(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Assign tasks to team members in the supplied task order.
    ///
    /// Score per candidate: `10 * overlap / |required|` minus a workload
    /// penalty of `weight * accumulated_hours / weekly_capacity`. Only
    /// members with at least one overlapping skill are candidates; ties keep
    /// the earlier roster position. A task with no candidate anywhere stays
    /// unassigned, which is reported but never fatal.
    pub fn assign(&self, tasks: &[Task], team: &[TeamMember]) -> AssignmentReport {
        let mut ledger = WorkloadLedger::new();
        let mut assignments = Vec::with_capacity(tasks.len());

        for task in tasks {
            let mut best: Option<(usize, f64, f64)> = None;

            for (idx, member) in team.iter().enumerate() {
                let overlap = task
                    .skills_required
                    .iter()
                    .filter(|skill| member.has_skill(skill))
                    .count();
                if overlap == 0 {
                    continue;
                }

                let skill_score = 10.0 * overlap as f64 / task.skills_required.len() as f64;
                let penalty = self.config.workload_penalty_weight
                    * (ledger.hours(&member.name) / self.config.weekly_capacity_hours);
                let final_score = skill_score - penalty;

                let beats = match best {
                    Some((_, best_score, _)) => final_score > best_score,
                    None => true,
                };
                if beats {
                    best = Some((idx, final_score, skill_score));
                }
            }

            let assignment = match best {
                Some((idx, _, skill_score)) => {
                    let member = &team[idx];
                    ledger.add(&member.name, task.estimated_hours);
                    TaskAssignment {
                        task_title: task.title.clone(),
                        estimated_hours: task.estimated_hours,
                        assigned_to: Some(member.name.clone()),
                        skill_score,
                        reason: None,
                    }
                }
                None => TaskAssignment {
                    task_title: task.title.clone(),
                    estimated_hours: task.estimated_hours,
                    assigned_to: None,
                    skill_score: 0.0,
                    reason: Some(NO_SUITABLE_MEMBER.to_string()),
                },
            };
            assignments.push(assignment);
        }

        let member_loads = self.member_loads(team, &assignments, &ledger);
        let recommendations = self.recommendations(tasks, team, &assignments);

        debug!(
            tasks = tasks.len(),
            unassigned = assignments.iter().filter(|a| a.assigned_to.is_none()).count(),
            "Assignment pass completed"
        );

        AssignmentReport {
            assignments,
            member_loads,
            recommendations,
        }
    }

    fn member_loads(
        &self,
        team: &[TeamMember],
        assignments: &[TaskAssignment],
        ledger: &WorkloadLedger,
    ) -> Vec<MemberLoad> {
        team.iter()
            .map(|member| {
                let assigned_tasks: Vec<String> = assignments
                    .iter()
                    .filter(|a| a.assigned_to.as_deref() == Some(member.name.as_str()))
                    .map(|a| a.task_title.clone())
                    .collect();
                let total_hours = ledger.hours(&member.name);
                MemberLoad {
                    name: member.name.clone(),
                    role: member.role.clone(),
                    assigned_tasks,
                    total_hours,
                    utilization: (total_hours / self.config.weekly_capacity_hours * 100.0)
                        .min(100.0),
                }
            })
            .collect()
    }

    fn recommendations(
        &self,
        tasks: &[Task],
        team: &[TeamMember],
        assignments: &[TaskAssignment],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if team.len() < 3 {
            recommendations.push(String::from(
                "Team is small; consider adding members to reduce delivery risk",
            ));
        }
        if team.len() > 8 {
            recommendations.push(String::from(
                "Large team; plan for coordination overhead and clear ownership",
            ));
        }

        let mut missing: Vec<String> = Vec::new();
        for assignment in assignments.iter().filter(|a| a.assigned_to.is_none()) {
            if let Some(task) = tasks.iter().find(|t| t.title == assignment.task_title) {
                for skill in &task.skills_required {
                    if !team.iter().any(|m| m.has_skill(skill)) && !missing.contains(skill) {
                        missing.push(skill.clone());
                    }
                }
            }
        }
        if !missing.is_empty() {
            recommendations.push(format!(
                "No coverage for skills: {}; consider hiring or training",
                missing.join(", ")
            ));
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExperienceTier, Priority};

    fn member(name: &str, skills: &[&str]) -> TeamMember {
        let mut m = TeamMember::new(name, "Backend Developer")
            .with_experience(ExperienceTier::Mid)
            .with_rate(55);
        for skill in skills {
            m = m.with_skill(*skill, 7);
        }
        m
    }

    fn task(title: &str, hours: f64, skills: &[&str]) -> Task {
        Task::new(title, "")
            .with_hours(hours)
            .with_priority(Priority::Medium)
            .with_skills(skills.iter().copied())
    }

    #[test]
    fn test_best_skill_match_wins() {
        let team = vec![
            member("Partial Fit", &["python"]),
            member("Full Fit", &["python", "sql"]),
        ];
        let tasks = vec![task("Schema Work", 8.0, &["python", "sql"])];

        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.assignee_for("Schema Work"), Some("Full Fit"));
        assert_eq!(report.assignments[0].skill_score, 10.0);
    }

    #[test]
    fn test_workload_penalty_spreads_tasks() {
        let team = vec![
            member("First", &["python"]),
            member("Second", &["python"]),
        ];
        let tasks = vec![
            task("A", 40.0, &["python"]),
            task("B", 8.0, &["python"]),
        ];

        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.assignee_for("A"), Some("First"));
        // First now carries 40h; the penalty tips B to Second.
        assert_eq!(report.assignee_for("B"), Some("Second"));
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let team = vec![member("Early", &["python"]), member("Late", &["python"])];
        let tasks = vec![task("Only", 8.0, &["python"])];

        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.assignee_for("Only"), Some("Early"));
    }

    #[test]
    fn test_no_overlap_stays_unassigned() {
        let team = vec![member("Dev", &["python"])];
        let tasks = vec![task("Design Pass", 8.0, &["figma"])];

        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.assignee_for("Design Pass"), None);
        assert_eq!(
            report.assignments[0].reason.as_deref(),
            Some(NO_SUITABLE_MEMBER)
        );
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("figma")));
    }

    #[test]
    fn test_empty_team_all_unassigned() {
        let tasks = vec![task("A", 8.0, &["python"]), task("B", 8.0, &[])];
        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &[]);
        assert_eq!(report.unassigned_count(), 2);
    }

    #[test]
    fn test_utilization_capped() {
        let team = vec![member("Busy", &["python"])];
        let tasks = vec![task("Huge", 120.0, &["python"])];

        let report = TaskAssigner::new(AssignmentConfig::default()).assign(&tasks, &team);
        assert_eq!(report.member_loads[0].total_hours, 120.0);
        assert_eq!(report.member_loads[0].utilization, 100.0);
    }
}
