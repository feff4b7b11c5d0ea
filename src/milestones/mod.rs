//! Milestone planning: distribute the project timeline across delivery
//! phases, or clamp an externally supplied milestone set into it.

use tracing::debug;

use crate::model::{Milestone, ProjectContext};
use crate::schedule::parse_duration_weeks;

const PHASES: &[(&str, &str)] = &[
    ("Planning & Research", "Requirements gathering, feasibility, and scope"),
    ("Design & Architecture", "System design, interfaces, and technology decisions"),
    ("Development", "Core implementation of features and integrations"),
    ("Testing & QA", "Integration testing, bug fixing, and hardening"),
    ("Deployment & Launch", "Release preparation, deployment, and handover"),
];

/// Index order in which leftover weeks are handed out once every phase has
/// its base share. Development and testing absorb slack first.
const EXTRA_ORDER: &[usize] = &[2, 3, 4];

#[derive(Debug, Clone, Copy, Default)]
pub struct MilestonePlanner;

impl MilestonePlanner {
    pub fn new() -> Self {
        Self
    }

    /// Build the milestone plan for a project.
    ///
    /// Missions that carried explicit `[M<i>]` banners get those as
    /// milestones, clamped into the timeline. Otherwise the standard phases
    /// split `timeline_weeks`: each phase gets `max(1, total / phases)` weeks
    /// and leftovers go to development, testing, then launch. Either way the
    /// plan's weeks sum to exactly `timeline_weeks`, so a timeline shorter
    /// than the phase count yields fewer phases.
    pub fn plan(&self, context: &ProjectContext) -> Vec<Milestone> {
        let milestones = if context.milestones_text.is_empty() {
            // Timelines shorter than the phase count would otherwise overrun
            // their own budget through the 1-week floor.
            let phases = self.phase_plan(context.timeline_weeks);
            self.clamp_to_target(phases, context.timeline_weeks)
        } else {
            let external = self.from_banners(&context.milestones_text);
            self.clamp_to_target(external, context.timeline_weeks)
        };

        debug!(
            milestone_count = milestones.len(),
            timeline_weeks = context.timeline_weeks,
            "Planned milestones"
        );
        milestones
    }

    fn phase_plan(&self, total_weeks: u32) -> Vec<Milestone> {
        let phases = PHASES.len() as u32;
        let base = (total_weeks / phases).max(1);
        let mut weeks: Vec<u32> = vec![base; PHASES.len()];

        let mut extra = total_weeks.saturating_sub(base * phases);
        let mut cursor = 0;
        while extra > 0 {
            weeks[EXTRA_ORDER[cursor % EXTRA_ORDER.len()]] += 1;
            cursor += 1;
            extra -= 1;
        }

        PHASES
            .iter()
            .zip(weeks)
            .enumerate()
            .map(|(i, ((title, description), w))| {
                let milestone =
                    Milestone::new(format!("Phase {}: {}", i + 1, title), *description, weeks_label(w));
                if i == 0 {
                    milestone
                } else {
                    milestone.with_dependencies([format!("Phase {}: {}", i, PHASES[i - 1].0)])
                }
            })
            .collect()
    }

    fn from_banners(&self, banners: &[String]) -> Vec<Milestone> {
        banners
            .iter()
            .map(|banner| {
                let text = banner
                    .split_once(']')
                    .map(|(_, rest)| rest.trim())
                    .unwrap_or(banner.trim());
                let title = if text.is_empty() {
                    banner.trim().to_string()
                } else {
                    text.to_string()
                };
                Milestone::new(title.clone(), title, "2 weeks")
            })
            .collect()
    }

    /// Clamp, never reject: a milestone set longer than the target has its
    /// overrunning milestone shortened to `max(1, target - used)` weeks and
    /// everything after it dropped.
    pub fn clamp_to_target(&self, milestones: Vec<Milestone>, target_weeks: u32) -> Vec<Milestone> {
        let mut used = 0u32;
        let mut clamped = Vec::new();

        for mut milestone in milestones {
            if used >= target_weeks {
                break;
            }
            let weeks = parse_duration_weeks(&milestone.duration);
            if used + weeks > target_weeks {
                let remaining = (target_weeks - used).max(1);
                milestone.duration = weeks_label(remaining);
                used += remaining;
            } else {
                used += weeks;
            }
            clamped.push(milestone);
        }

        clamped
    }
}

fn weeks_label(weeks: u32) -> String {
    if weeks == 1 {
        String::from("1 week")
    } else {
        format!("{} weeks", weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_weeks(weeks: u32) -> ProjectContext {
        ProjectContext {
            timeline_weeks: weeks,
            ..ProjectContext::default()
        }
    }

    fn total_weeks(milestones: &[Milestone]) -> u32 {
        milestones
            .iter()
            .map(|m| parse_duration_weeks(&m.duration))
            .sum()
    }

    #[test]
    fn test_phase_weeks_sum_to_timeline() {
        let planner = MilestonePlanner::new();
        for weeks in [5, 8, 13, 24] {
            let plan = planner.plan(&context_with_weeks(weeks));
            assert_eq!(plan.len(), 5);
            assert_eq!(total_weeks(&plan), weeks, "timeline of {} weeks", weeks);
        }
    }

    #[test]
    fn test_tiny_timeline_drops_trailing_phases() {
        let planner = MilestonePlanner::new();
        for weeks in [2, 3] {
            let plan = planner.plan(&context_with_weeks(weeks));
            assert_eq!(plan.len(), weeks as usize);
            assert_eq!(total_weeks(&plan), weeks, "timeline of {} weeks", weeks);
        }
    }

    #[test]
    fn test_extra_weeks_favor_development() {
        let plan = MilestonePlanner::new().plan(&context_with_weeks(8));
        assert_eq!(parse_duration_weeks(&plan[0].duration), 1);
        assert_eq!(parse_duration_weeks(&plan[2].duration), 2);
        assert_eq!(parse_duration_weeks(&plan[3].duration), 2);
    }

    #[test]
    fn test_phases_chain_dependencies() {
        let plan = MilestonePlanner::new().plan(&context_with_weeks(10));
        assert!(plan[0].dependencies.is_empty());
        assert_eq!(plan[1].dependencies, vec![plan[0].title.clone()]);
    }

    #[test]
    fn test_banners_override_phases() {
        let context = ProjectContext {
            timeline_weeks: 8,
            milestones_text: vec!["[M1] Kickoff".into(), "[M2] Launch".into()],
            ..ProjectContext::default()
        };
        let plan = MilestonePlanner::new().plan(&context);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].title, "Kickoff");
    }

    #[test]
    fn test_overrun_clamps_last_and_drops_surplus() {
        let planner = MilestonePlanner::new();
        let external = vec![
            Milestone::new("A", "", "3 weeks"),
            Milestone::new("B", "", "3 weeks"),
            Milestone::new("C", "", "3 weeks"),
        ];
        let clamped = planner.clamp_to_target(external, 5);
        assert_eq!(clamped.len(), 2);
        assert_eq!(clamped[1].duration, "2 weeks");
    }
}
