//! The end-to-end planning pipeline.

use std::sync::Arc;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assign::{AssignmentReport, TaskAssigner};
use crate::config::PlannerConfig;
use crate::envelope::ResourceAllocation;
use crate::error::{PlanError, Result};
use crate::extract::ContextExtractor;
use crate::generate::TaskGenerator;
use crate::milestones::MilestonePlanner;
use crate::model::{Milestone, ProjectContext, ResourceContext, Task, TeamMember, Timeline};
use crate::schedule::TimelineScheduler;
use crate::team::TeamComposer;
use crate::textgen::TextGenerator;
use crate::views::{project_calendar, project_gantt, CalendarEvent, GanttItem};

/// Everything one planning run produced, intermediate products included.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectPlan {
    pub context: ProjectContext,
    pub resources: ResourceContext,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    pub team: Vec<TeamMember>,
    pub assignment: AssignmentReport,
    pub timeline: Timeline,
    pub gantt: Vec<GanttItem>,
    pub calendar: Vec<CalendarEvent>,
    pub allocation: ResourceAllocation,
}

pub struct Planner {
    extractor: ContextExtractor,
    generator: TaskGenerator,
    milestone_planner: MilestonePlanner,
    composer: TeamComposer,
    assigner: TaskAssigner,
    scheduler: TimelineScheduler,
}

impl Planner {
    pub fn new(config: PlannerConfig, textgen: Arc<dyn TextGenerator>) -> Self {
        Self {
            extractor: ContextExtractor::new(&config.extraction),
            generator: TaskGenerator::new(textgen, config.generation.clone()),
            milestone_planner: MilestonePlanner::new(),
            composer: TeamComposer::new(config.composer.clone()),
            assigner: TaskAssigner::new(config.assignment.clone()),
            scheduler: TimelineScheduler::new(config.schedule.clone()),
        }
    }

    /// Planner without a text collaborator; task generation always uses the
    /// deterministic templates.
    pub fn offline(config: PlannerConfig) -> Self {
        Self {
            extractor: ContextExtractor::new(&config.extraction),
            generator: TaskGenerator::offline(config.generation.clone()),
            milestone_planner: MilestonePlanner::new(),
            composer: TeamComposer::new(config.composer.clone()),
            assigner: TaskAssigner::new(config.assignment.clone()),
            scheduler: TimelineScheduler::new(config.schedule.clone()),
        }
    }

    /// Run the full pipeline on one mission.
    ///
    /// The only hard error is an empty mission. Every later stage degrades
    /// instead of failing, so a non-empty mission always yields a complete,
    /// internally consistent plan. Each run is self-contained; planners can
    /// serve concurrent runs without shared state.
    pub async fn plan(&self, mission: &str) -> Result<ProjectPlan> {
        self.plan_from(mission, None).await
    }

    pub async fn plan_from(
        &self,
        mission: &str,
        start_date: Option<NaiveDate>,
    ) -> Result<ProjectPlan> {
        if mission.trim().is_empty() {
            return Err(PlanError::EmptyMission);
        }

        let (context, resources) = self.extractor.extract(mission);
        info!(
            project = %context.name,
            domain = %context.domain,
            timeline_weeks = context.timeline_weeks,
            "Planning run started"
        );

        let tasks = self.generator.generate(&context, &resources).await;
        let milestones = self.milestone_planner.plan(&context);
        let team = self.composer.compose(mission, &context, &resources);
        let assignment = self.assigner.assign(&tasks, &team);
        let timeline =
            self.scheduler
                .schedule(&milestones, &tasks, &team, start_date, Some(&assignment));

        let gantt = project_gantt(&timeline);
        let calendar = project_calendar(&timeline);
        let allocation = ResourceAllocation::build(&team, &assignment, &timeline);

        info!(
            tasks = tasks.len(),
            milestones = milestones.len(),
            team_size = team.len(),
            project_end = %timeline.summary.project_end,
            "Planning run completed"
        );

        Ok(ProjectPlan {
            context,
            resources,
            tasks,
            milestones,
            team,
            assignment,
            timeline,
            gantt,
            calendar,
            allocation,
        })
    }
}
