pub mod assign;
pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod generate;
pub mod milestones;
pub mod model;
pub mod planner;
pub mod schedule;
pub mod team;
pub mod textgen;
pub mod views;

pub use assign::{AssignmentReport, TaskAssigner, WorkloadLedger};
pub use config::{PlannerConfig, ScheduleStrategy};
pub use envelope::{MessageEnvelope, ResourceAllocation, ResponseEnvelope};
pub use error::{PlanError, Result};
pub use extract::{ContextExtractor, DomainClassifier, DomainMatch};
pub use generate::TaskGenerator;
pub use milestones::MilestonePlanner;
pub use model::{
    Complexity, Domain, Milestone, Priority, ProjectContext, ResourceContext, Task, TeamMember,
    Timeline,
};
pub use planner::{Planner, ProjectPlan};
pub use schedule::TimelineScheduler;
pub use team::TeamComposer;
pub use textgen::{HttpTextGenerator, TextGenerator};
pub use views::{project_calendar, project_gantt, CalendarEvent, GanttItem};
