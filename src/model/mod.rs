//! Core data records shared by every planning stage.

mod context;
mod milestone;
mod task;
mod team;
mod timeline;

pub use context::{Constraint, ConstraintKind, ProjectContext, ResourceContext};
pub use milestone::Milestone;
pub use task::{Complexity, Domain, Priority, Task};
pub use team::{ExperienceTier, TeamMember};
pub use timeline::{EntryKind, MemberSchedule, ProjectSummary, Timeline, TimelineEntry};
