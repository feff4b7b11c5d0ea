//! Configuration types and loading.
//!
//! `PlannerConfig` is the top-level configuration with validation; each
//! planning stage has its own sub-config so defaults stay local to the
//! component that interprets them.

mod settings;

pub use settings::{
    AssignmentConfig, ComposerConfig, ExtractionConfig, GenerationConfig, PlannerConfig,
    ScheduleConfig, ScheduleStrategy, TextGenConfig,
};
