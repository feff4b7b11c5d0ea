//! Read-only projections of a scheduled timeline.

mod calendar;
mod gantt;

pub use calendar::{project_calendar, CalendarEvent};
pub use gantt::{project_gantt, GanttItem};
