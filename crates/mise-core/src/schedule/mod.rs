//! The schedule calculator: pure timetable computation over recipe data.
//!
//! This module is the core of mise. It takes an already loaded, immutable
//! [`Recipe`](crate::models::Recipe) snapshot and computes wall-clock
//! schedules in one of two modes:
//!
//! - **Forward** ([`plan_forward`]): "I start at time T". Every preparatory
//!   (tributary) chapter is back-dated so that all of them finish at a single
//!   merge instant, at which the main chapter (the one with the highest
//!   `order_index`) begins.
//! - **Backward** ([`plan_backward`]): "I must be done by time T". A flat
//!   step list is walked last-step-first, accumulating backwards from the
//!   target to find when to start.
//!
//! Both modes share the same numeric semantics: durations are whole minutes,
//! arithmetic is exact, and the offset/zone of the input [`jiff::Zoned`] is
//! preserved into every derived timestamp. The functions here perform no
//! I/O, hold no state, and may run concurrently on independent snapshots
//! without coordination.
//!
//! "Nothing to schedule" (a recipe without chapters, a step list without
//! steps) is a structured `Ok(None)` outcome, not an error: callers are
//! forced to branch on it explicitly.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::models::StepKind;

mod backward;
mod duration;
mod forward;

#[cfg(test)]
mod tests;

pub use backward::plan_backward;
pub use duration::chapter_duration;
pub use forward::plan_forward;

/// A single timestamped entry of a forward timetable.
///
/// Serializes with the wire field names `time`, `description`, `duration`,
/// and `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    /// Instant at which this step begins
    pub time: Zoned,

    /// Label derived as "<chapter name>: <step description>"
    pub description: String,

    /// Duration of the step in whole minutes
    #[serde(rename = "duration")]
    pub duration_min: i64,

    /// Kind of work, carried through from the step untouched
    #[serde(rename = "type")]
    pub kind: StepKind,
}

/// The result of forward scheduling: a chronologically sorted timetable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timetable {
    /// The instant work begins (the longest tributary starts here)
    pub start_time: Zoned,

    /// The convergence instant: every tributary chapter finishes here and
    /// the main chapter begins
    pub merge_time: Zoned,

    /// All schedule entries, ascending by time; ties keep the order in which
    /// chapters and steps were processed
    pub entries: Vec<ScheduleEntry>,
}

/// A single step of a backward countdown, with explicit start and end.
///
/// Serializes with the wire field names `step_description`, `start_time`,
/// `end_time`, `duration_min`, and `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountdownStep {
    /// Description of the step, taken verbatim from the input
    pub step_description: String,

    /// Instant at which this step begins
    pub start_time: Zoned,

    /// Instant at which this step ends (the next step's start)
    pub end_time: Zoned,

    /// Duration of the step in whole minutes
    pub duration_min: i64,

    /// Kind of work, carried through from the step untouched
    #[serde(rename = "type")]
    pub kind: StepKind,
}

/// The result of backward scheduling: when to start so everything lands on
/// the target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Countdown {
    /// Title of the recipe the steps belong to
    pub recipe_title: String,

    /// The requested completion instant
    pub target_time: Zoned,

    /// The derived overall start instant (start of the first step)
    pub start_time: Zoned,

    /// The steps in forward chronological order
    pub steps: Vec<CountdownStep>,
}
