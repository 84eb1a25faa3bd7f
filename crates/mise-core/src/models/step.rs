//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::StepKind;

/// Represents an atomic unit of work within a chapter.
///
/// Steps are owned exclusively by one chapter and never shared. The
/// `order_index` defines the intra-chapter sequence; it is totally ordered
/// but not required to be contiguous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the owning chapter
    pub chapter_id: u64,

    /// Position of the step within its chapter
    pub order_index: u32,

    /// What to do in this step
    pub description: String,

    /// Duration of the step in whole minutes (non-negative)
    pub duration_min: i64,

    /// Kind of work (active, passive, baking); descriptive only
    pub kind: StepKind,

    /// Optional temperature for the step in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}
