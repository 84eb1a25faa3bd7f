//! Chapter model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Step;

/// Represents a named, ordered sub-recipe (e.g. "sourdough starter").
///
/// A chapter's duration is derived, never stored: it is the sum of its step
/// durations, computed by [`crate::schedule::chapter_duration`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Unique identifier for the chapter
    pub id: u64,

    /// ID of the owning recipe
    pub recipe_id: u64,

    /// Name of the sub-recipe
    pub name: String,

    /// Position of the chapter within the recipe (0-based). By convention
    /// the chapter with the highest order index is the main chapter where
    /// all preparatory chapters converge.
    pub order_index: u32,

    /// Ordered steps of this chapter
    #[serde(default)]
    pub steps: Vec<Step>,
}
