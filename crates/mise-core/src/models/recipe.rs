//! Recipe model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Chapter, RecipeCategory};

/// Represents a complete recipe with metadata and chapters.
///
/// This is a plain immutable value: the scheduler receives it fully loaded
/// and never touches a database session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: u64,

    /// Title of the recipe
    pub title: String,

    /// Category of the recipe (baking or cooking)
    #[serde(default)]
    pub category: RecipeCategory,

    /// Number of portions the recipe yields
    pub yield_amount: i64,

    /// Timestamp when the recipe was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the recipe was last modified (UTC)
    pub updated_at: Timestamp,

    /// Ordered chapters of the recipe
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}
