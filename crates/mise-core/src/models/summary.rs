//! Recipe summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Recipe, RecipeCategory};
use crate::schedule::chapter_duration;

/// Summary information about a recipe with derived chapter/step statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe ID
    pub id: u64,
    /// Title of the recipe
    pub title: String,
    /// Category of the recipe
    pub category: RecipeCategory,
    /// Number of portions the recipe yields
    pub yield_amount: i64,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of chapters
    pub total_chapters: u32,
    /// Total number of steps across all chapters
    pub total_steps: u32,
    /// Sum of all step durations in minutes
    pub total_duration_min: i64,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        let total_chapters = recipe.chapters.len() as u32;
        let total_steps = recipe
            .chapters
            .iter()
            .map(|chapter| chapter.steps.len() as u32)
            .sum();
        let total_duration_min = recipe
            .chapters
            .iter()
            .map(|chapter| chapter_duration(&chapter.steps))
            .sum();

        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            category: recipe.category,
            yield_amount: recipe.yield_amount,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            total_chapters,
            total_steps,
            total_duration_min,
        }
    }
}
