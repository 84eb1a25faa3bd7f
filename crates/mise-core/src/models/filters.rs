//! Filter types for querying recipes.

use super::RecipeCategory;

/// Filter options for querying recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Filter by recipe title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by recipe category
    pub category: Option<RecipeCategory>,
}

impl From<&crate::params::ListRecipes> for RecipeFilter {
    /// Convert ListRecipes parameters to a RecipeFilter for recipe queries.
    ///
    /// The category string has already been validated by
    /// [`crate::params::ListRecipes::validate`] when present; an unparseable
    /// value simply yields no category filter here.
    fn from(params: &crate::params::ListRecipes) -> Self {
        Self {
            title_contains: params.title.clone(),
            category: params
                .category
                .as_deref()
                .and_then(|c| c.parse::<RecipeCategory>().ok()),
        }
    }
}
