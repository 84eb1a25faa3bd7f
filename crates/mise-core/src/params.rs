//! Parameter structures for mise operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, other frontends later) without
//! framework-specific derives or dependencies. Interface layers wrap these
//! with their own derives (clap args in the CLI crate) and convert via
//! `From`/`Into`, so core logic never sees framework types.
//!
//! Validation that belongs to the storage boundary lives here as well:
//! [`AddStep::validate`] is the data-integrity gate that guarantees the
//! scheduler only ever sees non-negative durations and well-formed kinds.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::models::{RecipeCategory, StepKind};
use crate::{KitchenError, Result};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_recipe, remove_step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecipe {
    /// Title of the recipe (required)
    pub title: String,
    /// Category of the recipe ('baking' or 'cooking'); defaults to baking
    pub category: Option<String>,
    /// Number of portions the recipe yields; defaults to 1
    pub yield_amount: Option<i64>,
}

impl CreateRecipe {
    /// Validate creation parameters and return the parsed category.
    ///
    /// # Errors
    ///
    /// * `KitchenError::InvalidInput` - When the title is empty or the
    ///   category string is not a known category
    pub fn validate(&self) -> Result<RecipeCategory> {
        if self.title.trim().is_empty() {
            return Err(KitchenError::invalid_input("title")
                .with_reason("Recipe title must not be empty"));
        }

        match &self.category {
            Some(category) => category.parse::<RecipeCategory>().map_err(|_| {
                KitchenError::invalid_input("category").with_reason(format!(
                    "Invalid category: {category}. Must be 'baking' or 'cooking'"
                ))
            }),
            None => Ok(RecipeCategory::default()),
        }
    }
}

/// Parameters for listing recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRecipes {
    /// Only show recipes whose title contains this text
    pub title: Option<String>,
    /// Only show recipes of this category ('baking' or 'cooking')
    pub category: Option<String>,
}

impl ListRecipes {
    /// Validate the optional category filter.
    ///
    /// # Errors
    ///
    /// * `KitchenError::InvalidInput` - When the category string is not a
    ///   known category
    pub fn validate(&self) -> Result<Option<RecipeCategory>> {
        self.category
            .as_deref()
            .map(|category| {
                category.parse::<RecipeCategory>().map_err(|_| {
                    KitchenError::invalid_input("category").with_reason(format!(
                        "Invalid category: {category}. Must be 'baking' or 'cooking'"
                    ))
                })
            })
            .transpose()
    }
}

/// Parameters for updating an existing recipe's metadata.
///
/// Chapters and steps are managed through their own operations; this only
/// touches the recipe row itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipe {
    /// Recipe ID to update (required)
    pub id: u64,
    /// Updated title of the recipe
    pub title: Option<String>,
    /// Updated category ('baking' or 'cooking')
    pub category: Option<String>,
    /// Updated yield amount
    pub yield_amount: Option<i64>,
}

impl UpdateRecipe {
    /// Validate update parameters and return the parsed category, if any.
    ///
    /// # Errors
    ///
    /// * `KitchenError::InvalidInput` - When the category string is not a
    ///   known category or an explicit empty title is given
    pub fn validate(&self) -> Result<Option<RecipeCategory>> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(KitchenError::invalid_input("title")
                    .with_reason("Recipe title must not be empty"));
            }
        }

        self.category
            .as_deref()
            .map(|category| {
                category.parse::<RecipeCategory>().map_err(|_| {
                    KitchenError::invalid_input("category").with_reason(format!(
                        "Invalid category: {category}. Must be 'baking' or 'cooking'"
                    ))
                })
            })
            .transpose()
    }
}

/// Parameters for permanently deleting a recipe.
///
/// Requires explicit confirmation to prevent accidental deletion of a recipe
/// together with all its chapters and steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRecipe {
    /// The ID of the recipe to delete
    pub id: u64,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a chapter to a recipe.
///
/// The chapter is appended: it receives the next free `order_index`, making
/// it the new main chapter by the highest-order-index convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddChapter {
    /// ID of the recipe to add the chapter to
    pub recipe_id: u64,
    /// Name of the sub-recipe (e.g. "Sourdough starter")
    pub name: String,
}

/// Parameters for adding a step to a chapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddStep {
    /// ID of the chapter to add the step to
    pub chapter_id: u64,
    /// What to do in this step
    pub description: String,
    /// Duration of the step in whole minutes (must be non-negative)
    pub duration_min: i64,
    /// Kind of work ('active', 'passive', or 'baking'); defaults to passive
    pub kind: Option<String>,
    /// Optional temperature in degrees Celsius
    pub temperature: Option<i32>,
}

impl AddStep {
    /// Validate step parameters and return the parsed kind.
    ///
    /// This is the data-integrity gate for durations: the scheduler assumes
    /// durations are already validated non-negative and does not re-check.
    ///
    /// # Errors
    ///
    /// * `KitchenError::InvalidInput` - When the duration is negative or the
    ///   kind string is not a known kind
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mise_core::params::AddStep;
    ///
    /// let params = AddStep {
    ///     chapter_id: 1,
    ///     description: "Mix the dough".to_string(),
    ///     duration_min: 10,
    ///     kind: Some("active".to_string()),
    ///     temperature: None,
    /// };
    /// assert!(params.validate().is_ok());
    ///
    /// let params = AddStep {
    ///     duration_min: -5,
    ///     ..params
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<StepKind> {
        if self.duration_min < 0 {
            return Err(KitchenError::invalid_input("duration_min").with_reason(format!(
                "Duration must be a non-negative number of minutes, got {}",
                self.duration_min
            )));
        }

        match &self.kind {
            Some(kind) => kind.parse::<StepKind>().map_err(|_| {
                KitchenError::invalid_input("kind").with_reason(format!(
                    "Invalid kind: {kind}. Must be 'active', 'passive', or 'baking'"
                ))
            }),
            None => Ok(StepKind::default()),
        }
    }
}

/// Parameters for computing a forward timetable ("I will start at time T,
/// tell me the full plan").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecipe {
    /// ID of the recipe to plan
    pub id: u64,
    /// Instant at which work begins; offset/zone is preserved into every
    /// derived timestamp
    pub start_time: Zoned,
}

/// Parameters for computing a backward countdown ("I need to be done by time
/// T, tell me when each step starts").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateSchedule {
    /// ID of the recipe whose flat step list is scheduled
    pub id: u64,
    /// Instant by which the last step must finish
    pub target_time: Zoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeCategory, StepKind};
    use crate::KitchenError;

    fn step_params(duration_min: i64, kind: Option<&str>) -> AddStep {
        AddStep {
            chapter_id: 1,
            description: "Mix".to_string(),
            duration_min,
            kind: kind.map(String::from),
            temperature: None,
        }
    }

    #[test]
    fn test_add_step_validate_defaults_to_passive() {
        let kind = step_params(10, None).validate().unwrap();
        assert_eq!(kind, StepKind::Passive);
    }

    #[test]
    fn test_add_step_validate_parses_kind() {
        let kind = step_params(10, Some("baking")).validate().unwrap();
        assert_eq!(kind, StepKind::Baking);
    }

    #[test]
    fn test_add_step_validate_rejects_negative_duration() {
        let result = step_params(-1, None).validate();
        match result.unwrap_err() {
            KitchenError::InvalidInput { field, reason } => {
                assert_eq!(field, "duration_min");
                assert!(reason.contains("non-negative"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_add_step_validate_zero_duration_is_valid() {
        assert!(step_params(0, None).validate().is_ok());
    }

    #[test]
    fn test_add_step_validate_rejects_unknown_kind() {
        let result = step_params(10, Some("frying")).validate();
        match result.unwrap_err() {
            KitchenError::InvalidInput { field, reason } => {
                assert_eq!(field, "kind");
                assert!(reason.contains("frying"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_recipe_validate_default_category() {
        let params = CreateRecipe {
            title: "Sourdough".to_string(),
            category: None,
            yield_amount: None,
        };
        assert_eq!(params.validate().unwrap(), RecipeCategory::Baking);
    }

    #[test]
    fn test_create_recipe_validate_rejects_empty_title() {
        let params = CreateRecipe {
            title: "   ".to_string(),
            category: None,
            yield_amount: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_create_recipe_validate_rejects_unknown_category() {
        let params = CreateRecipe {
            title: "Stew".to_string(),
            category: Some("grilling".to_string()),
            yield_amount: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_list_recipes_validate_passes_through_category() {
        let params = ListRecipes {
            title: None,
            category: Some("cooking".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(RecipeCategory::Cooking));
    }

    #[test]
    fn test_update_recipe_validate_no_changes() {
        let params = UpdateRecipe {
            id: 1,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), None);
    }
}
