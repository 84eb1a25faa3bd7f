//! Scheduling entry points: load a snapshot, run the pure calculator.

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{KitchenError, Result},
    params::{CalculateSchedule, PlanRecipe},
    schedule::{self, Countdown, Timetable},
};

impl Kitchen {
    /// Computes the forward timetable for a recipe ("I start at time T, tell
    /// me the full plan").
    ///
    /// Loads the recipe aggregate in one store call and hands the immutable
    /// snapshot to [`schedule::plan_forward`]. Returns `Ok(None)` when the
    /// recipe exists but has no chapters; callers must branch on that
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::RecipeNotFound` if the recipe doesn't exist
    pub async fn plan_recipe(&self, params: &PlanRecipe) -> Result<Option<Timetable>> {
        let db_path = self.db_path.clone();
        let recipe_id = params.id;

        let recipe = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(recipe_id)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })??
        .ok_or(KitchenError::RecipeNotFound { id: recipe_id })?;

        schedule::plan_forward(&recipe, &params.start_time)
    }

    /// Computes the backward countdown for a recipe ("I must be done by time
    /// T, tell me when each step starts").
    ///
    /// Uses the flat step list across all chapters, ordered by step
    /// `order_index`. Returns `Ok(None)` when the recipe has no steps.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::RecipeNotFound` if the recipe doesn't exist
    pub async fn calculate_schedule(
        &self,
        params: &CalculateSchedule,
    ) -> Result<Option<Countdown>> {
        let db_path = self.db_path.clone();
        let recipe_id = params.id;

        let (title, steps) = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let recipe = db
                .get_recipe(recipe_id)?
                .ok_or(KitchenError::RecipeNotFound { id: recipe_id })?;
            let steps = db.get_recipe_steps(recipe_id)?;
            Ok::<_, KitchenError>((recipe.title, steps))
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        schedule::plan_backward(&title, &steps, &params.target_time)
    }
}
