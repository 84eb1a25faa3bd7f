//! Recipe operations for the Kitchen.

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{KitchenError, Result},
    models::{Recipe, RecipeFilter},
    params::{CreateRecipe, DeleteRecipe, Id, ListRecipes, UpdateRecipe},
};

impl Kitchen {
    /// Creates a new recipe from validated parameters.
    pub async fn create_recipe(&self, params: &CreateRecipe) -> Result<Recipe> {
        let category = params.validate()?;
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let yield_amount = params.yield_amount.unwrap_or(1);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_recipe(&title, category, yield_amount)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a recipe with chapters and steps eagerly loaded, or None if
    /// it doesn't exist.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();
        let recipe_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(recipe_id)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists recipe summaries with optional title/category filtering.
    pub async fn list_recipes(&self, params: &ListRecipes) -> Result<crate::display::RecipeSummaries> {
        params.validate()?;
        let filter = RecipeFilter::from(params);
        let db_path = self.db_path.clone();

        let summaries = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_recipes(Some(&filter))
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::RecipeSummaries(summaries))
    }

    /// Updates a recipe's metadata and returns the updated recipe.
    pub async fn update_recipe(&self, params: &UpdateRecipe) -> Result<Recipe> {
        let category = params.validate()?;
        let db_path = self.db_path.clone();
        let recipe_id = params.id;
        let title = params.title.clone();
        let yield_amount = params.yield_amount;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_recipe(recipe_id, title.as_deref(), category, yield_amount)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a recipe with all its chapters and steps.
    ///
    /// Requires explicit confirmation via the `confirmed` field. Uses a
    /// get-before-delete pattern so the deleted recipe can be shown back to
    /// the caller; returns None if the recipe doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::InvalidInput` if `confirmed` is false
    pub async fn delete_recipe(&self, params: &DeleteRecipe) -> Result<Option<Recipe>> {
        if !params.confirmed {
            return Err(KitchenError::invalid_input("confirmed").with_reason(
                "Recipe deletion removes all chapters and steps. Set 'confirmed' to true to proceed.",
            ));
        }

        let id_params = Id { id: params.id };
        let recipe = self.get_recipe(&id_params).await?;

        if recipe.is_some() {
            let db_path = self.db_path.clone();
            let recipe_id = params.id;
            task::spawn_blocking(move || {
                let mut db = Database::new(&db_path)?;
                db.delete_recipe(recipe_id)
            })
            .await
            .map_err(|e| KitchenError::Configuration {
                message: format!("Task join error: {e}"),
            })??;
        }

        Ok(recipe)
    }
}
