//! Chapter operations for the Kitchen.

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{KitchenError, Result},
    models::Chapter,
    params::AddChapter,
};

impl Kitchen {
    /// Appends a new chapter to a recipe.
    ///
    /// The chapter is assigned the next free `order_index`, making it the
    /// main chapter under the highest-order-index convention until another
    /// chapter is appended after it.
    pub async fn add_chapter(&self, params: &AddChapter) -> Result<Chapter> {
        let db_path = self.db_path.clone();
        let recipe_id = params.recipe_id;
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_chapter(recipe_id, &name)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
