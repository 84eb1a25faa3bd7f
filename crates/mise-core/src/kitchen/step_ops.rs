//! Step operations for the Kitchen.

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{KitchenError, Result},
    models::Step,
    params::{AddStep, Id},
};

impl Kitchen {
    /// Appends a new step to a chapter.
    ///
    /// Parameters pass through [`AddStep::validate`], the data-integrity gate
    /// that keeps negative durations and unknown kinds out of the store.
    pub async fn add_step(&self, params: &AddStep) -> Result<Step> {
        let kind = params.validate()?;
        let db_path = self.db_path.clone();
        let chapter_id = params.chapter_id;
        let description = params.description.clone();
        let duration_min = params.duration_min;
        let temperature = params.temperature;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_step(chapter_id, &description, duration_min, kind, temperature)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a single step by its ID.
    pub async fn get_step(&self, params: &Id) -> Result<Option<Step>> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_step(step_id)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a step from its chapter.
    pub async fn remove_step(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_step(step_id)
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
