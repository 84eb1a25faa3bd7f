//! Step operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, KitchenError, Result},
    models::{Step, StepKind},
};

const CHECK_CHAPTER_EXISTS_SQL: &str = "SELECT recipe_id FROM chapters WHERE id = ?1";
const NEXT_STEP_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(order_index), -1) + 1 FROM steps WHERE chapter_id = ?1";
const INSERT_STEP_SQL: &str = "INSERT INTO steps (chapter_id, order_index, description, duration_min, kind, temperature) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const TOUCH_RECIPE_SQL: &str = "UPDATE recipes SET updated_at = ?1 WHERE id = ?2";
const TOUCH_RECIPE_BY_STEP_SQL: &str = "UPDATE recipes SET updated_at = ?1 WHERE id = (SELECT recipe_id FROM chapters WHERE id = (SELECT chapter_id FROM steps WHERE id = ?2))";
const SELECT_STEPS_SQL: &str = "SELECT id, chapter_id, order_index, description, duration_min, kind, temperature FROM steps WHERE chapter_id = ?1 ORDER BY order_index, id";
const SELECT_STEP_SQL: &str = "SELECT id, chapter_id, order_index, description, duration_min, kind, temperature FROM steps WHERE id = ?1";
const SELECT_RECIPE_STEPS_SQL: &str = "SELECT s.id, s.chapter_id, s.order_index, s.description, s.duration_min, s.kind, s.temperature FROM steps s JOIN chapters c ON s.chapter_id = c.id WHERE c.recipe_id = ?1 ORDER BY s.order_index, s.id";
const DELETE_STEP_SQL: &str = "DELETE FROM steps WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Step from a database row
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<Step> {
        let kind_str: String = row.get(5)?;
        let kind = kind_str.parse::<StepKind>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid step kind: {kind_str}").into(),
            )
        })?;

        Ok(Step {
            id: row.get::<_, i64>(0)? as u64,
            chapter_id: row.get::<_, i64>(1)? as u64,
            order_index: row.get::<_, i64>(2)? as u32,
            description: row.get(3)?,
            duration_min: row.get(4)?,
            kind,
            temperature: row.get(6)?,
        })
    }

    /// Appends a new step to the chapter with the next free `order_index`.
    ///
    /// The duration has already passed the non-negativity gate in
    /// [`crate::params::AddStep::validate`]; this method stores it as given.
    pub fn add_step(
        &mut self,
        chapter_id: u64,
        description: &str,
        duration_min: i64,
        kind: StepKind,
        temperature: Option<i32>,
    ) -> Result<Step> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let recipe_id: Option<i64> = tx
            .query_row(CHECK_CHAPTER_EXISTS_SQL, params![chapter_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to check chapter existence")?;

        let Some(recipe_id) = recipe_id else {
            return Err(KitchenError::ChapterNotFound { id: chapter_id });
        };

        let order_index: i64 = tx
            .query_row(NEXT_STEP_ORDER_SQL, params![chapter_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to get next step order")?;

        tx.execute(
            INSERT_STEP_SQL,
            params![
                chapter_id as i64,
                order_index,
                description,
                duration_min,
                kind.as_str(),
                temperature
            ],
        )
        .db_context("Failed to insert step")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            TOUCH_RECIPE_SQL,
            params![Timestamp::now().to_string(), recipe_id],
        )
        .db_context("Failed to touch recipe timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Step {
            id,
            chapter_id,
            order_index: order_index as u32,
            description: description.into(),
            duration_min,
            kind,
            temperature,
        })
    }

    /// Retrieves all steps of a chapter, ordered ascending by `order_index`.
    pub fn get_steps(&self, chapter_id: u64) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_SQL)
            .db_context("Failed to prepare step query")?;

        let steps = stmt
            .query_map(params![chapter_id as i64], Self::build_step_from_row)
            .db_context("Failed to query steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read step rows");
        steps
    }

    /// Retrieves a single step by its ID.
    pub fn get_step(&self, id: u64) -> Result<Option<Step>> {
        self.connection
            .prepare(SELECT_STEP_SQL)
            .db_context("Failed to prepare step query")?
            .query_row(params![id as i64], Self::build_step_from_row)
            .optional()
            .db_context("Failed to query step")
    }

    /// Retrieves the flat step list of a recipe across all chapters, ordered
    /// ascending by step `order_index` (backward-mode input).
    pub fn get_recipe_steps(&self, recipe_id: u64) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECIPE_STEPS_SQL)
            .db_context("Failed to prepare recipe step query")?;

        let steps = stmt
            .query_map(params![recipe_id as i64], Self::build_step_from_row)
            .db_context("Failed to query recipe steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe step rows");
        steps
    }

    /// Removes a step from its chapter.
    pub fn remove_step(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            TOUCH_RECIPE_BY_STEP_SQL,
            params![Timestamp::now().to_string(), id as i64],
        )
        .db_context("Failed to touch recipe timestamp")?;

        let deleted = tx
            .execute(DELETE_STEP_SQL, params![id as i64])
            .db_context("Failed to delete step")?;

        if deleted == 0 {
            return Err(KitchenError::StepNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
