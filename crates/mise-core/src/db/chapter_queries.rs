//! Chapter operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, KitchenError, Result},
    models::Chapter,
};

const CHECK_RECIPE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?1)";
const NEXT_CHAPTER_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(order_index), -1) + 1 FROM chapters WHERE recipe_id = ?1";
const INSERT_CHAPTER_SQL: &str =
    "INSERT INTO chapters (recipe_id, name, order_index) VALUES (?1, ?2, ?3)";
const TOUCH_RECIPE_SQL: &str = "UPDATE recipes SET updated_at = ?1 WHERE id = ?2";
const SELECT_CHAPTERS_SQL: &str = "SELECT id, recipe_id, name, order_index FROM chapters WHERE recipe_id = ?1 ORDER BY order_index, id";
const SELECT_CHAPTER_SQL: &str =
    "SELECT id, recipe_id, name, order_index FROM chapters WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Chapter (without steps) from a database
    /// row
    fn build_chapter_from_row(row: &rusqlite::Row) -> rusqlite::Result<Chapter> {
        Ok(Chapter {
            id: row.get::<_, i64>(0)? as u64,
            recipe_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            order_index: row.get::<_, i64>(3)? as u32,
            steps: Vec::new(),
        })
    }

    /// Appends a new chapter to the recipe.
    ///
    /// The chapter receives the next free `order_index`, which makes it the
    /// new main chapter under the highest-order-index convention.
    pub fn add_chapter(&mut self, recipe_id: u64, name: &str) -> Result<Chapter> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let recipe_exists: bool = tx
            .query_row(CHECK_RECIPE_EXISTS_SQL, params![recipe_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check recipe existence")?;

        if !recipe_exists {
            return Err(KitchenError::RecipeNotFound { id: recipe_id });
        }

        let order_index: i64 = tx
            .query_row(NEXT_CHAPTER_ORDER_SQL, params![recipe_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to get next chapter order")?;

        tx.execute(
            INSERT_CHAPTER_SQL,
            params![recipe_id as i64, name, order_index],
        )
        .db_context("Failed to insert chapter")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            TOUCH_RECIPE_SQL,
            params![Timestamp::now().to_string(), recipe_id as i64],
        )
        .db_context("Failed to touch recipe timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Chapter {
            id,
            recipe_id,
            name: name.into(),
            order_index: order_index as u32,
            steps: Vec::new(),
        })
    }

    /// Retrieves all chapters of a recipe with their steps eagerly loaded,
    /// ordered ascending by `order_index`.
    pub fn get_chapters(&self, recipe_id: u64) -> Result<Vec<Chapter>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CHAPTERS_SQL)
            .db_context("Failed to prepare chapter query")?;

        let mut chapters = stmt
            .query_map(params![recipe_id as i64], Self::build_chapter_from_row)
            .db_context("Failed to query chapters")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read chapter rows")?;

        for chapter in &mut chapters {
            chapter.steps = self.get_steps(chapter.id)?;
        }

        Ok(chapters)
    }

    /// Retrieves a single chapter by its ID, without steps.
    pub fn get_chapter(&self, id: u64) -> Result<Option<Chapter>> {
        self.connection
            .prepare(SELECT_CHAPTER_SQL)
            .db_context("Failed to prepare chapter query")?
            .query_row(params![id as i64], Self::build_chapter_from_row)
            .optional()
            .db_context("Failed to query chapter")
    }
}
