//! Recipe CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, KitchenError, Result},
    models::{Recipe, RecipeCategory, RecipeFilter, RecipeSummary},
};

const INSERT_RECIPE_SQL: &str = "INSERT INTO recipes (title, category, yield_amount, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_RECIPE_SQL: &str =
    "SELECT id, title, category, yield_amount, created_at, updated_at FROM recipes WHERE id = ?1";
const UPDATE_RECIPE_SQL: &str =
    "UPDATE recipes SET title = ?1, category = ?2, yield_amount = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_RECIPE_STEPS_SQL: &str =
    "DELETE FROM steps WHERE chapter_id IN (SELECT id FROM chapters WHERE recipe_id = ?1)";
const DELETE_RECIPE_CHAPTERS_SQL: &str = "DELETE FROM chapters WHERE recipe_id = ?1";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";

const SUMMARY_COLUMNS: &str =
    "id, title, category, yield_amount, created_at, updated_at, total_chapters, total_steps, total_duration_min";

impl super::Database {
    /// Helper function to construct a Recipe (without chapters) from a
    /// database row
    fn build_recipe_from_row(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
        let category_str: String = row.get(2)?;
        let category = category_str.parse::<RecipeCategory>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid recipe category: {category_str}").into(),
            )
        })?;

        Ok(Recipe {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            category,
            yield_amount: row.get(3)?,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            chapters: Vec::new(),
        })
    }

    /// Creates a new recipe with the given title, category, and yield.
    pub fn create_recipe(
        &mut self,
        title: &str,
        category: RecipeCategory,
        yield_amount: i64,
    ) -> Result<Recipe> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_RECIPE_SQL,
                params![title, category.as_str(), yield_amount, &now_str, &now_str],
            )
            .db_context("Failed to insert recipe")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Recipe {
            id,
            title: title.into(),
            category,
            yield_amount,
            created_at: now,
            updated_at: now,
            chapters: Vec::new(),
        })
    }

    /// Retrieves a recipe by its ID with chapters and steps eagerly loaded.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECIPE_SQL)
            .db_context("Failed to prepare recipe query")?;

        let mut recipe = stmt
            .query_row(params![id as i64], Self::build_recipe_from_row)
            .optional()
            .db_context("Failed to query recipe")?;

        if let Some(ref mut recipe) = recipe {
            recipe.chapters = self.get_chapters(recipe.id)?;
        }

        Ok(recipe)
    }

    /// Lists recipe summaries with optional filtering, newest first.
    pub fn list_recipes(&self, filter: Option<&RecipeFilter>) -> Result<Vec<RecipeSummary>> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM recipe_summaries");
        let mut clauses: Vec<String> = Vec::new();
        let mut bindings: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(filter) = filter {
            if let Some(title) = &filter.title_contains {
                clauses.push(format!("title LIKE ?{} ESCAPE '\\'", bindings.len() + 1));
                let escaped = title.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
                bindings.push(Box::new(format!("%{escaped}%")));
            }
            if let Some(category) = filter.category {
                clauses.push(format!("category = ?{}", bindings.len() + 1));
                bindings.push(Box::new(category.as_str().to_string()));
            }
        }

        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare recipe list query")?;

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            bindings.iter().map(|binding| binding.as_ref()).collect();
        let summaries = stmt
            .query_map(params_ref.as_slice(), Self::build_summary_from_row)
            .db_context("Failed to query recipes")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe rows")?;

        Ok(summaries)
    }

    /// Updates a recipe's metadata, leaving unspecified fields untouched.
    pub fn update_recipe(
        &mut self,
        id: u64,
        title: Option<&str>,
        category: Option<RecipeCategory>,
        yield_amount: Option<i64>,
    ) -> Result<Recipe> {
        let existing = self
            .get_recipe(id)?
            .ok_or(KitchenError::RecipeNotFound { id })?;

        let title = title.unwrap_or(&existing.title);
        let category = category.unwrap_or(existing.category);
        let yield_amount = yield_amount.unwrap_or(existing.yield_amount);
        let now = Timestamp::now();

        self.connection
            .execute(
                UPDATE_RECIPE_SQL,
                params![
                    title,
                    category.as_str(),
                    yield_amount,
                    now.to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to update recipe")?;

        Ok(Recipe {
            title: title.into(),
            category,
            yield_amount,
            updated_at: now,
            ..existing
        })
    }

    /// Permanently deletes a recipe together with its chapters and steps.
    pub fn delete_recipe(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_RECIPE_STEPS_SQL, params![id as i64])
            .db_context("Failed to delete recipe steps")?;
        tx.execute(DELETE_RECIPE_CHAPTERS_SQL, params![id as i64])
            .db_context("Failed to delete recipe chapters")?;
        let deleted = tx
            .execute(DELETE_RECIPE_SQL, params![id as i64])
            .db_context("Failed to delete recipe")?;

        if deleted == 0 {
            return Err(KitchenError::RecipeNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Helper function to construct a RecipeSummary from a summary view row
    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<RecipeSummary> {
        let category_str: String = row.get(2)?;
        let category = category_str.parse::<RecipeCategory>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid recipe category: {category_str}").into(),
            )
        })?;

        Ok(RecipeSummary {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            category,
            yield_amount: row.get(3)?,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            total_chapters: row.get::<_, i64>(6)? as u32,
            total_steps: row.get::<_, i64>(7)? as u32,
            total_duration_min: row.get(8)?,
        })
    }
}
