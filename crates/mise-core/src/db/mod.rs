//! Database operations and SQLite management for recipes, chapters, and
//! steps.
//!
//! This module provides the low-level recipe store. It handles SQLite
//! connections and schema setup, and exposes specialized query interfaces
//! per aggregate level. Every read used by the scheduler loads a complete,
//! owned snapshot within one connection scope, so the pure schedule code in
//! [`crate::schedule`] never touches a live database handle.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod chapter_queries;
pub mod recipe_queries;
pub mod schema;
pub mod step_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
