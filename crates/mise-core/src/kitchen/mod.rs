//! High-level kitchen API for managing recipes and computing schedules.
//!
//! This module provides the main [`Kitchen`] interface. The kitchen is the
//! coordinator between callers and the recipe store: it validates parameters,
//! routes blocking SQLite work through `tokio::task::spawn_blocking`, and
//! hands fully loaded recipe snapshots to the pure scheduler in
//! [`crate::schedule`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Kitchen      │    │    Database     │    │    schedule     │
//! │ (async facade)  │───▶│   (via db/)     │───▶│ (pure compute)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Validation + I/O      Recipe snapshots       Timetables
//! ```
//!
//! Every scheduling request reads its snapshot inside a single store call
//! before the calculator runs, so concurrent requests never share mutable
//! state.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mise_core::{params::CreateRecipe, KitchenBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! let recipe = kitchen
//!     .create_recipe(&CreateRecipe {
//!         title: "Country Loaf".to_string(),
//!         category: None,
//!         yield_amount: Some(2),
//!     })
//!     .await?;
//! println!("Created recipe: {}", recipe.title);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod chapter_ops;
pub mod recipe_ops;
pub mod schedule_handlers;
pub mod step_ops;


pub use builder::KitchenBuilder;

/// Main kitchen interface for managing recipes and computing schedules.
pub struct Kitchen {
    pub(crate) db_path: PathBuf,
}

impl Kitchen {
    /// Creates a new kitchen with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
