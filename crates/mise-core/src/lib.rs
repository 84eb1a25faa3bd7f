//! Core library for the mise recipe scheduling application.
//!
//! This crate provides the business logic for managing recipes and computing
//! baking/cooking schedules: the recipe store, data models, error handling,
//! and the schedule calculator itself.
//!
//! # Architecture
//!
//! The schedule calculator ([`schedule`]) is a pure function over an
//! immutable [`models::Recipe`] snapshot: no I/O, no clock access, no shared
//! state. Everything around it is plumbing in three layers:
//!
//! - **Models** ([`models`]): plain value structs for Recipe → Chapter → Step
//! - **Store** ([`db`]): SQLite persistence that loads complete snapshots
//! - **Kitchen** ([`kitchen`]): async facade gluing store and calculator
//!
//! Output formatting is markdown via `Display` implementations and wrapper
//! types in [`display`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mise_core::{params, KitchenBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! // Create a recipe with one chapter and one step
//! let recipe = kitchen
//!     .create_recipe(&params::CreateRecipe {
//!         title: "Country Loaf".to_string(),
//!         category: None,
//!         yield_amount: Some(2),
//!     })
//!     .await?;
//! let chapter = kitchen
//!     .add_chapter(&params::AddChapter {
//!         recipe_id: recipe.id,
//!         name: "Starter".to_string(),
//!     })
//!     .await?;
//! kitchen
//!     .add_step(&params::AddStep {
//!         chapter_id: chapter.id,
//!         description: "Feed the starter".to_string(),
//!         duration_min: 60,
//!         kind: Some("active".to_string()),
//!         temperature: None,
//!     })
//!     .await?;
//!
//! // Forward timetable from a start instant
//! let timetable = kitchen
//!     .plan_recipe(&params::PlanRecipe {
//!         id: recipe.id,
//!         start_time: "2026-08-08T09:00:00+02:00[+02:00]".parse()?,
//!     })
//!     .await?;
//! match timetable {
//!     Some(timetable) => println!("{timetable}"),
//!     None => println!("Nothing to schedule."),
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod kitchen;
pub mod models;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, RecipeSummaries, UpdateResult,
};
pub use error::{KitchenError, Result};
pub use kitchen::{Kitchen, KitchenBuilder};
pub use models::{
    Chapter, Recipe, RecipeCategory, RecipeFilter, RecipeSummary, Step, StepKind,
};
pub use schedule::{
    chapter_duration, plan_backward, plan_forward, Countdown, CountdownStep, ScheduleEntry,
    Timetable,
};
