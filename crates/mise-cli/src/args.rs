use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CalculateArgs, ChapterCommands, PlanArgs, RecipeCommands, StepCommands};

/// Main command-line interface for the mise recipe scheduling tool
///
/// Mise manages recipes decomposed into chapters (sub-recipes such as
/// "sourdough starter" or "main dough") of timed steps, and computes
/// wall-clock schedules from them: forward from a start time, with all
/// preparatory chapters converging on a single merge instant, or backward
/// from a target completion time.
#[derive(Parser)]
#[command(version, about, name = "mise")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/mise/mise.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the mise CLI
///
/// The CLI is organized into recipe/chapter/step management plus the two
/// scheduling modes:
/// - `plan`: forward timetable from a start time
/// - `calc`: backward countdown to a target time
#[derive(Subcommand)]
pub enum Commands {
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Manage chapters within recipes
    #[command(alias = "c")]
    Chapter {
        #[command(subcommand)]
        command: ChapterCommands,
    },
    /// Manage steps within chapters
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Compute a forward timetable from a start time
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Compute a backward countdown to a target completion time
    Calc(CalculateArgs),
}
