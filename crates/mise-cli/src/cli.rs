//! Command-line interface definitions and handlers
//!
//! This module defines the CLI structure using clap's derive API, following
//! the parameter wrapper pattern: each command gets a clap-specific argument
//! struct that converts into the framework-free parameter types of
//! `mise_core::params`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Kitchen
//! ```
//!
//! CLI concerns (flags, aliases, help text, time-string parsing) stay here;
//! business validation (duration gates, kind/category parsing) stays in the
//! core parameter types. The [`Cli`] struct at the bottom owns the kitchen
//! and the terminal renderer and implements one handler per command.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::{civil, tz::TimeZone, Timestamp, Zoned};
use mise_core::{
    display::OperationStatus,
    params::{
        AddChapter, AddStep, CalculateSchedule, CreateRecipe, DeleteRecipe, Id, ListRecipes,
        PlanRecipe, UpdateRecipe,
    },
    CreateResult, DeleteResult, Kitchen, UpdateResult,
};

use crate::renderer::TerminalRenderer;

/// Parses a schedule instant from the command line.
///
/// Accepts, in order of preference:
/// 1. An RFC 9557 zoned timestamp (`2026-08-08T09:00:00+02:00[Europe/Berlin]`),
///    whose zone is preserved through the whole schedule.
/// 2. An ISO-8601 instant with offset or `Z` (`2026-08-08T07:00:00Z`),
///    rendered in the system time zone.
/// 3. A civil datetime (`2026-08-08T09:00`), resolved in the system time
///    zone.
fn parse_clock(s: &str) -> Result<Zoned, String> {
    if let Ok(zoned) = s.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(timestamp) = s.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::system()));
    }
    s.parse::<civil::DateTime>()
        .map_err(|_| {
            format!(
                "'{s}' is not a recognized time; use ISO-8601, e.g. \
                 2026-08-08T09:00 or 2026-08-08T09:00:00+02:00[Europe/Berlin]"
            )
        })
        .and_then(|datetime| {
            datetime
                .to_zoned(TimeZone::system())
                .map_err(|e| e.to_string())
        })
}

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Create a new recipe
#[derive(Args)]
pub struct CreateRecipeArgs {
    /// Title of the recipe
    pub title: String,
    /// Category of the recipe
    #[arg(short, long, help = "Category of the recipe (baking or cooking)")]
    pub category: Option<CategoryArg>,
    /// Number of portions the recipe yields
    #[arg(short, long, help = "Number of portions the recipe yields")]
    pub yield_amount: Option<i64>,
}

impl From<CreateRecipeArgs> for CreateRecipe {
    fn from(val: CreateRecipeArgs) -> Self {
        CreateRecipe {
            title: val.title,
            category: val.category.map(|c| c.to_string()),
            yield_amount: val.yield_amount,
        }
    }
}

/// List all recipes
#[derive(Args)]
pub struct ListRecipesArgs {
    /// Only show recipes whose title contains this text
    #[arg(short, long)]
    pub title: Option<String>,
    /// Only show recipes of this category
    #[arg(short, long, help = "Only show recipes of this category")]
    pub category: Option<CategoryArg>,
}

impl From<ListRecipesArgs> for ListRecipes {
    fn from(val: ListRecipesArgs) -> Self {
        ListRecipes {
            title: val.title,
            category: val.category.map(|c| c.to_string()),
        }
    }
}

/// Show details of a specific recipe
#[derive(Args)]
pub struct ShowRecipeArgs {
    /// ID of the recipe to display
    #[arg(help = "Unique identifier of the recipe to show details for")]
    pub id: u64,
}

impl From<ShowRecipeArgs> for Id {
    fn from(val: ShowRecipeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a recipe's metadata
#[derive(Args)]
pub struct UpdateRecipeArgs {
    #[arg(help = "Unique identifier of the recipe to update")]
    pub id: u64,
    /// Updated title for the recipe
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated category for the recipe
    #[arg(short, long)]
    pub category: Option<CategoryArg>,
    /// Updated yield amount
    #[arg(short, long)]
    pub yield_amount: Option<i64>,
}

impl From<UpdateRecipeArgs> for UpdateRecipe {
    fn from(val: UpdateRecipeArgs) -> Self {
        UpdateRecipe {
            id: val.id,
            title: val.title,
            category: val.category.map(|c| c.to_string()),
            yield_amount: val.yield_amount,
        }
    }
}

/// Delete a recipe permanently
#[derive(Args)]
pub struct DeleteRecipeArgs {
    /// ID of the recipe to delete
    #[arg(help = "Unique identifier of the recipe to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteRecipeArgs> for DeleteRecipe {
    fn from(val: DeleteRecipeArgs) -> Self {
        DeleteRecipe {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Create a new recipe
    #[command(alias = "n")]
    New(CreateRecipeArgs),
    /// List all recipes
    #[command(aliases = ["l", "ls"])]
    List(ListRecipesArgs),
    /// Show details of a specific recipe
    #[command(alias = "s")]
    Show(ShowRecipeArgs),
    /// Update a recipe's metadata
    #[command(alias = "u")]
    Update(UpdateRecipeArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
}

/// Append a new chapter to a recipe
///
/// Chapters are appended in order; the most recently added chapter is the
/// main chapter that all earlier chapters converge into when planning.
#[derive(Args)]
pub struct AddChapterArgs {
    #[arg(help = "Unique identifier of the recipe to add this chapter to")]
    pub recipe_id: u64,
    /// Name of the sub-recipe (e.g. "Sourdough starter")
    pub name: String,
}

impl From<AddChapterArgs> for AddChapter {
    fn from(val: AddChapterArgs) -> Self {
        AddChapter {
            recipe_id: val.recipe_id,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum ChapterCommands {
    /// Append a new chapter to a recipe
    #[command(alias = "a")]
    Add(AddChapterArgs),
}

/// Append a new step to a chapter
#[derive(Args)]
pub struct AddStepArgs {
    #[arg(help = "Unique identifier of the chapter to add this step to")]
    pub chapter_id: u64,
    /// What to do in this step
    pub description: String,
    /// Duration of the step in whole minutes
    #[arg(short, long, help = "Duration of the step in whole minutes")]
    pub duration: i64,
    /// Kind of work in this step
    #[arg(short, long, help = "Kind of work (active, passive, baking)")]
    pub kind: Option<StepKindArg>,
    /// Temperature for the step in degrees Celsius
    #[arg(short, long, help = "Optional temperature in degrees Celsius")]
    pub temperature: Option<i32>,
}

impl From<AddStepArgs> for AddStep {
    fn from(val: AddStepArgs) -> Self {
        AddStep {
            chapter_id: val.chapter_id,
            description: val.description,
            duration_min: val.duration,
            kind: val.kind.map(|k| k.to_string()),
            temperature: val.temperature,
        }
    }
}

/// Remove a step from its chapter
#[derive(Args)]
pub struct RemoveStepArgs {
    #[arg(help = "Unique identifier of the step to remove")]
    pub id: u64,
}

impl From<RemoveStepArgs> for Id {
    fn from(val: RemoveStepArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Append a new step to a chapter
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Remove a step from its chapter
    #[command(alias = "rm")]
    Remove(RemoveStepArgs),
}

/// Compute a forward timetable from a start time
///
/// Every preparatory chapter is back-dated so all of them finish at the same
/// merge instant, at which the final chapter begins.
#[derive(Args)]
pub struct PlanArgs {
    #[arg(help = "Unique identifier of the recipe to plan")]
    pub recipe_id: u64,
    /// When work begins
    #[arg(
        value_parser = parse_clock,
        help = "Start time (ISO-8601; civil times resolve in the system time zone)"
    )]
    pub start_time: Zoned,
    /// Emit the timetable as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Compute a backward countdown to a target completion time
///
/// Walks the recipe's flat step list last-step-first from the target time to
/// find when to start.
#[derive(Args)]
pub struct CalculateArgs {
    #[arg(help = "Unique identifier of the recipe to schedule")]
    pub recipe_id: u64,
    /// When the last step must finish
    #[arg(
        value_parser = parse_clock,
        help = "Target time (ISO-8601; civil times resolve in the system time zone)"
    )]
    pub target_time: Zoned,
    /// Emit the countdown as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Command-line argument representation of recipe categories
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CategoryArg {
    /// Bread, pastry, anything oven-bound
    Baking,
    /// Everything else on the stove
    Cooking,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Baking => write!(f, "baking"),
            CategoryArg::Cooking => write!(f, "cooking"),
        }
    }
}

/// Command-line argument representation of step kinds
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StepKindArg {
    /// Hands-on work
    Active,
    /// Waiting time
    Passive,
    /// Time in the oven
    Baking,
}

impl std::fmt::Display for StepKindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepKindArg::Active => write!(f, "active"),
            StepKindArg::Passive => write!(f, "passive"),
            StepKindArg::Baking => write!(f, "baking"),
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Command dispatcher owning the kitchen and the terminal renderer.
pub struct Cli {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer) -> Self {
        Self { kitchen, renderer }
    }

    /// Dispatch a recipe subcommand.
    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::New(args) => {
                let recipe = self.kitchen.create_recipe(&args.into()).await?;
                self.renderer.render(&CreateResult::new(recipe).to_string())
            }
            RecipeCommands::List(args) => self.list_recipes(args.into()).await,
            RecipeCommands::Show(args) => {
                let params: Id = args.into();
                match self.kitchen.get_recipe(&params).await? {
                    Some(recipe) => self.renderer.render(&recipe.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Recipe with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
            RecipeCommands::Update(args) => {
                let recipe = self.kitchen.update_recipe(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(recipe).to_string())
            }
            RecipeCommands::Delete(args) => {
                let params: DeleteRecipe = args.into();
                match self.kitchen.delete_recipe(&params).await? {
                    Some(recipe) => self.renderer.render(&DeleteResult::new(recipe).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Recipe with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    /// Dispatch a chapter subcommand.
    pub async fn handle_chapter_command(&self, command: ChapterCommands) -> Result<()> {
        match command {
            ChapterCommands::Add(args) => {
                let chapter = self.kitchen.add_chapter(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(chapter).to_string())
            }
        }
    }

    /// Dispatch a step subcommand.
    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => {
                let step = self.kitchen.add_step(&args.into()).await?;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            StepCommands::Remove(args) => {
                let params: Id = args.into();
                self.kitchen.remove_step(&params).await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Removed step {}", params.id)).to_string(),
                )
            }
        }
    }

    /// List recipes as summaries under a heading.
    pub async fn list_recipes(&self, params: ListRecipes) -> Result<()> {
        let summaries = self.kitchen.list_recipes(&params).await?;
        if summaries.is_empty() {
            self.renderer.render(&summaries.to_string())
        } else {
            self.renderer
                .render(&format!("# Recipes\n\n{summaries}"))
        }
    }

    /// Forward mode: render the timetable, or the structured empty outcome.
    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let params = PlanRecipe {
            id: args.recipe_id,
            start_time: args.start_time,
        };
        match self.kitchen.plan_recipe(&params).await? {
            Some(timetable) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&timetable)?);
                    Ok(())
                } else {
                    self.renderer.render(&timetable.to_string())
                }
            }
            None => {
                if args.json {
                    println!("null");
                    Ok(())
                } else {
                    self.renderer.render(
                        &OperationStatus::failure(
                            "No chapters found; nothing to schedule".to_string(),
                        )
                        .to_string(),
                    )
                }
            }
        }
    }

    /// Backward mode: render the countdown, or the structured empty outcome.
    pub async fn calculate(&self, args: CalculateArgs) -> Result<()> {
        let params = CalculateSchedule {
            id: args.recipe_id,
            target_time: args.target_time,
        };
        match self.kitchen.calculate_schedule(&params).await? {
            Some(countdown) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&countdown)?);
                    Ok(())
                } else {
                    self.renderer.render(&countdown.to_string())
                }
            }
            None => {
                if args.json {
                    println!("null");
                    Ok(())
                } else {
                    self.renderer.render(
                        &OperationStatus::failure(
                            "No steps found; nothing to schedule".to_string(),
                        )
                        .to_string(),
                    )
                }
            }
        }
    }
}
