//! Mise CLI Application
//!
//! Command-line interface for the mise recipe scheduling tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mise_core::{params::ListRecipes, KitchenBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let kitchen = KitchenBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize kitchen")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Mise started");

    match command {
        Some(Recipe { command }) => {
            Cli::new(kitchen, renderer)
                .handle_recipe_command(command)
                .await
        }
        Some(Chapter { command }) => {
            Cli::new(kitchen, renderer)
                .handle_chapter_command(command)
                .await
        }
        Some(Step { command }) => {
            Cli::new(kitchen, renderer)
                .handle_step_command(command)
                .await
        }
        Some(Plan(plan_args)) => Cli::new(kitchen, renderer).plan(plan_args).await,
        Some(Calc(calc_args)) => Cli::new(kitchen, renderer).calculate(calc_args).await,
        None => {
            Cli::new(kitchen, renderer)
                .list_recipes(ListRecipes::default())
                .await
        }
    }
}
