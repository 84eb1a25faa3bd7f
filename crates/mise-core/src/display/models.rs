//! Display implementations for domain models and schedule outputs.
//!
//! All output is markdown, rendered by the CLI's terminal renderer. The
//! implementations live here rather than on the model files to keep data
//! structures and presentation apart.

use std::fmt;

use super::datetime::{LocalDateTime, WallClock, WallDateTime};
use crate::models::{Chapter, Recipe, RecipeCategory, RecipeSummary, Step, StepKind};
use crate::schedule::{chapter_duration, Countdown, Timetable};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Yields: {} portion(s)", self.yield_amount)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.chapters.is_empty() {
            writeln!(f, "\n## Chapters")?;
            writeln!(f)?;
            for chapter in &self.chapters {
                write!(f, "{}", chapter)?;
            }
        } else {
            writeln!(f, "\nNo chapters in this recipe.")?;
        }

        Ok(())
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({} min)",
            self.order_index + 1,
            self.name,
            chapter_duration(&self.steps)
        )?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No steps in this chapter.")?;
        } else {
            for step in &self.steps {
                write!(f, "{}", step)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- [{}] {} ({} min, {})",
            self.id,
            self.description,
            self.duration_min,
            self.kind.with_icon()
        )?;
        if let Some(temperature) = self.temperature {
            write!(f, " at {temperature}°C")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Category: {}, yields {} portion(s)",
            self.category, self.yield_amount
        )?;
        writeln!(
            f,
            "- {} chapter(s), {} step(s), {} min total",
            self.total_chapters, self.total_steps, self.total_duration_min
        )?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timetable")?;
        writeln!(f)?;
        writeln!(f, "- Start: {}", WallDateTime(&self.start_time))?;
        writeln!(f, "- Chapters merge: {}", WallDateTime(&self.merge_time))?;
        writeln!(f)?;

        for entry in &self.entries {
            writeln!(
                f,
                "- [{}] {} ({} min, {})",
                WallClock(&entry.time),
                entry.description,
                entry.duration_min,
                entry.kind
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Countdown for {}", self.recipe_title)?;
        writeln!(f)?;
        writeln!(f, "- Start at: {}", WallDateTime(&self.start_time))?;
        writeln!(f, "- Done by: {}", WallDateTime(&self.target_time))?;
        writeln!(f)?;

        for step in &self.steps {
            writeln!(
                f,
                "- [{} to {}] {} ({} min, {})",
                WallClock(&step.start_time),
                WallClock(&step.end_time),
                step.step_description,
                step.duration_min,
                step.kind
            )?;
        }

        Ok(())
    }
}
