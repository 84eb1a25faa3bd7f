//! Forward scheduling: start at a known instant, converge all chapters.

use jiff::{Span, Zoned};

use super::{chapter_duration, ScheduleEntry, Timetable};
use crate::error::Result;
use crate::models::{Chapter, Recipe, Step};

/// Computes the forward timetable for a recipe starting at `start_time`.
///
/// Chapters are taken in ascending `order_index`; the chapter with the
/// highest index is the main chapter, all others are tributaries. The merge
/// instant is `start_time` plus the longest tributary duration, and every
/// tributary is back-dated to finish exactly then: the longest one starts at
/// `start_time` itself, shorter ones start later. The main chapter runs from
/// the merge instant onward.
///
/// Returns `Ok(None)` when the recipe has no chapters (the structured
/// "nothing to schedule" outcome). A chapter without steps is valid: it
/// contributes duration 0 and no entries.
///
/// # Errors
///
/// Returns `KitchenError::Time` if timestamp arithmetic leaves jiff's
/// representable range, which no culinary-scale input can reach.
pub fn plan_forward(recipe: &Recipe, start_time: &Zoned) -> Result<Option<Timetable>> {
    if recipe.chapters.is_empty() {
        return Ok(None);
    }

    let mut chapters: Vec<&Chapter> = recipe.chapters.iter().collect();
    chapters.sort_by_key(|chapter| chapter.order_index);

    let Some((main_chapter, tributaries)) = chapters.split_last() else {
        return Ok(None);
    };

    let max_tributary_duration = tributaries
        .iter()
        .map(|chapter| chapter_duration(&chapter.steps))
        .max()
        .unwrap_or(0);

    let merge_time = start_time.checked_add(Span::new().try_minutes(max_tributary_duration)?)?;

    let mut entries = Vec::new();

    for chapter in tributaries {
        let duration = chapter_duration(&chapter.steps);
        // Back-date so this chapter finishes exactly at the merge instant.
        let chapter_start = merge_time.checked_sub(Span::new().try_minutes(duration)?)?;
        walk_chapter(&mut entries, chapter, chapter_start)?;
    }

    walk_chapter(&mut entries, main_chapter, merge_time.clone())?;

    // Stable: entries at the same instant keep chapter/step processing order.
    entries.sort_by(|a, b| a.time.cmp(&b.time));

    Ok(Some(Timetable {
        start_time: start_time.clone(),
        merge_time,
        entries,
    }))
}

/// Walks a chapter's steps in ascending `order_index`, stamping each with the
/// running clock and advancing the clock by the step's duration.
fn walk_chapter(
    entries: &mut Vec<ScheduleEntry>,
    chapter: &Chapter,
    chapter_start: Zoned,
) -> Result<()> {
    let mut steps: Vec<&Step> = chapter.steps.iter().collect();
    steps.sort_by_key(|step| step.order_index);

    let mut clock = chapter_start;
    for step in steps {
        let next = clock.checked_add(Span::new().try_minutes(step.duration_min)?)?;
        entries.push(ScheduleEntry {
            time: clock,
            description: format!("{}: {}", chapter.name, step.description),
            duration_min: step.duration_min,
            kind: step.kind,
        });
        clock = next;
    }

    Ok(())
}
