//! Tests for the schedule calculator.

use jiff::{Span, Timestamp, Zoned};

use super::*;
use crate::models::{Chapter, Recipe, RecipeCategory, Step, StepKind};

fn zdt(s: &str) -> Zoned {
    s.parse().expect("valid test timestamp")
}

fn step(order_index: u32, duration_min: i64, description: &str) -> Step {
    Step {
        id: u64::from(order_index) + 1,
        chapter_id: 1,
        order_index,
        description: description.to_string(),
        duration_min,
        kind: StepKind::Active,
        temperature: None,
    }
}

fn chapter(order_index: u32, name: &str, steps: Vec<Step>) -> Chapter {
    Chapter {
        id: u64::from(order_index) + 1,
        recipe_id: 1,
        name: name.to_string(),
        order_index,
        steps,
    }
}

fn recipe(chapters: Vec<Chapter>) -> Recipe {
    let now = Timestamp::from_second(1640995200).expect("valid epoch second");
    Recipe {
        id: 1,
        title: "Test Loaf".to_string(),
        category: RecipeCategory::Baking,
        yield_amount: 1,
        created_at: now,
        updated_at: now,
        chapters,
    }
}

#[test]
fn test_chapter_duration_sums_step_durations() {
    let steps = vec![step(0, 60, "feed"), step(1, 30, "rest"), step(2, 15, "mix")];
    assert_eq!(chapter_duration(&steps), 105);
}

#[test]
fn test_chapter_duration_empty_is_zero() {
    assert_eq!(chapter_duration(&[]), 0);
}

#[test]
fn test_chapter_duration_ignores_order() {
    let forward = vec![step(0, 10, "a"), step(1, 20, "b")];
    let reversed = vec![step(1, 20, "b"), step(0, 10, "a")];
    assert_eq!(chapter_duration(&forward), chapter_duration(&reversed));
}

#[test]
fn test_forward_worked_example() {
    // Starter (order 0, one 60 min step), Main Dough (order 1, 10 + 30 min).
    let recipe = recipe(vec![
        chapter(0, "Starter", vec![step(0, 60, "feed the starter")]),
        chapter(
            1,
            "Main Dough",
            vec![step(0, 10, "mix"), step(1, 30, "knead")],
        ),
    ]);
    let start = zdt("2026-08-08T09:00:00+02:00[+02:00]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    assert_eq!(timetable.merge_time, zdt("2026-08-08T10:00:00+02:00[+02:00]"));
    assert_eq!(timetable.entries.len(), 3);

    assert_eq!(timetable.entries[0].time, start);
    assert_eq!(timetable.entries[0].description, "Starter: feed the starter");
    assert_eq!(timetable.entries[0].duration_min, 60);

    assert_eq!(
        timetable.entries[1].time,
        zdt("2026-08-08T10:00:00+02:00[+02:00]")
    );
    assert_eq!(timetable.entries[1].description, "Main Dough: mix");

    assert_eq!(
        timetable.entries[2].time,
        zdt("2026-08-08T10:10:00+02:00[+02:00]")
    );
    assert_eq!(timetable.entries[2].description, "Main Dough: knead");
}

#[test]
fn test_forward_convergence_invariant() {
    // Three tributaries of very different lengths all land on the merge
    // instant: chapter start + chapter duration == merge_time, for every one.
    let recipe = recipe(vec![
        chapter(0, "Starter", vec![step(0, 720, "overnight levain")]),
        chapter(1, "Soaker", vec![step(0, 60, "soak seeds"), step(1, 30, "drain")]),
        chapter(2, "Sponge", vec![step(0, 45, "mix sponge")]),
        chapter(3, "Final Dough", vec![step(0, 20, "mix final dough")]),
    ]);
    let start = zdt("2026-08-07T18:00:00+02:00[+02:00]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    // The longest tributary (720 min) fixes the merge instant.
    let expected_merge = start
        .checked_add(Span::new().minutes(720))
        .expect("in range");
    assert_eq!(timetable.merge_time, expected_merge);

    for (name, duration) in [("Starter", 720i64), ("Soaker", 90), ("Sponge", 45)] {
        let chapter_start = timetable
            .entries
            .iter()
            .find(|entry| entry.description.starts_with(name))
            .map(|entry| entry.time.clone())
            .expect("tributary has entries");
        let chapter_end = chapter_start
            .checked_add(Span::new().minutes(duration))
            .expect("in range");
        assert_eq!(chapter_end, timetable.merge_time, "{name} misses the merge");
    }

    // The main chapter begins exactly at the merge instant.
    let main_entry = timetable
        .entries
        .iter()
        .find(|entry| entry.description.starts_with("Final Dough"))
        .expect("main chapter has entries");
    assert_eq!(main_entry.time, timetable.merge_time);
}

#[test]
fn test_forward_single_chapter_degenerates() {
    let recipe = recipe(vec![chapter(
        0,
        "One Pot",
        vec![step(0, 10, "chop"), step(1, 25, "simmer"), step(2, 5, "season")],
    )]);
    let start = zdt("2026-08-08T12:00:00Z[UTC]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    // No tributaries: the single chapter is the main chapter.
    assert_eq!(timetable.merge_time, start);

    let expected = [0i64, 10, 35];
    for (entry, offset) in timetable.entries.iter().zip(expected) {
        let stamp = start
            .checked_add(Span::new().minutes(offset))
            .expect("in range");
        assert_eq!(entry.time, stamp);
    }
}

#[test]
fn test_forward_sorted_regardless_of_input_order() {
    // Chapters arrive shuffled; the timetable must still be non-decreasing.
    let recipe = recipe(vec![
        chapter(2, "Assembly", vec![step(0, 15, "assemble"), step(1, 40, "bake")]),
        chapter(0, "Filling", vec![step(0, 90, "stew filling")]),
        chapter(1, "Crust", vec![step(0, 20, "mix crust"), step(1, 60, "chill")]),
    ]);
    let start = zdt("2026-08-08T08:00:00Z[UTC]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    assert_eq!(timetable.entries.len(), 5);
    for pair in timetable.entries.windows(2) {
        assert!(pair[0].time <= pair[1].time, "timetable went backwards");
    }

    // Highest order_index is the main chapter regardless of input position.
    let assembly = timetable
        .entries
        .iter()
        .find(|entry| entry.description.starts_with("Assembly"))
        .expect("main chapter scheduled");
    assert_eq!(assembly.time, timetable.merge_time);
}

#[test]
fn test_forward_no_chapters_returns_none() {
    let recipe = recipe(vec![]);
    let start = zdt("2026-08-08T09:00:00Z[UTC]");

    let timetable = plan_forward(&recipe, &start).expect("arithmetic in range");
    assert!(timetable.is_none());
}

#[test]
fn test_forward_empty_chapter_is_valid() {
    let recipe = recipe(vec![
        chapter(0, "Ghost", vec![]),
        chapter(1, "Main", vec![step(0, 30, "cook")]),
    ]);
    let start = zdt("2026-08-08T09:00:00Z[UTC]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    // The empty tributary contributes duration 0 and no entries.
    assert_eq!(timetable.merge_time, start);
    assert_eq!(timetable.entries.len(), 1);
    assert_eq!(timetable.entries[0].description, "Main: cook");
}

#[test]
fn test_forward_equal_tributaries_keep_processing_order() {
    let recipe = recipe(vec![
        chapter(0, "First", vec![step(0, 30, "a")]),
        chapter(1, "Second", vec![step(0, 30, "b")]),
        chapter(2, "Main", vec![step(0, 5, "c")]),
    ]);
    let start = zdt("2026-08-08T09:00:00Z[UTC]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    // Both tributaries start at the same instant; the stable sort keeps the
    // lower order_index first.
    assert_eq!(timetable.entries[0].description, "First: a");
    assert_eq!(timetable.entries[1].description, "Second: b");
    assert_eq!(timetable.entries[0].time, timetable.entries[1].time);
}

#[test]
fn test_forward_preserves_offset() {
    let recipe = recipe(vec![
        chapter(0, "Starter", vec![step(0, 60, "feed")]),
        chapter(1, "Main", vec![step(0, 10, "mix")]),
    ]);
    let start = zdt("2026-08-08T09:00:00+05:30[+05:30]");

    let timetable = plan_forward(&recipe, &start)
        .expect("arithmetic in range")
        .expect("recipe has chapters");

    let offset = jiff::tz::Offset::from_seconds(5 * 3600 + 1800).expect("valid offset");
    assert_eq!(timetable.merge_time.offset(), offset);
    for entry in &timetable.entries {
        assert_eq!(entry.time.offset(), offset);
    }
}

#[test]
fn test_backward_worked_example() {
    // mix 10 min, proof 60 min, bake 30 min against an 18:00 target.
    let steps = vec![
        step(0, 10, "mix"),
        step(1, 60, "proof"),
        step(2, 30, "bake"),
    ];
    let target = zdt("2026-08-08T18:00:00+02:00[+02:00]");

    let countdown = plan_backward("Dinner Rolls", &steps, &target)
        .expect("arithmetic in range")
        .expect("steps present");

    assert_eq!(countdown.recipe_title, "Dinner Rolls");
    assert_eq!(countdown.target_time, target);
    assert_eq!(countdown.start_time, zdt("2026-08-08T16:20:00+02:00[+02:00]"));

    let expected = [
        ("mix", "2026-08-08T16:20:00+02:00[+02:00]", "2026-08-08T16:30:00+02:00[+02:00]"),
        ("proof", "2026-08-08T16:30:00+02:00[+02:00]", "2026-08-08T17:30:00+02:00[+02:00]"),
        ("bake", "2026-08-08T17:30:00+02:00[+02:00]", "2026-08-08T18:00:00+02:00[+02:00]"),
    ];
    assert_eq!(countdown.steps.len(), expected.len());
    for (entry, (description, start, end)) in countdown.steps.iter().zip(expected) {
        assert_eq!(entry.step_description, description);
        assert_eq!(entry.start_time, zdt(start));
        assert_eq!(entry.end_time, zdt(end));
    }
}

#[test]
fn test_backward_no_steps_returns_none() {
    let target = zdt("2026-08-08T18:00:00Z[UTC]");
    let countdown = plan_backward("Empty", &[], &target).expect("arithmetic in range");
    assert!(countdown.is_none());
}

#[test]
fn test_backward_zero_duration_step() {
    let steps = vec![step(0, 0, "preheat check"), step(1, 30, "bake")];
    let target = zdt("2026-08-08T18:00:00Z[UTC]");

    let countdown = plan_backward("Quick Bake", &steps, &target)
        .expect("arithmetic in range")
        .expect("steps present");

    assert_eq!(countdown.steps[0].start_time, countdown.steps[0].end_time);
    assert_eq!(countdown.start_time, zdt("2026-08-08T17:30:00Z[UTC]"));
}

#[test]
fn test_backward_forward_round_trip() {
    // Re-running a forward accumulation from the derived start must
    // reproduce every (start, end) pair exactly.
    let steps = vec![
        step(0, 25, "brown the meat"),
        step(1, 90, "braise"),
        step(2, 15, "reduce sauce"),
        step(3, 10, "plate"),
    ];
    let target = zdt("2026-08-08T19:00:00+01:00[+01:00]");

    let countdown = plan_backward("Braise", &steps, &target)
        .expect("arithmetic in range")
        .expect("steps present");

    let mut clock = countdown.start_time.clone();
    for (entry, source) in countdown.steps.iter().zip(&steps) {
        let end = clock
            .checked_add(Span::new().minutes(source.duration_min))
            .expect("in range");
        assert_eq!(entry.start_time, clock);
        assert_eq!(entry.end_time, end);
        clock = end;
    }
    assert_eq!(clock, target);
}

#[test]
fn test_backward_descending_ties_keep_input_order() {
    // Two steps share an order_index; the stable descending sort processes
    // them in input order (glaze before rest), so glaze ends at the target
    // and rest is pushed earlier.
    let steps = vec![step(1, 10, "glaze"), step(1, 20, "rest"), step(0, 5, "score")];
    let target = zdt("2026-08-08T18:00:00Z[UTC]");

    let countdown = plan_backward("Ties", &steps, &target)
        .expect("arithmetic in range")
        .expect("steps present");

    let order: Vec<&str> = countdown
        .steps
        .iter()
        .map(|entry| entry.step_description.as_str())
        .collect();
    assert_eq!(order, ["score", "rest", "glaze"]);
    assert_eq!(countdown.steps[2].end_time, target);
    assert_eq!(countdown.start_time, zdt("2026-08-08T17:25:00Z[UTC]"));
}
