use jiff::{Span, Zoned};
use mise_core::params::{AddChapter, AddStep, CalculateSchedule, Id, PlanRecipe};

mod common;

fn zdt(s: &str) -> Zoned {
    s.parse().expect("valid test timestamp")
}

#[tokio::test]
async fn test_complete_scheduling_workflow() {
    let (_temp_dir, kitchen) = common::create_test_kitchen().await;

    // Starter (60 min) feeding into a Main Dough chapter (10 + 30 min).
    let recipe = kitchen
        .create_recipe(&mise_core::params::CreateRecipe {
            title: "Country Loaf".to_string(),
            category: None,
            yield_amount: Some(2),
        })
        .await
        .expect("Failed to create recipe");

    let starter = kitchen
        .add_chapter(&AddChapter {
            recipe_id: recipe.id,
            name: "Starter".to_string(),
        })
        .await
        .expect("Failed to add chapter");
    let dough = kitchen
        .add_chapter(&AddChapter {
            recipe_id: recipe.id,
            name: "Main Dough".to_string(),
        })
        .await
        .expect("Failed to add chapter");

    kitchen
        .add_step(&AddStep {
            chapter_id: starter.id,
            description: "Feed the starter".to_string(),
            duration_min: 60,
            kind: Some("active".to_string()),
            temperature: None,
        })
        .await
        .expect("Failed to add step");
    kitchen
        .add_step(&AddStep {
            chapter_id: dough.id,
            description: "Mix".to_string(),
            duration_min: 10,
            kind: Some("active".to_string()),
            temperature: None,
        })
        .await
        .expect("Failed to add step");
    kitchen
        .add_step(&AddStep {
            chapter_id: dough.id,
            description: "Knead".to_string(),
            duration_min: 30,
            kind: Some("active".to_string()),
            temperature: None,
        })
        .await
        .expect("Failed to add step");

    // Forward mode: 09:00 start, merge at 10:00.
    let start = zdt("2026-08-08T09:00:00+02:00[+02:00]");
    let timetable = kitchen
        .plan_recipe(&PlanRecipe {
            id: recipe.id,
            start_time: start.clone(),
        })
        .await
        .expect("Planning should succeed")
        .expect("Recipe has chapters");

    assert_eq!(timetable.merge_time, zdt("2026-08-08T10:00:00+02:00[+02:00]"));
    assert_eq!(timetable.entries.len(), 3);
    assert_eq!(timetable.entries[0].time, start);
    assert_eq!(timetable.entries[0].description, "Starter: Feed the starter");
    assert_eq!(timetable.entries[1].description, "Main Dough: Mix");
    assert_eq!(timetable.entries[2].description, "Main Dough: Knead");

    // Backward mode over the same recipe's flat steps against a 18:00 target.
    let target = zdt("2026-08-08T18:00:00+02:00[+02:00]");
    let countdown = kitchen
        .calculate_schedule(&CalculateSchedule {
            id: recipe.id,
            target_time: target.clone(),
        })
        .await
        .expect("Calculation should succeed")
        .expect("Recipe has steps");

    assert_eq!(countdown.recipe_title, "Country Loaf");
    assert_eq!(countdown.target_time, target);

    // 100 minutes of total work: start at 16:20.
    assert_eq!(countdown.start_time, zdt("2026-08-08T16:20:00+02:00[+02:00]"));

    // The forward accumulation from the derived start reproduces every
    // (start, end) pair.
    let mut clock = countdown.start_time.clone();
    for step in &countdown.steps {
        let end = clock
            .checked_add(Span::new().minutes(step.duration_min))
            .expect("in range");
        assert_eq!(step.start_time, clock);
        assert_eq!(step.end_time, end);
        clock = end;
    }
    assert_eq!(clock, target);
}

#[tokio::test]
async fn test_recipe_snapshot_is_eagerly_loaded() {
    let (_temp_dir, kitchen) = common::create_test_kitchen().await;

    let recipe = kitchen
        .create_recipe(&mise_core::params::CreateRecipe {
            title: "Snapshot".to_string(),
            category: None,
            yield_amount: None,
        })
        .await
        .expect("Failed to create recipe");
    let chapter = kitchen
        .add_chapter(&AddChapter {
            recipe_id: recipe.id,
            name: "Only".to_string(),
        })
        .await
        .expect("Failed to add chapter");
    kitchen
        .add_step(&AddStep {
            chapter_id: chapter.id,
            description: "Rest".to_string(),
            duration_min: 20,
            kind: None,
            temperature: None,
        })
        .await
        .expect("Failed to add step");

    let loaded = kitchen
        .get_recipe(&Id { id: recipe.id })
        .await
        .expect("Failed to get recipe")
        .expect("Recipe exists");

    assert_eq!(loaded.chapters.len(), 1);
    assert_eq!(loaded.chapters[0].steps.len(), 1);
    assert_eq!(loaded.chapters[0].steps[0].description, "Rest");
}

#[tokio::test]
async fn test_remove_step_shortens_schedule() {
    let (_temp_dir, kitchen) = common::create_test_kitchen().await;

    let recipe = kitchen
        .create_recipe(&mise_core::params::CreateRecipe {
            title: "Shrinking".to_string(),
            category: None,
            yield_amount: None,
        })
        .await
        .expect("Failed to create recipe");
    let chapter = kitchen
        .add_chapter(&AddChapter {
            recipe_id: recipe.id,
            name: "Main".to_string(),
        })
        .await
        .expect("Failed to add chapter");
    kitchen
        .add_step(&AddStep {
            chapter_id: chapter.id,
            description: "Mix".to_string(),
            duration_min: 10,
            kind: None,
            temperature: None,
        })
        .await
        .expect("Failed to add step");
    let removable = kitchen
        .add_step(&AddStep {
            chapter_id: chapter.id,
            description: "Optional glaze".to_string(),
            duration_min: 15,
            kind: None,
            temperature: None,
        })
        .await
        .expect("Failed to add step");

    kitchen
        .remove_step(&Id { id: removable.id })
        .await
        .expect("Failed to remove step");

    let countdown = kitchen
        .calculate_schedule(&CalculateSchedule {
            id: recipe.id,
            target_time: zdt("2026-08-08T18:00:00Z[UTC]"),
        })
        .await
        .expect("Calculation should succeed")
        .expect("Steps remain");

    assert_eq!(countdown.steps.len(), 1);
    assert_eq!(countdown.start_time, zdt("2026-08-08T17:50:00Z[UTC]"));
}
