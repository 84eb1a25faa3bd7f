//! End-to-end workflow: build a two-chapter recipe, plan it forward, then
//! count it down backward, all through the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mise_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("mise").expect("Failed to find mise binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

#[test]
fn test_full_scheduling_workflow() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("workflow.db");
    let db_arg = db_path.to_str().unwrap();

    // Recipe with Starter (60 min) and Main Dough (10 + 30 min).
    mise_cmd(db_arg)
        .args(["recipe", "new", "Country Loaf", "--yield-amount", "2"])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args(["chapter", "add", "1", "Starter"])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args(["chapter", "add", "1", "Main Dough"])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args([
            "step", "add", "1", "Feed the starter", "--duration", "60", "--kind", "active",
        ])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args(["step", "add", "2", "Mix", "--duration", "10", "--kind", "active"])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args(["step", "add", "2", "Knead", "--duration", "30", "--kind", "active"])
        .assert()
        .success();

    // Forward: 09:00 start, starter runs 09:00-10:00, main dough follows.
    mise_cmd(db_arg)
        .args(["plan", "1", "2026-08-08T09:00:00+02:00[+02:00]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Timetable"))
        .stdout(predicate::str::contains("Chapters merge: 2026-08-08 10:00"))
        .stdout(predicate::str::contains(
            "[Sat 09:00] Starter: Feed the starter (60 min, active)",
        ))
        .stdout(predicate::str::contains("[Sat 10:00] Main Dough: Mix (10 min, active)"))
        .stdout(predicate::str::contains(
            "[Sat 10:10] Main Dough: Knead (30 min, active)",
        ));

    // Backward: 100 minutes of work against an 18:00 target starts at 16:20.
    mise_cmd(db_arg)
        .args(["calc", "1", "2026-08-08T18:00:00+02:00[+02:00]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Countdown for Country Loaf"))
        .stdout(predicate::str::contains("Start at: 2026-08-08 16:20"))
        .stdout(predicate::str::contains("[Sat 16:20 to Sat 16:30] Mix (10 min, active)"))
        .stdout(predicate::str::contains(
            "[Sat 16:30 to Sat 17:30] Feed the starter (60 min, active)",
        ))
        .stdout(predicate::str::contains(
            "[Sat 17:30 to Sat 18:00] Knead (30 min, active)",
        ));

    // JSON output keeps the original wire field names.
    mise_cmd(db_arg)
        .args(["calc", "1", "2026-08-08T18:00:00+02:00[+02:00]", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recipe_title\": \"Country Loaf\""))
        .stdout(predicate::str::contains("\"step_description\": \"Feed the starter\""))
        .stdout(predicate::str::contains("\"type\": \"active\""));

    // Cleanup leaves an empty store.
    mise_cmd(db_arg)
        .args(["recipe", "delete", "1", "--confirm"])
        .assert()
        .success();
    mise_cmd(db_arg)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}
