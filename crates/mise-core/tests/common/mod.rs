use mise_core::KitchenBuilder;
use tempfile::TempDir;

/// Helper function to create a test kitchen
pub async fn create_test_kitchen() -> (TempDir, mise_core::Kitchen) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let kitchen = KitchenBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create kitchen");
    (temp_dir, kitchen)
}
