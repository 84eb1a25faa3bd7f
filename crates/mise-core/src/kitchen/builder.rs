//! Builder for creating and configuring Kitchen instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{KitchenError, Result},
};

/// Builder for creating and configuring Kitchen instances.
#[derive(Debug, Clone)]
pub struct KitchenBuilder {
    database_path: Option<PathBuf>,
}

impl KitchenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/mise/mise.db` or `~/.local/share/mise/mise.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured kitchen instance.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::FileSystem` if the database path is invalid
    /// Returns `KitchenError::Database` if database initialization fails
    pub async fn build(self) -> Result<Kitchen> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| KitchenError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), KitchenError>(())
        })
        .await
        .map_err(|e| KitchenError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Kitchen::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mise")
            .place_data_file("mise.db")
            .map_err(|e| KitchenError::XdgDirectory(e.to_string()))
    }
}

impl Default for KitchenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
