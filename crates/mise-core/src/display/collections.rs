//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a `Display` implementation with
//! graceful empty handling, without putting presentation logic on `Vec`.

use std::{fmt, ops::Index};

use crate::models::RecipeSummary;

/// Newtype wrapper for displaying collections of recipe summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use mise_core::{display::RecipeSummaries, models::{RecipeCategory, RecipeSummary}};
///
/// let summary = RecipeSummary {
///     id: 1,
///     title: "Country Loaf".to_string(),
///     category: RecipeCategory::Baking,
///     yield_amount: 2,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     total_chapters: 2,
///     total_steps: 5,
///     total_duration_min: 260,
/// };
///
/// let summaries = RecipeSummaries(vec![summary]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Country Loaf"));
/// ```
pub struct RecipeSummaries(pub Vec<RecipeSummary>);

impl RecipeSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of recipe summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the recipe summary at the given index.
    pub fn get(&self, index: usize) -> Option<&RecipeSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the recipe summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeSummaries {
    type Output = RecipeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RecipeSummaries {
    type Item = RecipeSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSummaries {
    type Item = &'a RecipeSummary;
    type IntoIter = std::slice::Iter<'a, RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecipeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes found.")
        } else {
            for recipe in &self.0 {
                write!(f, "{}", recipe)?;
            }
            Ok(())
        }
    }
}
