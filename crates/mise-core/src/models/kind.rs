//! Kind enumerations for steps and recipes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step kinds.
///
/// The kind is descriptive only: it is carried through to schedule output so
/// the cook can see which entries demand attention, but it never influences
/// the timing math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Hands-on work (mixing, shaping, kneading)
    Active,

    /// Waiting time (resting, proofing, soaking)
    #[default]
    Passive,

    /// Time in the oven
    Baking,
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StepKind::Active),
            "passive" => Ok(StepKind::Passive),
            "baking" => Ok(StepKind::Baking),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl StepKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Active => "active",
            StepKind::Passive => "passive",
            StepKind::Baking => "baking",
        }
    }

    /// Get the kind with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `➤ active` - Arrow for hands-on steps
    /// - `○ passive` - Circle for waiting steps
    /// - `♨ baking` - Hot springs for oven time
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mise_core::models::StepKind;
    ///
    /// assert_eq!(StepKind::Active.with_icon(), "➤ active");
    /// assert_eq!(StepKind::Passive.with_icon(), "○ passive");
    /// assert_eq!(StepKind::Baking.with_icon(), "♨ baking");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepKind::Active => "➤ active",
            StepKind::Passive => "○ passive",
            StepKind::Baking => "♨ baking",
        }
    }
}

/// Type-safe enumeration of recipe categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    /// Bread, pastry, anything oven-bound
    #[default]
    Baking,

    /// Everything else on the stove
    Cooking,
}

impl FromStr for RecipeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baking" => Ok(RecipeCategory::Baking),
            "cooking" => Ok(RecipeCategory::Cooking),
            _ => Err(format!("Invalid recipe category: {s}")),
        }
    }
}

impl RecipeCategory {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Baking => "baking",
            RecipeCategory::Cooking => "cooking",
        }
    }
}
