//! Chapter duration aggregation.

use crate::models::Step;

/// Computes the total elapsed time of a chapter in whole minutes.
///
/// The sum is commutative, so step order is irrelevant here; an empty step
/// list yields 0. Accumulation is 64-bit, which is far wider than any
/// human-scale recipe needs.
///
/// # Examples
///
/// ```rust
/// use mise_core::models::{Step, StepKind};
/// use mise_core::schedule::chapter_duration;
///
/// let steps = vec![
///     Step {
///         id: 1,
///         chapter_id: 1,
///         order_index: 0,
///         description: "Autolyse".to_string(),
///         duration_min: 30,
///         kind: StepKind::Passive,
///         temperature: None,
///     },
///     Step {
///         id: 2,
///         chapter_id: 1,
///         order_index: 1,
///         description: "Mix".to_string(),
///         duration_min: 10,
///         kind: StepKind::Active,
///         temperature: None,
///     },
/// ];
/// assert_eq!(chapter_duration(&steps), 40);
/// assert_eq!(chapter_duration(&[]), 0);
/// ```
pub fn chapter_duration(steps: &[Step]) -> i64 {
    steps.iter().map(|step| step.duration_min).sum()
}
