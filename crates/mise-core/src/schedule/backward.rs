//! Backward scheduling: accumulate from a target instant to a start instant.

use jiff::{Span, Zoned};

use super::{Countdown, CountdownStep};
use crate::error::Result;
use crate::models::Step;

/// Computes when each step of a flat step list must start so that the last
/// one finishes at `target_time`.
///
/// Steps are processed in descending `order_index` (last step first; ties
/// keep input order). The running clock starts at the target, each step's
/// start is the clock minus its duration, and the clock then moves to that
/// start. After the walk the clock holds the overall start instant. The
/// collected entries are reversed so the returned sequence reads forward in
/// time.
///
/// This mode performs no chapter convergence; it is the single-sequence
/// counterpart of [`super::plan_forward`].
///
/// Returns `Ok(None)` when there are no steps.
///
/// # Errors
///
/// Returns `KitchenError::Time` if timestamp arithmetic leaves jiff's
/// representable range, which no culinary-scale input can reach.
pub fn plan_backward(
    recipe_title: &str,
    steps: &[Step],
    target_time: &Zoned,
) -> Result<Option<Countdown>> {
    if steps.is_empty() {
        return Ok(None);
    }

    let mut ordered: Vec<&Step> = steps.iter().collect();
    ordered.sort_by(|a, b| b.order_index.cmp(&a.order_index));

    let mut current_time = target_time.clone();
    let mut schedule = Vec::with_capacity(ordered.len());

    for step in ordered {
        let step_start = current_time.checked_sub(Span::new().try_minutes(step.duration_min)?)?;
        schedule.push(CountdownStep {
            step_description: step.description.clone(),
            start_time: step_start.clone(),
            end_time: current_time,
            duration_min: step.duration_min,
            kind: step.kind,
        });
        current_time = step_start;
    }

    // Back into natural reading order.
    schedule.reverse();

    Ok(Some(Countdown {
        recipe_title: recipe_title.to_string(),
        target_time: target_time.clone(),
        start_time: current_time,
        steps: schedule,
    }))
}
