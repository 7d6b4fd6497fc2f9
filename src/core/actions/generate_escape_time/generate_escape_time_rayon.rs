use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::generate_escape_time::errors::EscapeTimeError;
use crate::core::actions::generate_escape_time::escape_state::{advance_cell, EscapeState, PassOutcome};
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::plane::Plane;
use crate::core::data::rule_params::RuleParams;

/// Evaluates `rule` over every sample of `plane` using rayon's work-stealing scheduler.
///
/// Each iteration is one parallel pass over all cells followed by a join, so
/// results are identical to [`generate_escape_time`] including which failing
/// cell gets reported.
///
/// [`generate_escape_time`]: crate::core::actions::generate_escape_time::generate_escape_time::generate_escape_time
pub fn generate_escape_time_rayon<R: PointUpdateRule + ?Sized>(
    plane: &Plane,
    max_iterations: u32,
    rule: &R,
    params: &RuleParams,
) -> Result<EscapeTime, EscapeTimeError> {
    let mut state = EscapeState::new(plane, max_iterations)?;

    for iteration in 0..max_iterations {
        let outcome = state
            .values
            .par_iter_mut()
            .zip(state.counts.par_iter_mut())
            .zip(state.escaped.par_iter_mut())
            .zip(plane.cells().par_iter())
            .enumerate()
            .map(|(index, (((value, count), escaped), &coordinate))| {
                let result = advance_cell(iteration, value, count, escaped, coordinate, rule, params);

                PassOutcome::from_cell(index, result)
            })
            .reduce(PassOutcome::default, PassOutcome::merge);

        if outcome.into_result(plane, iteration)? == 0 {
            debug!(iteration, "every cell escaped, stopping early");
            break;
        }
    }

    let escape_time = state.finish(plane, max_iterations);

    debug!(
        rule = rule.display_name(),
        max_iterations,
        escaped = escape_time.escaped_count(),
        cells = plane.len(),
        "escape time generated in parallel"
    );

    Ok(escape_time)
}
