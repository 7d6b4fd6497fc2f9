use tracing::debug;

use crate::core::actions::generate_escape_time::errors::EscapeTimeError;
use crate::core::actions::generate_escape_time::escape_state::{advance_cell, EscapeState, PassOutcome};
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::plane::Plane;
use crate::core::data::rule_params::RuleParams;

/// Evaluates `rule` over every sample of `plane` on the calling thread.
pub fn generate_escape_time<R: PointUpdateRule + ?Sized>(
    plane: &Plane,
    max_iterations: u32,
    rule: &R,
    params: &RuleParams,
) -> Result<EscapeTime, EscapeTimeError> {
    let mut state = EscapeState::new(plane, max_iterations)?;

    for iteration in 0..max_iterations {
        let mut outcome = PassOutcome::default();

        let cells = state
            .values
            .iter_mut()
            .zip(state.counts.iter_mut())
            .zip(state.escaped.iter_mut())
            .zip(plane.cells().iter())
            .enumerate();

        for (index, (((value, count), escaped), &coordinate)) in cells {
            let result = advance_cell(iteration, value, count, escaped, coordinate, rule, params);
            let failed = result.is_err();

            outcome = outcome.merge(PassOutcome::from_cell(index, result));

            if failed {
                break;
            }
        }

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
        "escape time generated"
    );

    Ok(escape_time)
}
