use num_complex::Complex64;

use crate::core::actions::generate_escape_time::errors::{EscapeTimeError, UpdateRuleError};
use crate::core::actions::generate_escape_time::ports::update_rule::PointUpdateRule;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::grid::Grid;
use crate::core::data::plane::Plane;
use crate::core::data::rule_params::RuleParams;

/// Orbits whose modulus reaches this value count as escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Per-cell orbit state shared by the serial and parallel passes.
pub(crate) struct EscapeState {
    pub(crate) values: Vec<Complex64>,
    pub(crate) counts: Vec<u32>,
    pub(crate) escaped: Vec<bool>,
}

impl EscapeState {
    pub(crate) fn new(plane: &Plane, max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if plane.is_empty() {
            return Err(EscapeTimeError::InvalidResolution);
        }

        if max_iterations == 0 {
            return Err(EscapeTimeError::InvalidIterationBudget);
        }

        Ok(Self {
            values: plane.cells().to_vec(),
            counts: vec![max_iterations; plane.len()],
            escaped: vec![false; plane.len()],
        })
    }

    pub(crate) fn finish(self, plane: &Plane, max_iterations: u32) -> EscapeTime {
        let (rows, cols) = plane.shape();

        let iterations =
            Grid::from_cells(rows, cols, self.counts).expect("iteration grid matches plane shape");
        let values =
            Grid::from_cells(rows, cols, self.values).expect("value grid matches plane shape");

        EscapeTime::new(max_iterations, iterations, values)
    }
}

/// Advances one cell through iteration `iteration`.
///
/// Detects escape on the current value first, records the first crossing,
/// then applies the rule only if the cell is still inside the radius. Once a
/// cell has escaped its value is never touched again. Returns whether the
/// cell is escaped after this iteration.
#[inline]
pub(crate) fn advance_cell<R: PointUpdateRule + ?Sized>(
    iteration: u32,
    value: &mut Complex64,
    count: &mut u32,
    escaped: &mut bool,
    coordinate: Complex64,
    rule: &R,
    params: &RuleParams,
) -> Result<bool, UpdateRuleError> {
    let escaped_now = value.norm_sqr() >= ESCAPE_RADIUS_SQUARED;

    if escaped_now && !*escaped {
        *count = iteration;
    }

    if !escaped_now {
        *value = rule.update(*value, coordinate, params)?;
    }

    *escaped = escaped_now;

    Ok(escaped_now)
}

/// Summary of one pass over every cell.
#[derive(Debug, Default)]
pub(crate) struct PassOutcome {
    pub(crate) active: usize,
    pub(crate) failure: Option<(usize, UpdateRuleError)>,
}

impl PassOutcome {
    pub(crate) fn from_cell(index: usize, result: Result<bool, UpdateRuleError>) -> Self {
        match result {
            Ok(true) => Self::default(),
            Ok(false) => Self {
                active: 1,
                failure: None,
            },
            Err(source) => Self {
                active: 0,
                failure: Some((index, source)),
            },
        }
    }

    /// Combines two partial outcomes, keeping the lowest failing index.
    pub(crate) fn merge(self, other: Self) -> Self {
        let failure = match (self.failure, other.failure) {
            (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
            (a, b) => a.or(b),
        };

        Self {
            active: self.active + other.active,
            failure,
        }
    }

    pub(crate) fn into_result(self, plane: &Plane, iteration: u32) -> Result<usize, EscapeTimeError> {
        match self.failure {
            Some((index, source)) => {
                let (row, col) = plane.position_of(index);

                Err(EscapeTimeError::UpdateRuleFailure {
                    row,
                    col,
                    iteration,
                    source,
                })
            }
            None => Ok(self.active),
        }
    }
}
